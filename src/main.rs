mod chart;
mod data;
mod display;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Benchmark output consumed by this tool, relative to the working directory.
const INPUT_CSV: &str = "./cache_access_speed.csv";

/// Rendered figure, overwritten unconditionally on each run.
const OUTPUT_PNG: &str = "./cache_access_plot.png";

fn main() -> Result<()> {
    env_logger::init();

    run(Path::new(INPUT_CSV), Path::new(OUTPUT_PNG))?;

    // Best effort only; never changes the exit code.
    display::try_show(Path::new(OUTPUT_PNG));

    Ok(())
}

/// Execute the full pipeline: load → derive → render.
///
/// Any stage failure aborts the run; there is no retry and no partial
/// output beyond whatever the failing stage already wrote.
fn run(input: &Path, output: &Path) -> Result<()> {
    let dataset = data::loader::load_csv(input)
        .with_context(|| format!("loading {}", input.display()))?;
    info!("loaded {} samples from {}", dataset.len(), input.display());

    let derived = data::transform::derive(&dataset);

    chart::render(&dataset, &derived, output)
        .with_context(|| format!("rendering {}", output.display()))?;
    info!("wrote chart to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::run;

    fn write_sample_csv(path: &Path) {
        // Deliberately out of order; the loader sorts by `bytes`.
        fs::write(
            path,
            "bytes,warm_ns,cold_ns\n\
             2048,1.2,6.0\n\
             1024,1.0,5.0\n\
             1048576,3.0,40.0\n",
        )
        .unwrap();
    }

    #[test]
    fn pipeline_produces_nonempty_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cache_access_speed.csv");
        let output = dir.path().join("cache_access_plot.png");
        write_sample_csv(&input);

        run(&input, &output).unwrap();

        let meta = fs::metadata(&output).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn pipeline_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cache_access_speed.csv");
        let output = dir.path().join("cache_access_plot.png");
        write_sample_csv(&input);
        fs::write(&output, b"stale").unwrap();

        run(&input, &output).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert_ne!(bytes.as_slice(), b"stale");
        // PNG signature
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn missing_input_fails_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("does_not_exist.csv");
        let output = dir.path().join("cache_access_plot.png");

        assert!(run(&input, &output).is_err());
        assert!(!output.exists());
    }
}
