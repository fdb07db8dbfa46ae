use std::fs::File;
use std::path::Path;

use thiserror::Error;

use super::model::{Dataset, Sample};

/// Column names the input table must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["bytes", "warm_ns", "cold_ns"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Loading failures, split so callers can tell a missing file from a
/// malformed one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("reading header: {0}")]
    Header(csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {source}")]
    Row {
        /// Zero-based data row number (header excluded).
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the benchmark table from a CSV file.
///
/// Expected layout: header row naming at least `bytes`, `warm_ns` and
/// `cold_ns`, then one numeric record per working-set size. The returned
/// dataset is sorted ascending by `bytes` regardless of file order.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(LoadError::Header)?;
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut samples = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let sample: Sample = result.map_err(|source| LoadError::Row { row, source })?;
        samples.push(sample);
    }

    Ok(Dataset::from_samples(samples))
}
