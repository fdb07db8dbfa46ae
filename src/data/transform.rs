use super::model::Dataset;

/// KiB per working-set byte, the x-axis unit of the chart.
pub const BYTES_PER_KIB: f64 = 1024.0;

// ---------------------------------------------------------------------------
// Derived series
// ---------------------------------------------------------------------------

/// Per-row series derived from the loaded table, aligned by position with
/// the dataset's row order.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    /// Working-set size in KiB.
    pub x_kib: Vec<f64>,
    /// KiB processed per nanosecond under a warm cache.
    pub warm_eff: Vec<f64>,
    /// KiB processed per nanosecond under a cold cache.
    pub cold_eff: Vec<f64>,
}

/// Compute the derived series for a dataset.
///
/// Pure function of its input. Division is ordinary IEEE-754: degenerate
/// latencies fall through as infinities, NaN, or negative values, never
/// as an error.
pub fn derive(dataset: &Dataset) -> DerivedSeries {
    let samples = dataset.samples();

    let x_kib: Vec<f64> = samples
        .iter()
        .map(|s| s.bytes as f64 / BYTES_PER_KIB)
        .collect();
    let warm_eff: Vec<f64> = x_kib
        .iter()
        .zip(samples)
        .map(|(x, s)| x / s.warm_ns)
        .collect();
    let cold_eff: Vec<f64> = x_kib
        .iter()
        .zip(samples)
        .map(|(x, s)| x / s.cold_ns)
        .collect();

    DerivedSeries {
        x_kib,
        warm_eff,
        cold_eff,
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{Dataset, Sample};
    use super::derive;

    fn dataset(rows: &[(u64, f64, f64)]) -> Dataset {
        Dataset::from_samples(
            rows.iter()
                .map(|&(bytes, warm_ns, cold_ns)| Sample {
                    bytes,
                    warm_ns,
                    cold_ns,
                })
                .collect(),
        )
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a - e).abs() <= 1e-9 * e.abs().max(1.0),
                "expected {e}, got {a}"
            );
        }
    }

    #[test]
    fn x_kib_is_bytes_over_1024_and_nondecreasing() {
        let ds = dataset(&[(1048576, 3.0, 40.0), (1024, 1.0, 5.0), (2048, 1.2, 6.0)]);
        let derived = derive(&ds);

        assert_close(&derived.x_kib, &[1.0, 2.0, 1024.0]);
        assert!(derived.x_kib.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn efficiency_is_x_kib_over_latency() {
        let ds = dataset(&[(1024, 1.0, 5.0), (2048, 1.2, 6.0), (1048576, 3.0, 40.0)]);
        let derived = derive(&ds);

        assert_close(&derived.warm_eff, &[1.0, 2.0 / 1.2, 1024.0 / 3.0]);
        assert_close(&derived.cold_eff, &[0.2, 2.0 / 6.0, 25.6]);
    }

    #[test]
    fn degenerate_latency_follows_float_semantics() {
        let ds = dataset(&[(1024, 0.0, -5.0)]);
        let derived = derive(&ds);

        assert!(derived.warm_eff[0].is_infinite());
        assert!(derived.cold_eff[0] < 0.0);
    }

    #[test]
    fn empty_dataset_yields_empty_series() {
        let derived = derive(&dataset(&[]));
        assert!(derived.x_kib.is_empty());
        assert!(derived.warm_eff.is_empty());
        assert!(derived.cold_eff.is_empty());
    }
}
