use serde::Deserialize;

// ---------------------------------------------------------------------------
// Sample – one row of the benchmark table
// ---------------------------------------------------------------------------

/// One latency measurement: a working-set size with its warm- and
/// cold-cache latency per access.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    /// Working-set size in bytes (sort key).
    pub bytes: u64,
    /// Latency per access under a warm cache, nanoseconds.
    pub warm_ns: f64,
    /// Latency per access under a cold cache, nanoseconds.
    pub cold_ns: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, ordered ascending by working-set size.
///
/// Row order is fixed at construction; the `Vec` index is the fresh
/// zero-based ordinal index. The dataset is never mutated after that.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Build a dataset from rows in any order, sorting ascending by
    /// `bytes`. The sort is stable, so ties keep their file order.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.bytes);
        Dataset { samples }
    }

    /// Rows in ascending `bytes` order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, Sample};

    fn sample(bytes: u64, warm_ns: f64, cold_ns: f64) -> Sample {
        Sample {
            bytes,
            warm_ns,
            cold_ns,
        }
    }

    #[test]
    fn from_samples_sorts_ascending_by_bytes() {
        let ds = Dataset::from_samples(vec![
            sample(1048576, 3.0, 40.0),
            sample(1024, 1.0, 5.0),
            sample(2048, 1.2, 6.0),
        ]);

        let bytes: Vec<u64> = ds.samples().iter().map(|s| s.bytes).collect();
        assert_eq!(bytes, vec![1024, 2048, 1048576]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ds = Dataset::from_samples(vec![
            sample(4096, 2.0, 8.0),
            sample(4096, 2.5, 9.0),
            sample(1024, 1.0, 5.0),
        ]);

        assert_eq!(ds.samples()[1].warm_ns, 2.0);
        assert_eq!(ds.samples()[2].warm_ns, 2.5);
    }

    #[test]
    fn len_and_is_empty() {
        assert!(Dataset::from_samples(Vec::new()).is_empty());
        assert_eq!(Dataset::from_samples(vec![sample(1024, 1.0, 5.0)]).len(), 1);
    }
}
