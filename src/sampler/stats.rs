//! Per-run sampling statistics.

use crate::core::types::ModelIndex;
use serde::{Deserialize, Serialize};

/// Counters accumulated while sampling a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Records consumed from the input
    pub records_read: u64,
    /// Pairs written to the output
    pub pairs_emitted: u64,
    /// Pairs written per model, indexed by model
    pub per_model: Vec<u64>,
}

impl SampleStats {
    /// Zeroed statistics for `num_models` models
    pub fn new(num_models: usize) -> Self {
        SampleStats {
            records_read: 0,
            pairs_emitted: 0,
            per_model: vec![0; num_models],
        }
    }

    pub(crate) fn record_read(&mut self) {
        self.records_read += 1;
    }

    pub(crate) fn pair_emitted(&mut self, model: ModelIndex) {
        self.pairs_emitted += 1;
        self.per_model[model] += 1;
    }

    /// Fraction of the input that ended up in `model`'s sample.
    ///
    /// Returns `None` for an unknown model or before any record was read.
    pub fn observed_ratio(&self, model: ModelIndex) -> Option<f64> {
        let count = *self.per_model.get(model)?;
        if self.records_read == 0 {
            return None;
        }
        Some(count as f64 / self.records_read as f64)
    }

    /// Number of models the statistics cover
    pub fn num_models(&self) -> usize {
        self.per_model.len()
    }

    /// Human-readable summary for logging
    pub fn summary(&self) -> String {
        let per_model = self
            .per_model
            .iter()
            .enumerate()
            .map(|(model, count)| format!("{}:{}", model, count))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "read {} records, emitted {} pairs [{}]",
            self.records_read, self.pairs_emitted, per_model
        )
    }
}
