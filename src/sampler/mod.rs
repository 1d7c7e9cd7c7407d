//! Ensemble sampler: the map step of bagged ensemble training.
//!
//! Every record is offered to every ensemble member. For each
//! `(record, model)` pair one uniform draw decides inclusion, succeeding with
//! probability `sample_ratio`, and each success is emitted as
//! `<model>\t<record>`. Draws are taken record-major, model-minor from a
//! single generator seeded once, so identical configuration and input yield
//! byte-identical output.
//!
//! Inclusion is independent per `(record, model)`; this is subsampling with
//! an expected fraction of `sample_ratio`, not sampling with replacement. A
//! record appears at most once per model.

pub mod stats;

pub use stats::SampleStats;

use crate::config::Config;
use crate::core::constants::PROGRESS_LOG_INTERVAL;
use crate::core::error::Result;
use crate::core::types::{EmittedPair, ModelIndex, Record};
use crate::core::utils::random::Random;
use crate::io::{PairWriter, RecordReader};

use std::io::{BufRead, Write};

/// Streams records through per-model Bernoulli sampling.
#[derive(Debug)]
pub struct EnsembleSampler {
    config: Config,
    rng: Random,
    stats: SampleStats,
    selected: Vec<ModelIndex>,
}

impl EnsembleSampler {
    /// Creates a sampler whose generator is seeded from `config.seed`.
    pub fn new(config: Config) -> Self {
        let rng = Random::with_seed(config.seed);
        Self::with_rng(config, rng)
    }

    /// Creates a sampler drawing from the given generator.
    pub fn with_rng(config: Config, rng: Random) -> Self {
        let stats = SampleStats::new(config.num_models);
        let selected = Vec::with_capacity(config.num_models);
        EnsembleSampler {
            config,
            rng,
            stats,
            selected,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }

    /// Runs the trials for one record.
    ///
    /// Clears `selected` and fills it with the models, ascending, whose
    /// trial succeeded. Exactly `num_models` draws are consumed.
    pub fn select_models(&mut self, selected: &mut Vec<ModelIndex>) {
        selected.clear();
        for model in 0..self.config.num_models {
            if self.rng.bernoulli(self.config.sample_ratio) {
                selected.push(model);
            }
        }
    }

    /// Samples one record and emits it once per selected model.
    ///
    /// Returns the number of pairs written.
    pub fn sample_record<W: Write>(
        &mut self,
        record: &Record,
        writer: &mut PairWriter<W>,
    ) -> Result<usize> {
        let mut selected = std::mem::take(&mut self.selected);
        self.select_models(&mut selected);
        self.stats.record_read();

        let outcome = Self::emit_selected(&selected, record, writer, &mut self.stats);
        let emitted = selected.len();
        self.selected = selected;

        outcome.map(|()| emitted)
    }

    fn emit_selected<W: Write>(
        selected: &[ModelIndex],
        record: &Record,
        writer: &mut PairWriter<W>,
        stats: &mut SampleStats,
    ) -> Result<()> {
        for &model in selected {
            writer.emit(&EmittedPair::new(model, record))?;
            stats.pair_emitted(model);
        }
        Ok(())
    }

    /// Samples every record of `input` into `output` and flushes it.
    ///
    /// Stops at the first read or write error; pairs already written stay
    /// written.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<SampleStats> {
        let mut reader = RecordReader::new(input);
        let mut writer = PairWriter::new(output);

        while let Some(record) = reader.read_record()? {
            self.sample_record(&record, &mut writer)?;

            if reader.records_read() % PROGRESS_LOG_INTERVAL == 0 {
                log::debug!(
                    "processed {} records, {} pairs emitted",
                    reader.records_read(),
                    writer.pairs_written()
                );
            }
        }

        writer.flush()?;
        log::info!("{}", self.stats.summary());
        log::debug!(
            "expected {:.1} pairs for {} records",
            self.config.expected_pairs(reader.records_read()),
            reader.records_read()
        );
        Ok(self.stats.clone())
    }
}
