//! Core configuration structures for the bagging mapper.
//!
//! Configuration is assembled from up to three layers, lowest precedence
//! first: a TOML or JSON file, `BAGGING_MAPPER_*` environment variables and
//! the command line. Each layer produces a partial [`ConfigBuilder`]; the
//! layers are merged and [`ConfigBuilder::build`] validates the result into
//! an immutable [`Config`].

use crate::config::validation::{ConfigValidator, ValidationResult};
use crate::core::constants::*;
use crate::core::error::{MapperError, Result};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolved, validated mapper configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of ensemble members, always at least 1
    pub num_models: usize,
    /// Probability that a record is included in a given model's sample
    pub sample_ratio: f64,
    /// Seed for the sampling generator
    pub seed: u64,
}

impl Config {
    /// Expected number of pairs emitted for `num_records` input records
    pub fn expected_pairs(&self, num_records: u64) -> f64 {
        num_records as f64 * self.num_models as f64 * self.sample_ratio
    }

    /// One-line description for logging
    pub fn summary(&self) -> String {
        format!(
            "model_num={} sample_ratio={} seed={}",
            self.num_models, self.sample_ratio, self.seed
        )
    }
}

/// Partial configuration gathered from a single source.
///
/// Every field is optional so that sources can be layered with
/// [`ConfigBuilder::merge`]. The field names double as the keys accepted in
/// configuration files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigBuilder {
    /// Number of ensemble members
    pub model_num: Option<i64>,
    /// Per-model sample ratio
    pub sample_ratio: Option<f64>,
    /// Generator seed
    pub seed: Option<u64>,
}

impl ConfigBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of ensemble members
    pub fn model_num(mut self, model_num: i64) -> Self {
        self.model_num = Some(model_num);
        self
    }

    /// Set the per-model sample ratio
    pub fn sample_ratio(mut self, ratio: f64) -> Self {
        self.sample_ratio = Some(ratio);
        self
    }

    /// Set the generator seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a partial configuration from a `.toml` or `.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MapperError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| MapperError::config(format!("Failed to parse JSON config: {}", e))),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(MapperError::config(
                "Unsupported config file format. Use .json or .toml",
            )),
        }
    }

    /// Load a partial configuration from `BAGGING_MAPPER_*` environment variables
    pub fn from_environment() -> Result<Self> {
        Self::from_env_source(|name| std::env::var(name).ok())
    }

    /// Load a partial configuration through an arbitrary variable lookup.
    pub fn from_env_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ConfigBuilder::new();

        if let Some(val) = lookup(ENV_MODEL_NUM) {
            builder.model_num = Some(
                val.trim()
                    .parse()
                    .map_err(|_| MapperError::config(format!("Invalid {}: {}", ENV_MODEL_NUM, val)))?,
            );
        }

        if let Some(val) = lookup(ENV_SAMPLE_RATIO) {
            builder.sample_ratio = Some(val.trim().parse().map_err(|_| {
                MapperError::config(format!("Invalid {}: {}", ENV_SAMPLE_RATIO, val))
            })?);
        }

        if let Some(val) = lookup(ENV_SEED) {
            builder.seed = Some(
                val.trim()
                    .parse()
                    .map_err(|_| MapperError::config(format!("Invalid {}: {}", ENV_SEED, val)))?,
            );
        }

        Ok(builder)
    }

    /// Overlay `other` on top of this builder; values set in `other` win
    pub fn merge(mut self, other: &ConfigBuilder) -> Self {
        if other.model_num.is_some() {
            self.model_num = other.model_num;
        }
        if other.sample_ratio.is_some() {
            self.sample_ratio = other.sample_ratio;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        self
    }

    /// Validate and build the configuration.
    ///
    /// Warnings from the validator are logged; the first error is returned.
    pub fn build(self) -> Result<Config> {
        let model_num = self
            .model_num
            .ok_or_else(|| MapperError::missing_parameter("model_num"))?;
        let sample_ratio = self
            .sample_ratio
            .ok_or_else(|| MapperError::missing_parameter("sample_ratio"))?;

        let results = ConfigValidator::new().validate(model_num, sample_ratio);
        if let Some(err) = ConfigValidator::first_error(&results) {
            return Err(err.clone().into());
        }
        for result in &results {
            if let ValidationResult::Warning(warning) = result {
                log::warn!("{}", warning);
            }
        }

        let num_models = usize::try_from(model_num).map_err(|_| {
            MapperError::invalid_parameter(
                "model_num",
                model_num.to_string(),
                "does not fit in the platform's index type",
            )
        })?;

        Ok(Config {
            num_models,
            sample_ratio,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}
