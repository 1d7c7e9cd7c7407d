//! # Bagging Mapper
//!
//! The map stage of a MapReduce pipeline that trains a bootstrap-aggregated
//! ("bagging") ensemble. The mapper reads training records line by line and,
//! for each of `n_model` ensemble members, independently keeps every record
//! with probability `ratio`. Kept records are emitted as
//! `<model_index>\t<record>` so the shuffle groups each model's subsample
//! under one key for a downstream reducer to train on.
//!
//! ## Quick Start
//!
//! ```rust
//! use bagging_mapper::{ConfigBuilder, EnsembleSampler};
//!
//! # fn main() -> bagging_mapper::Result<()> {
//! let config = ConfigBuilder::new()
//!     .model_num(2)
//!     .sample_ratio(1.0)
//!     .build()?;
//!
//! let mut output = Vec::new();
//! let stats = EnsembleSampler::new(config).run(&b"a\nb\n"[..], &mut output)?;
//!
//! assert_eq!(output, b"0\ta\n1\ta\n0\tb\n1\tb\n");
//! assert_eq!(stats.pairs_emitted, 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: record and pair types, constants, errors, logging, generator
//! - [`config`]: layered configuration (file, environment, flags) and validation
//! - [`io`]: lazy record reader and streaming pair writer
//! - [`sampler`]: the per-record, per-model Bernoulli sampling loop
//! - [`cli`]: the command line surface used by the `bagging-mapper` binary
//!
//! ## Determinism
//!
//! The generator is seeded once (6505 unless overridden) and draws are
//! consumed record-major, model-minor, exactly one per `(record, model)`
//! pair. The same configuration and input always produce the same bytes.

#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod sampler;

pub use crate::config::{Config, ConfigBuilder, ConfigValidator, ValidationResult};
pub use crate::core::{
    constants::*,
    error::{MapperError, Result},
    types::*,
    utils::random::Random,
};
pub use crate::io::{PairWriter, RecordReader};
pub use crate::sampler::{EnsembleSampler, SampleStats};

/// Library version
pub use crate::core::constants::BAGGING_MAPPER_VERSION as VERSION;
