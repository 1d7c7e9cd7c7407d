//! Configuration management for the bagging mapper.
//!
//! Parameters come from a configuration file, the environment and the
//! command line, and are validated together before any input is read.

pub mod core;
pub mod validation;

pub use self::core::{Config, ConfigBuilder};
pub use validation::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};

use crate::core::error::Result;
use std::path::Path;

/// Resolves the configuration from all sources.
///
/// Precedence, lowest first: `file` (when given), the process environment,
/// then `overrides` (typically parsed from the command line).
pub fn resolve<P: AsRef<Path>>(file: Option<P>, overrides: &ConfigBuilder) -> Result<Config> {
    let base = match file {
        Some(path) => ConfigBuilder::from_file(path)?,
        None => ConfigBuilder::new(),
    };
    let env = ConfigBuilder::from_environment()?;

    base.merge(&env).merge(overrides).build()
}
