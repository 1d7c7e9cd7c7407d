//! Core infrastructure for the bagging mapper.
//!
//! - [`types`]: records, emitted pairs and index types
//! - [`constants`]: defaults and wire-format bytes
//! - [`error`]: error handling and exit codes
//! - [`utils`]: logging setup and the seeded generator

pub mod constants;
pub mod error;
pub mod types;
pub mod utils;

pub use constants::*;
pub use error::{MapperError, Result};
pub use types::*;
