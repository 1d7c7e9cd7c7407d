//! Error handling and error types for the bagging mapper.
//!
//! Every fallible operation in the crate returns [`Result`]. The variants are
//! split along the two failure modes a mapper stage has: configuration
//! problems, which are detected before any input is consumed, and I/O
//! problems, which abort the stream at the point of failure.

use std::io;
use thiserror::Error;

/// Exit status used when the configuration is missing or invalid.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit status used when reading input or writing output fails.
pub const EXIT_IO_ERROR: i32 = 1;

/// Main error type for the bagging mapper.
#[derive(Error, Debug)]
pub enum MapperError {
    /// Configuration source could not be read or understood
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong, including the offending source
        message: String,
    },

    /// A configuration value is present but outside its valid range
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        /// Parameter name as used in configuration files
        parameter: String,
        /// Value as supplied
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A required configuration value was not supplied by any source
    #[error("Missing required parameter: {parameter}")]
    MissingParameter {
        /// Parameter name as used in configuration files
        parameter: String,
    },

    /// Reading stdin, writing stdout or touching a file failed
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying serde_json error
        #[from]
        source: serde_json::Error,
    },

    /// TOML configuration file could not be parsed
    #[error("TOML error: {source}")]
    Toml {
        /// Underlying toml error
        #[from]
        source: toml::de::Error,
    },
}

/// Type alias for Results using MapperError
pub type Result<T> = std::result::Result<T, MapperError>;

impl MapperError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        MapperError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        MapperError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter<P: Into<String>>(parameter: P) -> Self {
        MapperError::MissingParameter {
            parameter: parameter.into(),
        }
    }

    /// True for every error raised while assembling the configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MapperError::Config { .. }
                | MapperError::InvalidParameter { .. }
                | MapperError::MissingParameter { .. }
                | MapperError::Toml { .. }
        )
    }

    /// True when the error came from the underlying stream or file system
    pub fn is_io_error(&self) -> bool {
        matches!(self, MapperError::IO { .. })
    }

    /// True when the downstream consumer closed the output pipe
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            MapperError::IO { source } => source.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            EXIT_CONFIG_ERROR
        } else {
            EXIT_IO_ERROR
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            MapperError::Config { .. } => "config",
            MapperError::InvalidParameter { .. } => "invalid_parameter",
            MapperError::MissingParameter { .. } => "missing_parameter",
            MapperError::IO { .. } => "io",
            MapperError::Json { .. } => "json",
            MapperError::Toml { .. } => "toml",
        }
    }
}
