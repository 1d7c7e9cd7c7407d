//! Configuration validation for the bagging mapper.
//!
//! Validation runs on the raw values gathered from every configuration
//! source, before they are narrowed into a [`Config`](crate::config::Config),
//! so that out-of-range input such as a negative model count is reported
//! with the value the user actually supplied.

use crate::core::constants::{LARGE_MODEL_COUNT_WARNING, MAX_MODEL_NUM};
use crate::core::error::MapperError;

use serde::{Deserialize, Serialize};

/// Validation result enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// Parameter is valid
    Valid,
    /// Parameter has a warning (non-fatal)
    Warning(ValidationWarning),
    /// Parameter has an error (fatal)
    Error(ValidationError),
}

/// Validation warning structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Parameter name
    pub parameter: String,
    /// Parameter value
    pub value: String,
    /// Warning message
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parameter '{}' = '{}': {}",
            self.parameter, self.value, self.message
        )
    }
}

/// Validation error structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Parameter name
    pub parameter: String,
    /// Parameter value
    pub value: String,
    /// Error message
    pub message: String,
    /// Valid range or options
    pub valid_range: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parameter '{}' = '{}': {}",
            self.parameter, self.value, self.message
        )?;
        if let Some(ref range) = self.valid_range {
            write!(f, " (valid range: {})", range)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for MapperError {
    fn from(err: ValidationError) -> Self {
        let reason = match err.valid_range {
            Some(range) => format!("{} (valid range: {})", err.message, range),
            None => err.message,
        };
        MapperError::invalid_parameter(err.parameter, err.value, reason)
    }
}

/// Configuration validator
#[derive(Debug, Clone)]
pub struct ConfigValidator {
    large_model_count: usize,
    max_model_num: usize,
}

impl ConfigValidator {
    /// Create a validator with the default limits
    pub fn new() -> Self {
        ConfigValidator {
            large_model_count: LARGE_MODEL_COUNT_WARNING,
            max_model_num: MAX_MODEL_NUM,
        }
    }

    /// Validates a model count and sample ratio.
    ///
    /// Returns one entry per finding; a configuration is usable when no
    /// entry is a [`ValidationResult::Error`].
    pub fn validate(&self, model_num: i64, sample_ratio: f64) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        results.extend(self.validate_model_num(model_num));
        results.extend(self.validate_sample_ratio(sample_ratio));

        if results.is_empty() {
            results.push(ValidationResult::Valid);
        }
        results
    }

    /// Returns the first error among `results`, if any.
    pub fn first_error(results: &[ValidationResult]) -> Option<&ValidationError> {
        results.iter().find_map(|result| match result {
            ValidationResult::Error(err) => Some(err),
            _ => None,
        })
    }

    fn validate_model_num(&self, model_num: i64) -> Option<ValidationResult> {
        if model_num <= 0 {
            return Some(ValidationResult::Error(ValidationError {
                parameter: "model_num".to_string(),
                value: model_num.to_string(),
                message: "must be a positive integer".to_string(),
                valid_range: Some(format!("[1, {}]", self.max_model_num)),
            }));
        }

        if model_num as u64 > self.max_model_num as u64 {
            return Some(ValidationResult::Error(ValidationError {
                parameter: "model_num".to_string(),
                value: model_num.to_string(),
                message: "too many ensemble members".to_string(),
                valid_range: Some(format!("[1, {}]", self.max_model_num)),
            }));
        }

        if model_num as u64 > self.large_model_count as u64 {
            return Some(ValidationResult::Warning(ValidationWarning {
                parameter: "model_num".to_string(),
                value: model_num.to_string(),
                message: format!(
                    "every record is offered to more than {} models, output volume scales accordingly",
                    self.large_model_count
                ),
            }));
        }

        None
    }

    fn validate_sample_ratio(&self, sample_ratio: f64) -> Option<ValidationResult> {
        if !(0.0..=1.0).contains(&sample_ratio) {
            return Some(ValidationResult::Error(ValidationError {
                parameter: "sample_ratio".to_string(),
                value: sample_ratio.to_string(),
                message: "must be a probability".to_string(),
                valid_range: Some("[0.0, 1.0]".to_string()),
            }));
        }

        if sample_ratio == 0.0 {
            return Some(ValidationResult::Warning(ValidationWarning {
                parameter: "sample_ratio".to_string(),
                value: sample_ratio.to_string(),
                message: "no record will be emitted for any model".to_string(),
            }));
        }

        if sample_ratio == 1.0 {
            return Some(ValidationResult::Warning(ValidationWarning {
                parameter: "sample_ratio".to_string(),
                value: sample_ratio.to_string(),
                message: "every record is replicated to every model".to_string(),
            }));
        }

        None
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
