//! Primary error enum for averaging and configuration flows.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while averaging grades or loading configuration.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum CalculatorError {
    /// An average was requested before any grade was entered.
    #[error("cannot average an empty set of grades")]
    EmptyInput,

    /// The running total or grade count no longer fits in a `u64`.
    #[error("grade total exceeds the supported range")]
    Overflow,

    /// Error while gathering configuration from its layers.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file '{path}' does not exist")]
    ConfigFile {
        /// Path that was requested.
        path: Utf8PathBuf,
    },

    /// A configuration value fell outside its accepted range.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Configuration key that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },
}

impl CalculatorError {
    /// Returns `true` when the error signals an average over no grades.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    pub(crate) fn validation(key: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.to_owned(),
            message: message.into(),
        }
    }
}

impl From<FigmentError> for CalculatorError {
    fn from(err: FigmentError) -> Self {
        Self::Gathering(Box::new(err))
    }
}
