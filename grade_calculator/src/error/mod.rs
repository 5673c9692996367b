//! Error types produced by the grade calculator.

mod types;

pub use types::CalculatorError;

/// Convenience alias for results carrying a [`CalculatorError`].
pub type Result<T, E = CalculatorError> = std::result::Result<T, E>;
