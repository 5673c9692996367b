//! Grade averaging with an exact, explicitly failing mean.
//!
//! A [`Calculator`] collects non-negative integer grades and produces an
//! [`Average`]. Averaging an empty calculator returns
//! [`CalculatorError::EmptyInput`] instead of a sentinel value. Rendering
//! precision comes from [`CalculatorConfig`], which layers defaults, a TOML
//! file, and `GRADE_CALCULATOR_*` environment variables.

pub mod average;
pub mod calculator;
pub mod config;
pub mod error;

pub use average::Average;
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use error::{CalculatorError, Result};
