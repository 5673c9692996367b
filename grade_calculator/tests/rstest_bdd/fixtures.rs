//! Fixtures shared by the grade calculator behavioural scenarios.
//!
//! Exposes `CalculatorState`, the per-scenario storage threaded through every
//! step, and the `calculator_state` fixture that creates it.

use grade_calculator::{Average, Calculator, CalculatorError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state owning the calculator under test and its results.
#[derive(Debug, Default, ScenarioState)]
pub struct CalculatorState {
    /// Calculator created by "that I have a calculator".
    pub calculator: Slot<Calculator>,
    /// Outcome of the most recent press of the average button.
    pub result: Slot<Result<Average, CalculatorError>>,
    /// Average captured before the button was pressed again.
    pub previous: Slot<Average>,
    /// Precision staged for the environment layer.
    pub env_precision: Slot<String>,
    /// TOML staged for the configuration file layer.
    pub config_file: Slot<String>,
    /// Error raised while setting up a calculator from staged configuration.
    pub setup_error: Slot<CalculatorError>,
}

/// Provides fresh scenario state so no calculator outlives its scenario.
#[fixture]
pub fn calculator_state() -> CalculatorState {
    CalculatorState::default()
}
