//! Step definitions backing the canary scenario.

use super::fixtures::CalculatorState;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd::ScenarioState as _;
use rstest_bdd_macros::{given, then};

#[given("the grade calculator scenario state is reset")]
fn reset_state(calculator_state: &CalculatorState) {
    calculator_state.reset();
    assert!(
        calculator_state.calculator.is_empty() && calculator_state.result.is_empty(),
        "resetting the state must clear any previous calculator"
    );
}

#[then("the number of entered grades is {count}")]
fn assert_grade_count(calculator_state: &CalculatorState, count: usize) -> Result<()> {
    let actual = calculator_state
        .calculator
        .with_ref(grade_calculator::Calculator::len)
        .ok_or_else(|| anyhow!("a calculator must exist before counting grades"))?;
    ensure!(actual == count, "expected {count} grades, found {actual}");
    Ok(())
}
