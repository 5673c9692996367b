//! Binds the grade calculator feature files to the step registry.

use crate::fixtures::{CalculatorState, calculator_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/grade_average.feature",
    fixtures = [calculator_state: CalculatorState]
);
scenarios!(
    "tests/features/calculator_config.feature",
    fixtures = [calculator_state: CalculatorState]
);
