//! The grade calculator: collect grades, then ask for their mean.

use crate::average::Average;
use crate::config::CalculatorConfig;
use crate::error::Result;

/// Accumulates grades and averages them on demand.
///
/// Grades are append-only. Averaging borrows the calculator immutably, so
/// repeated calls without an intervening [`add`](Self::add) agree.
///
/// # Examples
///
/// ```rust
/// use grade_calculator::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.add(100);
/// calculator.add(80);
/// let average = calculator.average()?;
/// assert!(average.equals_whole(90));
/// assert_eq!(average.to_string(), "90.00");
/// # Ok::<(), grade_calculator::CalculatorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    grades: Vec<u32>,
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates an empty calculator using the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty calculator that renders averages per `config`.
    #[must_use]
    pub const fn with_config(config: CalculatorConfig) -> Self {
        Self {
            grades: Vec::new(),
            config,
        }
    }

    /// Records another grade.
    pub fn add(&mut self, grade: u32) {
        self.grades.push(grade);
        tracing::trace!(grade, entered = self.grades.len(), "grade entered");
    }

    /// Computes the arithmetic mean of every grade entered so far.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::EmptyInput`](crate::CalculatorError::EmptyInput)
    /// when no grade has been entered, and
    /// [`CalculatorError::Overflow`](crate::CalculatorError::Overflow) when
    /// the total does not fit in a `u64`.
    pub fn average(&self) -> Result<Average> {
        let average = Average::of(&self.grades, self.config.precision).inspect_err(|err| {
            tracing::debug!(error = %err, "average unavailable");
        })?;
        tracing::debug!(
            sum = average.sum(),
            count = average.count(),
            %average,
            "average computed"
        );
        Ok(average)
    }

    /// Grades in the order they were entered.
    #[must_use]
    pub const fn grades(&self) -> &[u32] {
        self.grades.as_slice()
    }

    /// Number of grades entered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.grades.len()
    }

    /// Returns `true` until the first grade is entered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Configuration applied when rendering averages.
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Extend<u32> for Calculator {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, grades: I) {
        for grade in grades {
            self.add(grade);
        }
    }
}

impl FromIterator<u32> for Calculator {
    fn from_iter<I: IntoIterator<Item = u32>>(grades: I) -> Self {
        let mut calculator = Self::new();
        calculator.extend(grades);
        calculator
    }
}
