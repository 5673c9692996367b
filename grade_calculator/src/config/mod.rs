//! Layered configuration for the grade calculator.
//!
//! Values are merged from three layers, later layers winning:
//!
//! 1. [`CalculatorConfig::default`],
//! 2. a TOML file (`.grade_calculator.toml` in the working directory, or the
//!    path named by `GRADE_CALCULATOR_CONFIG_PATH`),
//! 3. environment variables prefixed with `GRADE_CALCULATOR_`.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::average::MAX_PRECISION;
use crate::error::{CalculatorError, Result};

/// Prefix shared by every environment variable the calculator reads.
pub const ENV_PREFIX: &str = "GRADE_CALCULATOR_";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "GRADE_CALCULATOR_CONFIG_PATH";

/// Configuration file discovered in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".grade_calculator.toml";

const DEFAULT_PRECISION: u8 = 2;

/// Settings governing how a calculator presents its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal places used when rendering an average.
    pub precision: u8,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Values as merged from every layer, before range checks.
#[derive(Debug, Deserialize)]
struct LayeredValues {
    precision: i64,
}

impl TryFrom<LayeredValues> for CalculatorConfig {
    type Error = CalculatorError;

    fn try_from(layered: LayeredValues) -> Result<Self> {
        let precision = u8::try_from(layered.precision).map_err(|_| {
            CalculatorError::validation(
                "precision",
                format!(
                    "must be between 0 and {MAX_PRECISION}, got {}",
                    layered.precision
                ),
            )
        })?;
        Ok(Self { precision })
    }
}

impl CalculatorConfig {
    /// Loads configuration from the discovered file and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`CalculatorError`] when `GRADE_CALCULATOR_CONFIG_PATH` names
    /// a missing file, a layer cannot be parsed, or validation fails.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(Utf8PathBuf::from);
        Self::load_from(explicit.as_deref())
    }

    /// Loads configuration using `path` as the file layer when provided.
    ///
    /// Without an explicit path the default file is read from the working
    /// directory only, never from its parents, and silently skipped when
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::ConfigFile`] when `path` does not exist,
    /// [`CalculatorError::Gathering`] when a layer is malformed or not an
    /// integer, and [`CalculatorError::Validation`] when a value is out of
    /// range, including values too large or negative for a `u8`.
    pub fn load_from(path: Option<&Utf8Path>) -> Result<Self> {
        let file = match path {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(CalculatorError::ConfigFile {
                        path: explicit.to_owned(),
                    });
                }
                explicit
            }
            None => Utf8Path::new(DEFAULT_CONFIG_FILE),
        };
        tracing::debug!(
            path = %file,
            explicit = path.is_some(),
            "loading calculator configuration"
        );
        let layered: LayeredValues = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file_exact(file))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config_path"]))
            .extract()?;
        let config = Self::try_from(layered)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value lies within its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Validation`] when `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(CalculatorError::validation(
                "precision",
                format!("must be at most {MAX_PRECISION}, got {}", self.precision),
            ));
        }
        Ok(())
    }
}
