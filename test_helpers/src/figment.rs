//! Staged configuration layers applied inside a `figment::Jail`.
//!
//! Tests describe the files and environment variables a loader should see,
//! then run the loader inside a jail. The jail provides a fresh working
//! directory and restores every variable it set once the loader returns.
//!
//! ```
//! use grade_calculator_test_helpers::figment::StagedLayers;
//!
//! let seen = StagedLayers::new()
//!     .file("settings.toml", "precision = 1")
//!     .env("GRADE_CALCULATOR_DOC_MARKER", "3")
//!     .run(|| {
//!         let file = std::fs::read_to_string("settings.toml").ok();
//!         (file, std::env::var("GRADE_CALCULATOR_DOC_MARKER").ok())
//!     })?;
//! assert_eq!(seen.0.as_deref(), Some("precision = 1"));
//! assert_eq!(seen.1.as_deref(), Some("3"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow};

/// Files, environment variables, and a working directory to apply in a jail.
#[derive(Debug, Clone, Default)]
pub struct StagedLayers {
    files: Vec<(String, String)>,
    env: Vec<(String, String)>,
    working_dir: Option<String>,
}

impl StagedLayers {
    /// Starts with nothing staged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `contents` to `name`, relative to the jail root.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.push((name.into(), contents.into()));
        self
    }

    /// Sets the environment variable `key` to `value`.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Runs the loader from `dir`, created beneath the jail root.
    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Returns `true` when nothing has been staged.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files.is_empty() && self.env.is_empty() && self.working_dir.is_none()
    }

    /// Applies the staged layers inside a jail and returns `load`'s output.
    ///
    /// # Errors
    ///
    /// Returns an error when the jail cannot be created or a staged file or
    /// directory cannot be written.
    pub fn run<T, F>(self, load: F) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        let mut output = None;
        figment::Jail::try_with(|jail| {
            for (name, contents) in &self.files {
                jail.create_file(name, contents)?;
            }
            for (key, value) in &self.env {
                jail.set_env(key, value);
            }
            if let Some(dir) = &self.working_dir {
                std::fs::create_dir_all(jail.directory().join(dir))
                    .map_err(|err| figment::Error::from(err.to_string()))?;
                jail.change_dir(dir)?;
            }
            output = Some(load());
            Ok(())
        })
        .map_err(|err| anyhow!("jailed load failed: {err}"))?;
        output.ok_or_else(|| anyhow!("jailed loader did not run"))
    }
}
