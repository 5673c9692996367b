//! Test helpers shared across the grade-calculator workspace.
//!
//! [`figment`] stages configuration files and environment variables inside a
//! jail, and [`text`] normalises values captured from Gherkin step
//! placeholders.

pub mod figment;
pub mod text;
