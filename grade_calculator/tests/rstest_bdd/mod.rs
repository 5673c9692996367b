//! `rstest-bdd` scaffolding for `grade_calculator`.
//!
//! The modules register the scenario-scoped fixtures, the step
//! implementations, a canary scenario, and the behavioural suite so every
//! feature file runs under the stock `cargo test` harness.

mod behaviour;
mod fixtures;
mod steps;
