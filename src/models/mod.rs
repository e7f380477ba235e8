//! Display models for CLI output
//!
//! Converts API and runner types into table rows.

pub mod display;

pub use display::{PetDisplay, ScenarioDisplay, ScenarioResultDisplay};
