//! Display model implementations for table and JSON output

mod common;
mod pet;
mod scenario;

pub use common::format_elapsed;
pub use pet::PetDisplay;
pub use scenario::{ScenarioDisplay, ScenarioResultDisplay};
