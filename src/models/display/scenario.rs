//! Scenario display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_elapsed, truncate_string};
use crate::scenarios::{Scenario, ScenarioResult};

/// Catalogue entry for `suite list`
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScenarioDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "KNOWN DEFECT")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub known_defect: String,
}

impl From<&Scenario> for ScenarioDisplay {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.to_string(),
            description: scenario.description.to_string(),
            known_defect: scenario.known_defect.unwrap_or_default().to_string(),
        }
    }
}

/// One row of a run report
#[derive(Debug, Clone, Tabled)]
pub struct ScenarioResultDisplay {
    #[tabled(rename = "RESULT")]
    pub result: String,

    #[tabled(rename = "SCENARIO")]
    pub id: String,

    #[tabled(rename = "TIME")]
    pub elapsed: String,

    #[tabled(rename = "REASON")]
    pub reason: String,
}

impl From<&ScenarioResult> for ScenarioResultDisplay {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            result: result.outcome.label().to_string(),
            id: result.id.to_string(),
            elapsed: format_elapsed(result.elapsed),
            reason: truncate_string(result.outcome.reason().unwrap_or(""), 60),
        }
    }
}
