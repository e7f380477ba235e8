//! Sequential scenario runner

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;

use super::{Scenario, ScenarioContext};
use crate::error::Error;

/// How a single scenario ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail(String),
    /// Known-defect scenario failed as expected
    XFail(String),
    /// Known-defect scenario passed; the service may have been fixed
    XPass,
    /// Transport or local error, not an assertion
    Error(String),
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail(_) => "FAIL",
            Outcome::XFail(_) => "XFAIL",
            Outcome::XPass => "XPASS",
            Outcome::Error(_) => "ERROR",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Fail(r) | Outcome::XFail(r) | Outcome::Error(r) => Some(r),
            Outcome::Pass | Outcome::XPass => None,
        }
    }

    fn classify(result: crate::error::Result<()>, known_defect: bool) -> Self {
        match (result, known_defect) {
            (Ok(()), false) => Outcome::Pass,
            (Ok(()), true) => Outcome::XPass,
            (Err(Error::Assertion(reason)), false) => Outcome::Fail(reason),
            (Err(Error::Assertion(reason)), true) => Outcome::XFail(reason),
            // A broken precondition says nothing about the defect under test
            (Err(err @ Error::Setup(_)), _) => Outcome::Error(err.to_string()),
            (Err(err), _) => Outcome::Error(err.to_string()),
        }
    }
}

/// Result of one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub id: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_defect: Option<&'static str>,
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Outcome of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub results: Vec<ScenarioResult>,
    /// Whether XFAIL results count as success
    pub allow_known_defects: bool,
}

impl SuiteReport {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Pass | Outcome::XPass))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Fail(_) | Outcome::Error(_)))
    }

    pub fn expected_failures(&self) -> usize {
        self.count(|o| matches!(o, Outcome::XFail(_)))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && (self.allow_known_defects || self.expected_failures() == 0)
    }

    pub fn total_elapsed(&self) -> Duration {
        self.results.iter().map(|r| r.elapsed).sum()
    }
}

/// Run scenarios one after another and collect their outcomes.
///
/// A failing scenario never stops the run.
pub async fn run_suite(
    ctx: &ScenarioContext,
    scenarios: &[Scenario],
    allow_known_defects: bool,
) -> SuiteReport {
    let mut results = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        info!("Running scenario {}", scenario.id);
        let started = Instant::now();
        let result = (scenario.run)(ctx).await;
        let elapsed = started.elapsed();

        let outcome = Outcome::classify(result, scenario.known_defect.is_some());
        debug!("{} -> {} in {:?}", scenario.id, outcome.label(), elapsed);

        results.push(ScenarioResult {
            id: scenario.id,
            description: scenario.description,
            known_defect: scenario.known_defect,
            outcome,
            elapsed,
        });
    }

    SuiteReport {
        results,
        allow_known_defects,
    }
}
