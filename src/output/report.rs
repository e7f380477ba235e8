//! Formatting of suite reports and the scenario catalogue

use colored::Colorize;
use serde::Serialize;

use super::Formattable;
use super::json::format_json;
use super::table::format_table;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::ScenarioResultDisplay;
use crate::models::display::format_elapsed;
use crate::scenarios::{Outcome, ScenarioResult, SuiteReport};

#[derive(Serialize)]
struct Summary {
    passed: usize,
    failed: usize,
    expected_failures: usize,
    success: bool,
    elapsed_ms: u64,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    summary: Summary,
    results: &'a [ScenarioResult],
}

fn summary_line(report: &SuiteReport) -> String {
    format!(
        "{} passed, {} failed, {} expected failures in {}",
        report.passed(),
        report.failed(),
        report.expected_failures(),
        format_elapsed(report.total_elapsed())
    )
}

fn pretty_label(outcome: &Outcome) -> colored::ColoredString {
    let label = format!("{:<5}", outcome.label());
    match outcome {
        Outcome::Pass => label.green(),
        Outcome::XPass => label.cyan(),
        Outcome::XFail(_) => label.yellow(),
        Outcome::Fail(_) | Outcome::Error(_) => label.red().bold(),
    }
}

impl Formattable for SuiteReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let json = ReportJson {
                    summary: Summary {
                        passed: self.passed(),
                        failed: self.failed(),
                        expected_failures: self.expected_failures(),
                        success: self.is_success(),
                        elapsed_ms: self.total_elapsed().as_millis() as u64,
                    },
                    results: &self.results,
                };
                Ok(format_json(&json)?)
            }
            OutputFormat::Table => {
                let rows: Vec<ScenarioResultDisplay> =
                    self.results.iter().map(ScenarioResultDisplay::from).collect();
                Ok(format!("{}\n{}", format_table(&rows), summary_line(self)))
            }
            OutputFormat::Pretty => {
                let mut out = String::new();
                for result in &self.results {
                    out.push_str(&format!(
                        "  {}  {} {}\n",
                        pretty_label(&result.outcome),
                        result.id,
                        format!("({})", format_elapsed(result.elapsed)).dimmed()
                    ));
                    if let Some(reason) = result.outcome.reason() {
                        out.push_str(&format!("         {}\n", reason));
                    }
                    if let (Outcome::XFail(_), Some(defect)) = (&result.outcome, result.known_defect)
                    {
                        out.push_str(&format!("         {}\n", format!("known defect: {}", defect).dimmed()));
                    }
                }

                let summary = summary_line(self);
                let summary = if self.is_success() {
                    summary.green().bold()
                } else {
                    summary.red().bold()
                };
                out.push_str(&format!("\n{}", summary));
                Ok(out)
            }
        }
    }
}
