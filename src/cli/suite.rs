//! Suite command implementations

use log::info;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::{Error, Result};
use crate::models::ScenarioDisplay;
use crate::output::{self, json::format_json, table::format_table};
use crate::scenarios::{self, run_suite};

/// List the scenario catalogue. Needs no credentials.
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let rows: Vec<ScenarioDisplay> = scenarios::catalogue()
        .iter()
        .map(ScenarioDisplay::from)
        .collect();

    match opts.format {
        OutputFormat::Json => println!("{}", format_json(&rows)?),
        OutputFormat::Table | OutputFormat::Pretty => println!("{}", format_table(&rows)),
    }
    Ok(())
}

/// Run the selected scenarios and fail unless the report is green
pub async fn run(ctx: &CommandContext, ids: &[String], allow_known_defects: bool) -> Result<()> {
    let selected = scenarios::select(ids)?;
    let scenario_ctx = ctx.scenario_context()?;

    info!(
        "Running {} scenario(s) against {}",
        selected.len(),
        ctx.client.base_url()
    );
    let report = run_suite(&scenario_ctx, &selected, allow_known_defects).await;

    output::print(&report, ctx.format)?;

    if report.is_success() {
        Ok(())
    } else {
        Err(Error::Other(format!(
            "{} scenario(s) failed",
            report.failed() + report.expected_failures()
        )))
    }
}
