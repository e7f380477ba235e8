//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::context::load_optional_config;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::{Config, Settings};
use crate::error::Result;
use crate::output::json::format_json;
use crate::scenarios::images;

#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: String,
    config_found: bool,
    credentials_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    api_host: String,
    custom_host: bool,
    fixtures_dir: String,
    fixtures: Vec<FixtureStatus>,
}

#[derive(Debug, Serialize)]
struct FixtureStatus {
    name: &'static str,
    present: bool,
}

fn collect(opts: &GlobalOptions) -> Result<StatusReport> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = load_optional_config(opts.config_ref())?;
    let config_found = config.is_some();
    let settings = Settings::resolve(config, &opts.overrides());

    let fixtures = [images::CAT, images::CAT_SMALL, images::DOG, images::CAT_GIF]
        .into_iter()
        .map(|name| FixtureStatus {
            name,
            present: settings.fixtures_dir.join(name).is_file(),
        })
        .collect();

    Ok(StatusReport {
        config_file: config_path.display().to_string(),
        config_found,
        credentials_configured: settings.credentials.is_some(),
        email: settings.credentials.as_ref().map(|c| c.email.clone()),
        api_host: settings.api_host.clone(),
        custom_host: settings.is_custom_host(),
        fixtures_dir: settings.fixtures_dir.display().to_string(),
        fixtures,
    })
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let status = collect(opts)?;

    if opts.format == OutputFormat::Json {
        println!("{}", format_json(&status)?);
        return Ok(());
    }

    println!("{}\n", "PetFriends Configuration Status".bold());

    if status.config_found {
        println!("Config file: {}", status.config_file.cyan());
    } else {
        println!(
            "Config file: {} {}",
            status.config_file.cyan(),
            "(not found)".dimmed()
        );
    }
    println!();

    match &status.email {
        Some(email) => println!("{} Credentials configured for {}", "✓".green(), email),
        None => {
            println!("{} Credentials not configured", "✗".red());
            println!("  → Run 'petfriends init' or set PETFRIENDS_EMAIL and PETFRIENDS_PASSWORD");
        }
    }

    if status.custom_host {
        println!(
            "{} API host: {} {}",
            "○".dimmed(),
            status.api_host.cyan(),
            "(custom)".yellow()
        );
    } else {
        println!("{} API host: {}", "○".dimmed(), status.api_host.cyan());
    }
    println!("{} Fixtures: {}", "○".dimmed(), status.fixtures_dir);

    for fixture in &status.fixtures {
        if fixture.present {
            println!("    {} {}", "✓".green(), fixture.name);
        } else {
            println!("    {} {} (missing)", "✗".red(), fixture.name);
        }
    }
    if status.fixtures.iter().any(|f| !f.present) {
        println!("  → Pass --fixtures <DIR> or set fixtures_dir in the config file");
    }

    println!();
    Ok(())
}
