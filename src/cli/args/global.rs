//! Global CLI options shared across all commands

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Overrides;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; the config file is merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.petfriends/config.yaml)
    pub config: Option<String>,

    pub email: Option<String>,

    pub password: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,

    /// Directory holding the fixture images
    pub fixtures: Option<PathBuf>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            email: cli.email.clone(),
            password: cli.password.clone(),
            api_host: cli.api_host.clone(),
            fixtures: cli.fixtures.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// The flag/env layer of the settings
    pub fn overrides(&self) -> Overrides {
        Overrides {
            email: self.email.clone(),
            password: self.password.clone(),
            api_host: self.api_host.clone(),
            fixtures_dir: self.fixtures.clone(),
        }
    }
}
