//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for settings resolution and client initialization.

use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{ApiResponse, AuthApi, AuthKey, PetFriendsClient};
use crate::config::{Config, Settings};
use crate::error::{ConfigError, Error, Result};
use crate::scenarios::ScenarioContext;

/// Context for command execution containing settings, client, and output format.
pub struct CommandContext {
    /// Settings merged from flags, environment and config file
    pub settings: Settings,
    /// API client pointed at the resolved host
    pub client: Arc<PetFriendsClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine as long as the flags or environment
    /// provide what the command needs; a malformed one is an error.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_optional_config(opts.config_ref())?;
        let settings = Settings::resolve(config, &opts.overrides());
        let client = Arc::new(PetFriendsClient::with_host(Some(settings.api_host.clone()))?);

        Ok(Self {
            settings,
            client,
            format: opts.format,
        })
    }

    /// Request an auth key with the configured credentials.
    ///
    /// Unlike the raw client call, a non-200 answer is an error here: every
    /// pet command needs a working key.
    pub async fn authenticate(&self) -> Result<AuthKey> {
        let credentials = self.settings.require_credentials()?;
        let response = self
            .client
            .get_api_key(&credentials.email, &credentials.password)
            .await?;

        if response.status != 200 {
            return Err(Error::Other(format!(
                "Authentication failed with status {}. Check your credentials with `petfriends status`.",
                response.status
            )));
        }

        Ok(response.key()?)
    }

    /// Build the context scenarios run in
    pub fn scenario_context(&self) -> Result<ScenarioContext> {
        Ok(ScenarioContext {
            api: self.client.clone(),
            credentials: self.settings.require_credentials()?.clone(),
            invalid_credentials: self.settings.invalid_credentials.clone(),
            fixtures_dir: self.settings.fixtures_dir.clone(),
        })
    }
}

/// Load the config file, treating "not found" as "no config"
pub fn load_optional_config(path: Option<&str>) -> Result<Option<Config>> {
    match Config::load_at(path) {
        Ok(config) => Ok(Some(config)),
        Err(Error::Config(ConfigError::NotFound)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Turn a non-2xx response into a command failure (after it has been printed)
pub fn ensure_success(response: &ApiResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(Error::Other(format!("API returned status {}", response.status)))
    }
}
