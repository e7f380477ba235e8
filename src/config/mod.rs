//! Configuration management for the PetFriends suite
//!
//! Settings come from, in order of precedence: CLI flags, environment
//! variables (both handled by clap), the YAML config file, and built-in
//! defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::{Credentials, DEFAULT_API_HOST};
use crate::error::{ConfigError, Result};

/// Fixture images shipped with the crate, as laid out at build time
pub const DEFAULT_FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/images");

/// Fixture directory looked up relative to the working directory first
const LOCAL_FIXTURES_DIR: &str = "fixtures/images";

/// Credentials the service is known not to accept
pub const DEFAULT_INVALID_EMAIL: &str = "wrong@wrong";
pub const DEFAULT_INVALID_PASSWORD: &str = "123";

/// On-disk configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Custom API host for development/testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Directory holding the fixture images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_password: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".petfriends").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default one
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file holds a password
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub email: Option<String>,
    pub password: Option<String>,
    pub api_host: Option<String>,
    pub fixtures_dir: Option<PathBuf>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Valid account; absent until configured
    pub credentials: Option<Credentials>,
    pub invalid_credentials: Credentials,
    pub api_host: String,
    pub fixtures_dir: PathBuf,
}

impl Settings {
    /// Merge overrides on top of an optional config file
    pub fn resolve(config: Option<Config>, overrides: &Overrides) -> Self {
        let config = config.unwrap_or_default();

        let email = overrides.email.clone().or(config.email);
        let password = overrides.password.clone().or(config.password);
        let credentials = match (email, password) {
            (Some(email), Some(password)) => Some(Credentials::new(email, password)),
            _ => None,
        };

        Self {
            credentials,
            invalid_credentials: Credentials::new(
                config
                    .invalid_email
                    .unwrap_or_else(|| DEFAULT_INVALID_EMAIL.to_string()),
                config
                    .invalid_password
                    .unwrap_or_else(|| DEFAULT_INVALID_PASSWORD.to_string()),
            ),
            api_host: overrides
                .api_host
                .clone()
                .or(config.api_host)
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            fixtures_dir: overrides
                .fixtures_dir
                .clone()
                .or(config.fixtures_dir)
                .unwrap_or_else(|| {
                    let cwd = std::env::current_dir().unwrap_or_default();
                    default_fixtures_dir(&cwd)
                }),
        }
    }

    /// Valid credentials, or an error telling the user how to set them
    pub fn require_credentials(&self) -> Result<&Credentials> {
        self.credentials
            .as_ref()
            .ok_or_else(|| ConfigError::MissingCredentials.into())
    }

    pub fn is_custom_host(&self) -> bool {
        self.api_host != DEFAULT_API_HOST
    }
}

/// `fixtures/images` under `cwd` when present, else the build-time location.
///
/// An installed binary whose source tree is gone needs `--fixtures` or
/// `fixtures_dir` in the config.
pub fn default_fixtures_dir(cwd: &Path) -> PathBuf {
    let local = cwd.join(LOCAL_FIXTURES_DIR);
    if local.is_dir() {
        local
    } else {
        PathBuf::from(DEFAULT_FIXTURES_DIR)
    }
}
