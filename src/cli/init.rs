//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::cli::context::load_optional_config;
use crate::client::{AuthApi, PetFriendsClient};
use crate::config::Config;
use crate::error::{Error, Result};

/// Run the init command
///
/// Prompts for the account, checks it against the service and saves it.
/// Values already given via flags or environment skip their prompt.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to PetFriends!".bold().green());
    println!("Let's set up the account the suite logs in with.\n");

    let theme = ColorfulTheme::default();

    let email: String = match &opts.email {
        Some(email) => email.clone(),
        None => Input::with_theme(&theme)
            .with_prompt("Account email")
            .interact_text()?,
    };

    let password: String = match &opts.password {
        Some(password) => password.clone(),
        None => Password::with_theme(&theme)
            .with_prompt("Account password")
            .interact()?,
    };

    println!("\n{}", "Requesting auth key...".cyan());
    let client = PetFriendsClient::with_host(opts.api_host.clone())?;
    let response = client.get_api_key(&email, &password).await?;

    if response.status != 200 {
        return Err(Error::Other(format!(
            "The service rejected these credentials (status {}). Nothing was saved.",
            response.status
        )));
    }
    println!("{}", "✓ Credentials accepted!".green());

    let mut config = load_optional_config(opts.config_ref())?.unwrap_or_default();
    config.email = Some(email);
    config.password = Some(password);
    if opts.api_host.is_some() {
        config.api_host = opts.api_host.clone();
    }
    if opts.fixtures.is_some() {
        config.fixtures_dir = opts.fixtures.clone();
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "petfriends status".cyan());
    println!("  {} - Run every scenario", "petfriends suite run".cyan());

    Ok(())
}
