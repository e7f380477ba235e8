//! Key command implementation

use crate::cli::CommandContext;
use crate::cli::context::ensure_success;
use crate::client::AuthApi;
use crate::error::Result;
use crate::output;

/// Request an auth key and print the raw response
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let credentials = ctx.settings.require_credentials()?;
    let response = ctx
        .client
        .get_api_key(&credentials.email, &credentials.password)
        .await?;

    output::print(&response, ctx.format)?;
    ensure_success(&response)
}
