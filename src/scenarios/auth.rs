//! Auth key scenarios

use super::ScenarioContext;
use super::checks::{ensure, expect_status};
use crate::error::Result;

pub async fn get_api_key_for_valid_user(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx
        .api
        .get_api_key(&ctx.credentials.email, &ctx.credentials.password)
        .await?;

    expect_status(&response, 200)?;
    ensure(response.has_field("key"), || "body has no 'key' field".to_string())
}

pub async fn get_api_key_for_invalid_user(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx
        .api
        .get_api_key(
            &ctx.invalid_credentials.email,
            &ctx.invalid_credentials.password,
        )
        .await?;

    expect_status(&response, 403)
}
