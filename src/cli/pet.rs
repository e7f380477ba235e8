//! Pet command implementations
//!
//! Each command prints the status and body it got back and fails on a
//! non-2xx status.

use std::path::Path;

use log::debug;

use crate::cli::CommandContext;
use crate::cli::context::ensure_success;
use crate::client::{ApiResponse, PetApi, PetFilter, PetForm};
use crate::error::Result;
use crate::output;

fn finish(ctx: &CommandContext, response: &ApiResponse) -> Result<()> {
    output::print(response, ctx.format)?;
    ensure_success(response)
}

pub async fn list(ctx: &CommandContext, filter: PetFilter) -> Result<()> {
    let key = ctx.authenticate().await?;
    debug!("Listing pets with filter {}", filter);

    let response = ctx.client.get_list_of_pets(&key, filter).await?;
    finish(ctx, &response)
}

pub async fn add(ctx: &CommandContext, form: PetForm, photo: Option<&Path>) -> Result<()> {
    let key = ctx.authenticate().await?;

    let response = match photo {
        Some(photo) => ctx.client.add_new_pet(&key, &form, photo).await?,
        None => ctx.client.add_new_pet_without_photo(&key, &form).await?,
    };
    finish(ctx, &response)
}

pub async fn photo(ctx: &CommandContext, pet_id: &str, photo: &Path) -> Result<()> {
    let key = ctx.authenticate().await?;

    let response = ctx.client.add_photo(&key, pet_id, photo).await?;
    finish(ctx, &response)
}

pub async fn update(ctx: &CommandContext, pet_id: &str, form: PetForm) -> Result<()> {
    let key = ctx.authenticate().await?;

    let response = ctx.client.update_pet_info(&key, pet_id, &form).await?;
    finish(ctx, &response)
}

pub async fn delete(ctx: &CommandContext, pet_id: &str) -> Result<()> {
    let key = ctx.authenticate().await?;

    let response = ctx.client.delete_pet(&key, pet_id).await?;
    finish(ctx, &response)
}
