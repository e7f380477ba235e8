//! Negative-path scenarios
//!
//! Most of these document server defects: the live service accepts the bad
//! input with 200. They assert the contract anyway.

use super::checks::{authenticate, ensure_my_pet, expect_status, expect_status_not};
use super::{ScenarioContext, images};
use crate::client::PetForm;
use crate::error::Result;

/// Raw value sent as `auth_key` when checking key validation
const BOGUS_AUTH_KEY: &str = "123";

fn barsik() -> PetForm {
    PetForm::new("Барсик", "кот", "3")
}

async fn expect_rejected_create(ctx: &ScenarioContext, form: PetForm, photo: &str) -> Result<()> {
    let key = authenticate(ctx).await?;

    let response = ctx.api.add_new_pet(&key, &form, &ctx.fixture(photo)).await?;

    expect_status(&response, 400)
}

pub async fn add_new_pet_with_invalid_photo_type(ctx: &ScenarioContext) -> Result<()> {
    expect_rejected_create(ctx, barsik(), images::CAT_GIF).await
}

pub async fn add_new_pet_without_name(ctx: &ScenarioContext) -> Result<()> {
    expect_rejected_create(ctx, barsik().without_name(), images::CAT_SMALL).await
}

pub async fn add_new_pet_without_animal_type(ctx: &ScenarioContext) -> Result<()> {
    expect_rejected_create(ctx, barsik().without_animal_type(), images::CAT_SMALL).await
}

pub async fn add_new_pet_without_age(ctx: &ScenarioContext) -> Result<()> {
    expect_rejected_create(ctx, barsik().without_age(), images::CAT_SMALL).await
}

pub async fn update_pet_with_negative_age(ctx: &ScenarioContext) -> Result<()> {
    let key = authenticate(ctx).await?;
    let pets = ensure_my_pet(ctx, &key).await?;

    let response = ctx
        .api
        .update_pet_info(&key, &pets[0].id, &PetForm::new("Маркиз", "Котик", -5))
        .await?;

    expect_status_not(&response, 200)
}

pub async fn add_new_pet_with_invalid_auth_key(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx
        .api
        .add_new_pet_with_incorrect_auth_key(BOGUS_AUTH_KEY, &barsik(), &ctx.fixture(images::CAT))
        .await?;

    expect_status(&response, 403)
}
