//! Pet lifecycle scenarios

use super::checks::{authenticate, ensure, ensure_my_pet, expect_name, expect_status, my_pets};
use super::{ScenarioContext, images};
use crate::client::{PetFilter, PetForm};
use crate::error::Result;

pub async fn get_all_pets_with_valid_key(ctx: &ScenarioContext) -> Result<()> {
    let key = authenticate(ctx).await?;

    let response = ctx.api.get_list_of_pets(&key, PetFilter::All).await?;

    expect_status(&response, 200)?;
    let pets = response.pets()?;
    ensure(!pets.is_empty(), || "pet list is empty".to_string())
}

pub async fn add_new_pet_with_valid_data(ctx: &ScenarioContext) -> Result<()> {
    let key = authenticate(ctx).await?;
    let form = PetForm::new("Барсик", "кот", "3");

    let response = ctx
        .api
        .add_new_pet(&key, &form, &ctx.fixture(images::CAT))
        .await?;

    expect_status(&response, 200)?;
    expect_name(&response, "Барсик")
}

pub async fn delete_self_pet(ctx: &ScenarioContext) -> Result<()> {
    let key = authenticate(ctx).await?;
    let pets = ensure_my_pet(ctx, &key).await?;
    let pet_id = pets[0].id.clone();

    let response = ctx.api.delete_pet(&key, &pet_id).await?;
    expect_status(&response, 200)?;

    let remaining = my_pets(ctx, &key).await?;
    ensure(!remaining.iter().any(|p| p.id == pet_id), || {
        format!("pet {} still listed after delete", pet_id)
    })
}

pub async fn update_self_pet_info(ctx: &ScenarioContext) -> Result<()> {
    let key = authenticate(ctx).await?;
    let pets = ensure_my_pet(ctx, &key).await?;

    let response = ctx
        .api
        .update_pet_info(&key, &pets[0].id, &PetForm::new("Маркиз", "Котик", 5))
        .await?;

    expect_status(&response, 200)?;
    expect_name(&response, "Маркиз")
}

pub async fn add_new_pet_without_photo(ctx: &ScenarioContext) -> Result<()> {
    let key = authenticate(ctx).await?;

    let response = ctx
        .api
        .add_new_pet_without_photo(&key, &PetForm::new("Джон", "пес", "4"))
        .await?;

    expect_status(&response, 200)?;
    expect_name(&response, "Джон")
}

pub async fn add_photo(ctx: &ScenarioContext) -> Result<()> {
    let key = authenticate(ctx).await?;
    let pets = ensure_my_pet(ctx, &key).await?;

    let response = ctx
        .api
        .add_photo(&key, &pets[0].id, &ctx.fixture(images::DOG))
        .await?;

    expect_status(&response, 200)?;
    let photo = response.pet()?.photo_bytes()?;
    ensure(photo.is_some_and(|bytes| !bytes.is_empty()), || {
        "pet_photo is empty after upload".to_string()
    })
}
