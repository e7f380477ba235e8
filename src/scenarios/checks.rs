//! Assertion helpers and shared setup steps

use crate::client::{ApiResponse, AuthKey, Pet, PetFilter, PetForm};
use crate::error::{Error, Result};

use super::{ScenarioContext, images};

/// Pet created when a scenario needs one of our own and none exist
const FIXTURE_PET: (&str, &str, &str) = ("Kiska", "cat", "3");

pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Assertion(message()))
    }
}

pub fn expect_status(response: &ApiResponse, expected: u16) -> Result<()> {
    ensure(response.status == expected, || {
        format!(
            "expected status {}, got {} (body: {})",
            expected,
            response.status,
            body_excerpt(response)
        )
    })
}

pub fn expect_status_not(response: &ApiResponse, unexpected: u16) -> Result<()> {
    ensure(response.status != unexpected, || {
        format!("expected any status but {}", unexpected)
    })
}

pub fn expect_name(response: &ApiResponse, expected: &str) -> Result<()> {
    let pet = response.pet()?;
    ensure(pet.name == expected, || {
        format!("expected echoed name '{}', got '{}'", expected, pet.name)
    })
}

/// Reclassify a failed check as a failed precondition
fn as_setup(err: Error) -> Error {
    match err {
        Error::Assertion(reason) => Error::Setup(reason),
        other => other,
    }
}

fn body_excerpt(response: &ApiResponse) -> String {
    let text = serde_json::to_string(&response.body).unwrap_or_default();
    if text.chars().count() > 120 {
        format!("{}...", text.chars().take(117).collect::<String>())
    } else {
        text
    }
}

/// Log in with the valid account. Anything but 200 is a setup failure.
pub async fn authenticate(ctx: &ScenarioContext) -> Result<AuthKey> {
    let response = ctx
        .api
        .get_api_key(&ctx.credentials.email, &ctx.credentials.password)
        .await?;
    expect_status(&response, 200).map_err(as_setup)?;
    Ok(response.key()?)
}

pub async fn my_pets(ctx: &ScenarioContext, key: &AuthKey) -> Result<Vec<Pet>> {
    let response = ctx.api.get_list_of_pets(key, PetFilter::MyPets).await?;
    expect_status(&response, 200)?;
    Ok(response.pets()?)
}

/// Own pets, creating the fixture pet first if there are none.
///
/// Failures here are setup failures, never the scenario's verdict.
pub async fn ensure_my_pet(ctx: &ScenarioContext, key: &AuthKey) -> Result<Vec<Pet>> {
    let pets = my_pets(ctx, key).await.map_err(as_setup)?;
    if !pets.is_empty() {
        return Ok(pets);
    }

    log::debug!("No own pets, creating fixture pet");
    let (name, animal_type, age) = FIXTURE_PET;
    let response = ctx
        .api
        .add_new_pet(
            key,
            &PetForm::new(name, animal_type, age),
            &ctx.fixture(images::CAT_SMALL),
        )
        .await?;
    expect_status(&response, 200).map_err(as_setup)?;

    let pets = my_pets(ctx, key).await.map_err(as_setup)?;
    ensure(!pets.is_empty(), || {
        "fixture pet was created but my pets is still empty".to_string()
    })
    .map_err(as_setup)?;
    Ok(pets)
}
