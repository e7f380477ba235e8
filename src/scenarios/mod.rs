//! End-to-end scenarios against the PetFriends API
//!
//! Each scenario is a short script: get a key, perform one operation, check
//! the status and body. Scenarios only see the [`PetFriendsApi`] trait, so the
//! same scripts run against the live service and against the in-memory mock.
//!
//! Scenarios tagged with `known_defect` assert the documented contract even
//! though the live service is known to violate it. The runner reports them
//! as XFAIL instead of a plain failure.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use crate::client::{Credentials, PetFriendsApi};
use crate::error::{Error, Result};

mod auth;
mod checks;
mod defects;
mod pets;
pub mod runner;

pub use runner::{Outcome, ScenarioResult, SuiteReport, run_suite};

/// Fixture image file names under the fixtures directory
pub mod images {
    pub const CAT: &str = "cat.jpeg";
    pub const CAT_SMALL: &str = "cat1.jpg";
    pub const DOG: &str = "dog.jpeg";
    /// Not a format the service accepts
    pub const CAT_GIF: &str = "cat2.gif";
}

/// Everything a scenario needs to run
pub struct ScenarioContext {
    pub api: Arc<dyn PetFriendsApi>,
    pub credentials: Credentials,
    pub invalid_credentials: Credentials,
    pub fixtures_dir: PathBuf,
}

impl ScenarioContext {
    pub fn fixture(&self, name: &str) -> PathBuf {
        self.fixtures_dir.join(name)
    }
}

pub type ScenarioFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a>>;
pub type ScenarioFn = for<'a> fn(&'a ScenarioContext) -> ScenarioFuture<'a>;

/// A named, self-contained test case
#[derive(Clone, Copy)]
pub struct Scenario {
    pub id: &'static str,
    pub description: &'static str,
    /// Server bug this scenario is expected to trip over
    pub known_defect: Option<&'static str>,
    pub run: ScenarioFn,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("id", &self.id)
            .field("known_defect", &self.known_defect)
            .finish()
    }
}

/// All scenarios, in execution order
pub fn catalogue() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "get_api_key_for_valid_user",
            description: "Valid credentials yield 200 and a key",
            known_defect: None,
            run: |ctx| Box::pin(auth::get_api_key_for_valid_user(ctx)),
        },
        Scenario {
            id: "get_all_pets_with_valid_key",
            description: "Listing all pets returns a non-empty list",
            known_defect: None,
            run: |ctx| Box::pin(pets::get_all_pets_with_valid_key(ctx)),
        },
        Scenario {
            id: "add_new_pet_with_valid_data",
            description: "Pet with valid fields and photo is created",
            known_defect: None,
            run: |ctx| Box::pin(pets::add_new_pet_with_valid_data(ctx)),
        },
        Scenario {
            id: "delete_self_pet",
            description: "Deleted pet disappears from my pets",
            known_defect: None,
            run: |ctx| Box::pin(pets::delete_self_pet(ctx)),
        },
        Scenario {
            id: "update_self_pet_info",
            description: "Own pet can be renamed",
            known_defect: None,
            run: |ctx| Box::pin(pets::update_self_pet_info(ctx)),
        },
        Scenario {
            id: "add_new_pet_without_photo",
            description: "Pet without photo is created",
            known_defect: None,
            run: |ctx| Box::pin(pets::add_new_pet_without_photo(ctx)),
        },
        Scenario {
            id: "add_photo",
            description: "Photo can be attached to own pet",
            known_defect: None,
            run: |ctx| Box::pin(pets::add_photo(ctx)),
        },
        Scenario {
            id: "get_api_key_for_invalid_user",
            description: "Unknown credentials yield 403",
            known_defect: None,
            run: |ctx| Box::pin(auth::get_api_key_for_invalid_user(ctx)),
        },
        Scenario {
            id: "add_new_pet_with_invalid_photo_type",
            description: "GIF photo is rejected with 400",
            known_defect: Some("service drops the photo and answers 200"),
            run: |ctx| Box::pin(defects::add_new_pet_with_invalid_photo_type(ctx)),
        },
        Scenario {
            id: "add_new_pet_without_name",
            description: "Missing name is rejected with 400",
            known_defect: Some("service stores an empty name and answers 200"),
            run: |ctx| Box::pin(defects::add_new_pet_without_name(ctx)),
        },
        Scenario {
            id: "add_new_pet_without_animal_type",
            description: "Missing animal type is rejected with 400",
            known_defect: Some("service stores an empty animal type and answers 200"),
            run: |ctx| Box::pin(defects::add_new_pet_without_animal_type(ctx)),
        },
        Scenario {
            id: "add_new_pet_without_age",
            description: "Missing age is rejected with 400",
            known_defect: Some("service stores an empty age and answers 200"),
            run: |ctx| Box::pin(defects::add_new_pet_without_age(ctx)),
        },
        Scenario {
            id: "update_pet_with_negative_age",
            description: "Negative age is not accepted on update",
            known_defect: Some("service accepts negative ages with 200"),
            run: |ctx| Box::pin(defects::update_pet_with_negative_age(ctx)),
        },
        Scenario {
            id: "add_new_pet_with_invalid_auth_key",
            description: "Bogus auth key yields 403 on create",
            known_defect: None,
            run: |ctx| Box::pin(defects::add_new_pet_with_invalid_auth_key(ctx)),
        },
    ]
}

/// Pick scenarios by id, keeping catalogue order. No ids selects everything.
pub fn select(ids: &[String]) -> Result<Vec<Scenario>> {
    let all = catalogue();

    if let Some(unknown) = ids.iter().find(|id| !all.iter().any(|s| s.id == id.as_str())) {
        return Err(Error::Other(format!(
            "Unknown scenario '{}'. Run `petfriends suite list` to see available ids.",
            unknown
        )));
    }

    if ids.is_empty() {
        return Ok(all);
    }

    Ok(all
        .into_iter()
        .filter(|s| ids.iter().any(|id| id == s.id))
        .collect())
}
