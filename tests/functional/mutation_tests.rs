//! Mutation functional tests for PetFriends
//!
//! These create, update and delete pets owned by the test account. Pets made
//! directly here use the `functest-*` prefix and are removed on drop.

use predicates::prelude::*;

use super::{FunctionalTestContext, TestPet};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_add_new_pet_with_valid_data() {
    FunctionalTestContext::for_mutation().run_scenario("add_new_pet_with_valid_data");
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_add_new_pet_without_photo() {
    FunctionalTestContext::for_mutation().run_scenario("add_new_pet_without_photo");
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_update_self_pet_info() {
    FunctionalTestContext::for_mutation().run_scenario("update_self_pet_info");
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_add_photo() {
    FunctionalTestContext::for_mutation().run_scenario("add_photo");
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_delete_self_pet() {
    FunctionalTestContext::for_mutation().run_scenario("delete_self_pet");
}

// ============================================================================
// Pet Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_created_pet_is_listed_as_mine() {
    let pet = TestPet::create();
    let ctx = FunctionalTestContext::new();

    ctx.run(&["pet", "list", "--filter", "my_pets", "--format", "json"])
        .success()
        .stdout(predicate::str::contains(&pet.id));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_pet_photo_upload() {
    let pet = TestPet::create();
    let ctx = FunctionalTestContext::new();
    let photo = ctx.fixtures_dir.join("dog.jpeg").to_string_lossy().to_string();

    ctx.run(&[
        "pet",
        "photo",
        &pet.id,
        &photo,
        "--format",
        "json",
    ])
    .success()
    .stdout(predicate::str::contains("data:image"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_pet_update_renames() {
    let pet = TestPet::create();
    let ctx = FunctionalTestContext::new();
    let new_name = format!("{}-renamed", pet.name);

    ctx.run(&[
        "pet", "update", &pet.id, "--name", &new_name, "--type", "пес", "--age", "4",
    ])
    .success()
    .stdout(predicate::str::contains(&new_name));
}
