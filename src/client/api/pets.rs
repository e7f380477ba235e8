//! Pet API trait
//!
//! Every method returns the raw status and decoded body. Only transport
//! failures and unreadable photo files surface as `Err`.

use std::path::Path;

use async_trait::async_trait;

use crate::client::models::{ApiResponse, AuthKey, PetFilter, PetForm};
use crate::error::Result;

/// Pet operations for the PetFriends API
#[async_trait]
pub trait PetApi: Send + Sync {
    /// List pets. The body carries a `pets` array.
    async fn get_list_of_pets(&self, auth_key: &AuthKey, filter: PetFilter) -> Result<ApiResponse>;

    /// Create a pet with a photo (multipart upload). Echoes the created record.
    async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        form: &PetForm,
        photo: &Path,
    ) -> Result<ApiResponse>;

    /// Create a pet without a photo. Echoes the created record.
    async fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        form: &PetForm,
    ) -> Result<ApiResponse>;

    /// Attach a photo to an existing pet.
    async fn add_photo(&self, auth_key: &AuthKey, pet_id: &str, photo: &Path)
    -> Result<ApiResponse>;

    /// Update name, type and age of an existing pet. Echoes the updated record.
    async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        form: &PetForm,
    ) -> Result<ApiResponse>;

    /// Delete a pet. The body is not meaningful.
    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<ApiResponse>;

    /// Same request as [`add_new_pet`](Self::add_new_pet), but the `auth_key`
    /// header carries `raw_key` verbatim. For negative-path checks.
    async fn add_new_pet_with_incorrect_auth_key(
        &self,
        raw_key: &str,
        form: &PetForm,
        photo: &Path,
    ) -> Result<ApiResponse>;
}
