//! Mock PetFriends API client for testing
//!
//! An in-memory stand-in for the service. By default it reproduces the live
//! service's lax validation (missing fields, GIF photos and negative ages are
//! all accepted with 200); `with_strict_validation()` makes it answer 400
//! the way the API contract says it should.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use super::api::{AuthApi, PetApi};
use super::models::{ApiResponse, AuthKey, Credentials, Pet, PetFilter, PetForm};
use super::petfriends::mime_for_path;
use crate::error::{ApiError, Result};

const ISSUED_KEY: &str = "mock-auth-key";
const JPEG_DATA_URL: &str = "data:image/jpeg;base64,/9j/4AA=";
const MOCK_USER_ID: &str = "mock-user";

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockPetFriendsClient::new(Credentials::new("a@b.c", "pw"))
///     .with_public_pets(vec![pet("p1", "Rex")]);
///
/// let response = mock.get_api_key("a@b.c", "pw").await?;
/// assert_eq!(response.status, 200);
/// ```
pub struct MockPetFriendsClient {
    credentials: Credentials,
    strict: bool,
    /// Pets owned by other users (visible with the empty filter)
    public_pets: Arc<Mutex<Vec<Pet>>>,
    /// Pets owned by the authenticated user
    my_pets: Arc<Mutex<Vec<Pet>>>,
    next_id: Arc<Mutex<u32>>,
    /// Transport error to return from the next call, consumed on use
    error: Arc<Mutex<Option<ApiError>>>,
    call_log: Arc<Mutex<Vec<String>>>,
}

impl MockPetFriendsClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            strict: false,
            public_pets: Arc::new(Mutex::new(Vec::new())),
            my_pets: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            error: Arc::new(Mutex::new(None)),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer 400 for invalid input instead of accepting it
    pub fn with_strict_validation(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn with_public_pets(self, pets: Vec<Pet>) -> Self {
        *self.public_pets.try_lock().expect("fresh mock") = pets;
        self
    }

    pub fn with_my_pets(self, pets: Vec<Pet>) -> Self {
        *self.my_pets.try_lock().expect("fresh mock") = pets;
        self
    }

    /// Fail the next call with a transport error
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    pub async fn my_pets(&self) -> Vec<Pet> {
        self.my_pets.lock().await.clone()
    }

    /// Calls made so far, as `"METHOD path"` strings
    pub async fn calls(&self) -> Vec<String> {
        self.call_log.lock().await.clone()
    }

    async fn enter(&self, call: String) -> Result<()> {
        self.call_log.lock().await.push(call);
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn authorized(key: &str) -> bool {
        key == ISSUED_KEY
    }

    fn forbidden() -> ApiResponse {
        ApiResponse::text(403, "Please provide 'auth_key' Header")
    }

    fn invalid_form(&self, form: &PetForm) -> bool {
        let negative_age = form
            .age
            .as_deref()
            .and_then(|a| a.parse::<i64>().ok())
            .is_some_and(|a| a < 0);
        self.strict && (form.fields().len() < 3 || negative_age)
    }

    async fn create(&self, key: &str, form: &PetForm, photo: Option<&Path>) -> Result<ApiResponse> {
        if !Self::authorized(key) {
            return Ok(Self::forbidden());
        }

        let jpeg = photo.map(|p| mime_for_path(p) == "image/jpeg");
        if self.invalid_form(form) || (self.strict && jpeg == Some(false)) {
            return Ok(ApiResponse::text(400, "Bad Request"));
        }

        let id = {
            let mut next = self.next_id.lock().await;
            let id = format!("mock-pet-{}", *next);
            *next += 1;
            id
        };

        let pet = Pet {
            id,
            name: form.name.clone().unwrap_or_default(),
            animal_type: form.animal_type.clone().unwrap_or_default(),
            age: form.age.clone().unwrap_or_default(),
            // Unsupported formats are dropped silently, like the live service
            pet_photo: if jpeg == Some(true) {
                JPEG_DATA_URL.to_string()
            } else {
                String::new()
            },
            user_id: Some(MOCK_USER_ID.to_string()),
        };

        self.my_pets.lock().await.push(pet.clone());
        Ok(ApiResponse::json(200, serde_json::to_value(pet)?))
    }
}

#[async_trait]
impl AuthApi for MockPetFriendsClient {
    async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse> {
        self.enter("GET /api/key".to_string()).await?;

        if email == self.credentials.email && password == self.credentials.password {
            Ok(ApiResponse::json(200, json!({ "key": ISSUED_KEY })))
        } else {
            Ok(ApiResponse::text(403, "This user wasn't found in database"))
        }
    }
}

#[async_trait]
impl PetApi for MockPetFriendsClient {
    async fn get_list_of_pets(&self, auth_key: &AuthKey, filter: PetFilter) -> Result<ApiResponse> {
        self.enter(format!("GET /api/pets?filter={}", filter.as_query()))
            .await?;

        if !Self::authorized(auth_key.as_str()) {
            return Ok(Self::forbidden());
        }

        let mut pets = self.my_pets.lock().await.clone();
        if filter == PetFilter::All {
            pets.extend(self.public_pets.lock().await.iter().cloned());
        }

        Ok(ApiResponse::json(200, json!({ "pets": pets })))
    }

    async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        form: &PetForm,
        photo: &Path,
    ) -> Result<ApiResponse> {
        self.enter("POST /api/pets".to_string()).await?;
        self.create(auth_key.as_str(), form, Some(photo)).await
    }

    async fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        form: &PetForm,
    ) -> Result<ApiResponse> {
        self.enter("POST /api/create_pet_simple".to_string()).await?;
        self.create(auth_key.as_str(), form, None).await
    }

    async fn add_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo: &Path,
    ) -> Result<ApiResponse> {
        self.enter(format!("POST /api/pets/set_photo/{}", pet_id))
            .await?;

        if !Self::authorized(auth_key.as_str()) {
            return Ok(Self::forbidden());
        }

        let mut pets = self.my_pets.lock().await;
        match pets.iter_mut().find(|p| p.id == pet_id) {
            Some(pet) if mime_for_path(photo) == "image/jpeg" => {
                pet.pet_photo = JPEG_DATA_URL.to_string();
                Ok(ApiResponse::json(200, serde_json::to_value(&*pet)?))
            }
            Some(_) => Ok(ApiResponse::text(500, "Internal Server Error")),
            None => Ok(ApiResponse::text(400, "Pet not found")),
        }
    }

    async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        form: &PetForm,
    ) -> Result<ApiResponse> {
        self.enter(format!("PUT /api/pets/{}", pet_id)).await?;

        if !Self::authorized(auth_key.as_str()) {
            return Ok(Self::forbidden());
        }
        if self.invalid_form(form) {
            return Ok(ApiResponse::text(400, "Bad Request"));
        }

        let mut pets = self.my_pets.lock().await;
        let Some(pet) = pets.iter_mut().find(|p| p.id == pet_id) else {
            return Ok(ApiResponse::text(400, "Pet not found"));
        };

        if let Some(name) = &form.name {
            pet.name = name.clone();
        }
        if let Some(animal_type) = &form.animal_type {
            pet.animal_type = animal_type.clone();
        }
        if let Some(age) = &form.age {
            pet.age = age.clone();
        }

        Ok(ApiResponse::json(200, serde_json::to_value(&*pet)?))
    }

    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<ApiResponse> {
        self.enter(format!("DELETE /api/pets/{}", pet_id)).await?;

        if !Self::authorized(auth_key.as_str()) {
            return Ok(Self::forbidden());
        }

        self.my_pets.lock().await.retain(|p| p.id != pet_id);
        Ok(ApiResponse::text(200, ""))
    }

    async fn add_new_pet_with_incorrect_auth_key(
        &self,
        raw_key: &str,
        form: &PetForm,
        photo: &Path,
    ) -> Result<ApiResponse> {
        self.enter("POST /api/pets".to_string()).await?;
        self.create(raw_key, form, Some(photo)).await
    }
}

/// Build a pet record for mock fixtures
pub fn pet(id: &str, name: &str) -> Pet {
    Pet {
        id: id.to_string(),
        name: name.to_string(),
        animal_type: "cat".to_string(),
        age: "3".to_string(),
        pet_photo: String::new(),
        user_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock() -> MockPetFriendsClient {
        MockPetFriendsClient::new(Credentials::new("user@example.com", "pw"))
    }

    async fn login(mock: &MockPetFriendsClient) -> AuthKey {
        mock.get_api_key("user@example.com", "pw")
            .await
            .unwrap()
            .key()
            .unwrap()
    }

    #[tokio::test]
    async fn test_mock_issues_key_for_valid_credentials_only() {
        let mock = mock();

        assert_eq!(login(&mock).await.as_str(), ISSUED_KEY);

        let response = mock.get_api_key("wrong@wrong", "123").await.unwrap();
        assert_eq!(response.status, 403);
    }

    #[tokio::test]
    async fn test_mock_listing_respects_filter() {
        let mock = mock()
            .with_public_pets(vec![pet("p1", "Rex")])
            .with_my_pets(vec![pet("m1", "Barsik")]);
        let key = login(&mock).await;

        let all = mock.get_list_of_pets(&key, PetFilter::All).await.unwrap();
        assert_eq!(all.pets().unwrap().len(), 2);

        let mine = mock.get_list_of_pets(&key, PetFilter::MyPets).await.unwrap();
        let mine = mine.pets().unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "Barsik");
    }

    #[tokio::test]
    async fn test_mock_lax_validation_accepts_missing_name() {
        let mock = mock();
        let key = login(&mock).await;

        let form = PetForm::new("Barsik", "cat", "3").without_name();
        let response = mock
            .add_new_pet(&key, &form, Path::new("cat1.jpg"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.pet().unwrap().name, "");
    }

    #[tokio::test]
    async fn test_mock_strict_validation_rejects_gif() {
        let mock = mock().with_strict_validation();
        let key = login(&mock).await;

        let response = mock
            .add_new_pet(&key, &PetForm::new("Barsik", "cat", "3"), Path::new("cat2.gif"))
            .await
            .unwrap();

        assert_eq!(response.status, 400);
        assert!(mock.my_pets().await.is_empty());
    }

    #[tokio::test]
    async fn test_mock_rejects_unknown_key() {
        let mock = mock();

        let response = mock
            .get_list_of_pets(&AuthKey::raw("123"), PetFilter::All)
            .await
            .unwrap();

        assert_eq!(response.status, 403);
    }

    #[tokio::test]
    async fn test_mock_fail_next_consumed_once() {
        let mock = mock();
        mock.fail_next(ApiError::Network("boom".to_string())).await;

        assert!(mock.get_api_key("user@example.com", "pw").await.is_err());
        assert!(mock.get_api_key("user@example.com", "pw").await.is_ok());
        assert_eq!(mock.calls().await.len(), 2);
    }
}
