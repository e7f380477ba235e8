//! PetFriends API client implementation

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, RequestBuilder};

use super::{ApiResponse, AuthApi, AuthKey, PetApi, PetFilter, PetForm, ResponseBody};
use crate::error::{ApiError, Result};

/// PetFriends service base URL
pub const DEFAULT_API_HOST: &str = "https://petfriends.skillfactory.ru";

/// Header carrying the auth key on every pet request
const AUTH_HEADER: &str = "auth_key";

/// Multipart field name for photo uploads
const PHOTO_FIELD: &str = "pet_photo";

/// PetFriends API client
///
/// A thin pass-through to `reqwest`: no retries, no caching.
pub struct PetFriendsClient {
    http: HttpClient,
    base_url: String,
}

impl PetFriendsClient {
    /// Create a client against the public PetFriends service
    #[cfg(test)]
    pub fn new() -> Result<Self> {
        Self::with_host(None)
    }

    /// Create a client with an optional custom API host (for testing)
    pub fn with_host(api_host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let host = api_host.unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        Ok(Self {
            http,
            base_url: host.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode whatever comes back
    async fn send(&self, label: &str, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        debug!("{} -> {} ({} bytes)", label, status, text.len());

        Ok(ApiResponse::new(status.as_u16(), ResponseBody::from_text(text)))
    }

    async fn create_with_photo(&self, key: &str, form: &PetForm, photo: &Path) -> Result<ApiResponse> {
        let mut multipart = Form::new();
        for (name, value) in form.fields() {
            multipart = multipart.text(name, value.to_string());
        }
        multipart = multipart.part(PHOTO_FIELD, photo_part(photo).await?);

        let request = self
            .http
            .post(self.url("/api/pets"))
            .header(AUTH_HEADER, key)
            .multipart(multipart);

        self.send("POST /api/pets", request).await
    }
}

/// Read a fixture image into a multipart file part
async fn photo_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await.map_err(|e| ApiError::Photo {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| PHOTO_FIELD.to_string());

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for_path(path))
        .map_err(ApiError::from)?;

    Ok(part)
}

/// MIME type from the file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl AuthApi for PetFriendsClient {
    async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse> {
        let request = self
            .http
            .get(self.url("/api/key"))
            .header("email", email)
            .header("password", password);

        self.send("GET /api/key", request).await
    }
}

#[async_trait]
impl PetApi for PetFriendsClient {
    async fn get_list_of_pets(&self, auth_key: &AuthKey, filter: PetFilter) -> Result<ApiResponse> {
        let request = self
            .http
            .get(self.url("/api/pets"))
            .header(AUTH_HEADER, auth_key.as_str())
            .query(&[("filter", filter.as_query())]);

        self.send("GET /api/pets", request).await
    }

    async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        form: &PetForm,
        photo: &Path,
    ) -> Result<ApiResponse> {
        self.create_with_photo(auth_key.as_str(), form, photo).await
    }

    async fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        form: &PetForm,
    ) -> Result<ApiResponse> {
        let request = self
            .http
            .post(self.url("/api/create_pet_simple"))
            .header(AUTH_HEADER, auth_key.as_str())
            .form(&form.fields());

        self.send("POST /api/create_pet_simple", request).await
    }

    async fn add_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo: &Path,
    ) -> Result<ApiResponse> {
        let multipart = Form::new().part(PHOTO_FIELD, photo_part(photo).await?);

        let path = format!("/api/pets/set_photo/{}", pet_id);
        let request = self
            .http
            .post(self.url(&path))
            .header(AUTH_HEADER, auth_key.as_str())
            .multipart(multipart);

        self.send(&format!("POST {}", path), request).await
    }

    async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        form: &PetForm,
    ) -> Result<ApiResponse> {
        let path = format!("/api/pets/{}", pet_id);
        let request = self
            .http
            .put(self.url(&path))
            .header(AUTH_HEADER, auth_key.as_str())
            .form(&form.fields());

        self.send(&format!("PUT {}", path), request).await
    }

    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<ApiResponse> {
        let path = format!("/api/pets/{}", pet_id);
        let request = self
            .http
            .delete(self.url(&path))
            .header(AUTH_HEADER, auth_key.as_str());

        self.send(&format!("DELETE {}", path), request).await
    }

    async fn add_new_pet_with_incorrect_auth_key(
        &self,
        raw_key: &str,
        form: &PetForm,
        photo: &Path,
    ) -> Result<ApiResponse> {
        self.create_with_photo(raw_key, form, photo).await
    }
}
