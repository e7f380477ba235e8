//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::ApiResponse;
use crate::error::Result;

/// Authentication operations for the PetFriends API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Request an auth key for the given credentials.
    ///
    /// On success the body carries a `key` field. Bad credentials come back
    /// as a 403 response, not an error.
    async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse>;
}
