//! Response envelope shared by every client method

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{AuthKey, Pet};
use crate::error::ApiError;

/// Decoded response body.
///
/// The service answers most calls with JSON but some errors with HTML or
/// plain text, so anything that fails to parse is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

/// Status code plus decoded body.
///
/// Returned for every HTTP status; interpreting failures is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    #[cfg(test)]
    pub fn json(status: u16, value: Value) -> Self {
        Self::new(status, ResponseBody::Json(value))
    }

    #[cfg(test)]
    pub fn text(status: u16, text: impl Into<String>) -> Self {
        Self::new(status, ResponseBody::Text(text.into()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Top-level field of a JSON object body
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_json().and_then(|v| v.get(name))
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Decode the whole body as `T`
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let value = self.body.as_json().ok_or_else(|| {
            ApiError::InvalidResponse(format!("Expected JSON body (status {})", self.status))
        })?;
        serde_json::from_value(value.clone()).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }

    pub fn key(&self) -> Result<AuthKey, ApiError> {
        self.decode()
    }

    pub fn pet(&self) -> Result<Pet, ApiError> {
        self.decode()
    }

    /// The `pets` list of a listing response
    pub fn pets(&self) -> Result<Vec<Pet>, ApiError> {
        let pets = self
            .field("pets")
            .ok_or_else(|| ApiError::InvalidResponse("Missing field 'pets'".to_string()))?;
        serde_json::from_value(pets.clone())
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse pets: {}", e)))
    }
}
