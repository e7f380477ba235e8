//! Pet models

use std::fmt;
use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Pet record as returned by the service.
///
/// The service owns the lifecycle; this side only observes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Server-assigned identifier
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub animal_type: String,

    /// Sent as a string on create and as a number on some updates
    #[serde(default, deserialize_with = "age_as_string")]
    pub age: String,

    /// `data:` URL with base64 image bytes, or empty
    #[serde(default)]
    pub pet_photo: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        !self.pet_photo.is_empty()
    }

    /// Decode the image bytes carried in `pet_photo`.
    ///
    /// Returns `Ok(None)` when the pet has no photo.
    pub fn photo_bytes(&self) -> Result<Option<Vec<u8>>, ApiError> {
        if !self.has_photo() {
            return Ok(None);
        }

        let payload = match self.pet_photo.split_once("base64,") {
            Some((_, data)) => data,
            None => self.pet_photo.as_str(),
        };

        general_purpose::STANDARD
            .decode(payload.trim())
            .map(Some)
            .map_err(|e| ApiError::InvalidResponse(format!("Bad pet_photo encoding: {}", e)))
    }
}

fn age_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Age {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Age>::deserialize(deserializer)? {
        Some(Age::Text(s)) => s,
        Some(Age::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Which pets a listing returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PetFilter {
    /// Every pet on the service
    #[default]
    All,
    /// Only pets owned by the auth key's user
    MyPets,
}

impl PetFilter {
    /// Value of the `filter` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetFilter::All => write!(f, "all"),
            PetFilter::MyPets => write!(f, "my_pets"),
        }
    }
}

impl FromStr for PetFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(PetFilter::All),
            "my_pets" | "my-pets" | "mine" => Ok(PetFilter::MyPets),
            other => Err(format!(
                "unknown pet filter '{}' (expected 'all' or 'my_pets')",
                other
            )),
        }
    }
}

/// Fields submitted when creating or updating a pet.
///
/// A `None` field is left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PetForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

impl PetForm {
    pub fn new(name: impl Into<String>, animal_type: impl Into<String>, age: impl ToString) -> Self {
        Self {
            name: Some(name.into()),
            animal_type: Some(animal_type.into()),
            age: Some(age.to_string()),
        }
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn without_animal_type(mut self) -> Self {
        self.animal_type = None;
        self
    }

    pub fn without_age(mut self) -> Self {
        self.age = None;
        self
    }

    /// Present fields in wire order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("animal_type", self.animal_type.as_deref()),
            ("age", self.age.as_deref()),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}
