//! Pet display model

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::Pet;

/// Pet display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PetDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub animal_type: String,

    #[tabled(rename = "AGE")]
    pub age: String,

    /// Whether a photo is attached
    #[tabled(rename = "PHOTO")]
    pub photo: String,
}

impl From<&Pet> for PetDisplay {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id.clone(),
            name: truncate_string(&pet.name, 30),
            animal_type: truncate_string(&pet.animal_type, 20),
            age: pet.age.clone(),
            photo: if pet.has_photo() { "yes" } else { "-" }.to_string(),
        }
    }
}

impl PetDisplay {
    /// FIELD/VALUE pairs for a single-record view
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("animal_type", self.animal_type.clone()),
            ("age", self.age.clone()),
            ("photo", self.photo.clone()),
        ]
    }
}
