//! PetFriends API data models
//!
//! Types exchanged with the PetFriends service, organized by resource.

mod auth;
mod pet;
mod response;

pub use auth::{AuthKey, Credentials};
pub use pet::{Pet, PetFilter, PetForm};
pub use response::{ApiResponse, ResponseBody};
