//! PetFriends API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod petfriends;

pub use api::{AuthApi, PetApi};
#[cfg(test)]
pub use mock::MockPetFriendsClient;
pub use models::{ApiResponse, AuthKey, Credentials, Pet, PetFilter, PetForm, ResponseBody};
pub use petfriends::{DEFAULT_API_HOST, PetFriendsClient};

/// Combined PetFriends API surface
pub trait PetFriendsApi: AuthApi + PetApi {}

impl<T: AuthApi + PetApi> PetFriendsApi for T {}
