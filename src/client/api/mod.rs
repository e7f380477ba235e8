//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Auth key issuance
//! - [`PetApi`] - Pet listing, creation, update and deletion
//!
//! The [`PetFriendsApi`](super::PetFriendsApi) super-trait combines both.

mod auth;
mod pets;

pub use auth::AuthApi;
pub use pets::PetApi;
