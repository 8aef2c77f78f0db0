//! Catalog entities.
//!
//! Raw response shapes from the remote character API live in [`api`]; the
//! typed records the rest of the workspace works with are [`Character`] and
//! [`Episode`]. Each typed record has a `from_api` factory.

pub mod api;
pub mod character;
pub mod episode;
pub mod error;

#[cfg(test)]
mod tests;

pub use character::builder::CharacterBuilder;
pub use character::{Character, CharacterId, Episodes, Status};
pub use episode::Episode;
pub use error::model_error::ModelError;

pub use common::ErrorLocation;
