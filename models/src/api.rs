//! Wire shapes returned by the character catalog API.
//!
//! These mirror the JSON exactly (including the API's field names) and are
//! only ever converted into [`crate::Character`] / [`crate::Episode`] through
//! their `from_api` factories. Fields the API sends that the browser never
//! reads (`count`, `pages`, `url`, `created`, ...) are ignored by serde.

use serde::{Deserialize, Serialize};

/// One page of `GET /character`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCharacterPage {
    pub info: ApiPageInfo,
    pub results: Vec<ApiCharacter>,
}

/// Pagination metadata. `null` cursors mean there is no page in that direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiPageInfo {
    pub next: Option<String>,
    pub prev: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCharacter {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub species: String,
    pub status: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    pub origin: ApiPlaceRef,
    pub location: ApiPlaceRef,
    pub episode: Vec<String>,
}

/// Embedded `{ name, url }` reference; only the name is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiPlaceRef {
    pub name: String,
}

/// `GET /episode/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    pub episode: String,
}
