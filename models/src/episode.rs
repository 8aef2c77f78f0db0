use crate::api::ApiEpisode;

use serde::Serialize;

/// A single episode a character appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    /// Season/episode code such as `S01E01`.
    pub code: String,
}

impl Episode {
    pub fn from_api(raw: ApiEpisode) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            air_date: raw.air_date,
            code: raw.episode,
        }
    }
}
