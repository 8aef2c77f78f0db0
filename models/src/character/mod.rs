pub mod builder;

use crate::api::ApiCharacter;
use crate::episode::Episode;
use crate::error::model_error::ModelError;

use builder::CharacterBuilder;

use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::Serialize;

pub type CharacterId = u32;

/// Life status reported by the catalog.
///
/// The API documents `Alive`, `Dead` and `unknown`; any other value is
/// folded into [`Status::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Status {
    Alive,
    Dead,
    #[default]
    Unknown,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        match raw {
            "Alive" => Status::Alive,
            "Dead" => Status::Dead,
            _ => Status::Unknown,
        }
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.label())
    }
}

/// Lazily fetched episode list of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub enum Episodes {
    #[default]
    Unresolved,
    Resolved(Vec<Episode>),
}

impl Episodes {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Episodes::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&[Episode]> {
        match self {
            Episodes::Resolved(episodes) => Some(episodes),
            Episodes::Unresolved => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
    pub species: String,
    pub status: Status,
    /// Sub-type (the API's `type`); empty for most characters.
    pub kind: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub episode_urls: Vec<String>,
    pub episodes: Episodes,
}

impl Character {
    /// Map a raw API record into a validated character with unresolved episodes.
    #[track_caller]
    pub fn from_api(raw: ApiCharacter) -> Result<Self, ModelError> {
        let status = Status::from(raw.status.as_str());

        CharacterBuilder::default()
            .with_id(raw.id)
            .with_name(raw.name)
            .with_image(raw.image)
            .with_species(raw.species)
            .with_status(status)
            .with_kind(raw.kind)
            .with_gender(raw.gender)
            .with_origin(raw.origin.name)
            .with_location(raw.location.name)
            .with_episode_urls(raw.episode)
            .build()
    }
}
