use crate::error::model_error::ModelError;
use crate::{Character, CharacterId, Episodes, ErrorLocation, Status};

use std::panic::Location;

/// Builder for creating validated Character instances.
///
/// `id`, `name` and `image` must be set and `id` must be non-zero. Their
/// values are otherwise taken as given, empty strings included; everything
/// else defaults to an empty string (or [`Status::Unknown`]). Built
/// characters always start with [`Episodes::Unresolved`].
#[derive(Debug, Default)]
pub struct CharacterBuilder {
    id: Option<CharacterId>,
    name: Option<String>,
    image: Option<String>,
    species: String,
    status: Status,
    kind: String,
    gender: String,
    origin: String,
    location: String,
    episode_urls: Vec<String>,
}

impl CharacterBuilder {
    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_episode_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.episode_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Build the Character with validation.
    #[track_caller]
    pub fn build(self) -> Result<Character, ModelError> {
        let id = self.id.ok_or_else(|| ModelError::Validation {
            field: "id",
            message: String::from("Character id is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if id == 0 {
            return Err(ModelError::Validation {
                field: "id",
                message: String::from("Character id must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let name = self.name.ok_or_else(|| ModelError::Validation {
            field: "name",
            message: String::from("Character name is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let image = self.image.ok_or_else(|| ModelError::Validation {
            field: "image",
            message: String::from("Character image is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Character {
            id,
            name,
            image,
            species: self.species,
            status: self.status,
            kind: self.kind,
            gender: self.gender,
            origin: self.origin,
            location: self.location,
            episode_urls: self.episode_urls,
            episodes: Episodes::Unresolved,
        })
    }
}
