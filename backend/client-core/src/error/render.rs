use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("Template Error: {message} {location}")]
    Template {
        message: String,
        location: ErrorLocation,
    },
}

impl From<askama::Error> for RenderError {
    #[track_caller]
    fn from(error: askama::Error) -> Self {
        RenderError::Template {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
