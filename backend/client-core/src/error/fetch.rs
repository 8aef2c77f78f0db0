use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Any failure while talking to the catalog API.
///
/// The variants exist for diagnostics only; the controller treats every
/// one of them the same way (log, show the error view, commit nothing).
#[derive(Debug, ThisError)]
pub enum FetchError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Model Error: {message} {location}")]
    Model {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for FetchError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        FetchError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        FetchError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        FetchError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for FetchError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        FetchError::Model {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
