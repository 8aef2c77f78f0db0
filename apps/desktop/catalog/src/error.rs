use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors returned by the desktop shell and its Tauri commands.
///
/// Serialized for IPC so the webview receives the variant, message and
/// source location instead of an opaque string.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum CatalogAppError {
    /// Startup failure in the shell itself (log directory, logger, client setup)
    #[error("Catalog Error: {message} {location}")]
    Catalog {
        message: String,
        location: ErrorLocation,
    },

    /// The controller actor could not process a command
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}
