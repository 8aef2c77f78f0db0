use crate::error::render::RenderError;

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ControllerError {
    /// The actor task is gone, so the command was never processed.
    #[error("Controller Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}
