//! Actor wrapper around [`CatalogController`].
//!
//! The controller is moved into a dedicated tokio task and driven by
//! [`UiCommand`]s arriving over an mpsc channel. Commands are processed one
//! at a time in arrival order, so two fetches never run at once and a
//! command sent while another is loading simply waits its turn.

use crate::controller::{CatalogController, RenderTarget, UiCommand};
use crate::error::controller::ControllerError;
use crate::error::render::RenderError;

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, error, info, warn};
use tokio::sync::{mpsc, oneshot};

const COMMAND_BUFFER: usize = 32;

struct Envelope {
    command: UiCommand,
    done: oneshot::Sender<Result<(), RenderError>>,
}

/// Cloneable handle to the controller actor.
///
/// All clones feed the same actor. The actor stops once every handle is
/// dropped.
#[derive(Clone)]
pub struct ControllerHandle {
    command_tx: mpsc::Sender<Envelope>,
}

impl ControllerHandle {
    /// Move `controller` into a new task and return a handle to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T: RenderTarget>(controller: CatalogController<T>) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);

        tokio::spawn(controller_actor(command_rx, controller));
        info!("Controller actor spawned");

        Self { command_tx }
    }

    /// Queue `command` and wait until the actor has finished rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Unavailable`] if the actor has stopped, or
    /// [`ControllerError::Render`] if a view could not be rendered.
    pub async fn send(&self, command: UiCommand) -> Result<(), ControllerError> {
        let (done, done_rx) = oneshot::channel();

        self.command_tx
            .send(Envelope { command, done })
            .await
            .map_err(|e| ControllerError::Unavailable {
                message: format!("Controller actor stopped: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let outcome = done_rx.await.map_err(|e| ControllerError::Unavailable {
            message: format!("Controller actor dropped {command:?}: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(outcome?)
    }
}

async fn controller_actor<T: RenderTarget>(
    mut command_rx: mpsc::Receiver<Envelope>,
    mut controller: CatalogController<T>,
) {
    info!("Controller actor started");

    while let Some(Envelope { command, done }) = command_rx.recv().await {
        let outcome = controller.handle(command).await;

        if let Err(ref e) = outcome {
            error!("Rendering failed while handling {command:?}: {e}");
        }

        if done.send(outcome).is_err() {
            debug!("Sender of {command:?} stopped waiting");
        }
    }

    warn!("Controller actor stopped - all handles dropped");
}
