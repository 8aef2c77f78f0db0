use crate::error::CatalogAppError;

use client_core::controller::{ControllerHandle, UiCommand};
use client_core::cursor::PageDirection;

use common::ErrorLocation;
use models::CharacterId;

use std::panic::Location;

use log::{debug, error};
use tauri::{State, command as TauriCommand};

/// Load the first page of the catalog.
///
/// Called by the page once its mount listener is registered.
#[TauriCommand]
pub async fn start_catalog(handle: State<'_, ControllerHandle>) -> Result<(), CatalogAppError> {
    dispatch(&handle, UiCommand::Start).await
}

/// Move one page forward (`forward = true`) or backward.
#[TauriCommand]
pub async fn navigate_page(
    handle: State<'_, ControllerHandle>,
    forward: bool,
) -> Result<(), CatalogAppError> {
    dispatch(&handle, UiCommand::Navigate(PageDirection::from(forward))).await
}

#[TauriCommand]
pub async fn select_character(
    handle: State<'_, ControllerHandle>,
    id: CharacterId,
) -> Result<(), CatalogAppError> {
    dispatch(&handle, UiCommand::Select(id)).await
}

#[TauriCommand]
pub async fn back_to_list(handle: State<'_, ControllerHandle>) -> Result<(), CatalogAppError> {
    dispatch(&handle, UiCommand::Back).await
}

#[TauriCommand]
pub async fn dismiss_error(handle: State<'_, ControllerHandle>) -> Result<(), CatalogAppError> {
    dispatch(&handle, UiCommand::Dismiss).await
}

async fn dispatch(handle: &ControllerHandle, command: UiCommand) -> Result<(), CatalogAppError> {
    debug!("Dispatching {command:?}");

    handle.send(command).await.map_err(|e| {
        error!("{command:?} failed: {e}");
        CatalogAppError::Core {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })
}
