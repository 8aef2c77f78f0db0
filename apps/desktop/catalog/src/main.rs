// Prevents additional console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use catalog::commands;
use catalog::error::CatalogAppError;
use catalog::logger::initialize as LoggerInitialize;
use catalog::mount::WebviewMount;

use client_core::catalog_client::CatalogClient;
use client_core::config::CatalogConfig;
use client_core::controller::{CatalogController, ControllerHandle};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;

use log::{info, warn};
use tauri::Manager;

fn main() {
    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            commands::catalog::start_catalog,
            commands::catalog::navigate_page,
            commands::catalog::select_character,
            commands::catalog::back_to_list,
            commands::catalog::dismiss_error,
        ])
        .setup(|app| {
            let log_dir = app
                .path()
                .app_log_dir()
                .map_err(|e| CatalogAppError::Catalog {
                    message: format!("Failed to get log directory: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            create_dir_all(&log_dir).map_err(|e| CatalogAppError::Catalog {
                message: format!("Failed to create log directory: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

            // Logger first so config loading is already logged
            LoggerInitialize(&log_dir)?;

            info!("Character catalog starting");
            info!("Log directory: {}", log_dir.display());

            let config = match app.path().app_config_dir() {
                Ok(config_dir) => CatalogConfig::load_or_init(&config_dir),
                Err(e) => {
                    warn!("No config directory ({e}), using defaults");
                    CatalogConfig::default()
                }
            };

            let client =
                CatalogClient::from_config(&config.api).map_err(|e| CatalogAppError::Catalog {
                    message: format!("Failed to create catalog client: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            info!("Catalog base URL: {}", client.base_url());

            let controller =
                CatalogController::new(client, WebviewMount::new(app.handle().clone()));

            // The actor needs the async runtime Tauri owns
            let handle =
                tauri::async_runtime::block_on(async { ControllerHandle::spawn(controller) });
            app.manage(handle);

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
