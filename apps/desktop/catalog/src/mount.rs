//! Webview render target.
//!
//! Every rendered view is emitted to the window as a `catalog://mount`
//! event; the page script swaps it into the `#main` container.

use client_core::controller::RenderTarget;
use client_core::view::Markup;

use log::{error, trace};
use tauri::{AppHandle, Emitter};

/// Event carrying the markup that replaces the container content.
pub const MOUNT_EVENT: &str = "catalog://mount";

pub struct WebviewMount {
    app: AppHandle,
}

impl WebviewMount {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl RenderTarget for WebviewMount {
    fn mount(&self, markup: Markup) {
        trace!("Mounting {} bytes", markup.as_str().len());

        if let Err(e) = self.app.emit(MOUNT_EVENT, markup) {
            error!("Failed to emit {MOUNT_EVENT}: {e}");
        }
    }
}
