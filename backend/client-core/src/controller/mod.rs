//! Application controller.
//!
//! [`CatalogController`] wires user intents ([`UiCommand`]) to fetches and
//! renders. State transitions:
//!
//! - start / navigate: Loading → List, or Error on failure
//! - select: Loading → Detail, or Error on failure
//! - back: Detail → List (no fetch)
//! - dismiss: Error → List if a page is loaded, else start over
//!
//! Fetch errors stop here: they are logged and turned into the error view,
//! and nothing fetched by the failed operation is committed.

pub mod handle;
pub mod state;
pub mod target;

pub use handle::ControllerHandle;
pub use state::{AppState, UiState};
pub use target::RenderTarget;

use crate::catalog_client::CatalogClient;
use crate::cursor::{PageCursor, PageDirection};
use crate::detail_cache::resolve_episodes;
use crate::error::render::RenderError;
use crate::view::{self, LOADING_CHARACTERS_MESSAGE, LOADING_DETAILS_MESSAGE};

use models::CharacterId;

use log::{debug, error, info, warn};

/// A user interaction forwarded from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Start,
    Navigate(PageDirection),
    Select(CharacterId),
    Back,
    Dismiss,
}

pub struct CatalogController<T: RenderTarget> {
    client: CatalogClient,
    target: T,
    state: AppState,
}

impl<T: RenderTarget> CatalogController<T> {
    pub fn new(client: CatalogClient, target: T) -> Self {
        let state = AppState::new(client.base_url().clone());
        Self {
            client,
            target,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub async fn handle(&mut self, command: UiCommand) -> Result<(), RenderError> {
        debug!("Handling {command:?} in {:?}", self.state.view());

        match command {
            UiCommand::Start => self.start().await,
            UiCommand::Navigate(direction) => self.navigate(direction).await,
            UiCommand::Select(id) => self.select(id).await,
            UiCommand::Back => self.back(),
            UiCommand::Dismiss => self.dismiss().await,
        }
    }

    /// Load the first page of the listing.
    pub async fn start(&mut self) -> Result<(), RenderError> {
        let cursor = self.client.initial_cursor();
        self.load_page(&cursor, PageDirection::Forward).await
    }

    /// Load the next or previous page relative to the committed cursor.
    pub async fn navigate(&mut self, direction: PageDirection) -> Result<(), RenderError> {
        let cursor = self.state.cursor().clone();
        self.load_page(&cursor, direction).await
    }

    /// Show one character, resolving its episodes on first view.
    pub async fn select(&mut self, id: CharacterId) -> Result<(), RenderError> {
        self.show_loading(LOADING_DETAILS_MESSAGE)?;

        let Some(index) = self.state.position_of(id) else {
            warn!("Character {id} is not on the current page");
            return self.show_error();
        };

        let character = &mut self.state.characters_mut()[index];
        let outcome = resolve_episodes(&self.client, character)
            .await
            .map(|episodes| episodes.len());

        match outcome {
            Ok(count) => {
                debug!("Character {id} has {count} episodes");
                let markup = view::render_detail(&self.state.characters()[index])?;
                self.state.set_view(UiState::Detail(id));
                self.target.mount(markup);
                Ok(())
            }
            Err(e) => {
                error!("Failed to resolve episodes for character {id}: {e}");
                self.show_error()
            }
        }
    }

    /// Re-render the retained list without fetching.
    pub fn back(&mut self) -> Result<(), RenderError> {
        self.show_list()
    }

    /// Leave the error view.
    pub async fn dismiss(&mut self) -> Result<(), RenderError> {
        if self.state.has_page() {
            self.show_list()
        } else {
            info!("No page loaded yet, restarting");
            self.start().await
        }
    }

    async fn load_page(
        &mut self,
        cursor: &PageCursor,
        direction: PageDirection,
    ) -> Result<(), RenderError> {
        self.show_loading(LOADING_CHARACTERS_MESSAGE)?;

        match self.client.fetch_character_page(cursor, direction).await {
            Ok(page) => {
                info!(
                    "Committing page of {} characters from {}",
                    page.characters.len(),
                    cursor.target(direction)
                );
                self.state.commit_page(page);
                self.show_list()
            }
            Err(e) => {
                error!("Failed to fetch character page: {e}");
                self.show_error()
            }
        }
    }

    fn show_loading(&mut self, message: &str) -> Result<(), RenderError> {
        let markup = view::render_loading(message)?;
        self.state.set_view(UiState::Loading);
        self.target.mount(markup);
        Ok(())
    }

    fn show_list(&mut self) -> Result<(), RenderError> {
        let markup = view::render_list(self.state.characters(), self.state.cursor())?;
        self.state.set_view(UiState::List);
        self.target.mount(markup);
        Ok(())
    }

    fn show_error(&mut self) -> Result<(), RenderError> {
        let markup = view::render_error()?;
        self.state.set_view(UiState::Error);
        self.target.mount(markup);
        Ok(())
    }
}
