use crate::catalog_client::CharacterPage;
use crate::cursor::PageCursor;

use models::{Character, CharacterId};

use url::Url;

/// What the mount point currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Loading,
    List,
    Detail(CharacterId),
    Error,
}

/// Everything the controller mutates, owned by the controller.
///
/// List and cursor only change together through [`AppState::commit_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    cursor: PageCursor,
    characters: Vec<Character>,
    view: UiState,
    has_page: bool,
}

impl AppState {
    pub fn new(base_url: Url) -> Self {
        Self {
            cursor: PageCursor::new(base_url),
            characters: Vec::new(),
            view: UiState::Loading,
            has_page: false,
        }
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn view(&self) -> UiState {
        self.view
    }

    /// Whether at least one page has been committed.
    pub fn has_page(&self) -> bool {
        self.has_page
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub(crate) fn position_of(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    pub(crate) fn characters_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    pub(crate) fn set_view(&mut self, view: UiState) {
        self.view = view;
    }

    pub(crate) fn commit_page(&mut self, page: CharacterPage) {
        self.cursor = page.cursor;
        self.characters = page.characters;
        self.has_page = true;
    }
}
