//! Pure state → markup rendering.
//!
//! Each view is a plain struct built from in-memory state and rendered by an
//! askama template, so the same state always yields the same [`Markup`].
//! Interactive elements carry `data-action` attributes that the webview
//! turns into controller commands.

pub mod detail;
pub mod list;
pub mod markup;
pub mod pill;
pub mod status;

pub use detail::{DetailView, EpisodeCard};
pub use list::{CharacterRow, ListView};
pub use markup::Markup;
pub use pill::{PillStyle, status_pill_style};
pub use status::{ErrorView, FETCH_ERROR_MESSAGE, LoadingView};

use crate::cursor::PageCursor;
use crate::error::render::RenderError;

use models::Character;

use askama::Template;

pub const LOADING_CHARACTERS_MESSAGE: &str = "Loading characters...";
pub const LOADING_DETAILS_MESSAGE: &str = "Loading character details...";

#[track_caller]
fn render_view<V: Template>(view: &V) -> Result<Markup, RenderError> {
    Ok(Markup::from(view.render()?))
}

pub fn render_list(characters: &[Character], cursor: &PageCursor) -> Result<Markup, RenderError> {
    render_view(&ListView::new(characters, cursor))
}

pub fn render_detail(character: &Character) -> Result<Markup, RenderError> {
    render_view(&DetailView::from(character))
}

pub fn render_loading(message: &str) -> Result<Markup, RenderError> {
    render_view(&LoadingView {
        message: message.to_string(),
    })
}

pub fn render_error() -> Result<Markup, RenderError> {
    render_view(&ErrorView::default())
}
