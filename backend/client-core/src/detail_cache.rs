//! Episode memoization.
//!
//! There is no separate store: the resolved list lives on the
//! [`Character`] itself as [`Episodes::Resolved`].

use crate::catalog_client::CatalogClient;
use crate::error::fetch::FetchError;

use models::{Character, Episode, Episodes};

use log::{debug, info};

/// Return the character's episodes, fetching them only the first time.
///
/// On failure the field stays [`Episodes::Unresolved`] so a later
/// selection retries.
pub async fn resolve_episodes<'a>(
    client: &CatalogClient,
    character: &'a mut Character,
) -> Result<&'a [Episode], FetchError> {
    if character.episodes.is_resolved() {
        debug!("Episodes for character {} already resolved", character.id);
    } else {
        let episodes = client
            .fetch_episodes_sequential(&character.episode_urls)
            .await?;

        info!(
            "Resolved {} episodes for character {} ({})",
            episodes.len(),
            character.id,
            character.name
        );
        character.episodes = Episodes::Resolved(episodes);
    }

    Ok(character.episodes.resolved().unwrap_or_default())
}
