use crate::config::ApiConfig;
use crate::cursor::{PageCursor, PageDirection};
use crate::error::fetch::FetchError;

use common::{ErrorLocation, HttpStatusCode};
use models::api::{ApiCharacterPage, ApiEpisode};
use models::{Character, Episode};

use std::panic::Location;
use std::time::Duration;

use log::{debug, trace, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// One decoded page of the character listing together with its cursor.
///
/// Returned whole so the caller can commit list and cursor in one step.
#[derive(Debug, Clone)]
pub struct CharacterPage {
    pub cursor: PageCursor,
    pub characters: Vec<Character>,
}

#[derive(Clone)]
pub struct CatalogClient {
    base_url: Url,
    client: Client,
}

impl CatalogClient {
    /// Create a client for the listing at `base_url_str`.
    ///
    /// Without a `timeout` the transport's defaults apply.
    pub fn new(base_url_str: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url_str)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Cursor pointing at the first page of the listing.
    pub fn initial_cursor(&self) -> PageCursor {
        PageCursor::new(self.base_url.clone())
    }

    /// Fetch the page `direction` points to from `cursor`.
    ///
    /// `cursor` is only read; the new cursor comes back inside the page.
    pub async fn fetch_character_page(
        &self,
        cursor: &PageCursor,
        direction: PageDirection,
    ) -> Result<CharacterPage, FetchError> {
        let url = cursor.target(direction).clone();
        debug!("Fetching character page {url} ({direction:?})");

        let page: ApiCharacterPage = self.get_json(url).await?;
        let cursor = PageCursor::from_page_info(&self.base_url, &page.info)?;

        let characters = page
            .results
            .into_iter()
            // closure, so `#[track_caller]` records this line
            .map(|raw| Character::from_api(raw))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Fetched {} characters (next: {}, previous: {})",
            characters.len(),
            cursor.has_next(),
            cursor.has_previous()
        );

        Ok(CharacterPage { cursor, characters })
    }

    /// Fetch a single episode; relative URLs resolve against the base URL.
    pub async fn fetch_episode(&self, url: &str) -> Result<Episode, FetchError> {
        let url = self.base_url.join(url)?;
        trace!("Fetching episode {url}");

        let raw: ApiEpisode = self.get_json(url).await?;

        Ok(Episode::from_api(raw))
    }

    /// Fetch every URL one after another, preserving input order.
    ///
    /// All-or-nothing: the first failure aborts and drops what was fetched.
    pub async fn fetch_episodes_sequential(
        &self,
        urls: &[String],
    ) -> Result<Vec<Episode>, FetchError> {
        let mut episodes = Vec::with_capacity(urls.len());

        for (index, url) in urls.iter().enumerate() {
            let episode = self.fetch_episode(url).await.inspect_err(|e| {
                warn!(
                    "Episode {}/{} failed ({url}), discarding {} fetched: {e}",
                    index + 1,
                    urls.len(),
                    episodes.len()
                );
            })?;
            episodes.push(episode);
        }

        Ok(episodes)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_success() {
            let class = if status.is_client_error() {
                "client error"
            } else if status.is_server_error() {
                "server error"
            } else {
                "unexpected status"
            };
            warn!("Catalog responded {status} ({class})");
            return Err(FetchError::Server {
                status,
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let decoded: T = serde_json::from_str(&body)?;

        Ok(decoded)
    }
}
