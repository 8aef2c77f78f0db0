use crate::helpers::{
    CHARACTER_PATH, base_url, character_json, client_for, episode_json, mount_first_page,
    mount_json, mount_status, page_json,
};

use client_core::catalog_client::CatalogClient;
use client_core::cursor::{PageCursor, PageDirection};
use client_core::error::FetchError;

use models::{Episodes, Status};

use std::time::Duration;

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the catalog client against a mock catalog server
// ============================================================================

// ----------------------------------------------------------------------------
// fetch_character_page()
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the first-page scenario decodes characters and cursors.
///
/// **WHY THIS MATTERS**: This is the app's very first request; cursor decoding drives which
/// pagination buttons are enabled.
///
/// **BUG THIS CATCHES**: Would catch a client that ignores `info`, fails on a null `prev`,
/// or does not run results through the Character factory.
#[tokio::test]
async fn given_fresh_cursor_when_fetching_page_then_hits_base_and_decodes_cursors() {
    // GIVEN: A catalog whose first page has a next link only
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    let client = client_for(&server);

    // WHEN: Fetching forward from a fresh cursor
    let page = client
        .fetch_character_page(&client.initial_cursor(), PageDirection::Forward)
        .await
        .unwrap();

    // THEN: One decoded character with unresolved episodes
    assert_eq!(page.characters.len(), 1);
    let rick = &page.characters[0];
    assert_eq!(rick.id, 1);
    assert_eq!(rick.name, "Rick");
    assert_eq!(rick.status, Status::Alive);
    assert_eq!(rick.episode_urls, vec!["/ep/1", "/ep/2"]);
    assert_eq!(rick.episodes, Episodes::Unresolved);

    // AND: Cursor resolved against the base, no previous page
    let expected_next = Url::parse(&format!("{}p2", base_url(&server))).unwrap();
    assert_eq!(page.cursor.next(), Some(&expected_next));
    assert!(!page.cursor.has_previous());
}

#[tokio::test]
async fn given_cursor_with_links_when_fetching_backward_then_requests_previous_link() {
    // GIVEN: A cursor sitting on page 2
    let server = MockServer::start().await;
    let base = Url::parse(&base_url(&server)).unwrap();
    let cursor = PageCursor::with_links(
        base.clone(),
        Some(base.join("p3").unwrap()),
        Some(base.join("p1").unwrap()),
    );
    mount_json(
        &server,
        "/api/character/p1",
        page_json(
            Some("p2"),
            None,
            vec![character_json(1, "Rick", "Alive", &[])],
        ),
        1,
    )
    .await;
    mount_json(&server, "/api/character/p3", page_json(None, None, vec![]), 0).await;
    let client = client_for(&server);

    // WHEN: Fetching backward
    let page = client
        .fetch_character_page(&cursor, PageDirection::Backward)
        .await
        .unwrap();

    // THEN: Page 1 was requested and page 3 never was
    assert_eq!(page.characters[0].name, "Rick");
    assert!(page.cursor.has_next());
}

/// **VALUE**: Verifies non-2xx responses are failures even if the body is JSON.
///
/// **BUG THIS CATCHES**: Would catch a client that decodes `{"error": ...}` bodies and
/// reports them as decode errors, or worse, as an empty page.
#[tokio::test]
async fn given_server_error_when_fetching_page_then_returns_server_error() {
    let server = MockServer::start().await;
    mount_status(&server, CHARACTER_PATH, 500, 1).await;
    let client = client_for(&server);

    let result = client
        .fetch_character_page(&client.initial_cursor(), PageDirection::Forward)
        .await;

    match result {
        Err(FetchError::Server { status, .. }) => assert_eq!(status.0, 500),
        other => panic!("Expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_malformed_body_when_fetching_page_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHARACTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"info\": 3}"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client
        .fetch_character_page(&client.initial_cursor(), PageDirection::Forward)
        .await;

    assert!(matches!(result, Err(FetchError::Json { .. })));
}

#[tokio::test]
async fn given_invalid_character_when_fetching_page_then_returns_model_error() {
    // GIVEN: A page containing a character with id 0
    let server = MockServer::start().await;
    mount_json(
        &server,
        CHARACTER_PATH,
        page_json(None, None, vec![character_json(0, "Nobody", "Alive", &[])]),
        1,
    )
    .await;
    let client = client_for(&server);

    // WHEN: Fetching the page
    let result = client
        .fetch_character_page(&client.initial_cursor(), PageDirection::Forward)
        .await;

    // THEN: The whole page is rejected
    let Err(FetchError::Model { message, .. }) = result else {
        panic!("Expected model error, got {result:?}");
    };

    // AND: The validation location points into the client, not into core closures
    assert!(message.contains("catalog_client"), "got: {message}");
    assert!(!message.contains("function.rs"), "got: {message}");
}

/// **VALUE**: Verifies that a record with empty presentational fields still decodes.
///
/// **BUG THIS CATCHES**: Would catch the factory rejecting an empty `image` or `name`,
/// which turns one sparse record into an error for the whole page.
#[tokio::test]
async fn given_character_with_empty_image_when_fetching_page_then_page_decodes() {
    // GIVEN: A page where one character has no image URL
    let server = MockServer::start().await;
    let mut faceless = character_json(2, "Morty", "Alive", &[]);
    faceless["image"] = serde_json::json!("");
    mount_json(
        &server,
        CHARACTER_PATH,
        page_json(
            None,
            None,
            vec![character_json(1, "Rick", "Alive", &[]), faceless],
        ),
        1,
    )
    .await;
    let client = client_for(&server);

    // WHEN: Fetching the page
    let page = client
        .fetch_character_page(&client.initial_cursor(), PageDirection::Forward)
        .await
        .unwrap();

    // THEN: Both characters are present, the empty image kept as sent
    assert_eq!(page.characters.len(), 2);
    assert!(page.characters[1].image.is_empty());
}

/// **VALUE**: Verifies transport failures surface as HTTP errors rather than panics.
#[tokio::test]
async fn given_unreachable_server_when_fetching_page_then_returns_http_error() {
    // GIVEN: A client pointed at a port nothing listens on
    let client = CatalogClient::new(
        "http://127.0.0.1:9/api/character/",
        Some(Duration::from_secs(2)),
    )
    .unwrap();

    // WHEN: Fetching
    let result = client
        .fetch_character_page(&client.initial_cursor(), PageDirection::Forward)
        .await;

    // THEN: Transport error
    assert!(matches!(result, Err(FetchError::Http { .. })));
}

#[test]
fn given_invalid_base_url_when_creating_client_then_returns_url_parse_error() {
    let result = CatalogClient::new("not a url", None);

    assert!(matches!(result, Err(FetchError::UrlParse { .. })));
}

// ----------------------------------------------------------------------------
// fetch_episode() / fetch_episodes_sequential()
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_episode_url_when_fetching_then_decodes_episode() {
    let server = MockServer::start().await;
    mount_json(&server, "/ep/1", episode_json(1, "Pilot", "S01E01"), 1).await;
    let client = client_for(&server);

    let episode = client.fetch_episode("/ep/1").await.unwrap();

    assert_eq!(episode.id, 1);
    assert_eq!(episode.name, "Pilot");
    assert_eq!(episode.code, "S01E01");
}

/// **VALUE**: Verifies output order equals input order regardless of per-request latency.
///
/// **WHY THIS MATTERS**: Episode cards are shown in the order the character lists them.
/// The slowest response comes first here, so any completion-order collection would fail.
#[tokio::test]
async fn given_varying_latency_when_fetching_sequentially_then_preserves_input_order() {
    // GIVEN: Three episodes, the first one slowest
    let server = MockServer::start().await;
    let delays = [(1, "S01E01", 200), (2, "S01E02", 0), (3, "S01E03", 50)];
    for (id, code, delay) in delays {
        Mock::given(method("GET"))
            .and(path(format!("/ep/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(episode_json(id, &format!("Episode {id}"), code))
                    .set_delay(Duration::from_millis(delay)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);
    let urls = vec![
        String::from("/ep/1"),
        String::from("/ep/2"),
        String::from("/ep/3"),
    ];

    // WHEN: Fetching sequentially
    let episodes = client.fetch_episodes_sequential(&urls).await.unwrap();

    // THEN: Same order as the URLs
    let codes: Vec<&str> = episodes.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["S01E01", "S01E02", "S01E03"]);
}

/// **VALUE**: Verifies all-or-nothing semantics and that fetching stops at the first failure.
///
/// **BUG THIS CATCHES**: Would catch a loop that skips failed episodes and returns a partial
/// list, which would then be cached as if complete.
#[tokio::test]
async fn given_one_failing_url_when_fetching_sequentially_then_fails_and_stops() {
    // GIVEN: Episode 2 fails, episode 3 must never be requested
    let server = MockServer::start().await;
    mount_json(&server, "/ep/1", episode_json(1, "Pilot", "S01E01"), 1).await;
    mount_status(&server, "/ep/2", 404, 1).await;
    mount_json(&server, "/ep/3", episode_json(3, "Anatomy Park", "S01E03"), 0).await;
    let client = client_for(&server);
    let urls = vec![
        String::from("/ep/1"),
        String::from("/ep/2"),
        String::from("/ep/3"),
    ];

    // WHEN: Fetching sequentially
    let result = client.fetch_episodes_sequential(&urls).await;

    // THEN: The whole operation fails
    assert!(matches!(result, Err(FetchError::Server { .. })));
}

#[tokio::test]
async fn given_no_urls_when_fetching_sequentially_then_returns_empty_without_requests() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let episodes = client.fetch_episodes_sequential(&[]).await.unwrap();

    assert!(episodes.is_empty());
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "No request should be issued");
}
