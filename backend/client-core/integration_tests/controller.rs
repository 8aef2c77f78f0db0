use crate::helpers::{
    CHARACTER_PATH, RecordingTarget, character_json, client_for, episode_json, is_detail,
    is_error, is_list, is_loading, mount_first_page, mount_json, mount_status, page_json,
};

use client_core::controller::{CatalogController, ControllerHandle, UiCommand, UiState};
use client_core::cursor::PageDirection;

use models::Episodes;

use wiremock::MockServer;

fn controller_for(server: &MockServer) -> (CatalogController<RecordingTarget>, RecordingTarget) {
    let target = RecordingTarget::default();
    let controller = CatalogController::new(client_for(server), target.clone());
    (controller, target)
}

// ----------------------------------------------------------------------------
// start / navigate
// ----------------------------------------------------------------------------

/// **VALUE**: Walks the App start → Loading → List transition for the first-page scenario.
///
/// **WHY THIS MATTERS**: This is what the user sees on launch: a spinner, then one row with
/// only the forward button enabled.
#[tokio::test]
async fn given_catalog_when_starting_then_shows_loading_then_list() {
    // GIVEN: The first-page scenario
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    let (mut controller, target) = controller_for(&server);

    // WHEN: Starting
    controller.start().await.unwrap();

    // THEN: Loading then List were mounted
    let frames = target.frames();
    assert_eq!(frames.len(), 2);
    assert!(is_loading(&frames[0]));
    assert!(frames[0].contains("Loading characters..."));
    assert!(is_list(&frames[1]));
    assert_eq!(frames[1].matches("<tr data-character-id=").count(), 1);
    assert!(frames[1].contains(r#"data-action="previous" disabled>"#));
    assert!(frames[1].contains(r#"data-action="next">"#));

    // AND: List and cursor were committed together
    let state = controller.state();
    assert_eq!(state.view(), UiState::List);
    assert!(state.has_page());
    assert_eq!(state.characters().len(), 1);
    assert!(state.cursor().has_next());
}

#[tokio::test]
async fn given_failing_catalog_when_starting_then_shows_error_and_commits_nothing() {
    // GIVEN: The listing is down
    let server = MockServer::start().await;
    mount_status(&server, CHARACTER_PATH, 500, 1).await;
    let (mut controller, target) = controller_for(&server);

    // WHEN: Starting
    controller.start().await.unwrap();

    // THEN: Loading then Error, and nothing committed
    let frames = target.frames();
    assert!(is_loading(&frames[0]));
    assert!(is_error(&frames[1]));
    assert_eq!(controller.state().view(), UiState::Error);
    assert!(!controller.state().has_page());
    assert!(controller.state().characters().is_empty());
}

#[tokio::test]
async fn given_list_when_navigating_forward_then_replaces_list_and_cursor() {
    // GIVEN: Page 1 loaded, page 2 available
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    mount_json(
        &server,
        "/api/character/p2",
        page_json(
            None,
            Some("/api/character/"),
            vec![
                character_json(2, "Morty", "Alive", &[]),
                character_json(3, "Birdperson", "Dead", &[]),
            ],
        ),
        1,
    )
    .await;
    let (mut controller, target) = controller_for(&server);
    controller.start().await.unwrap();

    // WHEN: Navigating forward
    controller.navigate(PageDirection::Forward).await.unwrap();

    // THEN: The list was replaced wholesale
    let state = controller.state();
    let names: Vec<&str> = state.characters().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Morty", "Birdperson"]);
    assert!(!state.cursor().has_next());
    assert!(state.cursor().has_previous());

    // AND: Buttons mirror the new cursor
    let html = target.last();
    assert!(html.contains(r#"data-action="previous">"#));
    assert!(html.contains(r#"data-action="next" disabled>"#));
    assert!(html.contains("text-bg-danger"));
}

/// **VALUE**: Verifies that a failed page fetch leaves list and cursor exactly as they were.
///
/// **BUG THIS CATCHES**: Would catch a controller that clears the list or advances the
/// cursor before the fetch has succeeded.
#[tokio::test]
async fn given_list_when_navigation_fails_then_prior_state_is_retained() {
    // GIVEN: Page 1 loaded, page 2 broken
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    mount_status(&server, "/api/character/p2", 500, 1).await;
    let (mut controller, target) = controller_for(&server);
    controller.start().await.unwrap();
    let before_cursor = controller.state().cursor().clone();
    let before_characters = controller.state().characters().to_vec();

    // WHEN: Navigating forward
    controller.navigate(PageDirection::Forward).await.unwrap();

    // THEN: Error view shown
    assert!(is_error(&target.last()));
    assert_eq!(controller.state().view(), UiState::Error);

    // AND: No state field changed
    assert_eq!(controller.state().cursor(), &before_cursor);
    assert_eq!(controller.state().characters(), before_characters.as_slice());
}

#[tokio::test]
async fn given_character_without_image_when_starting_then_list_still_renders() {
    // GIVEN: A first page whose only character has an empty image URL
    let server = MockServer::start().await;
    let mut faceless = character_json(4, "Squanchy", "unknown", &[]);
    faceless["image"] = serde_json::json!("");
    mount_json(&server, CHARACTER_PATH, page_json(None, None, vec![faceless]), 1).await;
    let (mut controller, target) = controller_for(&server);

    // WHEN: Starting
    controller.start().await.unwrap();

    // THEN: The list is shown with its row
    let html = target.last();
    assert!(is_list(&html));
    assert!(html.contains(r#"data-action="select" data-id="4">Squanchy</span>"#));
    assert_eq!(controller.state().view(), UiState::List);
}

// ----------------------------------------------------------------------------
// select / back / dismiss
// ----------------------------------------------------------------------------

/// **VALUE**: Covers the detail scenario, back navigation and cache reuse in one session.
///
/// **WHY THIS MATTERS**: Going back and re-opening the same character is the most common
/// path; it must neither re-fetch the page nor the episodes.
///
/// **BUG THIS CATCHES**: The mocks `expect(1)` each: any extra page or episode request
/// fails the test on drop.
#[tokio::test]
async fn given_list_when_selecting_then_detail_shows_episodes_in_url_order() {
    // GIVEN: Page 1 with Rick and his two episodes
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    mount_json(&server, "/ep/1", episode_json(1, "Pilot", "S01E01"), 1).await;
    mount_json(&server, "/ep/2", episode_json(2, "Lawnmower Dog", "S01E02"), 1).await;
    let (mut controller, target) = controller_for(&server);
    controller.start().await.unwrap();

    // WHEN: Selecting Rick
    controller.select(1).await.unwrap();

    // THEN: Loading then Detail with exactly two cards in URL order
    let frames = target.frames();
    assert!(frames[2].contains("Loading character details..."));
    let detail = &frames[3];
    assert!(is_detail(detail));
    assert_eq!(detail.matches(r#"class="card h-100""#).count(), 2);
    let pilot = detail.find(r#"data-episode-code="S01E01""#).unwrap();
    let lawnmower = detail.find(r#"data-episode-code="S01E02""#).unwrap();
    assert!(pilot < lawnmower);
    assert_eq!(controller.state().view(), UiState::Detail(1));

    // WHEN: Going back
    controller.back().unwrap();

    // THEN: The retained list is re-rendered
    assert!(is_list(&target.last()));
    assert_eq!(controller.state().view(), UiState::List);

    // WHEN: Selecting Rick again
    controller.select(1).await.unwrap();

    // THEN: Same detail, served from the cache
    assert_eq!(&target.last(), detail);
}

#[tokio::test]
async fn given_failing_episode_when_selecting_then_error_and_episodes_stay_unresolved() {
    // GIVEN: Rick's second episode fails
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    mount_json(&server, "/ep/1", episode_json(1, "Pilot", "S01E01"), 1).await;
    mount_status(&server, "/ep/2", 500, 1).await;
    let (mut controller, target) = controller_for(&server);
    controller.start().await.unwrap();

    // WHEN: Selecting Rick
    controller.select(1).await.unwrap();

    // THEN: Error view, nothing cached
    assert!(is_error(&target.last()));
    assert_eq!(controller.state().view(), UiState::Error);
    let rick = controller.state().character(1).unwrap();
    assert_eq!(rick.episodes, Episodes::Unresolved);

    // WHEN: Dismissing the error
    controller.dismiss().await.unwrap();

    // THEN: Back on the retained list without a new page fetch
    assert!(is_list(&target.last()));
    assert_eq!(controller.state().view(), UiState::List);
}

#[tokio::test]
async fn given_unknown_id_when_selecting_then_error_without_requests() {
    // GIVEN: A loaded page without character 42
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    let (mut controller, target) = controller_for(&server);
    controller.start().await.unwrap();
    let before = controller.state().clone();

    // WHEN: Selecting an id that is not listed
    controller.select(42).await.unwrap();

    // THEN: Error view, data untouched
    assert!(is_error(&target.last()));
    assert_eq!(controller.state().characters(), before.characters());
    assert_eq!(controller.state().cursor(), before.cursor());
}

#[tokio::test]
async fn given_error_before_first_page_when_dismissing_then_restarts() {
    // GIVEN: The first start failed, the second will succeed
    let server = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path(CHARACTER_PATH))
        .respond_with(wiremock::ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_first_page(&server, 1).await;
    let (mut controller, target) = controller_for(&server);
    controller.start().await.unwrap();
    assert!(is_error(&target.last()));

    // WHEN: Dismissing
    controller.dismiss().await.unwrap();

    // THEN: The listing was fetched again and is shown
    assert!(is_list(&target.last()));
    assert!(controller.state().has_page());
}

// ----------------------------------------------------------------------------
// ControllerHandle (actor)
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the actor processes commands one at a time and each `send` returns
/// only after its views were mounted.
///
/// **WHY THIS MATTERS**: Commands from the UI are serialized through the actor so no two
/// fetches overlap and views never interleave.
#[tokio::test]
async fn given_handle_when_sending_commands_then_frames_follow_command_order() {
    // GIVEN: A spawned controller
    let server = MockServer::start().await;
    mount_first_page(&server, 1).await;
    mount_json(&server, "/ep/1", episode_json(1, "Pilot", "S01E01"), 1).await;
    mount_json(&server, "/ep/2", episode_json(2, "Lawnmower Dog", "S01E02"), 1).await;
    let (controller, target) = controller_for(&server);
    let handle = ControllerHandle::spawn(controller);

    // WHEN: Starting, then selecting
    handle.send(UiCommand::Start).await.unwrap();
    handle.send(UiCommand::Select(1)).await.unwrap();

    // THEN: Frames are strictly Loading, List, Loading, Detail
    let frames = target.frames();
    assert_eq!(frames.len(), 4);
    assert!(is_loading(&frames[0]));
    assert!(is_list(&frames[1]));
    assert!(is_loading(&frames[2]));
    assert!(is_detail(&frames[3]));

    // WHEN: Going back through the handle
    handle.send(UiCommand::Back).await.unwrap();

    // THEN: The list is shown again without another fetch
    assert!(is_list(&target.last()));
    assert_eq!(target.count(), 5);
}
