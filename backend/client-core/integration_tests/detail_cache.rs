use crate::helpers::{client_for, episode_json, mount_json};

use client_core::detail_cache::resolve_episodes;

use models::{Character, CharacterBuilder, Episodes, Status};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rick_with_two_episodes() -> Character {
    CharacterBuilder::default()
        .with_id(1)
        .with_name("Rick")
        .with_image("https://rickandmortyapi.com/api/character/avatar/1.jpeg")
        .with_status(Status::Alive)
        .with_episode_urls(["/ep/1", "/ep/2"])
        .build()
        .unwrap()
}

/// **VALUE**: Verifies that resolving twice issues exactly one batch of fetches.
///
/// **WHY THIS MATTERS**: Every return to a character's detail view would otherwise re-fetch
/// up to dozens of episodes one by one.
///
/// **BUG THIS CATCHES**: Would catch a cache check that never hits (e.g. comparing against
/// an empty list instead of the Unresolved state). The mocks verify `expect(1)` on drop.
#[tokio::test]
async fn given_resolved_character_when_resolving_again_then_no_refetch() {
    // GIVEN: Each episode may be requested exactly once
    let server = MockServer::start().await;
    mount_json(&server, "/ep/1", episode_json(1, "Pilot", "S01E01"), 1).await;
    mount_json(&server, "/ep/2", episode_json(2, "Lawnmower Dog", "S01E02"), 1).await;
    let client = client_for(&server);
    let mut rick = rick_with_two_episodes();

    // WHEN: Resolving twice
    let first = resolve_episodes(&client, &mut rick).await.unwrap().to_vec();
    let second = resolve_episodes(&client, &mut rick).await.unwrap().to_vec();

    // THEN: Both calls return the same list and the character holds it
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(rick.episodes, Episodes::Resolved(first));
}

/// **VALUE**: Verifies that a failed resolution leaves the character unresolved so the next
/// selection retries.
#[tokio::test]
async fn given_failing_episode_when_resolving_then_stays_unresolved_and_retry_succeeds() {
    // GIVEN: Episode 2 fails once, then succeeds
    let server = MockServer::start().await;
    mount_json(&server, "/ep/1", episode_json(1, "Pilot", "S01E01"), 2).await;
    Mock::given(method("GET"))
        .and(path("/ep/2"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "/ep/2", episode_json(2, "Lawnmower Dog", "S01E02"), 1).await;
    let client = client_for(&server);
    let mut rick = rick_with_two_episodes();

    // WHEN: The first resolution fails
    let failed = resolve_episodes(&client, &mut rick).await;

    // THEN: Nothing is cached
    assert!(failed.is_err());
    assert_eq!(rick.episodes, Episodes::Unresolved);

    // WHEN: Retrying
    let episodes = resolve_episodes(&client, &mut rick).await.unwrap();

    // THEN: The full list is resolved in URL order
    let codes: Vec<&str> = episodes.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["S01E01", "S01E02"]);
}

#[tokio::test]
async fn given_character_without_episodes_when_resolving_then_resolves_to_empty() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let mut loner = CharacterBuilder::default()
        .with_id(99)
        .with_name("Loner")
        .with_image("https://rickandmortyapi.com/api/character/avatar/99.jpeg")
        .build()
        .unwrap();

    let episodes = resolve_episodes(&client, &mut loner).await.unwrap();

    assert!(episodes.is_empty());
    assert_eq!(loner.episodes, Episodes::Resolved(Vec::new()));
}
