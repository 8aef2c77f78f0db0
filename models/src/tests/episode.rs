use crate::Episode;
use crate::api::ApiEpisode;

use serde_json::json;

/// **VALUE**: Verifies `air_date` and the `episode` code field are decoded and mapped.
///
/// **BUG THIS CATCHES**: Would catch if the snake_case `air_date` field stops matching the
/// API or if `episode` (the code) is confused with the episode name.
#[test]
fn given_episode_json_when_mapped_then_fields_match() {
    // GIVEN: An episode as the API returns it
    let raw: ApiEpisode = serde_json::from_value(json!({
        "id": 1,
        "name": "Pilot",
        "air_date": "December 2, 2013",
        "episode": "S01E01",
        "characters": [],
        "url": "https://rickandmortyapi.com/api/episode/1",
        "created": "2017-11-10T12:56:33.798Z"
    }))
    .unwrap();

    // WHEN: Mapping through the factory
    let episode = Episode::from_api(raw);

    // THEN: Fields land where the renderer expects them
    assert_eq!(episode.id, 1);
    assert_eq!(episode.name, "Pilot");
    assert_eq!(episode.air_date, "December 2, 2013");
    assert_eq!(episode.code, "S01E01");
}
