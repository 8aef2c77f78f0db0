//! Test helpers for client-core integration tests.
//!
//! - Catalog API JSON builders matching the public API's shapes
//! - Mock server setup for pages and episodes
//! - A render target that records every mounted frame

use client_core::catalog_client::CatalogClient;
use client_core::controller::RenderTarget;
use client_core::view::Markup;

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Listing path every test client uses as its base.
pub const CHARACTER_PATH: &str = "/api/character/";

pub fn base_url(server: &MockServer) -> String {
    format!("{}{CHARACTER_PATH}", server.uri())
}

pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&base_url(server), None).expect("Failed to build catalog client")
}

pub fn character_json(id: u32, name: &str, status: &str, episodes: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": episodes,
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub fn page_json(next: Option<&str>, prev: Option<&str>, results: Vec<Value>) -> Value {
    let count = results.len();
    json!({
        "info": { "count": count, "pages": 1, "next": next, "prev": prev },
        "results": results
    })
}

pub fn episode_json(id: u32, name: &str, code: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "air_date": "December 2, 2013",
        "episode": code,
        "characters": [],
        "url": format!("https://rickandmortyapi.com/api/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

/// Mount `body` at `route`, expecting exactly `times` requests.
pub async fn mount_json(server: &MockServer, route: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("{\"error\":\"nope\"}"))
        .expect(times)
        .mount(server)
        .await;
}

/// First page from the scenario: one "Rick" with two episodes, next = "p2".
pub async fn mount_first_page(server: &MockServer, times: u64) {
    mount_json(
        server,
        CHARACTER_PATH,
        page_json(
            Some("p2"),
            None,
            vec![character_json(1, "Rick", "Alive", &["/ep/1", "/ep/2"])],
        ),
        times,
    )
    .await;
}

/// Render target that keeps every mounted frame for inspection.
#[derive(Clone, Default)]
pub struct RecordingTarget {
    frames: Arc<Mutex<Vec<Markup>>>,
}

impl RecordingTarget {
    pub fn frames(&self) -> Vec<String> {
        self.frames
            .lock()
            .expect("frames lock poisoned")
            .iter()
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn last(&self) -> String {
        self.frames().pop().expect("Nothing was mounted")
    }

    pub fn count(&self) -> usize {
        self.frames.lock().expect("frames lock poisoned").len()
    }
}

impl RenderTarget for RecordingTarget {
    fn mount(&self, markup: Markup) {
        self.frames
            .lock()
            .expect("frames lock poisoned")
            .push(markup);
    }
}

pub fn is_loading(frame: &str) -> bool {
    frame.contains("spinner-border")
}

pub fn is_error(frame: &str) -> bool {
    frame.contains("<strong>Error!</strong>")
}

pub fn is_list(frame: &str) -> bool {
    frame.contains("<table")
}

pub fn is_detail(frame: &str) -> bool {
    frame.contains(r#"data-action="back""#)
}
