//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use cadence_core::{
    CadenceError, DownloadService, DownloadableReference, PlayableReference, Result,
    SearchService, Track, TrackResolver,
};
use cadence_server::{create_router, AppState, ServerConfig};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

/// In-memory stand-in for the media API
#[derive(Default)]
pub struct FakeCatalog {
    pub tracks: Vec<Track>,
    pub failing: Mutex<HashSet<String>>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_tracks(ids: &[&str]) -> Self {
        Self {
            tracks: ids
                .iter()
                .map(|id| {
                    Track::new(*id, format!("Song {id}"))
                        .with_artist("Test Artist")
                        .with_source_url(format!("https://youtube.test/watch?v={id}"))
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn fail(&self, id: &str) {
        self.failing.lock().unwrap().insert(id.to_string());
    }

    fn is_failing(&self, track: &Track) -> bool {
        self.failing.lock().unwrap().contains(track.id().as_str())
    }
}

#[async_trait]
impl SearchService for FakeCatalog {
    async fn search(&self, query: &str) -> Result<Vec<Track>> {
        self.queries.lock().unwrap().push(query.to_string());
        if query == "explode" {
            return Err(CadenceError::search("upstream down"));
        }
        Ok(self.tracks.clone())
    }
}

#[async_trait]
impl TrackResolver for FakeCatalog {
    async fn resolve(&self, track: &Track) -> Result<PlayableReference> {
        if self.is_failing(track) {
            return Err(CadenceError::resolution("no stream"));
        }
        Ok(PlayableReference::new(format!("https://cdn.test/{}.mp3", track.id())))
    }
}

#[async_trait]
impl DownloadService for FakeCatalog {
    async fn resolve_download(&self, track: &Track) -> Result<DownloadableReference> {
        if self.is_failing(track) {
            return Err(CadenceError::download("no link"));
        }
        Ok(DownloadableReference::new(format!("https://dl.test/{}.mp3", track.id())))
    }
}

/// Create a test app around `catalog`
pub fn create_test_app(catalog: Arc<FakeCatalog>) -> (Router, AppState) {
    let app_state = AppState::new(
        ServerConfig::default(),
        catalog.clone(),
        catalog.clone(),
        catalog,
    );
    (create_router(app_state.clone()), app_state)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Send and decode, asserting the status
pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    expected: StatusCode,
) -> Value {
    let response = send(app, method, uri, body).await;
    assert_eq!(response.status(), expected, "{method} {uri}");
    json_body(response).await
}
