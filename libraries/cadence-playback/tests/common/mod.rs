//! Shared test doubles for the playback controller

#![allow(dead_code)]

use async_trait::async_trait;
use cadence_core::{
    AudioOutput, CadenceError, DownloadService, DownloadableReference, PlayableReference, Result,
    SearchService, Track, TrackResolver,
};
use cadence_playback::{
    PlaybackConfig, PlaybackController, PlayerEvent, ScriptedRandom, Services,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{broadcast, oneshot};

// ===== Tracks =====

pub fn track(id: &str) -> Track {
    Track::new(id, format!("Song {id}"))
        .with_artist(format!("Artist {id}"))
        .with_duration_label("3:00")
}

pub fn tracks(ids: &[&str]) -> Vec<Track> {
    ids.iter().map(|id| track(id)).collect()
}

pub fn reference_for(id: &str) -> PlayableReference {
    PlayableReference::new(format!("https://cdn.test/{id}.mp3"))
}

// ===== Audio Output =====

/// What the mock output has been asked to do
#[derive(Debug, Default)]
pub struct OutputLog {
    pub loaded: Vec<PlayableReference>,
    pub playing: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub seeks: Vec<Duration>,
    pub fail_load: bool,
}

#[derive(Clone, Default)]
pub struct MockOutput {
    pub log: Arc<Mutex<OutputLog>>,
    pub track_length: Option<Duration>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            log: Arc::default(),
            track_length: Some(Duration::from_secs(180)),
        }
    }

    pub fn loaded(&self) -> Vec<PlayableReference> {
        self.log.lock().unwrap().loaded.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.log.lock().unwrap().playing
    }

    pub fn position(&self) -> Duration {
        self.log.lock().unwrap().position
    }

    pub fn set_position(&self, position: Duration) {
        self.log.lock().unwrap().position = position;
    }

    pub fn seeks(&self) -> Vec<Duration> {
        self.log.lock().unwrap().seeks.clone()
    }

    pub fn fail_loads(&self) {
        self.log.lock().unwrap().fail_load = true;
    }
}

impl AudioOutput for MockOutput {
    fn load(&mut self, reference: &PlayableReference) -> Result<()> {
        let mut log = self.log.lock().unwrap();
        if log.fail_load {
            return Err(CadenceError::output("device unavailable"));
        }
        log.loaded.push(reference.clone());
        log.playing = false;
        log.position = Duration::ZERO;
        log.duration = self.track_length;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.log.lock().unwrap().playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.log.lock().unwrap().playing = false;
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        let mut log = self.log.lock().unwrap();
        log.position = position;
        log.seeks.push(position);
        Ok(())
    }

    fn current_time(&self) -> Duration {
        self.log.lock().unwrap().position
    }

    fn duration(&self) -> Option<Duration> {
        self.log.lock().unwrap().duration
    }
}

// ===== Resolver =====

/// Resolver that can fail or hold individual tracks until released
#[derive(Default)]
pub struct MockResolver {
    failing: Mutex<HashSet<String>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: AtomicUsize,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, id: &str) {
        self.failing.lock().unwrap().insert(id.to_string());
    }

    /// Hold resolution of `id` until the returned sender fires
    pub fn gate(&self, id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(id.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yield until at least `n` resolutions have started
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl TrackResolver for MockResolver {
    async fn resolve(&self, track: &Track) -> Result<PlayableReference> {
        let id = track.id().as_str().to_string();
        let gate = self.gates.lock().unwrap().remove(&id);
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.failing.lock().unwrap().contains(&id) {
            return Err(CadenceError::resolution(format!("no stream for {id}")));
        }
        Ok(reference_for(&id))
    }
}

// ===== Search / Downloads =====

#[derive(Default)]
pub struct MockSearch {
    results: Mutex<Option<Result<Vec<Track>>>>,
}

impl MockSearch {
    pub fn returning(tracks: Vec<Track>) -> Self {
        Self {
            results: Mutex::new(Some(Ok(tracks))),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            results: Mutex::new(Some(Err(CadenceError::search(message)))),
        }
    }
}

#[async_trait]
impl SearchService for MockSearch {
    async fn search(&self, _query: &str) -> Result<Vec<Track>> {
        self.results.lock().unwrap().clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
pub struct MockDownloads {
    failing: Mutex<HashSet<String>>,
}

impl MockDownloads {
    pub fn fail(&self, id: &str) {
        self.failing.lock().unwrap().insert(id.to_string());
    }
}

#[async_trait]
impl DownloadService for MockDownloads {
    async fn resolve_download(&self, track: &Track) -> Result<DownloadableReference> {
        let id = track.id().as_str();
        if self.failing.lock().unwrap().contains(id) {
            return Err(CadenceError::download(format!("no download for {id}")));
        }
        Ok(DownloadableReference::new(format!("https://dl.test/{id}.mp3")))
    }
}

// ===== Harness =====

pub struct Harness {
    pub controller: PlaybackController,
    pub output: MockOutput,
    pub resolver: Arc<MockResolver>,
    pub downloads: Arc<MockDownloads>,
    pub events: broadcast::Receiver<PlayerEvent>,
}

impl Harness {
    pub fn new(search: MockSearch) -> Self {
        Self::build(search, None)
    }

    pub fn with_script(search: MockSearch, script: Vec<usize>) -> Self {
        Self::build(search, Some(script))
    }

    fn build(search: MockSearch, script: Option<Vec<usize>>) -> Self {
        let output = MockOutput::new();
        let resolver = Arc::new(MockResolver::new());
        let downloads = Arc::new(MockDownloads::default());
        let services = Services {
            search: Arc::new(search),
            resolver: resolver.clone(),
            downloads: downloads.clone(),
            output: Box::new(output.clone()),
        };

        let config = PlaybackConfig::default();
        let controller = match script {
            Some(script) => PlaybackController::with_random(
                config,
                services,
                Box::new(ScriptedRandom::new(script)),
            ),
            None => PlaybackController::new(config, services),
        };
        let events = controller.subscribe();

        Self {
            controller,
            output,
            resolver,
            downloads,
            events,
        }
    }

    /// Controller with `ids` already loaded as the playlist
    pub async fn with_playlist(ids: &[&str]) -> Self {
        let harness = Self::new(MockSearch::default());
        harness.controller.replace_playlist(tracks(ids)).await;
        harness
    }

    /// Drain every event published so far
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}

pub fn history_ids(history: &[Track]) -> Vec<String> {
    history.iter().map(|t| t.id().to_string()).collect()
}
