/// Headless audio output
///
/// The server does not decode audio. The browser loads the reference the
/// controller hands over and reports its playback position back, so this
/// output only mirrors what the browser is doing.
use cadence_core::{AudioOutput, PlayableReference, Result};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Default)]
struct Session {
    source: Option<PlayableReference>,
    paused: bool,
    position: Duration,
    duration: Option<Duration>,
}

/// What the browser should be playing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub source: Option<String>,
    pub paused: bool,
    pub position_secs: f64,
    pub duration_secs: Option<f64>,
}

/// Shared handle; the controller owns one clone, the API keeps another
#[derive(Debug, Clone, Default)]
pub struct SessionOutput {
    inner: Arc<Mutex<Session>>,
}

impl SessionOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        // A panic while holding this lock cannot leave the fields inconsistent
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the position (and duration, once known) reported by the browser
    pub fn report(&self, position: Duration, duration: Option<Duration>) {
        let mut session = self.session();
        if session.source.is_none() {
            return;
        }
        session.position = position;
        if duration.is_some() {
            session.duration = duration;
        }
    }

    pub fn view(&self) -> SessionView {
        let session = self.session();
        SessionView {
            source: session.source.as_ref().map(|r| r.as_str().to_string()),
            paused: session.paused,
            position_secs: session.position.as_secs_f64(),
            duration_secs: session.duration.map(|d| d.as_secs_f64()),
        }
    }
}

impl AudioOutput for SessionOutput {
    fn load(&mut self, reference: &PlayableReference) -> Result<()> {
        let mut session = self.session();
        *session = Session {
            source: Some(reference.clone()),
            paused: true,
            ..Session::default()
        };
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.session().paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.session().paused = true;
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.session().position = position;
        Ok(())
    }

    fn current_time(&self) -> Duration {
        self.session().position
    }

    fn duration(&self) -> Option<Duration> {
        self.session().duration
    }
}
