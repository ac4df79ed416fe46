//! Shuffle index selection
//!
//! The random generator is injectable so tests can script the draws.

use rand::Rng;
use std::collections::VecDeque;
use tracing::warn;

/// Upper bound on redraws before falling back to sequential order
const MAX_SHUFFLE_DRAWS: usize = 64;

/// Source of uniformly distributed indices
pub trait RandomSource: Send {
    /// Return an index in `[0, upper)`; `upper` is always at least 1
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Thread-local RNG from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Deterministic source that replays a fixed sequence
///
/// Values are reduced modulo `upper`. When the sequence runs out it starts
/// over; an empty sequence always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    pending: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let script = script.into();
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(0) % upper
    }
}

/// Pick a random index in `[0, len)` other than `current`
///
/// Redraws until the candidate differs from the current index. `len` must be
/// at least 2. A source that keeps returning the current index is cut off
/// after a bounded number of draws and the next sequential index is used.
pub fn pick_other_index(rng: &mut dyn RandomSource, len: usize, current: usize) -> usize {
    debug_assert!(len > 1);

    for _ in 0..MAX_SHUFFLE_DRAWS {
        let candidate = rng.next_index(len);
        if candidate != current {
            return candidate;
        }
    }

    warn!(len, current, "Random source kept drawing the current index");
    (current + 1) % len
}
