//! Logical emission timing shared by the decoder and encoder.
//!
//! A traversal asks for one [`Tick`] per element it produces. Ticks run
//! `0, 1, 2, …` without gaps and stop once the target count is reached, at
//! which point the traversal halts wherever it is. Callers turn ticks into
//! wall-clock delays themselves via [`Tick::delay`].

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tick(usize);

impl Tick {
    pub fn index(self) -> usize {
        self.0
    }

    /// Delay before this element should appear when each step takes `interval`.
    pub fn delay(self, interval: Duration) -> Duration {
        let steps = u32::try_from(self.0).unwrap_or(u32::MAX);
        interval.saturating_mul(steps)
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct EmissionScheduler {
    target: usize,
    progress: usize,
}

impl EmissionScheduler {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            progress: 0,
        }
    }

    /// Claim the next tick, or `None` once `target` emissions were handed out.
    pub fn next_tick(&mut self) -> Option<Tick> {
        if self.is_complete() {
            return None;
        }
        let tick = Tick(self.progress);
        self.progress += 1;
        Some(tick)
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn remaining(&self) -> usize {
        self.target - self.progress
    }
}
