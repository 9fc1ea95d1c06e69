//! Polled progress counter for a generation run.
//!
//! The run increments from worker threads; any other thread may take a
//! [`GenerationProgress`] snapshot at any time.

use serde::Serialize;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationProgress {
    pub value: u32,
    pub max: u32,
}

impl GenerationProgress {
    pub fn is_complete(&self) -> bool {
        self.max > 0 && self.value >= self.max
    }

    /// Completed share in `0.0..=1.0`. A run with no steps reports 0.
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (self.value.min(self.max) as f32) / (self.max as f32)
    }
}

pub struct ProgressState {
    value: AtomicU32,
    max: AtomicU32,
}

impl ProgressState {
    pub fn new() -> Self {
        Self {
            value: AtomicU32::new(0),
            max: AtomicU32::new(0),
        }
    }

    /// Start a new run with `max` steps.
    pub fn reset(&self, max: u32) {
        self.value.store(0, Ordering::SeqCst);
        self.max.store(max, Ordering::SeqCst);
    }

    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> GenerationProgress {
        GenerationProgress {
            value: self.value.load(Ordering::SeqCst),
            max: self.max.load(Ordering::SeqCst),
        }
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
