//! Snapshot window and aggregate time series kept by the drivers.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fixed-capacity window of recent snapshots; the oldest is dropped first.
///
/// A capacity of `0` keeps everything.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.capacity > 0 && self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Append-only series of per-tick aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries<T> {
    samples: Vec<T>,
}

impl<T> Default for TimeSeries<T> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
        }
    }
}

impl<T> TimeSeries<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: T) {
        self.samples.push(sample);
    }

    pub fn latest(&self) -> Option<&T> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }

    /// The last `n` samples, oldest first.
    pub fn tail(&self, n: usize) -> &[T] {
        &self.samples[self.samples.len().saturating_sub(n)..]
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
