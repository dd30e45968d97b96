//! Typed event log.
//!
//! Transitions record what they did as [`DemoEvent`]s; renderers and tests
//! drain the log to drive transient feedback (success banners, fill/drop
//! counters) without the engine knowing anything about presentation.
//!
//! The log is a bounded ring: when full, the oldest event is evicted.
//! Events are observability, never control flow -- dropping one must not
//! change engine behavior.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::id::RowId;

/// An engine event. Each records one observable effect of a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoEvent {
    /// The active operation changed; all demo state was reinitialized.
    OperationSelected { id: String },

    /// A read-load demo materialized its fixture.
    FixtureLoaded { rows: usize },

    /// A row was removed (duplicate removal).
    RowRemoved { id: RowId },

    /// A fill transition wrote `0` into this many null rows.
    NullsFilled { count: usize },

    /// A drop transition removed this many null rows.
    RowsDropped { count: usize },

    /// Coercion marked this many unparseable rows as `NaN`.
    CoercionApplied { errors: usize },

    /// A timed filter moved to the given phase (1 = marked, 2 = filtered).
    QueryPhaseAdvanced { phase: u8 },

    /// The active demo was reset to its fixture.
    DemoReset,

    /// A scheduled task fired after its target was reset or replaced and
    /// was dropped without effect.
    StaleTaskDropped,
}

/// Bounded buffer of demo events.
#[derive(Debug)]
pub struct EventLog {
    events: VecDeque<DemoEvent>,
    capacity: usize,
}

impl EventLog {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Record an event, evicting the oldest if the log is full.
    pub fn push(&mut self, event: DemoEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DemoEvent> {
        self.events.iter()
    }

    /// Remove and return all buffered events, oldest first.
    pub fn drain(&mut self) -> Vec<DemoEvent> {
        self.events.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
