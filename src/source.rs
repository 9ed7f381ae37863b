//! Data sources feeding the chart
//!
//! A source pushes the full current sequence of records to every subscriber
//! whenever it changes. New subscribers immediately receive the current
//! sequence, which is empty until the first record arrives.

use crate::types::ChartRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

/// Callback receiving each new snapshot
pub type Observer = Box<dyn FnMut(&[ChartRecord]) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub trait DataSource {
    /// Register an observer; it is called right away with the current snapshot
    fn subscribe(&mut self, observer: Observer) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    fn snapshot(&self) -> &[ChartRecord];

    /// Advance emission by one tick. Returns `false` once the source is exhausted.
    fn poll(&mut self) -> bool;
}

/// Action titles the mock source draws from
pub const ACTIONS: [&str; 7] = ["Open", "Close", "Delete", "Create", "Update", "View", "Click"];

/// Values are drawn from `0..MAX_VALUE`
pub const MAX_VALUE: u32 = 1_000_000;

/// Emission cadence and limits for a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Tick cadence in milliseconds
    pub interval_ms: u64,
    /// Coalescing window applied by the consumer; 0 disables it
    pub debounce_ms: u64,
    /// Emission stops once this many unique records exist
    pub max_records: usize,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self::user_actions()
    }
}

impl SourceSettings {
    /// Slower stream, rendered on every update
    pub fn user_actions() -> Self {
        Self {
            interval_ms: 300,
            debounce_ms: 0,
            max_records: 5,
            seed: None,
        }
    }

    /// Faster stream, debounced by the consumer
    pub fn admin_actions() -> Self {
        Self {
            interval_ms: 100,
            debounce_ms: 500,
            max_records: 5,
            seed: None,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Random action generator standing in for a live analytics feed
pub struct MockActionSource {
    records: Vec<ChartRecord>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    max_records: usize,
    rng: StdRng,
}

impl MockActionSource {
    pub fn new(settings: &SourceSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            records: Vec::new(),
            observers: Vec::new(),
            next_subscription: 0,
            // titles are unique, so there can never be more records than actions
            max_records: settings.max_records.min(ACTIONS.len()),
            rng,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.records.len() >= self.max_records
    }

    fn random_record(&mut self, title: &str) -> ChartRecord {
        let previous = self.rng.gen_range(0..MAX_VALUE);
        let current = self.rng.gen_range(0..MAX_VALUE);
        ChartRecord::new(title, f64::from(previous), f64::from(current))
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.records);
        }
    }
}

impl DataSource for MockActionSource {
    fn subscribe(&mut self, mut observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        observer(&self.records);
        self.observers.push((id, observer));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn snapshot(&self) -> &[ChartRecord] {
        &self.records
    }

    fn poll(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }

        let title = ACTIONS[self.rng.gen_range(0..ACTIONS.len())];
        if self.records.iter().any(|r| r.title == title) {
            trace!(title, "duplicate action, skipping tick");
            return true;
        }

        let record = self.random_record(title);
        self.records.push(record);
        self.notify();

        !self.is_exhausted()
    }
}
