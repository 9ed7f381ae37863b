//! Discrete band scale: equal-width slots per domain entry

use super::util::round_half_up;
use serde::Serialize;

/// Maps each domain key to the start of an equal-width slot in a pixel range.
///
/// Duplicate keys collapse onto the slot of their first occurrence. Positions and
/// the bandwidth are rounded to whole pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale<K> {
    domain: Vec<K>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl<K: PartialEq + Clone> BandScale<K> {
    /// Band scale with separate inner (between slots) and outer (range ends) padding
    pub fn new<I>(domain: I, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut unique: Vec<K> = Vec::new();
        for key in domain {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }

        let mut scale = Self {
            domain: unique,
            range,
            padding_inner: padding_inner.clamp(0.0, 1.0),
            padding_outer: padding_outer.max(0.0),
            step: 0.0,
            bandwidth: 0.0,
            start: 0.0,
        };
        scale.rescale();
        scale
    }

    /// Same padding inside and outside
    pub fn with_padding<I>(domain: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self::new(domain, range, padding, padding)
    }

    fn rescale(&mut self) {
        const ALIGN: f64 = 0.5;

        let n = self.domain.len() as f64;
        let (lo, hi) = if self.range.1 < self.range.0 {
            (self.range.1, self.range.0)
        } else {
            self.range
        };

        let slots = (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        let step = ((hi - lo) / slots).floor();
        let start = lo + (hi - lo - step * (n - self.padding_inner)) * ALIGN;

        self.step = step;
        self.start = round_half_up(start);
        self.bandwidth = round_half_up(step * (1.0 - self.padding_inner));
    }

    /// Slot start for `key`, or `None` when it is not in the domain
    pub fn position(&self, key: &K) -> Option<f64> {
        let index = self.domain.iter().position(|k| k == key)?;
        // reversed range: slots are handed out from the high end
        let slot = if self.range.1 < self.range.0 {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(self.start + self.step * slot as f64)
    }

    /// Slot center for `key`
    pub fn center(&self, key: &K) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
