//! Core record types flowing through the render pipeline

use crate::errors::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One labeled category as delivered by a data source.
///
/// `data` holds `[previous, current]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub title: String,
    pub data: [f64; 2],
}

impl ChartRecord {
    pub fn new(title: impl Into<String>, previous: f64, current: f64) -> Self {
        Self {
            title: title.into(),
            data: [previous, current],
        }
    }
}

/// Render-time projection of a [`ChartRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalRecord {
    pub title: String,
    pub prev_value: f64,
    pub current_value: f64,
}

impl InternalRecord {
    /// Project a record, rejecting values that cannot be placed on an axis
    pub fn from_record(record: &ChartRecord) -> Result<Self> {
        let [prev_value, current_value] = record.data;
        if !prev_value.is_finite() || !current_value.is_finite() {
            return Err(ChartError::InvalidData {
                message: format!(
                    "non-finite value in '{}': previous={}, current={}",
                    record.title, prev_value, current_value
                ),
            });
        }

        Ok(Self {
            title: record.title.clone(),
            prev_value,
            current_value,
        })
    }

    /// Project a whole dataset; fails on the first invalid record
    pub fn project(records: &[ChartRecord]) -> Result<Vec<Self>> {
        records.iter().map(Self::from_record).collect()
    }

    pub fn value(&self, key: SeriesKey) -> f64 {
        match key {
            SeriesKey::Previous => self.prev_value,
            SeriesKey::Current => self.current_value,
        }
    }

    /// Largest of the two series values
    pub fn max_value(&self) -> f64 {
        self.prev_value.max(self.current_value)
    }
}

/// The two bar series drawn per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKey {
    Previous,
    Current,
}

impl SeriesKey {
    /// Series in sub-band order
    pub const ALL: [SeriesKey; 2] = [SeriesKey::Previous, SeriesKey::Current];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKey::Previous => "prevValue",
            SeriesKey::Current => "currentValue",
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-(record, series) data bound to shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedBar {
    pub key: SeriesKey,
    pub value: f64,
    /// Signed percent change of the owning record; only displayed for `Current`
    pub percent_delta: i64,
}
