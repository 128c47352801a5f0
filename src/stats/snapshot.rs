use std::collections::HashMap;

use serde::Deserialize;

/// Current total utilization, a single percentage.
pub const CURRENT_TOTAL: &str = "current.total";
/// Historic utilization percentages, newest sample first.
pub const USAGE_HISTORY: &str = "usage.history";

/// Payload of a statistics record. Anything that is neither a number nor a
/// list of numbers is kept as-is but never read as usage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Value(f64),
    Series(Vec<f64>),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatRecord {
    #[serde(default)]
    pub datum: Option<Datum>,
}

/// One sample of VM statistics keyed by metric name.
///
/// A missing key means the metric is unavailable; it is never read as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StatisticsSnapshot {
    records: HashMap<String, StatRecord>,
}

impl StatisticsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: f64) -> Self {
        self.insert(key, Datum::Value(value));
        self
    }

    pub fn with_series(mut self, key: &str, series: Vec<f64>) -> Self {
        self.insert(key, Datum::Series(series));
        self
    }

    pub fn insert(&mut self, key: &str, datum: Datum) {
        self.records.insert(
            key.to_string(),
            StatRecord {
                datum: Some(datum),
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<&StatRecord> {
        self.records.get(key)
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        match self.get(key)?.datum.as_ref()? {
            Datum::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn series(&self, key: &str) -> Option<&[f64]> {
        match self.get(key)?.datum.as_ref()? {
            Datum::Series(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn current_total(&self) -> Option<f64> {
        self.value(CURRENT_TOTAL)
    }

    pub fn usage_history(&self) -> Option<&[f64]> {
        self.series(USAGE_HISTORY)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
