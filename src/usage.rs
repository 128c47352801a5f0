use crate::stats::snapshot::StatisticsSnapshot;

/// Utilization is expressed against this full scale.
pub const FULL_SCALE: f64 = 100.0;

/// Values handed to the charts: current used and available percentages and
/// the historic series in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct Utilization {
    pub used: f64,
    pub available: f64,
    pub history: Vec<f64>,
}

impl Utilization {
    /// The sparkline slot shows a placeholder when there is no history,
    /// whether or not current usage was reported.
    pub fn shows_history_placeholder(&self) -> bool {
        self.history.is_empty()
    }
}

/// Derives chart values from a snapshot. Missing metrics fall back to zero
/// usage and an empty history. Out-of-range usage is passed through as is,
/// so `available` goes negative when `used` exceeds 100.
pub fn normalize(snapshot: &StatisticsSnapshot) -> Utilization {
    let used = snapshot.current_total().unwrap_or(0.0);
    let history = snapshot
        .usage_history()
        .map(chronological)
        .unwrap_or_default();

    Utilization {
        used,
        available: FULL_SCALE - used,
        history,
    }
}

/// Snapshot history arrives newest first; charts draw oldest on the left.
pub fn chronological(newest_first: &[f64]) -> Vec<f64> {
    newest_first.iter().rev().copied().collect()
}
