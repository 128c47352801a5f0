use std::path::Path;

use super::snapshot::StatisticsSnapshot;

/// Parses a snapshot document. Malformed input yields an empty snapshot,
/// which the card shows as "no data".
pub fn parse_snapshot(contents: &str) -> StatisticsSnapshot {
    match serde_json::from_str(contents) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(error = %err, "statistics snapshot is malformed, treating as empty");
            StatisticsSnapshot::default()
        }
    }
}

pub fn load_snapshot(path: &Path) -> StatisticsSnapshot {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let snapshot = parse_snapshot(&contents);
            tracing::debug!(
                path = %path.display(),
                records = snapshot.len(),
                "loaded statistics snapshot"
            );
            snapshot
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read statistics snapshot");
            StatisticsSnapshot::default()
        }
    }
}
