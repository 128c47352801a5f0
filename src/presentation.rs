use crate::stats::snapshot::{CURRENT_TOTAL, StatisticsSnapshot};

/// Which of the three mutually exclusive card bodies to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    NotRunning,
    RunningNoData,
    RunningWithData,
}

impl PresentationState {
    pub fn from_snapshot(snapshot: &StatisticsSnapshot, is_running: bool) -> Self {
        select_state(is_running, has_current_total(snapshot))
    }

    pub fn label(self) -> &'static str {
        match self {
            PresentationState::NotRunning => "not running",
            PresentationState::RunningNoData => "no data",
            PresentationState::RunningWithData => "live",
        }
    }
}

pub fn select_state(is_running: bool, has_current_total: bool) -> PresentationState {
    match (is_running, has_current_total) {
        (false, _) => PresentationState::NotRunning,
        (true, false) => PresentationState::RunningNoData,
        (true, true) => PresentationState::RunningWithData,
    }
}

/// True when the snapshot carries a current-total record at all. The datum
/// is not inspected: a zero reading, or a record with no usable datum, still
/// counts as data and is drawn as 0% used.
pub fn has_current_total(snapshot: &StatisticsSnapshot) -> bool {
    snapshot.get(CURRENT_TOTAL).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::snapshot::USAGE_HISTORY;
    use crate::usage::normalize;

    #[test]
    fn selector_truth_table() {
        assert_eq!(select_state(false, false), PresentationState::NotRunning);
        assert_eq!(select_state(false, true), PresentationState::NotRunning);
        assert_eq!(select_state(true, false), PresentationState::RunningNoData);
        assert_eq!(select_state(true, true), PresentationState::RunningWithData);
    }

    #[test]
    fn stopped_vm_ignores_stats() {
        let snapshot = StatisticsSnapshot::new()
            .with_value(CURRENT_TOTAL, 35.0)
            .with_series(USAGE_HISTORY, vec![1.0]);
        assert_eq!(
            PresentationState::from_snapshot(&snapshot, false),
            PresentationState::NotRunning
        );
    }

    #[test]
    fn running_with_empty_snapshot_has_no_data() {
        assert_eq!(
            PresentationState::from_snapshot(&StatisticsSnapshot::new(), true),
            PresentationState::RunningNoData
        );
    }

    #[test]
    fn history_alone_is_not_current_data() {
        let snapshot = StatisticsSnapshot::new().with_series(USAGE_HISTORY, vec![5.0]);
        assert_eq!(
            PresentationState::from_snapshot(&snapshot, true),
            PresentationState::RunningNoData
        );
    }

    #[test]
    fn explicit_zero_is_data() {
        let snapshot = StatisticsSnapshot::new().with_value(CURRENT_TOTAL, 0.0);
        assert!(has_current_total(&snapshot));
        assert_eq!(
            PresentationState::from_snapshot(&snapshot, true),
            PresentationState::RunningWithData
        );
    }

    #[test]
    fn current_total_record_without_datum_is_data() {
        for json in [
            r#"{"current.total": {}}"#,
            r#"{"current.total": {"datum": null}}"#,
            r#"{"current.total": {"datum": "n/a"}}"#,
        ] {
            let snapshot: StatisticsSnapshot = serde_json::from_str(json).unwrap();
            assert!(has_current_total(&snapshot), "{json}");
            assert_eq!(
                PresentationState::from_snapshot(&snapshot, true),
                PresentationState::RunningWithData
            );

            let usage = normalize(&snapshot);
            assert_eq!(usage.used, 0.0);
            assert_eq!(usage.available, 100.0);
        }
    }
}
