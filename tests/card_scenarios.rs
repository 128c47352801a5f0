use insta::assert_debug_snapshot;
use vmutil::presentation::PresentationState;
use vmutil::stats::loader::parse_snapshot;
use vmutil::usage::normalize;

#[test]
fn stopped_vm_ignores_stats_content() {
    let snapshot = parse_snapshot(
        r#"{"current.total": {"datum": 35}, "usage.history": {"datum": [10, 20, 30]}}"#,
    );
    assert_eq!(
        PresentationState::from_snapshot(&snapshot, false),
        PresentationState::NotRunning
    );
}

#[test]
fn running_with_empty_snapshot_has_no_data() {
    let snapshot = parse_snapshot("{}");
    assert_eq!(
        PresentationState::from_snapshot(&snapshot, true),
        PresentationState::RunningNoData
    );
}

#[test]
fn running_with_stats_normalizes_for_charts() {
    let snapshot = parse_snapshot(
        r#"{"current.total": {"datum": 35}, "usage.history": {"datum": [10, 20, 30]}}"#,
    );
    assert_eq!(
        PresentationState::from_snapshot(&snapshot, true),
        PresentationState::RunningWithData
    );

    let usage = normalize(&snapshot);
    assert!(!usage.shows_history_placeholder());
    assert_debug_snapshot!(usage, @r"
    Utilization {
        used: 35.0,
        available: 65.0,
        history: [
            30.0,
            20.0,
            10.0,
        ],
    }
    ");
}

#[test]
fn explicit_zero_is_live_data() {
    let snapshot = parse_snapshot(r#"{"current.total": {"datum": 0}}"#);
    assert_eq!(
        PresentationState::from_snapshot(&snapshot, true),
        PresentationState::RunningWithData
    );

    let usage = normalize(&snapshot);
    assert_eq!(usage.used, 0.0);
    assert_eq!(usage.available, 100.0);
    assert!(usage.shows_history_placeholder());
}

#[test]
fn current_total_without_datum_draws_zero_usage() {
    for json in [r#"{"current.total": {}}"#, r#"{"current.total": {"datum": null}}"#] {
        let snapshot = parse_snapshot(json);
        assert_eq!(
            PresentationState::from_snapshot(&snapshot, true),
            PresentationState::RunningWithData
        );

        let usage = normalize(&snapshot);
        assert_eq!(usage.used, 0.0);
        assert_eq!(usage.available, 100.0);
        assert!(usage.shows_history_placeholder());
    }
}
