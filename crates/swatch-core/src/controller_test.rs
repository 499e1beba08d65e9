use std::sync::Mutex;

use super::*;
use crate::test_support::tee_catalog;

fn controller() -> SelectionController {
    SelectionController::new(Arc::new(tee_catalog()))
}

#[test]
fn starts_incomplete_with_empty_selection() {
    let controller = controller();
    assert_eq!(controller.status(), SelectionStatus::Incomplete);
    assert!(controller.current_state().selection.is_empty());
}

#[test]
fn set_option_walks_through_states() {
    let mut controller = controller();

    let state = controller.set_option("pa_color", "red").unwrap();
    assert_eq!(state.status(), SelectionStatus::Incomplete);

    let state = controller.set_option("pa_size", "m").unwrap();
    assert_eq!(state.status(), SelectionStatus::Unavailable);

    let state = controller.set_option("pa_size", "s").unwrap();
    assert_eq!(state.status(), SelectionStatus::Resolved);
    assert_eq!(
        state.matched_variation.as_ref().map(|v| v.id.as_str()),
        Some("1")
    );

    let state = controller.set_option("pa_size", "").unwrap();
    assert_eq!(state.status(), SelectionStatus::Incomplete);
}

#[test]
fn set_option_rejects_unknown_slug_without_changing_selection() {
    let mut controller = controller();
    controller.set_option("pa_color", "red").unwrap();

    let err = controller.set_option("pa_color", "green").unwrap_err();
    assert_eq!(
        err,
        SelectionError::InvalidOption {
            axis: "pa_color".to_string(),
            slug: "green".to_string()
        }
    );
    assert_eq!(controller.current_state().selection.get("pa_color"), Some("red"));
}

#[test]
fn set_option_rejects_unknown_axis() {
    let mut controller = controller();
    let err = controller.set_option("pa_material", "").unwrap_err();
    assert!(matches!(err, SelectionError::InvalidOption { ref axis, .. } if axis == "pa_material"));
}

#[test]
fn reset_is_idempotent() {
    let mut controller = controller();
    controller.set_option("pa_color", "blue").unwrap();
    controller.set_option("pa_size", "s").unwrap();

    let first = controller.reset().clone();
    let second = controller.reset().clone();
    assert_eq!(first, second);
    assert!(first.selection.is_empty());
    assert_eq!(first.status(), SelectionStatus::Incomplete);
}

#[test]
fn current_state_is_a_pure_read() {
    let mut controller = controller();
    controller.set_option("pa_color", "blue").unwrap();
    let a = controller.current_state().clone();
    let b = controller.current_state().clone();
    assert_eq!(a, b);
}

#[test]
fn seeded_defaults_round_trip_into_state() {
    let controller =
        SelectionController::with_defaults(Arc::new(tee_catalog()), [("pa_color", "red")])
            .unwrap();
    let state = controller.current_state();
    assert_eq!(state.selection.get("pa_color"), Some("red"));
    assert_eq!(state.selection.len(), 1);
    assert_eq!(state.status(), SelectionStatus::Incomplete);
}

#[test]
fn full_defaults_resolve_immediately() {
    let controller = SelectionController::with_defaults(
        Arc::new(tee_catalog()),
        [("pa_color", "blue"), ("pa_size", "s")],
    )
    .unwrap();
    assert_eq!(controller.status(), SelectionStatus::Resolved);
}

#[test]
fn second_seed_is_rejected_and_selection_kept() {
    let mut controller =
        SelectionController::with_defaults(Arc::new(tee_catalog()), [("pa_color", "red")])
            .unwrap();
    let err = controller.seed_defaults([("pa_color", "blue")]).unwrap_err();
    assert_eq!(err, SelectionError::AlreadySeeded);
    assert_eq!(controller.current_state().selection.get("pa_color"), Some("red"));
}

#[test]
fn seed_after_user_change_is_rejected() {
    let mut controller = controller();
    controller.set_option("pa_size", "s").unwrap();
    let err = controller.seed_defaults([("pa_color", "red")]).unwrap_err();
    assert_eq!(err, SelectionError::AlreadySeeded);
    assert!(controller.current_state().selection.get("pa_color").is_none());
}

#[test]
fn invalid_defaults_apply_nothing() {
    let mut controller = controller();
    let err = controller
        .seed_defaults([("pa_color", "red"), ("pa_size", "xl")])
        .unwrap_err();
    assert!(matches!(err, SelectionError::InvalidOption { ref slug, .. } if slug == "xl"));
    assert!(controller.current_state().selection.is_empty());
}

#[test]
fn empty_default_values_are_skipped() {
    let controller = SelectionController::with_defaults(
        Arc::new(tee_catalog()),
        [("pa_color", "red"), ("pa_size", "")],
    )
    .unwrap();
    assert!(!controller.current_state().selection.is_set("pa_size"));
}

#[test]
fn listeners_see_every_new_state() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut controller = controller();
    controller.subscribe(move |state| {
        sink.lock().unwrap().push(state.status());
    });

    controller.set_option("pa_color", "blue").unwrap();
    controller.set_option("pa_size", "s").unwrap();
    let _ = controller.set_option("pa_size", "xl");
    controller.reset();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            SelectionStatus::Incomplete,
            SelectionStatus::Resolved,
            SelectionStatus::Incomplete,
        ]
    );
}
