use super::*;

use uuid::Uuid;

// =============================================================
// Loading
// =============================================================

#[test]
fn session_default_is_idle() {
    let state = SessionState::default();
    assert!(state.floor_id.is_none());
    assert_eq!(state.load, LoadStatus::Idle);
    assert!(!state.is_ready());
    assert_eq!(state.status_label(), "No floor");
}

#[test]
fn start_loading_sets_floor_and_status() {
    let mut state = SessionState::default();
    let id = Uuid::new_v4();
    assert!(state.start_loading(id));
    assert_eq!(state.floor_id, Some(id));
    assert_eq!(state.load, LoadStatus::Loading);
}

#[test]
fn start_loading_same_floor_twice_is_refused() {
    let mut state = SessionState::default();
    let id = Uuid::new_v4();
    state.start_loading(id);
    assert!(!state.start_loading(id));
    state.finish_loading(id, Ok(()));
    assert!(!state.start_loading(id));
}

#[test]
fn start_loading_after_failure_retries() {
    let mut state = SessionState::default();
    let id = Uuid::new_v4();
    state.start_loading(id);
    state.finish_loading(id, Err("boom".to_owned()));
    assert!(state.start_loading(id));
    assert!(state.last_error.is_none());
}

#[test]
fn switching_floor_resets_in_flight_work() {
    let mut state = SessionState::default();
    let first = Uuid::new_v4();
    state.start_loading(first);
    state.begin_save();
    state.begin_booking(Uuid::new_v4());
    assert!(state.start_loading(Uuid::new_v4()));
    assert_eq!(state.pending_saves, 0);
    assert!(state.booking_in_flight.is_none());
}

#[test]
fn finish_loading_success_marks_ready() {
    let mut state = SessionState::default();
    let id = Uuid::new_v4();
    state.start_loading(id);
    assert!(state.finish_loading(id, Ok(())));
    assert!(state.is_ready());
    assert_eq!(state.status_label(), "Saved");
}

#[test]
fn finish_loading_failure_records_error() {
    let mut state = SessionState::default();
    let id = Uuid::new_v4();
    state.start_loading(id);
    state.finish_loading(id, Err("fetch floor failed: 404".to_owned()));
    assert_eq!(state.load, LoadStatus::Failed("fetch floor failed: 404".to_owned()));
    assert_eq!(state.last_error.as_deref(), Some("fetch floor failed: 404"));
    assert_eq!(state.status_label(), "Load failed");
}

#[test]
fn finish_loading_for_stale_floor_is_ignored() {
    let mut state = SessionState::default();
    let old = Uuid::new_v4();
    let new = Uuid::new_v4();
    state.start_loading(old);
    state.start_loading(new);
    assert!(!state.finish_loading(old, Ok(())));
    assert_eq!(state.load, LoadStatus::Loading);
}

// =============================================================
// Saves
// =============================================================

#[test]
fn saves_are_counted_in_status() {
    let mut state = SessionState::default();
    let id = Uuid::new_v4();
    state.start_loading(id);
    state.finish_loading(id, Ok(()));
    state.begin_save();
    state.begin_save();
    assert_eq!(state.status_label(), "Saving (2)…");
    state.end_save(Ok(()));
    state.end_save(Ok(()));
    assert_eq!(state.status_label(), "Saved");
}

#[test]
fn end_save_never_underflows() {
    let mut state = SessionState::default();
    state.end_save(Ok(()));
    assert_eq!(state.pending_saves, 0);
}

#[test]
fn failed_save_records_error() {
    let mut state = SessionState::default();
    state.begin_save();
    state.end_save(Err("save wall failed: 500".to_owned()));
    assert_eq!(state.last_error.as_deref(), Some("save wall failed: 500"));
}

// =============================================================
// Booking
// =============================================================

#[test]
fn only_one_booking_in_flight() {
    let mut state = SessionState::default();
    let a = Uuid::new_v4();
    assert!(state.begin_booking(a));
    assert!(!state.begin_booking(Uuid::new_v4()));
    assert_eq!(state.booking_in_flight, Some(a));
    state.end_booking(Ok(()));
    assert!(state.begin_booking(Uuid::new_v4()));
}

#[test]
fn failed_booking_releases_slot_and_records_error() {
    let mut state = SessionState::default();
    state.begin_booking(Uuid::new_v4());
    state.end_booking(Err("booking failed: 409".to_owned()));
    assert!(state.booking_in_flight.is_none());
    assert_eq!(state.last_error.as_deref(), Some("booking failed: 409"));
}
