use super::*;

fn notice(seconds: u32) -> RateLimitNotice {
    RateLimitNotice {
        reset_time_seconds: seconds,
        message: "You have exceeded your request limit.".to_owned(),
    }
}

#[test]
fn activate_starts_the_countdown() {
    let mut state = RateLimitState::default();
    state.activate(notice(3));
    assert!(state.is_active());
    assert_eq!(state.remaining_seconds(), 3);
    assert_eq!(state.message(), Some("You have exceeded your request limit."));
}

#[test]
fn ticking_to_zero_auto_dismisses() {
    let mut state = RateLimitState::default();
    state.activate(notice(2));
    state.tick();
    assert!(state.is_active());
    state.tick();
    assert!(!state.is_active());
    assert_eq!(state.remaining_seconds(), 0);
}

#[test]
fn a_new_notice_restarts_an_active_countdown() {
    let mut state = RateLimitState::default();
    state.activate(notice(5));
    state.tick();
    state.activate(notice(9));
    assert_eq!(state.remaining_seconds(), 9);
}

#[test]
fn tick_on_idle_state_is_a_no_op() {
    let mut state = RateLimitState::default();
    state.tick();
    assert!(!state.is_active());
}

#[test]
fn manual_dismiss_clears_everything() {
    let mut state = RateLimitState::default();
    state.activate(notice(60));
    state.dismiss();
    assert!(!state.is_active());
    assert_eq!(state.remaining_seconds(), 0);
}
