//! Countdown state behind the global rate-limit snackbar.
//!
//! Any service call that fails with a 429 routes its notice here; the
//! snackbar component ticks the countdown once per second and hides itself
//! when it reaches zero or the user dismisses it.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use crate::net::error::RateLimitNotice;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateLimitState {
    notice: Option<RateLimitNotice>,
    remaining_seconds: u32,
}

impl RateLimitState {
    /// Show the snackbar. A fresh notice restarts the countdown even if one
    /// is already showing.
    pub fn activate(&mut self, notice: RateLimitNotice) {
        self.remaining_seconds = notice.reset_time_seconds;
        self.notice = Some(notice);
    }

    pub fn is_active(&self) -> bool {
        self.notice.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.message.as_str())
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Advance the countdown by one second; auto-dismisses at zero.
    pub fn tick(&mut self) {
        if self.notice.is_none() {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.notice = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
        self.remaining_seconds = 0;
    }
}
