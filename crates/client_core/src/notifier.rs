//! Transient UI affordances driven by a single cancellable deadline each.
//!
//! Re-arming replaces the pending deadline, so an older trigger can never
//! hide state shown by a newer one.

use std::time::{Duration, Instant};

pub const ALERT_DURATION: Duration = Duration::from_millis(3000);
pub const THEME_TRANSITION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone)]
pub struct AlertNotifier {
    message: String,
    hide_at: Option<Instant>,
    duration: Duration,
}

impl Default for AlertNotifier {
    fn default() -> Self {
        Self::with_duration(ALERT_DURATION)
    }
}

impl AlertNotifier {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            message: String::new(),
            hide_at: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.hide_at = Some(now + self.duration);
        tracing::debug!(message = %self.message, "alert shown");
    }

    /// Hides the banner once its deadline has passed. Returns true when this
    /// call hid it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.hide_at = None;
    }

    pub fn is_visible(&self) -> bool {
        self.hide_at.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.is_visible().then_some(self.message.as_str())
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.hide_at.map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// A class-style flag that clears itself after a fixed delay, e.g. the
/// `transitioning` state of the theme toggle.
#[derive(Debug, Clone)]
pub struct TransitionFlag {
    clear_at: Option<Instant>,
    duration: Duration,
}

impl Default for TransitionFlag {
    fn default() -> Self {
        Self::with_duration(THEME_TRANSITION)
    }
}

impl TransitionFlag {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            clear_at: None,
            duration,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.clear_at = Some(now + self.duration);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.clear_at.is_some()
    }

    /// Fraction of the transition elapsed, in `0.0..=1.0`; `None` when idle.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let deadline = self.clear_at?;
        if self.duration.is_zero() {
            return Some(1.0);
        }
        let left = deadline.saturating_duration_since(now).as_secs_f32();
        Some((1.0 - left / self.duration.as_secs_f32()).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_hides_after_its_duration() {
        let start = Instant::now();
        let mut alert = AlertNotifier::default();
        alert.show("Shoe added successfully!", start);

        assert!(!alert.poll(start + Duration::from_millis(2999)));
        assert_eq!(alert.message(), Some("Shoe added successfully!"));
        assert!(alert.poll(start + ALERT_DURATION));
        assert_eq!(alert.message(), None);
    }

    #[test]
    fn later_show_replaces_pending_hide() {
        let start = Instant::now();
        let mut alert = AlertNotifier::default();
        alert.show("first", start);
        alert.show("second", start + Duration::from_millis(2000));

        // The first deadline passes without hiding the second message.
        assert!(!alert.poll(start + Duration::from_millis(3500)));
        assert_eq!(alert.message(), Some("second"));
        assert!(alert.poll(start + Duration::from_millis(5000)));
    }

    #[test]
    fn dismiss_hides_immediately() {
        let start = Instant::now();
        let mut alert = AlertNotifier::default();
        alert.show("x", start);
        alert.dismiss();
        assert!(!alert.is_visible());
        assert_eq!(alert.remaining(start), None);
    }

    #[test]
    fn transition_flag_clears_once() {
        let start = Instant::now();
        let mut flag = TransitionFlag::default();
        flag.arm(start);
        assert!(flag.is_active());
        assert_eq!(flag.progress(start), Some(0.0));
        assert!(!flag.poll(start + Duration::from_millis(599)));
        assert!(flag.poll(start + THEME_TRANSITION));
        assert!(!flag.poll(start + THEME_TRANSITION));
        assert_eq!(flag.progress(start), None);
    }
}
