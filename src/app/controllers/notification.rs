use crate::app::domain::Severity;
use crate::app::infrastructure::timers::TimerToken;

/// Seconds a toast stays up without being dismissed.
pub const NOTIFICATION_SECS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// At most one notification at a time. Showing a new one evicts the
/// current toast and cancels its expiry timer by rearming the generation.
pub struct NotificationController {
    token: TimerToken,
    current: Option<Notice>,
}

impl NotificationController {
    pub fn new() -> Self {
        Self {
            token: TimerToken::new(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Returns the generation for the auto-dismiss timer.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.current = Some(Notice {
            message: message.into(),
            severity,
        });
        self.token.rearm()
    }

    /// An expiry timer fired. True when it is still current and the toast
    /// should come down.
    pub fn expired(&mut self, generation: u64) -> bool {
        if !self.token.accepts(generation) || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Manual dismissal cancels the pending expiry.
    pub fn dismiss(&mut self) {
        self.token.cancel();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notice_evicts_prior() {
        let mut ctrl = NotificationController::new();
        let first = ctrl.show("one", Severity::Info);
        let second = ctrl.show("two", Severity::Success);

        // Exactly one visible, the newest
        assert_eq!(ctrl.current().unwrap().message, "two");
        // The first toast's timer can no longer dismiss anything
        assert!(!ctrl.expired(first));
        assert!(ctrl.current().is_some());
        // The live timer still works
        assert!(ctrl.expired(second));
        assert!(ctrl.current().is_none());
    }

    #[test]
    fn test_manual_dismiss_cancels_timer() {
        let mut ctrl = NotificationController::new();
        let generation = ctrl.show("bye", Severity::Error);
        ctrl.dismiss();
        assert!(ctrl.current().is_none());
        assert!(!ctrl.expired(generation));
    }

    #[test]
    fn test_expired_is_single_shot() {
        let mut ctrl = NotificationController::new();
        let generation = ctrl.show("once", Severity::Info);
        assert!(ctrl.expired(generation));
        assert!(!ctrl.expired(generation));
    }
}
