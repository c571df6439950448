use std::time::Instant;

use crate::app::domain::FieldId;
use crate::app::infrastructure::timers::TimerToken;
use crate::app::services::submit::unlock_delay;
use crate::app::services::validation::{FieldState, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Field validation states and the submission lifecycle. The submit button
/// lock is released through a generation-checked timer so every outcome
/// (success, failure, worker error) funnels through the same unlock path.
pub struct FormController {
    states: [FieldState; 3],
    submission: SubmissionState,
    started: Option<Instant>,
    unlock_token: TimerToken,
    endpoint: String,
}

fn idx(field: FieldId) -> usize {
    match field {
        FieldId::Name => 0,
        FieldId::Email => 1,
        FieldId::Message => 2,
    }
}

impl FormController {
    pub fn new(endpoint: String) -> Self {
        Self {
            states: [FieldState::Untouched, FieldState::Untouched, FieldState::Untouched],
            submission: SubmissionState::Idle,
            started: None,
            unlock_token: TimerToken::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self, field: FieldId) -> &FieldState {
        &self.states[idx(field)]
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_sending(&self) -> bool {
        self.submission == SubmissionState::Sending
    }

    /// Blur validates the field and records the result.
    pub fn blur(&mut self, field: FieldId, value: &str) -> &FieldState {
        self.states[idx(field)] = validate(field, value);
        self.state(field)
    }

    /// Editing clears an error immediately without revalidating. Returns
    /// true when there was an error to clear.
    pub fn edit(&mut self, field: FieldId) -> bool {
        if matches!(self.states[idx(field)], FieldState::Invalid(_)) {
            self.states[idx(field)] = FieldState::Untouched;
            return true;
        }
        false
    }

    /// Validate every field for a submit attempt. All results are recorded;
    /// returns true when the whole form is valid.
    pub fn validate_all(&mut self, values: &[(FieldId, String)]) -> bool {
        let mut ok = true;
        for (field, value) in values {
            let state = validate(*field, value);
            if matches!(state, FieldState::Invalid(_)) {
                ok = false;
            }
            self.states[idx(*field)] = state;
        }
        ok
    }

    /// Enter the sending state. False when a submission is already in
    /// flight (the button is disabled, but a queued click could race).
    pub fn begin_send(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        self.submission = SubmissionState::Sending;
        self.started = Some(Instant::now());
        true
    }

    /// Record the outcome and arm the button unlock: the generation to
    /// embed and the delay that tops the busy time up to the minimum.
    pub fn finish(&mut self, ok: bool) -> (u64, f64) {
        self.submission = if ok {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
        let elapsed = self
            .started
            .take()
            .map(|t| t.elapsed())
            .unwrap_or_default();
        (
            self.unlock_token.rearm(),
            unlock_delay(elapsed).as_secs_f64(),
        )
    }

    pub fn accepts_unlock(&self, generation: u64) -> bool {
        self.unlock_token.accepts(generation)
    }

    /// Reset all field states (after a successful send cleared the form).
    pub fn reset_fields(&mut self) {
        self.states = [FieldState::Untouched, FieldState::Untouched, FieldState::Untouched];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_records_validation() {
        let mut form = FormController::new("https://example.test/submit".to_string());
        assert_eq!(
            form.blur(FieldId::Email, "nope").message(),
            Some("Please enter a valid email address.")
        );
        assert_eq!(form.blur(FieldId::Email, "a@b.co"), &FieldState::Valid);
    }

    #[test]
    fn test_edit_clears_error_without_revalidating() {
        let mut form = FormController::new(String::new());
        form.blur(FieldId::Name, "");
        assert!(form.edit(FieldId::Name));
        // Cleared, not revalidated: the field is back to untouched
        assert_eq!(form.state(FieldId::Name), &FieldState::Untouched);
        // Editing a clean field reports nothing to repaint
        assert!(!form.edit(FieldId::Name));
    }

    #[test]
    fn test_validate_all_records_every_field() {
        let mut form = FormController::new(String::new());
        let ok = form.validate_all(&[
            (FieldId::Name, "Al".to_string()),
            (FieldId::Email, "bad".to_string()),
            (FieldId::Message, "this is long enough".to_string()),
        ]);
        assert!(!ok);
        assert_eq!(form.state(FieldId::Name), &FieldState::Valid);
        assert!(matches!(form.state(FieldId::Email), FieldState::Invalid(_)));

        let ok = form.validate_all(&[
            (FieldId::Name, "Al".to_string()),
            (FieldId::Email, "a@b.co".to_string()),
            (FieldId::Message, "this is long enough".to_string()),
        ]);
        assert!(ok);
    }

    #[test]
    fn test_send_lifecycle_and_unlock_generation() {
        let mut form = FormController::new(String::new());
        assert!(form.begin_send());
        assert!(form.is_sending());
        // Double submit is refused while in flight
        assert!(!form.begin_send());

        let (generation, delay) = form.finish(false);
        assert_eq!(form.submission(), SubmissionState::Failed);
        // The response came back immediately, so the full minimum remains
        assert!(delay > 0.9 && delay <= 1.0);
        assert!(form.accepts_unlock(generation));

        // A new send supersedes the old unlock
        assert!(form.begin_send());
        let (next, _) = form.finish(true);
        assert!(!form.accepts_unlock(generation));
        assert!(form.accepts_unlock(next));
        assert_eq!(form.submission(), SubmissionState::Succeeded);
    }

    #[test]
    fn test_reset_fields() {
        let mut form = FormController::new(String::new());
        form.blur(FieldId::Message, "short");
        form.reset_fields();
        assert_eq!(form.state(FieldId::Message), &FieldState::Untouched);
    }
}
