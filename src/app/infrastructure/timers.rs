//! Cancellable scheduling over FLTK timeouts.
//!
//! FLTK's `add_timeout3` has no handle-free cancellation, so every owner of
//! a pending delay carries a generation counter instead: scheduled messages
//! embed the generation they were armed under, and a bump makes any
//! in-flight firing stale. The dispatch loop checks `accepts` before
//! acting.

use fltk::app;

/// Fire a message after `delay_secs` on the UI event loop.
pub fn schedule<M>(delay_secs: f64, sender: app::Sender<M>, message: M)
where
    M: Send + Sync + Clone + 'static,
{
    app::add_timeout3(delay_secs, move |_| sender.send(message.clone()));
}

/// Generation counter with a single owner. Rearming invalidates everything
/// scheduled before it.
#[derive(Debug, Default)]
pub struct TimerToken {
    generation: u64,
}

impl TimerToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate prior schedules and return the generation a new timeout
    /// should carry.
    pub fn rearm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Invalidate prior schedules without arming a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

/// Coalesce a burst of triggers into one message after a quiet period.
#[derive(Debug)]
pub struct Debouncer {
    token: TimerToken,
    delay_secs: f64,
}

impl Debouncer {
    pub fn new(delay_secs: f64) -> Self {
        Self {
            token: TimerToken::new(),
            delay_secs,
        }
    }

    /// (Re)start the quiet period. `make` receives the generation to embed
    /// in the scheduled message.
    pub fn trigger<M, F>(&mut self, sender: app::Sender<M>, make: F)
    where
        M: Send + Sync + Clone + 'static,
        F: FnOnce(u64) -> M,
    {
        let generation = self.token.rearm();
        schedule(self.delay_secs, sender, make(generation));
    }

    pub fn accepts(&self, generation: u64) -> bool {
        self.token.accepts(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rearm_invalidates_previous_generation() {
        let mut token = TimerToken::new();
        let first = token.rearm();
        assert!(token.accepts(first));

        let second = token.rearm();
        assert!(!token.accepts(first));
        assert!(token.accepts(second));
    }

    #[test]
    fn test_cancel_leaves_nothing_accepted() {
        let mut token = TimerToken::new();
        let armed = token.rearm();
        token.cancel();
        assert!(!token.accepts(armed));
    }

    #[test]
    fn test_debouncer_tracks_latest_trigger_only() {
        let mut debouncer = Debouncer::new(0.25);
        // Simulate two triggers by rearming the inner token directly; only
        // the newest generation may fire.
        let first = debouncer.token.rearm();
        let second = debouncer.token.rearm();
        assert!(!debouncer.accepts(first));
        assert!(debouncer.accepts(second));
    }
}
