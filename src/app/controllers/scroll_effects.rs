use crate::app::infrastructure::timers::TimerToken;
use crate::app::services::counters::CounterAnim;
use crate::app::services::sections::{
    REVEAL_THRESHOLD, SCROLL_FRAMES, STATS_THRESHOLD, eased_position, visible_fraction,
};

struct ScrollAnim {
    from: i32,
    to: i32,
    frame: u32,
}

/// Reveal-on-scroll, the stats counter trigger, and animated anchor
/// scrolling. Each reveal target and the stats row fire at most once no
/// matter how often they cross the viewport.
pub struct ScrollEffectsController {
    revealed: Vec<bool>,
    stats_started: bool,
    counters: Vec<(usize, CounterAnim)>,
    anim: Option<ScrollAnim>,
    anim_token: TimerToken,
    tick_pending: bool,
}

impl ScrollEffectsController {
    pub fn new(reveal_count: usize) -> Self {
        Self {
            revealed: vec![false; reveal_count],
            stats_started: false,
            counters: Vec::new(),
            anim: None,
            anim_token: TimerToken::new(),
            tick_pending: false,
        }
    }

    // --- scroll coalescing ---

    /// Called for every raw scroll event. Returns true when a settle tick
    /// should be scheduled; further events before it fires are absorbed.
    pub fn request_tick(&mut self) -> bool {
        if self.tick_pending {
            return false;
        }
        self.tick_pending = true;
        true
    }

    pub fn tick_done(&mut self) {
        self.tick_pending = false;
    }

    // --- reveals ---

    /// One sweep over the reveal targets. Returns the indices that newly
    /// qualify, in order; they are marked immediately so they can never be
    /// returned twice. With no usable viewport every remaining target
    /// qualifies at once.
    pub fn sweep(&mut self, geometry: &[(i32, i32)], scroll_y: i32, viewport_h: i32) -> Vec<usize> {
        let mut fresh = Vec::new();
        for (i, done) in self.revealed.iter_mut().enumerate() {
            if *done {
                continue;
            }
            let qualifies = if viewport_h <= 0 {
                true
            } else {
                match geometry.get(i) {
                    Some(&(top, height)) => {
                        visible_fraction(top, height, scroll_y, viewport_h) >= REVEAL_THRESHOLD
                    }
                    None => false,
                }
            };
            if qualifies {
                *done = true;
                fresh.push(i);
            }
        }
        fresh
    }

    // --- stats counter ---

    /// One-shot trigger: true exactly once, when the stats row is at least
    /// half visible (or geometry is unusable).
    pub fn stats_due(&mut self, top: i32, height: i32, scroll_y: i32, viewport_h: i32) -> bool {
        if self.stats_started {
            return false;
        }
        let due =
            viewport_h <= 0 || visible_fraction(top, height, scroll_y, viewport_h) >= STATS_THRESHOLD;
        if due {
            self.stats_started = true;
        }
        due
    }

    pub fn start_counters(&mut self, values: &[String]) {
        self.counters = values
            .iter()
            .enumerate()
            .filter_map(|(i, value)| CounterAnim::parse(value).map(|anim| (i, anim)))
            .collect();
    }

    pub fn counters_active(&self) -> bool {
        !self.counters.is_empty()
    }

    /// Advance every live counter one step and return the texts to display.
    /// Finished counters deliver their exact original text and drop out.
    pub fn tick_counters(&mut self) -> Vec<(usize, String)> {
        let mut updates = Vec::new();
        for (i, anim) in &mut self.counters {
            anim.advance();
            updates.push((*i, anim.display()));
        }
        self.counters.retain(|(_, anim)| !anim.finished());
        updates
    }

    // --- animated anchor scroll ---

    /// Begin an eased scroll. Returns the generation the frame timer must
    /// carry; starting a new scroll or any manual scrolling invalidates it.
    pub fn begin_scroll(&mut self, from: i32, to: i32) -> u64 {
        self.anim = Some(ScrollAnim { from, to, frame: 0 });
        self.anim_token.rearm()
    }

    pub fn cancel_scroll(&mut self) {
        self.anim = None;
        self.anim_token.cancel();
    }

    pub fn scrolling(&self) -> bool {
        self.anim.is_some()
    }

    /// Advance the animation for a timer firing of `generation`. Returns
    /// the next scroll position and whether the animation completed; stale
    /// generations return None.
    pub fn scroll_frame(&mut self, generation: u64) -> Option<(i32, bool)> {
        if !self.anim_token.accepts(generation) {
            return None;
        }
        let anim = self.anim.as_mut()?;
        anim.frame += 1;
        let pos = eased_position(anim.from, anim.to, anim.frame, SCROLL_FRAMES);
        let done = anim.frame >= SCROLL_FRAMES;
        if done {
            self.anim = None;
        }
        Some((pos, done))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_exactly_once() {
        let mut fx = ScrollEffectsController::new(2);
        let geometry = vec![(0, 100), (2000, 100)];

        let first = fx.sweep(&geometry, 0, 600);
        assert_eq!(first, vec![0]);

        // Element 0 leaves and re-enters the viewport: still nothing new
        assert!(fx.sweep(&geometry, 3000, 600).is_empty());
        assert!(fx.sweep(&geometry, 0, 600).is_empty());

        // Element 1 arrives once scrolled down
        assert_eq!(fx.sweep(&geometry, 1900, 600), vec![1]);
        assert!(fx.sweep(&geometry, 1900, 600).is_empty());
    }

    #[test]
    fn test_reveal_fallback_without_viewport() {
        let mut fx = ScrollEffectsController::new(3);
        let all = fx.sweep(&[], 0, 0);
        assert_eq!(all, vec![0, 1, 2]);
        assert!(fx.sweep(&[], 0, 600).is_empty());
    }

    #[test]
    fn test_stats_trigger_is_one_shot_at_half_visible() {
        let mut fx = ScrollEffectsController::new(0);
        // 30 of 80 px visible: below the 50% threshold
        assert!(!fx.stats_due(600, 80, 100, 580));
        // Fully visible
        assert!(fx.stats_due(300, 80, 100, 600));
        // Never again
        assert!(!fx.stats_due(300, 80, 100, 600));
    }

    #[test]
    fn test_counters_run_to_exact_original() {
        let mut fx = ScrollEffectsController::new(0);
        fx.start_counters(&["500+".to_string(), "—".to_string()]);
        assert!(fx.counters_active());

        let mut last = Vec::new();
        while fx.counters_active() {
            last = fx.tick_counters();
        }
        assert_eq!(last, vec![(0, "500+".to_string())]);
    }

    #[test]
    fn test_scroll_frames_respect_generation() {
        let mut fx = ScrollEffectsController::new(0);
        let stale = fx.begin_scroll(0, 500);
        let fresh = fx.begin_scroll(0, 800);
        assert_eq!(fx.scroll_frame(stale), None);

        let (pos, done) = fx.scroll_frame(fresh).unwrap();
        assert!(pos >= 0 && !done);

        fx.cancel_scroll();
        assert_eq!(fx.scroll_frame(fresh), None);
    }

    #[test]
    fn test_scroll_animation_reaches_target() {
        let mut fx = ScrollEffectsController::new(0);
        let generation = fx.begin_scroll(100, 700);
        let mut last = (0, false);
        while let Some(step) = fx.scroll_frame(generation) {
            last = step;
            if step.1 {
                break;
            }
        }
        assert_eq!(last, (700, true));
        assert!(!fx.scrolling());
    }

    #[test]
    fn test_tick_coalescing() {
        let mut fx = ScrollEffectsController::new(0);
        assert!(fx.request_tick());
        assert!(!fx.request_tick());
        fx.tick_done();
        assert!(fx.request_tick());
    }
}
