use crate::config::CarouselConfig;
use crate::layout::{CardLayout, stack_layout};

/// Drives the card stack: owns the active index, the transition guard and
/// the auto-rotation countdown. Knows nothing about textures or the window,
/// so the whole state machine is testable without one.
///
/// The host calls `tick(dt)` once per frame and re-applies `layout()`
/// whenever an advance was accepted.
pub struct Carousel {
    len: usize,
    active_index: usize,

    is_animating: bool,
    transition_timer: f32,

    // Present iff auto-rotation is running; holds seconds until the next fire
    auto_timer: Option<f32>,

    config: CarouselConfig,
}

impl Carousel {
    /// An empty deck yields an inert controller: every operation becomes a
    /// no-op rather than an error.
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            len,
            active_index: 0,
            is_animating: false,
            transition_timer: 0.0,
            auto_timer: None,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn auto_rotation_running(&self) -> bool {
        self.auto_timer.is_some()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Advance the deck by one: top card goes to the back. Returns whether
    /// the advance was accepted; calls landing mid-transition are dropped,
    /// not queued.
    pub fn advance(&mut self) -> bool {
        if self.len == 0 || self.is_animating {
            return false;
        }
        self.active_index = (self.active_index + 1) % self.len;
        self.is_animating = true;
        self.transition_timer = 0.0;
        true
    }

    /// Transforms for the current active index, one per card.
    pub fn layout(&self) -> Vec<CardLayout> {
        stack_layout(self.len, self.active_index, &self.config)
    }

    /// Idempotent; never installs a timer when the reduced-motion
    /// preference was set at construction time.
    pub fn start_auto_rotation(&mut self) {
        if self.config.reduced_motion || self.len == 0 || self.auto_timer.is_some() {
            return;
        }
        self.auto_timer = Some(self.config.rotation_interval);
    }

    /// Idempotent; releases the countdown so pause/resume cycles can never
    /// stack timers.
    pub fn stop_auto_rotation(&mut self) {
        self.auto_timer = None;
    }

    /// Pointer or keyboard activation. Dropped outright while a transition
    /// is in flight (the running auto timer is left as-is); otherwise
    /// stop, advance, start, so the countdown restarts from a full interval
    /// and a hover pause ends here. The reduced-motion and empty-deck gates
    /// inside `start_auto_rotation` still apply.
    pub fn activate(&mut self) -> bool {
        if self.is_animating {
            return false;
        }
        self.stop_auto_rotation();
        let accepted = self.advance();
        self.start_auto_rotation();
        accepted
    }

    /// Per-frame update: runs down the transition guard and the
    /// auto-rotation countdown. Returns whether an auto-advance was
    /// accepted this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_animating {
            self.transition_timer += dt;
            if self.transition_timer >= self.config.transition_duration {
                self.is_animating = false;
                self.transition_timer = 0.0;
            }
        }

        let Some(remaining) = self.auto_timer.as_mut() else {
            return false;
        };

        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }
        // Re-arm regardless; a fire landing mid-transition is dropped
        *remaining = self.config.rotation_interval;
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, CarouselConfig::default())
    }

    fn settle(c: &mut Carousel) {
        // Outlive the transition guard without reaching the next auto fire
        c.tick(c.config().transition_duration + 0.01);
    }

    #[test]
    fn index_tracks_accepted_advances_mod_len() {
        for len in 1..=6 {
            let mut c = carousel(len);
            assert_eq!(c.len(), len);
            let mut accepted = 0usize;
            for _ in 0..23 {
                if c.advance() {
                    accepted += 1;
                }
                assert!(c.active_index() < len);
                settle(&mut c);
            }
            assert_eq!(c.active_index(), accepted % len);
        }
    }

    #[test]
    fn advance_is_dropped_while_animating() {
        let mut c = carousel(4);
        assert!(c.advance());
        assert_eq!(c.active_index(), 1);
        assert!(c.is_animating());

        // Rapid calls mid-transition change nothing
        assert!(!c.advance());
        assert!(!c.advance());
        assert_eq!(c.active_index(), 1);

        settle(&mut c);
        assert!(!c.is_animating());
        assert!(c.advance());
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn single_card_deck_never_moves() {
        let mut c = carousel(1);
        for _ in 0..10 {
            c.advance();
            settle(&mut c);
            assert_eq!(c.active_index(), 0);
        }
        assert_eq!(c.layout()[0].order, 0);
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut c = carousel(0);
        assert!(c.is_empty());
        assert!(!c.advance());
        c.start_auto_rotation();
        assert!(!c.auto_rotation_running());
        assert!(c.layout().is_empty());
        assert!(!c.tick(1.0));
    }

    #[test]
    fn reduced_motion_never_installs_a_timer() {
        let cfg = CarouselConfig {
            reduced_motion: true,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(5, cfg);
        for _ in 0..3 {
            c.start_auto_rotation();
            assert!(!c.auto_rotation_running());
        }
    }

    #[test]
    fn start_is_idempotent_and_does_not_reset_the_countdown() {
        let mut c = carousel(3);
        c.start_auto_rotation();
        // Burn most of the interval, then call start again
        c.tick(c.config().rotation_interval - 0.1);
        c.start_auto_rotation();
        // The original countdown still fires on schedule
        assert!(c.tick(0.2));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn stop_twice_is_harmless() {
        let mut c = carousel(3);
        c.start_auto_rotation();
        c.stop_auto_rotation();
        c.stop_auto_rotation();
        assert!(!c.auto_rotation_running());
        // No timer left: nothing fires no matter how long we wait
        assert!(!c.tick(100.0));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn auto_rotation_fires_once_per_interval() {
        let mut c = carousel(4);
        c.start_auto_rotation();
        let interval = c.config().rotation_interval;

        assert!(!c.tick(interval * 0.5));
        assert!(c.tick(interval * 0.5));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn auto_fire_mid_transition_is_dropped_and_rearmed() {
        let cfg = CarouselConfig {
            // Transition outlasts the interval so the next fire lands mid-flight
            transition_duration: 10.0,
            rotation_interval: 1.0,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(4, cfg);
        c.start_auto_rotation();

        assert!(c.tick(1.0));
        assert_eq!(c.active_index(), 1);

        // Next fire arrives while still animating: dropped, countdown re-armed
        assert!(!c.tick(1.0));
        assert_eq!(c.active_index(), 1);
        assert!(c.auto_rotation_running());
    }

    #[test]
    fn activation_pauses_then_resumes_auto_rotation() {
        let mut c = carousel(5);
        c.start_auto_rotation();
        assert!(c.activate());
        assert_eq!(c.active_index(), 1);
        assert!(c.auto_rotation_running());

        // Mid-transition activation is dropped and leaves the timer running
        assert!(!c.activate());
        assert_eq!(c.active_index(), 1);
        assert!(c.auto_rotation_running());
    }

    #[test]
    fn activation_resumes_after_hover_pause() {
        let mut c = carousel(5);
        c.start_auto_rotation();
        // Hover-enter releases the timer; a click while hovering must
        // re-install it
        c.stop_auto_rotation();
        assert!(!c.auto_rotation_running());

        assert!(c.activate());
        assert_eq!(c.active_index(), 1);
        assert!(c.auto_rotation_running());
    }

    #[test]
    fn activation_under_reduced_motion_installs_no_timer() {
        let cfg = CarouselConfig {
            reduced_motion: true,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(5, cfg);
        assert!(c.activate());
        assert_eq!(c.active_index(), 1);
        assert!(!c.auto_rotation_running());
    }

    #[test]
    fn activation_resets_the_countdown() {
        let mut c = carousel(5);
        c.start_auto_rotation();
        let interval = c.config().rotation_interval;

        c.tick(interval - 0.1);
        assert!(c.activate());
        settle(&mut c);

        // Old countdown was discarded; a fresh interval must elapse
        assert!(!c.tick(0.2));
        assert!(c.tick(interval));
    }
}
