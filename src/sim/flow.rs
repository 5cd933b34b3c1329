//! Scene flow: intro title, then the game
//!
//! The intro fades in over two seconds and hands over to a fresh game on
//! the first key press or after five seconds, whichever comes first.

use super::input::InputEvent;
use super::scene::{Scene, StepReport};
use super::snapshot::Snapshot;
use super::time::{TimeSource, WallClock};
use crate::consts::{INTRO_DURATION, INTRO_FADE_IN};

/// Intro timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intro {
    started_at: f64,
    elapsed: f64,
}

impl Intro {
    pub fn new(started_at: f64) -> Self {
        Self {
            started_at,
            elapsed: 0.0,
        }
    }

    /// Seconds since the intro started
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Fade-in opacity in [0, 1]
    pub fn opacity(&self) -> f64 {
        (self.elapsed / INTRO_FADE_IN).clamp(0.0, 1.0)
    }

    fn update(&mut self, now: f64) {
        self.elapsed = (now - self.started_at).max(0.0);
    }

    fn is_over(&self) -> bool {
        self.elapsed >= INTRO_DURATION
    }
}

/// What the renderer should draw this frame
#[derive(Debug, Clone, PartialEq)]
pub enum FlowView {
    Intro { opacity: f64, elapsed: f64 },
    Game(Snapshot),
}

#[derive(Debug)]
enum Phase<T: TimeSource> {
    Intro(Intro),
    Playing(Box<Scene<T>>),
}

/// Top-level driver surface: construct, step, snapshot
#[derive(Debug)]
pub struct Flow<T: TimeSource + Clone = WallClock> {
    phase: Phase<T>,
    clock: T,
    width: u32,
    height: u32,
    seed: u64,
}

impl<T: TimeSource + Clone> Flow<T> {
    /// Start with the intro
    pub fn with_intro(width: u32, height: u32, seed: u64, clock: T) -> Self {
        let intro = Intro::new(clock.now_seconds());
        Self {
            phase: Phase::Intro(intro),
            clock,
            width,
            height,
            seed,
        }
    }

    /// Skip the intro and start playing at once
    pub fn playing(width: u32, height: u32, seed: u64, clock: T) -> Self {
        let scene = Scene::with_clock(width, height, seed, clock.clone());
        Self {
            phase: Phase::Playing(Box::new(scene)),
            clock,
            width,
            height,
            seed,
        }
    }

    /// Advance one frame.
    ///
    /// Returns the game step's report, or `None` while the intro is showing.
    /// The event that ends the intro is also delivered to the first game step.
    pub fn step(&mut self, event: Option<InputEvent>) -> Option<StepReport> {
        if let Phase::Intro(intro) = &mut self.phase {
            intro.update(self.clock.now_seconds());
            let key_pressed = event.and_then(|e| e.key_down()).is_some();
            if !key_pressed && !intro.is_over() {
                return None;
            }

            log::info!("Intro finished after {:.2}s", intro.elapsed());
            let scene = Scene::with_clock(self.width, self.height, self.seed, self.clock.clone());
            self.phase = Phase::Playing(Box::new(scene));
        }

        match &mut self.phase {
            Phase::Playing(scene) => Some(scene.step(event)),
            Phase::Intro(_) => None,
        }
    }

    pub fn view(&self) -> FlowView {
        match &self.phase {
            Phase::Intro(intro) => FlowView::Intro {
                opacity: intro.opacity(),
                elapsed: intro.elapsed(),
            },
            Phase::Playing(scene) => FlowView::Game(scene.snapshot()),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing(_))
    }

    pub fn scene(&self) -> Option<&Scene<T>> {
        match &self.phase {
            Phase::Playing(scene) => Some(scene.as_ref()),
            Phase::Intro(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Key;
    use crate::sim::time::ManualClock;

    #[test]
    fn test_intro_fades_in() {
        let clock = ManualClock::new(50.0);
        let mut flow = Flow::with_intro(800, 600, 1, clock.clone());
        assert_eq!(
            flow.view(),
            FlowView::Intro {
                opacity: 0.0,
                elapsed: 0.0
            }
        );

        clock.advance(1.0);
        assert_eq!(flow.step(None), None);
        assert!(matches!(flow.view(), FlowView::Intro { opacity, .. } if opacity == 0.5));

        clock.advance(2.0);
        flow.step(None);
        assert!(matches!(flow.view(), FlowView::Intro { opacity, .. } if opacity == 1.0));
        assert!(!flow.is_playing());
    }

    #[test]
    fn test_intro_times_out() {
        let clock = ManualClock::new(50.0);
        let mut flow = Flow::with_intro(800, 600, 1, clock.clone());
        clock.advance(4.9);
        assert_eq!(flow.step(None), None);

        clock.set(55.0);
        let report = flow.step(None);
        assert!(report.is_some_and(|r| r.new_wave));
        assert!(flow.is_playing());
        assert!(matches!(flow.view(), FlowView::Game(_)));
    }

    #[test]
    fn test_any_key_skips_intro() {
        let clock = ManualClock::new(50.0);
        let mut flow = Flow::with_intro(800, 600, 1, clock.clone());
        clock.advance(0.5);
        let report = flow.step(Some(InputEvent::KeyDown(Key::Other)));
        assert!(report.is_some());
        assert!(flow.is_playing());
    }

    #[test]
    fn test_skipping_key_reaches_the_game() {
        let clock = ManualClock::new(50.0);
        let mut flow = Flow::with_intro(800, 600, 1, clock.clone());
        clock.advance(0.5);
        flow.step(Some(InputEvent::KeyDown(Key::Right)));

        let diver = flow.scene().map(|s| s.diver().velocity.x);
        assert!(diver.is_some_and(|vx| vx > 0.0));
    }

    #[test]
    fn test_playing_skips_intro() {
        let clock = ManualClock::new(50.0);
        let mut flow = Flow::playing(800, 600, 1, clock);
        assert!(flow.is_playing());
        assert!(flow.step(None).is_some());
    }
}
