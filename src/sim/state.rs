//! Clock and score state
//!
//! Recomputed from wall time at the start of every step and lent to each
//! entity while it advances. Entities never keep a reference to it.

use serde::{Deserialize, Serialize};

use super::input::InputEvent;
use super::rect::Rect;
use crate::consts::*;

/// Per-step clock, wave timer, chained score and the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Wall time of the current step (seconds)
    now: f64,
    /// Score (never decreases)
    score: u64,
    /// Absolute time at which the coin chain runs out
    chain_expire: f64,
    /// Absolute time at which the next wave starts
    next_wave_time: f64,
    /// Waves started so far
    wave: u32,
    /// The one input event observed this step
    event: Option<InputEvent>,
    /// Camera rectangle (moved only by the scene's camera step)
    pub viewport: Rect,
}

impl GameState {
    /// Fresh state with all timers zeroed
    pub fn new(viewport: Rect) -> Self {
        Self {
            now: 0.0,
            score: 0,
            chain_expire: 0.0,
            next_wave_time: 0.0,
            wave: 0,
            event: None,
            viewport,
        }
    }

    /// Start a new step at wall time `now`.
    ///
    /// Returns true when this step started a new wave.
    pub fn advance_frame(&mut self, now: f64, event: Option<InputEvent>) -> bool {
        self.event = event;
        self.now = now;
        if self.chain_expire < now {
            self.chain_expire = now;
        }

        if now >= self.next_wave_time {
            self.next_wave_time = now + WAVE_DURATION;
            self.wave += 1;
            return true;
        }
        false
    }

    /// Whether collected coins are still compounding
    pub fn is_chain_active(&self) -> bool {
        self.chain_expire > self.now
    }

    /// Score multiplier from remaining chain time, clamped to [1, 10]
    pub fn chain_multiplier(&self) -> f64 {
        let m = (self.chain_expire - self.now) / 2.0;
        m.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER)
    }

    /// Credit one collected coin.
    ///
    /// The chain is extended before the multiplier is read, so the coin is
    /// scored at the extended multiplier (truncated to whole points).
    /// Returns true if the resulting multiplier is a big combo.
    pub fn collect_coin(&mut self) -> bool {
        self.chain_expire += CHAIN_STEP;
        self.score += self.chain_multiplier() as u64;

        self.chain_multiplier() > BIG_COMBO_MULTIPLIER
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn chain_expire(&self) -> f64 {
        self.chain_expire
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn event(&self) -> Option<InputEvent> {
        self.event
    }

    pub fn wave_duration(&self) -> f64 {
        WAVE_DURATION
    }

    pub fn wave_time_remaining(&self) -> f64 {
        self.next_wave_time - self.now
    }

    pub fn wave_time_so_far(&self) -> f64 {
        WAVE_DURATION - self.wave_time_remaining()
    }
}
