//! The diver: the player's body
//!
//! Key presses add horizontal impulses, drag pulls horizontal speed toward
//! zero, and gravity pulls vertical speed down every step. Positive
//! `velocity.y` is upward. The diver bounces off the viewport's bottom and
//! sides on its own; cloud bounces are applied by the scene.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity};
use super::input::Key;
use super::state::GameState;
use crate::consts::*;

/// The player-controlled diver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diver {
    body: Body,
    /// Velocity in pixels per step (y positive = rising)
    pub velocity: DVec2,
}

impl Diver {
    pub fn new(size: u32) -> Self {
        Self {
            body: Body::new(size, size),
            velocity: DVec2::new(0.0, DIVER_START_VELOCITY_Y),
        }
    }

    /// Falling means only a cloud can stop it
    pub fn is_falling(&self) -> bool {
        self.velocity.y < 0.0
    }

    pub fn push_left(&mut self) {
        self.velocity.x -= PUSH_IMPULSE;
    }

    pub fn push_right(&mut self) {
        self.velocity.x += PUSH_IMPULSE;
    }

    /// Full bounce off a cloud
    pub fn bounce_up(&mut self) {
        self.velocity.y = BOUNCE_UP_SPEED;
    }

    /// Weaker bounce off the bottom of the viewport
    pub fn small_bounce_up(&mut self) {
        self.velocity.y = SMALL_BOUNCE_UP_SPEED;
    }

    pub fn bounce_left(&mut self) {
        self.velocity.x = -SIDE_BOUNCE_SPEED;
    }

    pub fn bounce_right(&mut self) {
        self.velocity.x = SIDE_BOUNCE_SPEED;
    }

    fn apply_key(&mut self, key: Key) {
        match key {
            Key::Left => self.push_left(),
            Key::Right => self.push_right(),
            Key::Other => {}
        }
    }
}

impl Entity for Diver {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Center in the viewport, falling gently
    fn reset(&mut self, state: &GameState, _rng: &mut impl Rng) {
        let viewport = state.viewport;
        let half = (self.body.rect.width / 2) as i32;
        self.body.rect.move_to(
            viewport.horizontal_center() - half,
            viewport.vertical_center() - half,
        );
        self.body.visible = true;
        self.velocity = DVec2::new(0.0, DIVER_START_VELOCITY_Y);
    }

    fn advance(&mut self, state: &GameState, _rng: &mut impl Rng) {
        if let Some(key) = state.event().and_then(|e| e.key_down()) {
            self.apply_key(key);
        }

        // Drag, then gravity
        self.velocity.x /= MOVE_RATE;
        self.velocity.y -= MOVE_RATE;

        self.body.rect.move_by_f64(self.velocity.x, -self.velocity.y);

        let rect = self.body.rect;
        let viewport = state.viewport;
        if rect.bottom() > viewport.bottom() {
            self.small_bounce_up();
        }

        if !rect.collides(&viewport) {
            if rect.left() <= viewport.left() {
                self.bounce_right();
            }
            if rect.right() >= viewport.right() {
                self.bounce_left();
            }
        }
    }
}
