//! Clouds: the bounce platforms
//!
//! Clouds drift horizontally across the viewport at a constant speed. One
//! that leaves the viewport is recycled: it sleeps for a random number of
//! steps, then re-enters from the side its new direction carries it in from.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity};
use super::state::GameState;
use crate::consts::*;

/// A drifting cloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    body: Body,
    /// Steps left before the cloud shows; negative once past zero
    sleep_frames: i32,
    /// Signed horizontal speed (pixels per step)
    velocity_x: i32,
}

impl Cloud {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            body: Body::new(width, height),
            sleep_frames: 0,
            velocity_x: 0,
        }
    }

    pub fn velocity_x(&self) -> i32 {
        self.velocity_x
    }

    pub fn sleep_frames(&self) -> i32 {
        self.sleep_frames
    }
}

impl Entity for Cloud {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn reset(&mut self, state: &GameState, rng: &mut impl Rng) {
        let viewport = state.viewport;
        let width = self.body.rect.width as i32;
        let height = self.body.rect.height;

        self.body.visible = false;
        self.sleep_frames = rng.random_range(0..CLOUD_MAX_SLEEP);
        self.velocity_x = 1 + rng.random_range(0..CLOUD_MAX_SPEED);
        if rng.random_range(0..2) == 1 {
            self.velocity_x = -self.velocity_x;
        }

        // Overlap the entry edge slightly so the cloud counts as on-screen
        let x = if self.velocity_x > 0 {
            viewport.left() - (width - CLOUD_EDGE_OVERLAP)
        } else {
            viewport.right() - CLOUD_EDGE_OVERLAP
        };

        // Lower half of the viewport
        let half = viewport.height / 2;
        let span = half.saturating_sub(height).max(1);
        let y = viewport.top() + half as i32 + rng.random_range(0..span) as i32;
        self.body.rect.move_to(x, y);
    }

    fn advance(&mut self, state: &GameState, rng: &mut impl Rng) {
        self.sleep_frames = self.sleep_frames.saturating_sub(1);
        if self.sleep_frames > 0 {
            return;
        }
        // Only landing exactly on zero shows the cloud; a zero draw starts
        // below it and crosses unseen until recycled
        if self.sleep_frames == 0 {
            self.body.visible = true;
        }

        let rect = &mut self.body.rect;
        rect.move_to(rect.x + self.velocity_x, rect.y);
        if !rect.collides(&state.viewport) {
            self.reset(state, rng);
        }
    }
}
