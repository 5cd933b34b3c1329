//! Shared entity shape
//!
//! Every entity is a `Body` (rectangle + visibility) plus its own motion
//! rules behind the `Entity` trait. Entities never reference each other;
//! the scene reads their rectangles and calls their mutators.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::GameState;

/// Position, size and visibility of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    pub visible: bool,
}

impl Body {
    /// A visible body at the origin.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "entity size must be positive, got {width}x{height}"
        );
        Self {
            rect: Rect::new(0, 0, width, height),
            visible: true,
        }
    }
}

/// Motion rules shared by clouds, coins and the diver
pub trait Entity {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Re-randomize placement (spawn or recycle)
    fn reset(&mut self, state: &GameState, rng: &mut impl Rng);

    /// Advance by one step
    fn advance(&mut self, state: &GameState, rng: &mut impl Rng);

    #[inline]
    fn rect(&self) -> Rect {
        self.body().rect
    }

    #[inline]
    fn is_visible(&self) -> bool {
        self.body().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.body_mut().visible = visible;
    }
}
