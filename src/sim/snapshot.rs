//! Read-only render snapshot
//!
//! Everything a renderer needs to draw a frame, copied out of the scene so
//! drawing code never touches simulation internals. Sprites are listed in
//! draw order: coins, then clouds, then the diver on top.

use serde::{Deserialize, Serialize};

use super::cloud::Cloud;
use super::coin::Coin;
use super::diver::Diver;
use super::entity::Entity;
use super::rect::Rect;
use super::state::GameState;
use crate::consts::*;

/// Which kind of entity a sprite is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Coin,
    Cloud,
    Diver,
}

/// One entity's rectangle and visibility, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub kind: SpriteKind,
    pub rect: Rect,
    pub visible: bool,
}

impl SpriteView {
    fn of(kind: SpriteKind, entity: &impl Entity) -> Self {
        Self {
            kind,
            rect: entity.rect(),
            visible: entity.is_visible(),
        }
    }
}

/// Frame snapshot of a running scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub now: f64,
    pub viewport: Rect,
    pub sprites: Vec<SpriteView>,
    pub score: u64,
    pub multiplier: f64,
    pub chain_active: bool,
    pub wave: u32,
    pub wave_time_remaining: f64,
    pub wave_duration: f64,
}

impl Snapshot {
    pub fn capture(state: &GameState, diver: &Diver, clouds: &[Cloud], coins: &[Coin]) -> Self {
        let sprites = coins
            .iter()
            .map(|c| SpriteView::of(SpriteKind::Coin, c))
            .chain(clouds.iter().map(|c| SpriteView::of(SpriteKind::Cloud, c)))
            .chain(std::iter::once(SpriteView::of(SpriteKind::Diver, diver)))
            .collect();

        Self {
            now: state.now(),
            viewport: state.viewport,
            sprites,
            score: state.score(),
            multiplier: state.chain_multiplier(),
            chain_active: state.is_chain_active(),
            wave: state.wave(),
            wave_time_remaining: state.wave_time_remaining(),
            wave_duration: state.wave_duration(),
        }
    }

    /// Visible sprites overlapping the viewport, in draw order
    pub fn drawable(&self) -> impl Iterator<Item = &SpriteView> {
        self.sprites
            .iter()
            .filter(|s| s.visible && s.rect.collides(&self.viewport))
    }

    pub fn diver(&self) -> Option<&SpriteView> {
        self.sprites.iter().find(|s| s.kind == SpriteKind::Diver)
    }

    /// A world rectangle in screen coordinates
    pub fn to_screen(&self, rect: &Rect) -> Rect {
        rect.relative_to(&self.viewport)
    }

    /// Multiplier bar length in pixels (10..=100)
    pub fn multiplier_bar_width(&self) -> u32 {
        (self.multiplier * 10.0) as u32
    }

    /// The multiplier bar blinks at ten flips a second once it nears the cap
    pub fn multiplier_blink_visible(&self) -> bool {
        if self.multiplier < BLINK_MULTIPLIER {
            return true;
        }
        let tenths = (self.now.fract() * 10.0) as u32;
        tenths % 2 == 1
    }

    /// Fraction of the current wave still to run (1.0 at wave start)
    pub fn wave_progress(&self) -> f64 {
        (self.wave_time_remaining / self.wave_duration).clamp(0.0, 1.0)
    }

    /// Screen x for an "above the screen" arrow when the diver is out of view
    pub fn diver_offscreen_marker(&self) -> Option<i32> {
        let diver = self.diver()?;
        (diver.rect.top() < self.viewport.top())
            .then(|| diver.rect.horizontal_center() - self.viewport.left())
    }

    /// Screen x of the first background stripe; shifts as the viewport scrolls
    pub fn background_stripe_offset(&self, spacing: u32) -> i32 {
        self.viewport.left().rem_euclid(spacing.max(1) as i32)
    }
}
