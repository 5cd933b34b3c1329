//! Per-step input
//!
//! The simulation observes at most one key event per step. Callers that
//! receive several events in one frame deliver the rest on later steps.

use serde::{Deserialize, Serialize};

/// Keys the simulation distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Any other key; ignored by gameplay, but ends the intro
    Other,
}

/// A single input event delivered to one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
}

impl InputEvent {
    /// The key pressed, if this is a key-down event
    pub fn key_down(&self) -> Option<Key> {
        match self {
            InputEvent::KeyDown(key) => Some(*key),
        }
    }
}
