//! Simulation core
//!
//! All gameplay logic lives here. Nothing in this module draws or polls:
//! - Time comes in through a `TimeSource`, read once per step
//! - Input comes in as at most one `InputEvent` per step
//! - Randomness comes from a seeded `Pcg32` threaded through every reset
//! - Entities are advanced in fixed pool order

pub mod camera;
pub mod cloud;
pub mod coin;
pub mod diver;
pub mod entity;
pub mod flow;
pub mod input;
pub mod rect;
pub mod scene;
pub mod snapshot;
pub mod state;
pub mod time;

pub use camera::follow;
pub use cloud::Cloud;
pub use coin::Coin;
pub use diver::Diver;
pub use entity::{Body, Entity};
pub use flow::{Flow, FlowView};
pub use input::{InputEvent, Key};
pub use rect::Rect;
pub use scene::{Scene, StepReport};
pub use snapshot::{Snapshot, SpriteKind, SpriteView};
pub use state::GameState;
pub use time::{ManualClock, TimeSource, WallClock};
