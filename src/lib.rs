//! Sky Dive Dan - a side-scrolling cloud-bouncing arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, collisions, camera, chained scoring)
//! - `settings`: Startup configuration loaded from JSON
//!
//! Drawing, input polling and frame pacing belong to the caller; the
//! native binary in `main.rs` is one such caller, drawing to a terminal.

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Flow, FlowView, InputEvent, Key, Scene, Snapshot, StepReport};

/// Game tuning constants
pub mod consts {
    /// Steps per second the driving loop is expected to run at
    pub const TARGET_FPS: u32 = 30;

    /// Fixed entity pools
    pub const CLOUD_COUNT: usize = 4;
    pub const COIN_COUNT: usize = 10;

    /// Entity sizes as divisors of the viewport dimensions
    pub const CLOUD_WIDTH_DIVISOR: u32 = 5;
    pub const CLOUD_HEIGHT_DIVISOR: u32 = 8;
    pub const COIN_SIZE_DIVISOR: u32 = 25;
    pub const DIVER_SIZE_DIVISOR: u32 = 20;

    /// Base diver rate: horizontal drag divisor and per-step gravity
    pub const MOVE_RATE: f64 = 1.2;
    /// Horizontal impulse from one left/right key press
    pub const PUSH_IMPULSE: f64 = MOVE_RATE * 2.5;
    /// Upward speed after landing on a cloud
    pub const BOUNCE_UP_SPEED: f64 = MOVE_RATE * 25.0;
    /// Upward speed after hitting the bottom of the viewport
    pub const SMALL_BOUNCE_UP_SPEED: f64 = MOVE_RATE * 15.0;
    /// Horizontal speed after leaving the viewport sideways
    pub const SIDE_BOUNCE_SPEED: f64 = MOVE_RATE * 20.0;
    /// Vertical speed of a freshly spawned diver (already falling)
    pub const DIVER_START_VELOCITY_Y: f64 = -0.1;

    /// Clouds sleep up to this many steps (exclusive) before showing
    pub const CLOUD_MAX_SLEEP: i32 = 60;
    /// Clouds move 1..=CLOUD_MAX_SPEED pixels per step
    pub const CLOUD_MAX_SPEED: i32 = 6;
    /// Clouds spawn overlapping the viewport edge by this many pixels
    pub const CLOUD_EDGE_OVERLAP: i32 = 2;

    /// Coin orbit radius is the coin width divided by this
    pub const COIN_ORBIT_DIVISOR: f64 = 3.5;
    /// Angular rate of coin orbits (radians per second)
    pub const COIN_ORBIT_RATE: f64 = 2.5;

    /// Seconds each coin collection adds to the chain
    pub const CHAIN_STEP: f64 = 1.1;
    /// Multiplier bounds
    pub const MIN_MULTIPLIER: f64 = 1.0;
    pub const MAX_MULTIPLIER: f64 = 10.0;
    /// A collection that leaves the multiplier above this is a big combo
    pub const BIG_COMBO_MULTIPLIER: f64 = 5.0;
    /// Multiplier blinks on the HUD from this value up
    pub const BLINK_MULTIPLIER: f64 = 8.0;

    /// Length of one wave (seconds)
    pub const WAVE_DURATION: f64 = 8.0;

    /// Camera closes 1/CAMERA_DAMPING of the gap to the diver each step
    pub const CAMERA_DAMPING: f64 = 40.3;

    /// Intro scene length and fade-in time (seconds)
    pub const INTRO_DURATION: f64 = 5.0;
    pub const INTRO_FADE_IN: f64 = 2.0;
}
