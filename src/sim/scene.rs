//! Game scene: one simulation step
//!
//! Step order matters for the physics and is fixed:
//! 1. Clock/score state from wall time and the step's input event
//! 2. Diver (input, drag, gravity, boundary bounces)
//! 3. Camera follows the diver
//! 4. Clouds in pool order: first falling-diver collision bounces, then advance
//! 5. Coins in pool order: collision collects and respawns, then advance

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera;
use super::cloud::Cloud;
use super::coin::Coin;
use super::diver::Diver;
use super::entity::Entity;
use super::input::InputEvent;
use super::rect::Rect;
use super::snapshot::Snapshot;
use super::state::GameState;
use super::time::{TimeSource, WallClock};
use crate::consts::*;

/// What happened during one step (observational only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The diver bounced off a cloud
    pub cloud_bounce: bool,
    /// Coins collected this step
    pub coins_collected: u32,
    /// A collection pushed the multiplier past the big-combo threshold
    pub big_combo: bool,
    /// This step started a new wave
    pub new_wave: bool,
}

/// A running game: owns every entity, the clock/score state and the RNG
#[derive(Debug)]
pub struct Scene<T: TimeSource = WallClock> {
    state: GameState,
    diver: Diver,
    clouds: Vec<Cloud>,
    coins: Vec<Coin>,
    rng: Pcg32,
    clock: T,
}

impl Scene<WallClock> {
    /// New game on real time
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        Self::with_clock(width, height, seed, WallClock::new())
    }
}

impl<T: TimeSource> Scene<T> {
    /// New game reading time from `clock`.
    ///
    /// # Panics
    ///
    /// Panics if the viewport is too small to give every entity a
    /// non-zero size.
    pub fn with_clock(width: u32, height: u32, seed: u64, clock: T) -> Self {
        assert!(
            width >= COIN_SIZE_DIVISOR && height >= CLOUD_HEIGHT_DIVISOR,
            "viewport {width}x{height} is too small"
        );

        let state = GameState::new(Rect::new(0, 0, width, height));
        let mut rng = Pcg32::seed_from_u64(seed);

        let cloud_width = width / CLOUD_WIDTH_DIVISOR;
        let cloud_height = height / CLOUD_HEIGHT_DIVISOR;
        let clouds = (0..CLOUD_COUNT)
            .map(|_| {
                let mut cloud = Cloud::new(cloud_width, cloud_height);
                cloud.reset(&state, &mut rng);
                cloud
            })
            .collect();

        let coin_size = width / COIN_SIZE_DIVISOR;
        let coins = (0..COIN_COUNT)
            .map(|_| {
                let mut coin = Coin::new(coin_size);
                coin.reset(&state, &mut rng);
                coin
            })
            .collect();

        let mut diver = Diver::new(width / DIVER_SIZE_DIVISOR);
        diver.reset(&state, &mut rng);

        log::info!("Scene {}x{} created with seed {}", width, height, seed);

        Self {
            state,
            diver,
            clouds,
            coins,
            rng,
            clock,
        }
    }

    /// Advance one step at the clock's current time
    pub fn step(&mut self, event: Option<InputEvent>) -> StepReport {
        let now = self.clock.now_seconds();
        self.step_at(now, event)
    }

    /// Advance one step at wall time `now`.
    ///
    /// # Panics
    ///
    /// Panics if `now` is earlier than the previous step's time.
    pub fn step_at(&mut self, now: f64, event: Option<InputEvent>) -> StepReport {
        assert!(
            now >= self.state.now(),
            "time went backward: {} < {}",
            now,
            self.state.now()
        );

        let mut report = StepReport {
            new_wave: self.state.advance_frame(now, event),
            ..Default::default()
        };
        if report.new_wave {
            log::info!("Wave {} started", self.state.wave());
        }

        self.diver.advance(&self.state, &mut self.rng);
        camera::follow(&mut self.state.viewport, &self.diver.rect());

        let diver_rect = self.diver.rect();

        for cloud in &mut self.clouds {
            if !report.cloud_bounce
                && self.diver.is_falling()
                && cloud.is_visible()
                && cloud.rect().collides(&diver_rect)
            {
                self.diver.bounce_up();
                report.cloud_bounce = true;
                log::debug!("Cloud bounce at ({}, {})", diver_rect.x, diver_rect.y);
            }
            cloud.advance(&self.state, &mut self.rng);
        }

        for coin in &mut self.coins {
            if coin.is_visible() && coin.rect().collides(&diver_rect) {
                coin.reset(&self.state, &mut self.rng);
                if self.state.collect_coin() {
                    report.big_combo = true;
                }
                report.coins_collected += 1;
                log::debug!(
                    "Coin collected, score {} (x{:.2})",
                    self.state.score(),
                    self.state.chain_multiplier()
                );
            }
            coin.advance(&self.state, &mut self.rng);
        }

        if report.big_combo {
            log::debug!("Big combo!");
        }

        report
    }

    /// Read-only view for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.diver, &self.clouds, &self.coins)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn diver(&self) -> &Diver {
        &self.diver
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut Diver, &mut [Cloud], &mut [Coin]) {
        (
            &mut self.diver,
            self.clouds.as_mut_slice(),
            self.coins.as_mut_slice(),
        )
    }
}
