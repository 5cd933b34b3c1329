//! Coins: the pickups
//!
//! Each coin orbits its own center on a Lissajous-style path. All coins are
//! driven by the same clock (wall time plus time into the current wave), and
//! the parity of the orbit center picks the sine/cosine pairing, so coins
//! move differently but deterministically for a given time.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity};
use super::state::GameState;
use crate::consts::*;

/// An orbiting coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    body: Body,
    target_x: i32,
    target_y: i32,
}

impl Coin {
    pub fn new(size: u32) -> Self {
        Self {
            body: Body::new(size, size),
            target_x: 10,
            target_y: 10,
        }
    }

    /// Orbit center
    pub fn target(&self) -> (i32, i32) {
        (self.target_x, self.target_y)
    }

    /// Orbit radius (scales with coin size)
    pub fn orbit_radius(&self) -> f64 {
        self.body.rect.width as f64 / COIN_ORBIT_DIVISOR
    }

    /// Position on the orbit at wall time `now`, `wave_elapsed` seconds into the wave
    pub fn orbit_position(&self, now: f64, wave_elapsed: f64) -> (i32, i32) {
        let radius = self.orbit_radius();
        let phase = self.target_x as f64 + now * COIN_ORBIT_RATE;
        let (dx, dy) = if self.target_x % 2 != 0 {
            ((phase + wave_elapsed).sin(), phase.cos())
        } else {
            ((phase + wave_elapsed).cos(), phase.sin())
        };

        (
            (self.target_x as f64 + radius * dx) as i32,
            (self.target_y as f64 + radius * dy) as i32,
        )
    }
}

impl Entity for Coin {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn reset(&mut self, state: &GameState, rng: &mut impl Rng) {
        let viewport = state.viewport;
        let x_span = viewport.width.saturating_sub(self.body.rect.width).max(1);
        let y_span = (viewport.height / 3 * 2).max(1);

        self.target_x = viewport.left() + rng.random_range(0..x_span) as i32;
        self.target_y = viewport.top() + rng.random_range(0..y_span) as i32;
        self.body.visible = true;
    }

    fn advance(&mut self, state: &GameState, _rng: &mut impl Rng) {
        let (x, y) = self.orbit_position(state.now(), state.wave_time_so_far());
        self.body.rect.move_to(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_state(left: i32) -> GameState {
        let mut state = GameState::new(Rect::new(left, 0, 800, 600));
        state.advance_frame(1000.0, None);
        state
    }

    #[test]
    fn test_reset_targets_inside_viewport() {
        let state = test_state(-350);
        let mut rng = Pcg32::seed_from_u64(5);
        let mut coin = Coin::new(32);
        coin.body.visible = false;

        for _ in 0..200 {
            coin.reset(&state, &mut rng);
            let (tx, ty) = coin.target();
            assert!(coin.is_visible());
            assert!(tx >= -350 && tx < -350 + 800 - 32);
            assert!((0..400).contains(&ty));
        }
    }

    #[test]
    fn test_advance_stays_on_orbit() {
        let mut state = test_state(0);
        let mut rng = Pcg32::seed_from_u64(9);
        let mut coin = Coin::new(35);
        coin.reset(&state, &mut rng);
        let (tx, ty) = coin.target();
        let radius = coin.orbit_radius();
        assert_eq!(radius, 10.0);

        for i in 0..120 {
            state.advance_frame(1000.0 + i as f64 / 30.0, None);
            coin.advance(&state, &mut rng);
            let rect = coin.rect();
            assert!(((rect.x - tx) as f64).abs() <= radius);
            assert!(((rect.y - ty) as f64).abs() <= radius);
        }
    }

    #[test]
    fn test_parity_selects_phase_pairing() {
        let mut even = Coin::new(35);
        even.target_x = 100;
        even.target_y = 100;
        let mut odd = even.clone();
        odd.target_x = 101;

        // Times where each coin's phase is 0.1 rad past a full turn
        let turn = 2.0 * std::f64::consts::PI * 100.0 + 0.1;

        // x = 100 + 10cos(0.1) = 109.95, y = 100 + 10sin(0.1) = 100.99
        let now = (turn - 100.0) / COIN_ORBIT_RATE;
        assert_eq!(even.orbit_position(now, 0.0), (109, 100));

        // x = 101 + 10sin(0.1) = 101.99, y = 100 + 10cos(0.1) = 109.95
        let now = (turn - 101.0) / COIN_ORBIT_RATE;
        assert_eq!(odd.orbit_position(now, 0.0), (101, 109));
    }

    #[test]
    fn test_same_time_same_position() {
        let mut coin = Coin::new(35);
        coin.target_x = 321;
        coin.target_y = 123;
        assert_eq!(
            coin.orbit_position(1234.5, 3.25),
            coin.orbit_position(1234.5, 3.25)
        );
    }
}
