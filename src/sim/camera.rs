//! Viewport camera
//!
//! The viewport pursues the diver horizontally, closing a fixed fraction of
//! the gap each step (truncated to whole pixels), so it lags behind fast
//! movement and never overshoots.

use super::rect::Rect;
use crate::consts::CAMERA_DAMPING;

/// Move `viewport` toward `target`'s horizontal center.
///
/// Returns the number of pixels moved.
pub fn follow(viewport: &mut Rect, target: &Rect) -> i32 {
    let distance = (target.horizontal_center() - viewport.horizontal_center()) as f64;
    let step = (distance / CAMERA_DAMPING) as i32;
    viewport.x += step;
    step
}
