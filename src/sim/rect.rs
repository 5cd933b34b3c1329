//! Axis-aligned rectangles and overlap testing
//!
//! Every entity and the viewport are plain `Rect` values in world pixels,
//! with y growing downward.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Horizontal center (rounded toward the left edge)
    #[inline]
    pub fn horizontal_center(&self) -> i32 {
        self.x + (self.width / 2) as i32
    }

    /// Vertical center (rounded toward the top edge)
    #[inline]
    pub fn vertical_center(&self) -> i32 {
        self.y + (self.height / 2) as i32
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Move by a fractional offset, truncating the result toward zero
    pub fn move_by_f64(&mut self, dx: f64, dy: f64) {
        self.x = (self.x as f64 + dx) as i32;
        self.y = (self.y as f64 + dy) as i32;
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    pub fn collides(&self, other: &Rect) -> bool {
        self.bottom() > other.top()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.left() < other.right()
    }

    /// Translate into coordinates relative to `origin`'s top-left corner
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect::new(self.x - origin.x, self.y - origin.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accessors() {
        let r = Rect::new(10, 20, 30, 41);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 61);
        assert_eq!(r.horizontal_center(), 25);
        assert_eq!(r.vertical_center(), 40);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.collides(&b));

        // Fully contained
        let inner = Rect::new(2, 2, 3, 3);
        assert!(a.collides(&inner));
        assert!(inner.collides(&a));
    }

    #[test]
    fn test_shared_edge_is_not_a_collision() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.collides(&Rect::new(10, 0, 10, 10))); // a.right == b.left
        assert!(!a.collides(&Rect::new(-10, 0, 10, 10))); // a.left == b.right
        assert!(!a.collides(&Rect::new(0, 10, 10, 10))); // a.bottom == b.top
        assert!(!a.collides(&Rect::new(0, -10, 10, 10))); // a.top == b.bottom
        // Corner touch
        assert!(!a.collides(&Rect::new(10, 10, 5, 5)));
    }

    #[test]
    fn test_move_by_truncates_toward_zero() {
        let mut r = Rect::new(10, 10, 1, 1);
        r.move_by_f64(2.9, -2.9);
        assert_eq!((r.x, r.y), (12, 7));

        let mut r = Rect::new(0, 0, 1, 1);
        r.move_by_f64(-0.5, 0.5);
        assert_eq!((r.x, r.y), (0, 0));
    }

    #[test]
    fn test_relative_to() {
        let viewport = Rect::new(100, 0, 800, 600);
        let r = Rect::new(150, 30, 10, 10).relative_to(&viewport);
        assert_eq!(r, Rect::new(50, 30, 10, 10));
    }

    fn any_rect() -> impl Strategy<Value = Rect> {
        (-500i32..500, -500i32..500, 0u32..200, 0u32..200)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn collision_is_symmetric(a in any_rect(), b in any_rect()) {
            prop_assert_eq!(a.collides(&b), b.collides(&a));
        }

        #[test]
        fn edge_neighbours_never_collide(a in any_rect(), w in 1u32..100, h in 1u32..100) {
            let right_neighbour = Rect::new(a.right(), a.y, w, h);
            let below_neighbour = Rect::new(a.x, a.bottom(), w, h);
            prop_assert!(!a.collides(&right_neighbour));
            prop_assert!(!a.collides(&below_neighbour));
        }
    }
}
