//! Axis-aligned rectangle geometry for level shapes and entity bounds
//!
//! Screen coordinates: x grows rightward, y grows downward, so `bottom()`
//! is the numerically largest y edge. Overlap is strict - rectangles that
//! merely share an edge or a corner do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with non-negative extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Square rect anchored at `pos` (top-left corner)
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos.x, pos.y, side, side)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict AABB overlap: all four separating-axis conditions must fail.
    ///
    /// Boundary contact counts as a miss, and a zero-area rect overlaps
    /// nothing - degenerate geometry is inert rather than rejected.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Horizontal-span overlap only (used for pit checks, where any vertical
    /// position at or below the pit mouth is lethal)
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_shared_area() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 25.0, 50.0, 50.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_boundary_touch_is_miss() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        // Shares the x=50 edge exactly
        let b = Rect::new(50.0, 0.0, 50.0, 50.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        // Corner touch at (50, 50)
        let c = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_one_pixel_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(49.0, 49.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_zero_area_is_inert() {
        let degenerate = Rect::new(25.0, 25.0, 0.0, 0.0);
        let full = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(!degenerate.overlaps(&full));
        assert!(!full.overlaps(&degenerate));
        // Negative extent is clamped away at construction
        let clamped = Rect::new(0.0, 0.0, -5.0, 10.0);
        assert_eq!(clamped.width, 0.0);
    }

    #[test]
    fn test_horizontal_span() {
        let player = Rect::new(100.0, 0.0, 50.0, 50.0);
        let hole = Rect::new(120.0, 500.0, 100.0, 10.0);
        // Far apart vertically, but spans overlap
        assert!(player.overlaps_horizontally(&hole));
        assert!(!player.overlaps(&hole));
    }

    proptest! {
        /// Rects separated on either axis never report overlap.
        #[test]
        fn prop_disjoint_never_overlap(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
            gap in 0.0f32..100.0,
        ) {
            let a = Rect::new(x, y, w, h);
            let right_of = Rect::new(a.right() + gap, y, w, h);
            let below = Rect::new(x, a.bottom() + gap, w, h);
            prop_assert!(!a.overlaps(&right_of));
            prop_assert!(!a.overlaps(&below));
        }

        /// Overlap is symmetric, and a rect with area overlaps itself.
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            prop_assert!(a.overlaps(&a));
        }
    }
}
