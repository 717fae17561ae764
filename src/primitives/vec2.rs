//! 2D offset between two points.

use num_traits::Float;
use std::ops::Mul;

/// The offset from one [`Point2`](super::Point2) to another.
///
/// Produced by `Point2 - Point2` and scaled during interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new offset.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}
