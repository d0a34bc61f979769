//! 2D vector type for planar physics.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector for ropes, cloth and the coordinate conversions around them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Vector with both components set to the same value.
    pub fn splat(value: F) -> Self { Vec2 { x: value, y: value } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self / len
        }
    }

    /// Component-wise multiplication.
    pub fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }

    /// Component-wise division.
    pub fn component_div(self, other: Self) -> Self {
        Vec2 { x: self.x / other.x, y: self.y / other.y }
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linearly remap `self` from the box `[in_min, in_max]` to `[out_min, out_max]`.
    ///
    /// Either box may be flipped on an axis (e.g. `in_max.y < in_min.y`), which is how
    /// screen space with a downward y axis is expressed. A box that is degenerate on an
    /// axis produces non-finite components on that axis.
    pub fn map(self, in_min: Self, in_max: Self, out_min: Self, out_max: Self) -> Self {
        let t = (self - in_min).component_div(in_max - in_min);
        t.component_mul(out_max - out_min) + out_min
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vec2 { x: self.x / s, y: self.y / s } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f32>::zero();
        let n = v.normalize();
        assert_eq!(n, Vec2::zero());
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec2::new(0.0f32, -2.5).normalize();
        assert!((n.x - 0.0).abs() < 1e-6);
        assert!((n.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(10.0f32, 10.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn map_into_flipped_screen_box() {
        // World [-1, 1]^2 onto a 640x480 screen with y growing downward.
        let p = Vec2::new(0.5f32, 0.5);
        let s = p.map(
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 480.0),
            Vec2::new(640.0, 0.0),
        );
        assert!((s.x - 480.0).abs() < 1e-4);
        assert!((s.y - 120.0).abs() < 1e-4);
    }

    #[test]
    fn componentwise_ops() {
        let a = Vec2::new(2.0f32, 9.0);
        let b = Vec2::new(4.0f32, 3.0);
        assert_eq!(a.component_mul(b), Vec2::new(8.0, 27.0));
        assert_eq!(a.component_div(b), Vec2::new(0.5, 3.0));
        assert_eq!(-a, Vec2::new(-2.0, -9.0));
        let mut c = a;
        c += b;
        c -= Vec2::splat(1.0);
        assert_eq!(c, Vec2::new(5.0, 11.0));
    }
}
