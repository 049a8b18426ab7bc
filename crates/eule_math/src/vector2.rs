//! 2D Vector type

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::math;
use crate::scalar::Scalar;
use crate::{Vector3, Vector4};

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// Integer 2D vector
pub type Vector2i = Vector2<i32>;
/// Real 2D vector
pub type Vector2d = Vector2<f64>;

impl_vector_common!(Vector2, 2, [0 => x, 1 => y]);

impl<T: Scalar> Vector2<T> {
    /// Z component of the cross product of the two vectors embedded in 3D
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x.mul_wide(other.y) - self.y.mul_wide(other.x)
    }
}

impl Vector2<f64> {
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };
}

impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Vector3::new(v.x, v.y, T::ZERO)
    }
}

impl<T: Scalar> From<Vector2<T>> for Vector4<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Vector4::new(v.x, v.y, T::ZERO, T::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_cross() {
        let a = Vector2d::new(1.0, 2.0);
        let b = Vector2d::new(3.0, 4.0);
        assert_eq!(a.dot(&b), 11.0);
        // 1*4 - 2*3
        assert_eq!(a.cross(&b), -2.0);
        assert_eq!(b.cross(&a), 2.0);
    }

    #[test]
    fn test_int_cross_widens() {
        let a = Vector2i::new(2, 0);
        let b = Vector2i::new(0, 3);
        assert_eq!(a.cross(&b), 6.0);
    }

    #[test]
    fn test_int_large_components() {
        let v = Vector2i::new(70_000, 0);
        assert_eq!(v.dot(&v), 4.9e9);
        assert_eq!(v.magnitude(), 70_000.0);
        assert_eq!(v.cross(&Vector2i::new(0, 70_000)), 4.9e9);

        let max = i32::MAX as f64;
        let big = Vector2i::new(i32::MAX, 0);
        assert_eq!(big.cross(&Vector2i::new(0, i32::MAX)), max * max);
    }

    #[test]
    fn test_magnitude() {
        let v = Vector2d::new(3.0, 4.0);
        assert_eq!(v.sqr_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize_zero() {
        let v = Vector2d::ZERO.normalize();
        assert_eq!(v, Vector2d::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_int_normalize_self_truncates() {
        let mut v = Vector2i::new(5, 0);
        v.normalize_self();
        assert_eq!(v, Vector2i::new(1, 0));

        let mut diagonal = Vector2i::new(1, 1);
        diagonal.normalize_self();
        assert_eq!(diagonal, Vector2i::ZERO);
    }

    #[test]
    fn test_int_lerp_self_truncates() {
        let mut v = Vector2i::new(0, 0);
        v.lerp_self(&Vector2i::new(3, 5), 0.5);
        assert_eq!(v, Vector2i::new(1, 2));
    }

    #[test]
    fn test_int_lerp_is_real() {
        let v = Vector2i::new(0, 0).lerp(&Vector2i::new(3, 5), 0.5);
        assert_eq!(v, Vector2d::new(1.5, 2.5));
    }

    #[test]
    fn test_index() {
        let mut v = Vector2i::new(7, 9);
        assert_eq!(v[0], 7);
        assert_eq!(v[1], 9);
        v[1] = 4;
        assert_eq!(v.y, 4);
        assert_eq!(
            v.component(2),
            Err(MathError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = Vector2d::ONE;
        let _ = v[2];
    }

    #[test]
    fn test_widening_conversions() {
        let v = Vector2i::new(1, 2);
        assert_eq!(Vector3::from(v), Vector3::new(1, 2, 0));
        assert_eq!(Vector4::from(v), Vector4::new(1, 2, 0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2i::new(1, -2).to_string(), "[x: 1  y: -2]");
    }

    #[test]
    fn test_as_array_roundtrip() {
        let v = Vector2d::new(1.5, -3.0);
        assert_eq!(v.as_array(), [1.5, -3.0]);
        assert_eq!(Vector2d::from_array([1.5, -3.0]), v);
    }
}
