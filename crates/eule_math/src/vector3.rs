//! 3D Vector type

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::math;
use crate::scalar::Scalar;
use crate::{Matrix4x4, Vector2, Vector4};

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Integer 3D vector
pub type Vector3i = Vector3<i32>;
/// Real 3D vector
pub type Vector3d = Vector3<f64>;

impl_vector_common!(Vector3, 3, [0 => x, 1 => y, 2 => z]);

impl<T: Scalar> Vector3<T> {
    /// Cross product, computed in `f64` so integer components cannot overflow
    pub fn cross(&self, other: &Self) -> Vector3<f64> {
        Vector3::new(
            self.y.mul_wide(other.z) - self.z.mul_wide(other.y),
            self.z.mul_wide(other.x) - self.x.mul_wide(other.z),
            self.x.mul_wide(other.y) - self.y.mul_wide(other.x),
        )
    }
}

impl Vector3<f64> {
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0, z: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0, z: 0.0 };
    pub const FORWARD: Self = Self { x: 0.0, y: 0.0, z: 1.0 };
    pub const BACKWARD: Self = Self { x: 0.0, y: 0.0, z: -1.0 };
}

/// Applies the 3x3 block of `mat`, then adds its translation column.
/// Integer vectors truncate the result.
impl<T: Scalar> std::ops::Mul<Matrix4x4> for Vector3<T> {
    type Output = Self;

    fn mul(self, mat: Matrix4x4) -> Self {
        let p = mat.transform_point(self.to_double());
        Self::new(T::from_f64(p.x), T::from_f64(p.y), T::from_f64(p.z))
    }
}

impl<T: Scalar> std::ops::MulAssign<Matrix4x4> for Vector3<T> {
    fn mul_assign(&mut self, mat: Matrix4x4) {
        *self = *self * mat;
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector2<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        Vector4::new(v.x, v.y, v.z, T::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.0001;

    #[test]
    fn test_cross_basis() {
        let x = Vector3d::RIGHT;
        let y = Vector3d::UP;
        assert_eq!(x.cross(&y), Vector3d::FORWARD);
        assert_eq!(y.cross(&x), Vector3d::BACKWARD);
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vector3d::new(1.5, -2.0, 0.25);
        let b = Vector3d::new(-3.0, 4.0, 7.0);
        assert!(a.cross(&b).approx_eq(&-b.cross(&a)));
    }

    #[test]
    fn test_int_cross_and_dot() {
        let a = Vector3i::new(1, 2, 3);
        let b = Vector3i::new(4, 5, 6);
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(a.cross(&b), Vector3d::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_int_large_components() {
        let v = Vector3i::new(50_000, 0, 0);
        assert_eq!(v.sqr_magnitude(), 2.5e9);
        assert_eq!(v.magnitude(), 50_000.0);
        assert_eq!(v.normalize(), Vector3d::new(1.0, 0.0, 0.0));

        let a = Vector3i::new(0, 100_000, 0);
        let b = Vector3i::new(0, 0, 100_000);
        assert_eq!(a.cross(&b), Vector3d::new(1e10, 0.0, 0.0));
        assert_eq!(b.cross(&a), Vector3d::new(-1e10, 0.0, 0.0));
    }

    #[test]
    fn test_normalize() {
        let n = Vector3d::new(0.0, 3.0, 4.0).normalize();
        assert!((n.magnitude() - 1.0).abs() < EPSILON);
        assert!(n.approx_eq(&Vector3d::new(0.0, 0.6, 0.8)));
    }

    #[test]
    fn test_normalize_self_zero() {
        let mut v = Vector3d::ZERO;
        v.normalize_self();
        assert_eq!(v, Vector3d::ZERO);
    }

    #[test]
    fn test_lerp_outside_unit_interval() {
        let a = Vector3d::ZERO;
        let b = Vector3d::new(2.0, 4.0, 6.0);
        assert_eq!(a.lerp(&b, 1.5), Vector3d::new(3.0, 6.0, 9.0));
        assert_eq!(a.lerp(&b, -0.5), Vector3d::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_similar() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3d::new(1.000001, 2.0, 3.0);
        assert!(a.approx_eq(&b));
        assert!(!a.similar(&b, 1e-9));
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_int_truncates() {
        let v = Vector3d::new(1.9, -1.9, 0.5);
        assert_eq!(v.to_int(), Vector3i::new(1, -1, 0));
        assert_eq!(Vector3i::new(1, 2, 3).to_double(), Vector3d::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_component_access() {
        let mut v = Vector3d::new(1.0, 2.0, 3.0);
        assert_eq!(v.component(2), Ok(3.0));
        *v.component_mut(0).unwrap() = 9.0;
        assert_eq!(v.x, 9.0);
        assert!(v.component(3).is_err());
        assert!(v.component_mut(3).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3i::new(1, 2, 3);
        let b = Vector3i::new(4, 5, 6);
        assert_eq!(a + b, Vector3i::new(5, 7, 9));
        assert_eq!(b - a, Vector3i::new(3, 3, 3));
        assert_eq!(a * 2, Vector3i::new(2, 4, 6));
        assert_eq!(b / 2, Vector3i::new(2, 2, 3));
        assert_eq!(-a, Vector3i::new(-1, -2, -3));
        assert_eq!(a.vector_scale(&b), Vector3i::new(4, 10, 18));

        let mut c = a;
        c += b;
        c -= a;
        c *= 3;
        c /= 3;
        assert_eq!(c, b);
    }

    #[test]
    fn test_narrowing_and_widening() {
        let v = Vector3i::new(1, 2, 3);
        assert_eq!(Vector2::from(v), Vector2::new(1, 2));
        assert_eq!(Vector4::from(v), Vector4::new(1, 2, 3, 0));
    }

    #[test]
    fn test_mul_matrix_applies_translation() {
        let mut m = Matrix4x4::default();
        m.set_translation(Vector3d::new(1.0, 2.0, 3.0));
        let v = Vector3d::new(1.0, 1.0, 1.0) * m;
        assert_eq!(v, Vector3d::new(2.0, 3.0, 4.0));

        let mut vi = Vector3i::new(1, 1, 1);
        vi *= m * 0.5;
        // 3x3 block halved, translation halved: 0.5 + 0.5, 0.5 + 1.0, 0.5 + 1.5
        assert_eq!(vi, Vector3i::new(1, 1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Vector3d::new(1.0, 2.5, -3.0).to_string(),
            "[x: 1  y: 2.5  z: -3]"
        );
    }
}
