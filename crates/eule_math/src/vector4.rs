//! 4D Vector type
//!
//! Also serves as the raw storage of [`crate::Quaternion`].

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::math;
use crate::scalar::Scalar;
use crate::{Matrix4x4, Vector2, Vector3};

/// 4D Vector with x, y, z, w components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Integer 4D vector
pub type Vector4i = Vector4<i32>;
/// Real 4D vector
pub type Vector4d = Vector4<f64>;

impl_vector_common!(Vector4, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

impl<T: Scalar> Vector4<T> {
    /// The x, y, z components
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Vector4<f64> {
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0, w: 1.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0, z: 0.0, w: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const FORWARD: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const BACKWARD: Self = Self { x: 0.0, y: 0.0, z: -1.0, w: 0.0 };
    pub const FUTURE: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };
    pub const PAST: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: -1.0 };
}

/// Full 4x4 application, rows of `mat` against this vector.
/// Integer vectors truncate the result.
impl<T: Scalar> std::ops::Mul<Matrix4x4> for Vector4<T> {
    type Output = Self;

    fn mul(self, mat: Matrix4x4) -> Self {
        let r = mat.transform_vector4(self.to_double());
        Self::new(
            T::from_f64(r.x),
            T::from_f64(r.y),
            T::from_f64(r.z),
            T::from_f64(r.w),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign<Matrix4x4> for Vector4<T> {
    fn mul_assign(&mut self, mat: Matrix4x4) {
        *self = *self * mat;
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector2<T> {
    #[inline]
    fn from(v: Vector4<T>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector3<T> {
    #[inline]
    fn from(v: Vector4<T>) -> Self {
        v.xyz()
    }
}
