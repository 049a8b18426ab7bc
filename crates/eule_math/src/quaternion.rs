//! Quaternion rotations with lazily cached conversions
//!
//! A [`Quaternion`] stores its four raw components plus three derived
//! values: the Euler angle equivalent, the rotation matrix equivalent and
//! the multiplicative inverse. Each lives in its own [`Memo`], computed on
//! first read and dropped whenever the raw components change.
//!
//! Reads are safe from many threads at once (`Quaternion: Sync`); a stale
//! cache is recomputed exactly once and later readers reuse the result.
//! Mutation needs `&mut self`, so it can never race a read.

use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

use crate::math;
use crate::memo::Memo;
use crate::{Matrix4x4, Vector3, Vector4};

/// 3D rotation stored as (x, y, z, w)
pub struct Quaternion {
    v: Vector4<f64>,
    euler: Memo<Vector3<f64>>,
    matrix: Memo<Matrix4x4>,
    inverse: Memo<Vector4<f64>>,
}

impl Quaternion {
    /// Create a quaternion from raw components
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_raw(Vector4::new(x, y, z, w))
    }

    /// Create a quaternion from raw (x, y, z, w) components
    pub fn from_raw(v: Vector4<f64>) -> Self {
        Self {
            v,
            euler: Memo::new(),
            matrix: Memo::new(),
            inverse: Memo::new(),
        }
    }

    /// The identity rotation (0, 0, 0, 1)
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Create a quaternion from Euler angles in degrees:
    /// x = roll, y = pitch, z = yaw
    pub fn from_euler(euler_angles: Vector3<f64>) -> Self {
        let rad = euler_angles * math::DEG_TO_RAD;

        let (sr, cr) = (rad.x * 0.5).sin_cos();
        let (sp, cp) = (rad.y * 0.5).sin_cos();
        let (sy, cy) = (rad.z * 0.5).sin_cos();

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Raw (x, y, z, w) components
    #[inline]
    pub fn raw_values(&self) -> Vector4<f64> {
        self.v
    }

    /// Overwrite the raw components
    pub fn set_raw_values(&mut self, values: Vector4<f64>) {
        self.set_raw(values);
    }

    // Every raw-value change passes through here
    fn set_raw(&mut self, values: Vector4<f64>) {
        self.v = values;
        self.euler.invalidate();
        self.matrix.invalidate();
        self.inverse.invalidate();
    }

    fn scale_self(&mut self, scale: f64) {
        self.set_raw(self.v * scale);
    }

    /// Conjugate: vector part negated, scalar part kept
    pub fn conjugate(&self) -> Self {
        Self::new(-self.v.x, -self.v.y, -self.v.z, self.v.w)
    }

    /// This rotation scaled to unit length. The zero quaternion stays zero.
    pub fn unit_quaternion(&self) -> Self {
        let mut q = self.clone();
        let magnitude = self.v.magnitude();
        if magnitude != 0.0 {
            q.scale_self(1.0 / magnitude);
        }
        q
    }

    /// Multiplicative inverse: conjugate divided by squared magnitude.
    ///
    /// Correct for non-unit quaternions. Cached.
    pub fn inverse(&self) -> Self {
        let raw = self.inverse.get_or_compute(|| {
            log::trace!("Recomputing quaternion inverse");
            self.conjugate().v * (1.0 / self.v.sqr_magnitude())
        });
        Self::from_raw(raw)
    }

    /// Rotate `vec` by this quaternion.
    ///
    /// Computed as `inverse() * (vec, 0) * self`, which agrees with
    /// [`Self::to_rotation_matrix`] applied via [`Matrix4x4::transform_point`].
    /// With this convention a +90 degree yaw maps (1, 0, 0) to (0, -1, 0).
    pub fn rotate_vector(&self, vec: Vector3<f64>) -> Vector3<f64> {
        let pure = Self::new(vec.x, vec.y, vec.z, 0.0);
        let rotated = &(&self.inverse() * &pure) * self;
        rotated.v.xyz()
    }

    /// Euler angle equivalent in degrees (roll, pitch, yaw). Cached.
    ///
    /// Pitch is clamped to +-90 degrees at the gimbal-lock singularity.
    pub fn to_euler_angles(&self) -> Vector3<f64> {
        self.euler.get_or_compute(|| {
            log::trace!("Recomputing quaternion euler angles");
            let Vector4 { x, y, z, w } = self.v;

            let sinr_cosp = 2.0 * (w * x + y * z);
            let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
            let roll = sinr_cosp.atan2(cosr_cosp);

            let sinp = 2.0 * (w * y - z * x);
            let pitch = if sinp.abs() >= 1.0 {
                math::HALF_PI.copysign(sinp)
            } else {
                sinp.asin()
            };

            let siny_cosp = 2.0 * (w * z + x * y);
            let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
            let yaw = siny_cosp.atan2(cosy_cosp);

            Vector3::new(roll, pitch, yaw) * math::RAD_TO_DEG
        })
    }

    /// Rotation matrix equivalent, in the 3x3 block of an otherwise
    /// identity matrix. Divides by the squared magnitude, so non-unit
    /// quaternions yield the same matrix as their unit form. Cached.
    pub fn to_rotation_matrix(&self) -> Matrix4x4 {
        self.matrix.get_or_compute(|| {
            log::trace!("Recomputing quaternion rotation matrix");
            let Vector4 { x, y, z, w } = self.v;
            let sqr = self.v.sqr_magnitude();
            let invs = 1.0 / sqr;

            let mut m = Matrix4x4::IDENTITY;
            m[0][0] = (sqr - 2.0 * y * y - 2.0 * z * z) * invs;
            m[0][1] = (2.0 * x * y + 2.0 * w * z) * invs;
            m[0][2] = (2.0 * x * z - 2.0 * w * y) * invs;

            m[1][0] = (2.0 * x * y - 2.0 * w * z) * invs;
            m[1][1] = (sqr - 2.0 * x * x - 2.0 * z * z) * invs;
            m[1][2] = (2.0 * y * z + 2.0 * w * x) * invs;

            m[2][0] = (2.0 * x * z + 2.0 * w * y) * invs;
            m[2][1] = (2.0 * y * z - 2.0 * w * x) * invs;
            m[2][2] = (sqr - 2.0 * x * x - 2.0 * y * y) * invs;
            m
        })
    }

    /// Normalized lerp of the raw components (NLERP, not SLERP)
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut v = self.v;
        v.lerp_self(&other.v, t);
        Self::from_raw(v).unit_quaternion()
    }

    /// The rotation from `self` to `other`: `other * conjugate()`
    pub fn angle_between(&self, other: &Self) -> Self {
        other * &self.conjugate()
    }

    /// Whether the Euler angle cache currently holds a value
    pub fn has_cached_euler_angles(&self) -> bool {
        self.euler.is_valid()
    }

    /// Whether the rotation matrix cache currently holds a value
    pub fn has_cached_rotation_matrix(&self) -> bool {
        self.matrix.is_valid()
    }

    /// Whether the inverse cache currently holds a value
    pub fn has_cached_inverse(&self) -> bool {
        self.inverse.is_valid()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// Copies the raw components only; the clone starts with empty caches.
impl Clone for Quaternion {
    fn clone(&self) -> Self {
        Self::from_raw(self.v)
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion").field("v", &self.v).finish()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.v)
    }
}

/// Equal if the raw components match within [`math::DEFAULT_EPSILON`],
/// either directly or after negation (q and -q are the same rotation).
impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.v.approx_eq(&other.v) || self.v.approx_eq(&-other.v)
    }
}

/// Hamilton product `self * q`.
///
/// Under the [`Quaternion::rotate_vector`] convention `self` is applied
/// first: `(a * b).rotate_vector(v) == b.rotate_vector(a.rotate_vector(v))`.
impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, q: &Quaternion) -> Quaternion {
        let a = self.v;
        let b = q.v;
        Quaternion::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
            a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        &self * &q
    }
}

impl MulAssign<&Quaternion> for Quaternion {
    fn mul_assign(&mut self, q: &Quaternion) {
        let product = &*self * q;
        self.set_raw(product.v);
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, q: Quaternion) {
        *self *= &q;
    }
}

/// `self * q.inverse()`
impl Div<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn div(self, q: &Quaternion) -> Quaternion {
        self * &q.inverse()
    }
}

impl Div for Quaternion {
    type Output = Quaternion;

    fn div(self, q: Quaternion) -> Quaternion {
        &self / &q
    }
}

impl DivAssign<&Quaternion> for Quaternion {
    fn div_assign(&mut self, q: &Quaternion) {
        let quotient = &*self / q;
        self.set_raw(quotient.v);
    }
}

impl DivAssign for Quaternion {
    fn div_assign(&mut self, q: Quaternion) {
        *self /= &q;
    }
}

/// Same as [`Quaternion::rotate_vector`]
impl Mul<Vector3<f64>> for &Quaternion {
    type Output = Vector3<f64>;

    fn mul(self, vec: Vector3<f64>) -> Vector3<f64> {
        self.rotate_vector(vec)
    }
}

impl Mul<Vector3<f64>> for Quaternion {
    type Output = Vector3<f64>;

    fn mul(self, vec: Vector3<f64>) -> Vector3<f64> {
        self.rotate_vector(vec)
    }
}
