//! Component types for the vector family
//!
//! Vectors come in an integer flavour (`i32`, a plain value tuple) and a
//! real flavour (`f64`, full vector calculus). Anything that produces a
//! real result (dot, cross, magnitude, normalization, lerp) is widened to
//! `f64`. Component products go through [`Scalar::mul_wide`] so integer
//! vectors never overflow `i32` on the way.

use bytemuck::Pod;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric component of a vector
pub trait Scalar:
    Pod
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    const ZERO: Self;
    const ONE: Self;

    /// Lossless widening to `f64`
    fn to_f64(self) -> f64;

    /// Narrowing from `f64`; integers truncate toward zero
    fn from_f64(value: f64) -> Self;

    /// `self * other` computed without overflow, as `f64`
    fn mul_wide(self, other: Self) -> f64;
}

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as i32
    }

    #[inline]
    fn mul_wide(self, other: Self) -> f64 {
        // |i32 * i32| <= 2^62 fits i64
        (i64::from(self) * i64::from(other)) as f64
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn mul_wide(self, other: Self) -> f64 {
        self * other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_truncates() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
    }

    #[test]
    fn test_widening() {
        assert_eq!(7i32.to_f64(), 7.0);
        assert_eq!(1.5f64.to_f64(), 1.5);
    }

    #[test]
    fn test_mul_wide_does_not_overflow() {
        assert_eq!(70_000i32.mul_wide(70_000), 4.9e9);
        assert_eq!(i32::MIN.mul_wide(i32::MIN), 2f64.powi(62));
        assert_eq!(0.5f64.mul_wide(3.0), 1.5);
    }
}
