//! Scalar math helpers and constants

use crate::error::{MathError, Result};

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Pi divided by two
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// Factor to convert degrees to radians
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Factor to convert radians to degrees
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Default tolerance for approximate comparisons
pub const DEFAULT_EPSILON: f64 = 0.00001;

/// Bigger of two values
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    if a > b { a } else { b }
}

/// Smaller of two values
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    if a < b { a } else { b }
}

/// `v`, but at least `min` and at most `max`
#[inline]
pub fn clamp(v: f64, min_v: f64, max_v: f64) -> f64 {
    max(min(v, max_v), min_v)
}

/// Linear interpolation between `a` and `b` by `t` (not clamped)
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let it = 1.0 - t;
    a * it + b * t
}

/// Absolute value
#[inline]
pub fn abs(a: f64) -> f64 {
    if a > 0.0 { a } else { -a }
}

/// Whether `a` and `b` differ by at most `epsilon`
#[inline]
pub fn similar(a: f64, b: f64, epsilon: f64) -> bool {
    abs(a - b) <= epsilon
}

/// Modulo whose result takes the sign of the denominator.
///
/// Unlike `%`, a negative numerator with a positive denominator yields a
/// positive result: `modulo(-199, 32) == 25`.
///
/// # Errors
/// [`MathError::DivisionByZero`] if `denominator == 0`.
pub fn modulo(numerator: i32, denominator: i32) -> Result<i32> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    // wrapping_rem: i32::MIN % -1 is 0, not an overflow
    let r = numerator.wrapping_rem(denominator);
    if r != 0 && (r < 0) != (denominator < 0) {
        Ok(r + denominator)
    } else {
        Ok(r)
    }
}

/// Oscillates over `[a, b]` instead of `[-1, 1]`, like a shifted sine.
///
/// With `speed = 1` the result is `a` for even `counter` and `b` for odd
/// `counter`. Raising `speed` raises the frequency.
pub fn oscillate(a: f64, b: f64, counter: f64, speed: f64) -> f64 {
    ((counter * speed * PI - HALF_PI).sin() * 0.5 + 0.5) * (b - a) + a
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_abs() {
        assert_eq!(abs(45.0), 45.0);
        assert_eq!(abs(-45.0), 45.0);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn test_min_max_clamp() {
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-5.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(2.5, 0.0, 3.0), 2.5);
    }

    #[test]
    fn test_lerp_unclamped() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn test_similar() {
        assert!(similar(1.0, 1.000001, DEFAULT_EPSILON));
        assert!(!similar(1.0, 1.1, DEFAULT_EPSILON));
    }

    #[test]
    fn test_modulo_sign_classes() {
        assert_eq!(modulo(199, 32), Ok(7));
        assert_eq!(modulo(-199, 32), Ok(25));
        assert_eq!(modulo(199, -32), Ok(-25));
        assert_eq!(modulo(-199, -32), Ok(-7));
        assert_eq!(modulo(0, 32), Ok(0));
        assert_eq!(modulo(0, -32), Ok(0));
        assert_eq!(modulo(64, 32), Ok(0));
        assert_eq!(modulo(-64, 32), Ok(0));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(modulo(199, 0), Err(MathError::DivisionByZero));
        assert_eq!(modulo(-199, 0), Err(MathError::DivisionByZero));
        assert_eq!(modulo(0, 0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_modulo_extremes() {
        assert_eq!(modulo(i32::MIN, -1), Ok(0));
        assert_eq!(modulo(i32::MIN, i32::MAX), Ok(i32::MAX - 1));
    }

    #[test]
    fn test_oscillate() {
        assert!((oscillate(2.0, 5.0, 0.0, 1.0) - 2.0).abs() < EPSILON);
        assert!((oscillate(2.0, 5.0, 1.0, 1.0) - 5.0).abs() < EPSILON);
        assert!((oscillate(2.0, 5.0, 2.0, 1.0) - 2.0).abs() < EPSILON);
        assert!((oscillate(2.0, 5.0, 0.5, 2.0) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_angle_conversions() {
        assert!((180.0 * DEG_TO_RAD - PI).abs() < EPSILON);
        assert!((PI * RAD_TO_DEG - 180.0).abs() < EPSILON);
    }
}
