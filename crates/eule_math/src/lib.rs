//! 3D Mathematics Kernel
//!
//! This crate provides the vector, matrix and rotation types of the Eule
//! library.
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - fixed-size vectors over `i32` or `f64`
//! - [`Matrix4x4`] - 3x3 linear block plus translation column
//! - [`Quaternion`] - rotation with lazily cached Euler/matrix/inverse forms
//!
//! ## Utilities
//!
//! - [`math`] - scalar helpers and constants
//! - [`Random`] - seedable random number generator
//! - [`Rect`] - axis-aligned 2D rectangle
//!
//! ## Features
//!
//! - `simd` - AVX kernels for the 4x4 product and 4x4 vector application,
//!   chosen at runtime on x86_64. Output is identical to the scalar path.

#[macro_use]
mod vector_macros;

pub mod error;
pub mod math;
mod matrix;
mod memo;
mod quaternion;
mod random;
mod rect;
mod scalar;
mod vector2;
mod vector3;
mod vector4;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod accel;

pub use error::{MathError, Result};
pub use matrix::Matrix4x4;
pub use quaternion::Quaternion;
pub use random::Random;
pub use rect::Rect;
pub use scalar::Scalar;
pub use vector2::{Vector2, Vector2d, Vector2i};
pub use vector3::{Vector3, Vector3d, Vector3i};
pub use vector4::{Vector4, Vector4d, Vector4i};
