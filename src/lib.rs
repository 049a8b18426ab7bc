//! Eule - 3D math kernel
//!
//! Re-exports the math and collision crates and adds the configuration
//! layer and demo scenario used by the `eule` binary.

pub mod config;
pub mod demo;

pub use eule_collision as collision;
pub use eule_math as math;
