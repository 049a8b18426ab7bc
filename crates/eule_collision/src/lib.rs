//! Point-containment colliders for Eule
//!
//! This crate answers "is this point inside?" queries. It does not resolve
//! collisions or compute contact data.
//!
//! - [`Collider`] - trait for shapes that answer containment queries
//! - [`TrapazoidalPrismCollider`] - convex hexahedron with 8 movable vertices

pub mod prism;

pub use prism::{Corner, Face, TrapazoidalPrismCollider};

use eule_math::Vector3d;

/// A shape that can test whether it contains a point
pub trait Collider: Send + Sync {
    /// Whether `point` lies inside the shape or on its surface
    fn contains(&self, point: Vector3d) -> bool;
}
