//! Trapezoidal prism collider
//!
//! A convex hexahedron given by 8 freely placed vertices. Each vertex is
//! named by a [`Corner`] bit mask:
//!
//! ```text
//!   bit 2: FRONT (+z) / BACK   (-z)
//!   bit 1: RIGHT (+x) / LEFT   (-x)
//!   bit 0: TOP   (+y) / BOTTOM (-y)
//! ```
//!
//! The mask value is the vertex index, so `FRONT | LEFT | TOP` is vertex 5.
//! Every face derives a normal from two edges leaving one fixed "core"
//! vertex of that face. With vertices placed as the mask names suggest,
//! these normals point into the prism, and a point is inside when it lies
//! on the normal side of all six faces.

use bitflags::bitflags;

use eule_math::Vector3d;

use crate::Collider;

bitflags! {
    /// Vertex selector: one bit per axis
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Corner: u8 {
        /// +z side
        const FRONT = 1 << 2;
        /// +x side
        const RIGHT = 1 << 1;
        /// +y side
        const TOP = 1 << 0;
    }
}

impl Corner {
    /// -z side (no bit set)
    pub const BACK: Self = Self::empty();
    /// -x side (no bit set)
    pub const LEFT: Self = Self::empty();
    /// -y side (no bit set)
    pub const BOTTOM: Self = Self::empty();

    /// Vertex index in `0..8`
    #[inline]
    pub fn index(self) -> usize {
        (self.bits() & 0b111) as usize
    }

    /// Corner for a vertex index, if `index < 8`
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| i < 8)
            .map(Self::from_bits_truncate)
    }
}

/// One of the six faces of the prism
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Left,
    Right,
    Front,
    Back,
    Top,
    Bottom,
}

impl Face {
    /// All faces, in normal-storage order
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }

    /// The vertex both normal-defining edges start from
    pub fn core_vertex(self) -> Corner {
        use Corner as C;
        match self {
            Face::Left | Face::Front | Face::Bottom => C::FRONT | C::LEFT | C::BOTTOM,
            Face::Right => C::FRONT | C::RIGHT | C::BOTTOM,
            Face::Back => C::BACK | C::LEFT | C::BOTTOM,
            Face::Top => C::FRONT | C::LEFT | C::TOP,
        }
    }

    /// Edge end points `(a, b)`; the normal is `(a - core) x (b - core)`
    pub fn edge_vertices(self) -> (Corner, Corner) {
        use Corner as C;
        match self {
            Face::Left => (C::BACK | C::LEFT | C::BOTTOM, C::FRONT | C::LEFT | C::TOP),
            Face::Right => (C::FRONT | C::RIGHT | C::TOP, C::BACK | C::RIGHT | C::BOTTOM),
            Face::Front => (C::FRONT | C::LEFT | C::TOP, C::FRONT | C::RIGHT | C::BOTTOM),
            Face::Back => (C::BACK | C::RIGHT | C::BOTTOM, C::BACK | C::LEFT | C::TOP),
            Face::Top => (C::BACK | C::LEFT | C::TOP, C::FRONT | C::RIGHT | C::TOP),
            Face::Bottom => (C::FRONT | C::RIGHT | C::BOTTOM, C::BACK | C::LEFT | C::BOTTOM),
        }
    }
}

/// Convex hexahedron with 8 movable vertices.
///
/// No validation is performed: the caller keeps faces planar and vertices
/// on the sides their [`Corner`] names. The default collider has all
/// vertices at the origin and zero normals, so it contains every point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrapazoidalPrismCollider {
    vertices: [Vector3d; 8],
    normals: [Vector3d; 6],
}

impl TrapazoidalPrismCollider {
    /// A collider with all vertices at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// A collider from vertices indexed by [`Corner::index`]
    pub fn from_vertices(vertices: [Vector3d; 8]) -> Self {
        let mut prism = Self {
            vertices,
            normals: [Vector3d::ZERO; 6],
        };
        prism.generate_normals();
        prism
    }

    /// A box centered on `center` reaching `half_extents` along each axis
    pub fn axis_aligned(center: Vector3d, half_extents: Vector3d) -> Self {
        let mut vertices = [Vector3d::ZERO; 8];
        for (index, vertex) in vertices.iter_mut().enumerate() {
            let corner = Corner::from_bits_truncate(index as u8);
            let sign = |flag: Corner| if corner.contains(flag) { 1.0 } else { -1.0 };
            *vertex = center
                + Vector3d::new(
                    sign(Corner::RIGHT) * half_extents.x,
                    sign(Corner::TOP) * half_extents.y,
                    sign(Corner::FRONT) * half_extents.z,
                );
        }
        Self::from_vertices(vertices)
    }

    /// Position of one vertex
    #[inline]
    pub fn vertex(&self, corner: Corner) -> Vector3d {
        self.vertices[corner.index()]
    }

    /// All vertices, indexed by [`Corner::index`]
    #[inline]
    pub fn vertices(&self) -> &[Vector3d; 8] {
        &self.vertices
    }

    /// Move one vertex. All six face normals are regenerated.
    pub fn set_vertex(&mut self, corner: Corner, value: Vector3d) {
        self.vertices[corner.index()] = value;
        self.generate_normals();
    }

    /// Normal of `face`, pointing into the prism
    #[inline]
    pub fn face_normal(&self, face: Face) -> Vector3d {
        self.normals[face.slot()]
    }

    /// Signed distance-like value of `point` relative to `face`:
    /// `(point - core) . normal`. Non-negative on the inner side.
    pub fn face_dot(&self, face: Face, point: Vector3d) -> f64 {
        (point - self.vertex(face.core_vertex())).dot(&self.face_normal(face))
    }

    fn generate_normals(&mut self) {
        for face in Face::ALL {
            let core = self.vertex(face.core_vertex());
            let (a, b) = face.edge_vertices();
            let edge_a = self.vertex(a) - core;
            let edge_b = self.vertex(b) - core;
            self.normals[face.slot()] = edge_a.cross(&edge_b);
        }
        log::trace!("Regenerated prism face normals: {:?}", self.normals);
    }
}

impl Collider for TrapazoidalPrismCollider {
    /// Inside (or on the surface) iff on the inner side of all six faces
    fn contains(&self, point: Vector3d) -> bool {
        Face::ALL.iter().all(|&face| self.face_dot(face, point) >= 0.0)
    }
}
