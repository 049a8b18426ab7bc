//! 4x4 Matrix for 3D affine transformations
//!
//! The matrix is row-major and addressed as `m[y][x]`:
//!
//! ```text
//!  | a  b  c  d |
//!  | e  f  g  h |
//!  | i  j  k  l |
//!  | m  n  o  p |
//! ```
//!
//! The leading 3x3 block (a..k) holds rotation and scale, the column
//! (d, h, l) holds the translation. The bottom row is (0, 0, 0, 1) by
//! convention only; nothing enforces it.
//!
//! There are two ways to compose matrices, and they are NOT interchangeable:
//!
//! - [`Matrix4x4::compose_affine`] multiplies the 3x3 blocks and *adds* the
//!   translations. It assumes both transforms share one rotational frame.
//! - [`Matrix4x4::multiply_4x4`] is the true 4x4 product, which carries the
//!   translation through the rotation.
//!
//! Determinant, adjoint and inverse work on the leading `n x n` submatrix
//! for any `n` in `1..=4`, so the same code serves the 3x3 and 4x4 views.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MathError, Result};
use crate::math;
use crate::{Vector3, Vector4};

/// 4x4 matrix of a 3x3 linear block plus a translation column
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4x4 {
    /// Cells, row-major: `v[y][x]`
    pub v: [[f64; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        v: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from its rows
    #[inline]
    pub const fn from_rows(v: [[f64; 4]; 4]) -> Self {
        Self { v }
    }

    /// Checked cell access
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= 4 {
            return Err(MathError::IndexOutOfRange { index: row, len: 4 });
        }
        if col >= 4 {
            return Err(MathError::IndexOutOfRange { index: col, len: 4 });
        }
        Ok(self.v[row][col])
    }

    /// Row `y` as a vector
    pub fn row(&self, y: usize) -> Result<Vector4<f64>> {
        self.v
            .get(y)
            .map(|r| Vector4::from_array(*r))
            .ok_or(MathError::IndexOutOfRange { index: y, len: 4 })
    }

    /// Column `x` as a vector
    pub fn column(&self, x: usize) -> Result<Vector4<f64>> {
        if x >= 4 {
            return Err(MathError::IndexOutOfRange { index: x, len: 4 });
        }
        Ok(Vector4::new(self.v[0][x], self.v[1][x], self.v[2][x], self.v[3][x]))
    }

    /// The translation column (d, h, l)
    #[inline]
    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.v[0][3], self.v[1][3], self.v[2][3])
    }

    /// Overwrite the translation column (d, h, l)
    #[inline]
    pub fn set_translation(&mut self, trans: Vector3<f64>) {
        self.v[0][3] = trans.x;
        self.v[1][3] = trans.y;
        self.v[2][3] = trans.z;
    }

    /// Copy with the translation column zeroed
    pub fn without_translation(&self) -> Self {
        let mut m = *self;
        m.set_translation(Vector3::ZERO);
        m
    }

    /// Affine composition: 3x3 blocks are multiplied, translations added.
    ///
    /// Precondition: both transforms share the same rotational frame. For
    /// the mathematically general product use [`Self::multiply_4x4`].
    /// The bottom row of the result is always (0, 0, 0, 1).
    pub fn compose_affine(&self, other: &Self) -> Self {
        let a = &self.v;
        let b = &other.v;
        let mut m = Self::IDENTITY;

        for i in 0..3 {
            for j in 0..3 {
                m.v[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
            m.v[i][3] = a[i][3] + b[i][3];
        }

        m
    }

    /// `self` composed with the 3x3 inverse of `other`
    ///
    /// # Errors
    /// [`MathError::NotInvertible`] if `other`'s 3x3 block is singular.
    pub fn divide_affine(&self, other: &Self) -> Result<Self> {
        Ok(self.compose_affine(&other.inverse_3x3()?))
    }

    /// True 4x4 matrix product `self * other`
    pub fn multiply_4x4(&self, other: &Self) -> Self {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        if let Some(m) = crate::accel::multiply_4x4(self, other) {
            return m;
        }
        self.multiply_4x4_scalar(other)
    }

    /// Portable reference implementation of [`Self::multiply_4x4`]
    #[allow(clippy::needless_range_loop)]
    pub fn multiply_4x4_scalar(&self, other: &Self) -> Self {
        let a = &self.v;
        let b = &other.v;
        let mut m = Self::zeroed();

        for i in 0..4 {
            for j in 0..4 {
                let mut acc = a[i][0] * b[0][j];
                for k in 1..4 {
                    acc += a[i][k] * b[k][j];
                }
                m.v[i][j] = acc;
            }
        }

        m
    }

    /// Apply the 3x3 block to `p`, then add the translation
    pub fn transform_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        let m = &self.v;
        Vector3::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }

    /// Full 4x4 application to `v`
    pub fn transform_vector4(&self, v: Vector4<f64>) -> Vector4<f64> {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        if let Some(r) = crate::accel::transform_vector4(self, v) {
            return r;
        }
        self.transform_vector4_scalar(v)
    }

    /// Portable reference implementation of [`Self::transform_vector4`]
    pub fn transform_vector4_scalar(&self, v: Vector4<f64>) -> Vector4<f64> {
        let m = &self.v;
        let row = |i: usize| m[i][0] * v.x + m[i][1] * v.y + m[i][2] * v.z + m[i][3] * v.w;
        Vector4::new(row(0), row(1), row(2), row(3))
    }

    /// Transpose of the 3x3 block; translation and bottom row untouched
    pub fn transpose_3x3(&self) -> Self {
        let mut trans = *self;
        for i in 0..3 {
            for j in 0..3 {
                trans.v[j][i] = self.v[i][j];
            }
        }
        trans
    }

    /// Full 4x4 transpose
    pub fn transpose_4x4(&self) -> Self {
        let mut trans = *self;
        for i in 0..4 {
            for j in 0..4 {
                trans.v[j][i] = self.v[i][j];
            }
        }
        trans
    }

    /// The `(n-1) x (n-1)` minor left after deleting row `p` and column `q`
    /// from the leading `n x n` submatrix.
    ///
    /// Cells outside the minor keep their identity values.
    ///
    /// # Errors
    /// [`MathError::DimensionOutOfRange`] unless `1 <= n <= 4`,
    /// [`MathError::IndexOutOfRange`] if `p` or `q` is not below `n`.
    pub fn cofactors(&self, p: usize, q: usize, n: usize) -> Result<Self> {
        check_dimension(n)?;
        if p >= n {
            return Err(MathError::IndexOutOfRange { index: p, len: n });
        }
        if q >= n {
            return Err(MathError::IndexOutOfRange { index: q, len: n });
        }

        let mut cofs = Self::IDENTITY;
        let mut i = 0;
        let mut j = 0;

        for y in 0..n {
            for x in 0..n {
                if y != p && x != q {
                    cofs.v[i][j] = self.v[y][x];
                    j += 1;
                    if j == n - 1 {
                        j = 0;
                        i += 1;
                    }
                }
            }
        }

        Ok(cofs)
    }

    /// Determinant of the leading `n x n` submatrix, by Laplace expansion
    /// along row 0.
    ///
    /// # Errors
    /// [`MathError::DimensionOutOfRange`] unless `1 <= n <= 4`.
    pub fn determinant(&self, n: usize) -> Result<f64> {
        check_dimension(n)?;
        if n == 1 {
            return Ok(self.v[0][0]);
        }

        let mut d = 0.0;
        let mut sign = 1.0;
        for x in 0..n {
            let cofs = self.cofactors(0, x, n)?;
            d += sign * self.v[0][x] * cofs.determinant(n - 1)?;
            sign = -sign;
        }

        Ok(d)
    }

    /// Classical adjoint (transposed cofactor matrix) of the leading
    /// `n x n` submatrix. Cells outside it keep their identity values.
    ///
    /// # Errors
    /// [`MathError::DimensionOutOfRange`] unless `1 <= n <= 4`.
    pub fn adjoint(&self, n: usize) -> Result<Self> {
        check_dimension(n)?;

        // adj of a 1x1 matrix is [1]
        let mut adj = Self::IDENTITY;
        if n == 1 {
            return Ok(adj);
        }

        for i in 0..n {
            for j in 0..n {
                let cofs = self.cofactors(i, j, n)?;
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                adj.v[j][i] = sign * cofs.determinant(n - 1)?;
            }
        }

        Ok(adj)
    }

    /// Inverse of the 3x3 block, with the translation negated.
    ///
    /// This pairs with [`Self::compose_affine`]: composing a matrix with
    /// its `inverse_3x3` yields identity in both the block and the
    /// translation. It is not the true inverse of a rotated translation.
    ///
    /// # Errors
    /// [`MathError::NotInvertible`] if the 3x3 determinant is zero.
    pub fn inverse_3x3(&self) -> Result<Self> {
        let det = self.determinant(3)?;
        if det == 0.0 {
            return Err(MathError::NotInvertible { dimension: 3 });
        }

        let adj = self.adjoint(3)?;
        let mut inv = Self::IDENTITY;
        for i in 0..3 {
            for j in 0..3 {
                inv.v[i][j] = adj.v[i][j] / det;
            }
        }
        inv.set_translation(-self.translation());

        Ok(inv)
    }

    /// General 4x4 inverse
    ///
    /// # Errors
    /// [`MathError::NotInvertible`] if the 4x4 determinant is zero.
    pub fn inverse_4x4(&self) -> Result<Self> {
        let det = self.determinant(4)?;
        if det == 0.0 {
            return Err(MathError::NotInvertible { dimension: 4 });
        }

        Ok(self.adjoint(4)? / det)
    }

    /// Whether the 3x3 block has a non-zero determinant
    pub fn is_invertible_3x3(&self) -> bool {
        matches!(self.determinant(3), Ok(d) if d != 0.0)
    }

    /// Whether the whole matrix has a non-zero determinant
    pub fn is_invertible_4x4(&self) -> bool {
        matches!(self.determinant(4), Ok(d) if d != 0.0)
    }

    /// Whether all 16 cells differ by at most `epsilon`
    pub fn similar(&self, other: &Self, epsilon: f64) -> bool {
        self.v
            .iter()
            .flatten()
            .zip(other.v.iter().flatten())
            .all(|(a, b)| math::similar(*a, *b, epsilon))
    }

    /// [`Self::similar`] with [`math::DEFAULT_EPSILON`]
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.similar(other, math::DEFAULT_EPSILON)
    }

    fn map_cells(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut m = *self;
        m.v.iter_mut().flatten().for_each(|c| *c = f(*c));
        m
    }

    fn zip_cells(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut m = *self;
        for (c, o) in m.v.iter_mut().flatten().zip(other.v.iter().flatten()) {
            *c = f(*c, *o);
        }
        m
    }
}

fn check_dimension(n: usize) -> Result<()> {
    if (1..=4).contains(&n) {
        Ok(())
    } else {
        Err(MathError::DimensionOutOfRange { n })
    }
}

impl std::ops::Index<usize> for Matrix4x4 {
    type Output = [f64; 4];

    #[inline]
    fn index(&self, y: usize) -> &[f64; 4] {
        &self.v[y]
    }
}

impl std::ops::IndexMut<usize> for Matrix4x4 {
    #[inline]
    fn index_mut(&mut self, y: usize) -> &mut [f64; 4] {
        &mut self.v[y]
    }
}

// Cellwise operators

impl std::ops::Add for Matrix4x4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self.zip_cells(&other, |a, b| a + b)
    }
}

impl std::ops::AddAssign for Matrix4x4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Matrix4x4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self.zip_cells(&other, |a, b| a - b)
    }
}

impl std::ops::SubAssign for Matrix4x4 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Mul<f64> for Matrix4x4 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        self.map_cells(|c| c * scalar)
    }
}

impl std::ops::MulAssign<f64> for Matrix4x4 {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl std::ops::Div<f64> for Matrix4x4 {
    type Output = Self;
    fn div(self, denominator: f64) -> Self {
        self.map_cells(|c| c / denominator)
    }
}

impl std::ops::DivAssign<f64> for Matrix4x4 {
    fn div_assign(&mut self, denominator: f64) {
        *self = *self / denominator;
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in &self.v {
            for cell in row {
                write!(f, " | {}", cell)?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}
