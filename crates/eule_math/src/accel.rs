//! AVX kernels for the 4x4 hot paths
//!
//! Each kernel performs the same multiplications and additions in the same
//! order as the portable code in [`crate::matrix`], one f64 lane per output
//! cell, so results are bit-identical to the scalar path.
//!
//! Dispatch is decided at runtime; the functions here return `None` when
//! the CPU lacks AVX so the caller falls back to scalar code.

use std::arch::x86_64::*;
use std::sync::OnceLock;

use crate::{Matrix4x4, Vector4};

fn avx_available() -> bool {
    static DETECTED: OnceLock<bool> = OnceLock::new();
    *DETECTED.get_or_init(|| {
        let found = is_x86_feature_detected!("avx");
        log::debug!("AVX kernels {}", if found { "enabled" } else { "unavailable" });
        found
    })
}

/// `a * b` via AVX, or `None` without AVX support
pub(crate) fn multiply_4x4(a: &Matrix4x4, b: &Matrix4x4) -> Option<Matrix4x4> {
    if !avx_available() {
        return None;
    }
    // SAFETY: AVX presence was checked above
    Some(unsafe { multiply_4x4_avx(a, b) })
}

/// `m` applied to `v` via AVX, or `None` without AVX support
pub(crate) fn transform_vector4(m: &Matrix4x4, v: Vector4<f64>) -> Option<Vector4<f64>> {
    if !avx_available() {
        return None;
    }
    // SAFETY: AVX presence was checked above
    Some(unsafe { transform_vector4_avx(m, v) })
}

/// Result row i is `a[i][0]*b[0] + a[i][1]*b[1] + a[i][2]*b[2] + a[i][3]*b[3]`
/// with the rows of `b` as 4-lane registers.
///
/// # Safety
/// The CPU must support AVX.
#[target_feature(enable = "avx")]
unsafe fn multiply_4x4_avx(a: &Matrix4x4, b: &Matrix4x4) -> Matrix4x4 {
    let b_rows = [
        _mm256_loadu_pd(b.v[0].as_ptr()),
        _mm256_loadu_pd(b.v[1].as_ptr()),
        _mm256_loadu_pd(b.v[2].as_ptr()),
        _mm256_loadu_pd(b.v[3].as_ptr()),
    ];

    let mut out = Matrix4x4::from_rows([[0.0; 4]; 4]);
    for (row_out, row_a) in out.v.iter_mut().zip(a.v.iter()) {
        let mut acc = _mm256_mul_pd(_mm256_set1_pd(row_a[0]), b_rows[0]);
        for (&a_k, &b_k) in row_a.iter().zip(b_rows.iter()).skip(1) {
            acc = _mm256_add_pd(acc, _mm256_mul_pd(_mm256_set1_pd(a_k), b_k));
        }
        _mm256_storeu_pd(row_out.as_mut_ptr(), acc);
    }
    out
}

/// Accumulates the columns of `m` scaled by the components of `v`.
///
/// # Safety
/// The CPU must support AVX.
#[target_feature(enable = "avx")]
unsafe fn transform_vector4_avx(m: &Matrix4x4, v: Vector4<f64>) -> Vector4<f64> {
    // Columns as registers; lane i holds row i
    let t = m.transpose_4x4();
    let cols = [
        _mm256_loadu_pd(t.v[0].as_ptr()),
        _mm256_loadu_pd(t.v[1].as_ptr()),
        _mm256_loadu_pd(t.v[2].as_ptr()),
        _mm256_loadu_pd(t.v[3].as_ptr()),
    ];
    let comps = [v.x, v.y, v.z, v.w];

    let mut acc = _mm256_mul_pd(cols[0], _mm256_set1_pd(comps[0]));
    for (&col, &comp) in cols.iter().zip(comps.iter()).skip(1) {
        acc = _mm256_add_pd(acc, _mm256_mul_pd(col, _mm256_set1_pd(comp)));
    }

    let mut lanes = [0.0; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    Vector4::from_array(lanes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix4x4 {
        Matrix4x4::from_rows([
            [0.1, -2.5, 3.25, 4.0],
            [1.0 / 3.0, 0.7, -0.2, 5.5],
            [9.0, 0.01, 1.0 / 7.0, -6.0],
            [0.3, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_multiply_matches_scalar_bitwise() {
        let a = sample();
        let b = sample().transpose_4x4();
        if let Some(fast) = multiply_4x4(&a, &b) {
            assert_eq!(fast, a.multiply_4x4_scalar(&b));
        }
    }

    #[test]
    fn test_transform_matches_scalar_bitwise() {
        let m = sample();
        let v = Vector4::new(0.3, -1.7, 2.0 / 3.0, 1.0);
        if let Some(fast) = transform_vector4(&m, v) {
            assert_eq!(fast, m.transform_vector4_scalar(v));
        }
    }
}
