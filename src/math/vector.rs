//! Vector kernel for the coordinate-ascent update.
//!
//! ## Purpose
//!
//! This module provides the handful of dense vector reductions the update step
//! is built from: plain and weighted inner products, the element sum, an
//! in-place scaled addition and the transpose matrix-vector product used to
//! project onto covariate space.
//!
//! ## Design notes
//!
//! * **Unchecked lengths**: Slice lengths are the contract. Mismatches are caught
//!   by `debug_assert!` only; the engine validates once per sweep.
//! * **SIMD bridge**: `SimdKernel` routes the reductions for `f64` through
//!   two-lane `wide` accumulators and for `f32` through four-lane ones. The
//!   tail is finished in scalar arithmetic.
//! * **Determinism**: Accumulation order depends only on the slice length, so
//!   repeated calls on the same input return bit-identical results.
//!
//! ## Key concepts
//!
//! * **dotscaled**: `sum_i x[i] * xr[i] * d[i]`, the weighted correlation between
//!   a predictor column and the fitted vector.
//! * **matrixvec**: `out[j] = sum_i dzr[i, j] * v[i]` with `dzr` n x m column-major.
//!
//! ## Non-goals
//!
//! * This module does not allocate.
//! * This module does not check for non-finite values.

// External dependencies
use num_traits::Float;
use wide::{f32x4, f64x2};

// ============================================================================
// SimdKernel Trait
// ============================================================================

/// Reductions with a precision-specific fast path.
///
/// The provided methods are plain scalar loops; `f64` and `f32` override them
/// with SIMD accumulators.
pub trait SimdKernel: Float + 'static {
    /// Sum of all elements.
    #[inline]
    fn simd_sum(d: &[Self]) -> Self {
        d.iter().fold(Self::zero(), |acc, &v| acc + v)
    }

    /// Inner product of two equal-length slices.
    #[inline]
    fn simd_dot(u: &[Self], v: &[Self]) -> Self {
        u.iter()
            .zip(v)
            .fold(Self::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Weighted inner product of three equal-length slices.
    #[inline]
    fn simd_dotscaled(x: &[Self], xr: &[Self], d: &[Self]) -> Self {
        x.iter()
            .zip(xr)
            .zip(d)
            .fold(Self::zero(), |acc, ((&a, &b), &w)| acc + a * b * w)
    }
}

impl SimdKernel for f64 {
    #[inline]
    fn simd_sum(d: &[Self]) -> Self {
        let mut acc = f64x2::splat(0.0);
        let mut chunks = d.chunks_exact(2);
        for c in &mut chunks {
            acc += f64x2::new([c[0], c[1]]);
        }
        chunks
            .remainder()
            .iter()
            .fold(acc.reduce_add(), |s, &v| s + v)
    }

    #[inline]
    fn simd_dot(u: &[Self], v: &[Self]) -> Self {
        let mut acc = f64x2::splat(0.0);
        let mut uc = u.chunks_exact(2);
        let mut vc = v.chunks_exact(2);
        for (a, b) in (&mut uc).zip(&mut vc) {
            acc += f64x2::new([a[0], a[1]]) * f64x2::new([b[0], b[1]]);
        }
        uc.remainder()
            .iter()
            .zip(vc.remainder())
            .fold(acc.reduce_add(), |s, (&a, &b)| s + a * b)
    }

    #[inline]
    fn simd_dotscaled(x: &[Self], xr: &[Self], d: &[Self]) -> Self {
        let mut acc = f64x2::splat(0.0);
        let mut xc = x.chunks_exact(2);
        let mut rc = xr.chunks_exact(2);
        let mut dc = d.chunks_exact(2);
        for ((a, b), w) in (&mut xc).zip(&mut rc).zip(&mut dc) {
            acc += f64x2::new([a[0], a[1]]) * f64x2::new([b[0], b[1]]) * f64x2::new([w[0], w[1]]);
        }
        xc.remainder()
            .iter()
            .zip(rc.remainder())
            .zip(dc.remainder())
            .fold(acc.reduce_add(), |s, ((&a, &b), &w)| s + a * b * w)
    }
}

impl SimdKernel for f32 {
    #[inline]
    fn simd_sum(d: &[Self]) -> Self {
        let mut acc = f32x4::splat(0.0);
        let mut chunks = d.chunks_exact(4);
        for c in &mut chunks {
            acc += f32x4::new([c[0], c[1], c[2], c[3]]);
        }
        chunks
            .remainder()
            .iter()
            .fold(acc.reduce_add(), |s, &v| s + v)
    }

    #[inline]
    fn simd_dot(u: &[Self], v: &[Self]) -> Self {
        let mut acc = f32x4::splat(0.0);
        let mut uc = u.chunks_exact(4);
        let mut vc = v.chunks_exact(4);
        for (a, b) in (&mut uc).zip(&mut vc) {
            acc += f32x4::new([a[0], a[1], a[2], a[3]]) * f32x4::new([b[0], b[1], b[2], b[3]]);
        }
        uc.remainder()
            .iter()
            .zip(vc.remainder())
            .fold(acc.reduce_add(), |s, (&a, &b)| s + a * b)
    }

    #[inline]
    fn simd_dotscaled(x: &[Self], xr: &[Self], d: &[Self]) -> Self {
        let mut acc = f32x4::splat(0.0);
        let mut xc = x.chunks_exact(4);
        let mut rc = xr.chunks_exact(4);
        let mut dc = d.chunks_exact(4);
        for ((a, b), w) in (&mut xc).zip(&mut rc).zip(&mut dc) {
            acc += f32x4::new([a[0], a[1], a[2], a[3]])
                * f32x4::new([b[0], b[1], b[2], b[3]])
                * f32x4::new([w[0], w[1], w[2], w[3]]);
        }
        xc.remainder()
            .iter()
            .zip(rc.remainder())
            .zip(dc.remainder())
            .fold(acc.reduce_add(), |s, ((&a, &b), &w)| s + a * b * w)
    }
}

// ============================================================================
// Kernel Operations
// ============================================================================

/// Sum of the elements of `d`. Empty input yields zero.
#[inline]
pub fn sum<T: SimdKernel>(d: &[T]) -> T {
    T::simd_sum(d)
}

/// Inner product `sum_i u[i] * v[i]`.
#[inline]
pub fn dot<T: SimdKernel>(u: &[T], v: &[T]) -> T {
    debug_assert_eq!(u.len(), v.len(), "dot: length mismatch");
    T::simd_dot(u, v)
}

/// Weighted inner product `sum_i x[i] * xr[i] * d[i]`.
#[inline]
pub fn dotscaled<T: SimdKernel>(x: &[T], xr: &[T], d: &[T]) -> T {
    debug_assert_eq!(x.len(), xr.len(), "dotscaled: length mismatch");
    debug_assert_eq!(x.len(), d.len(), "dotscaled: length mismatch");
    T::simd_dotscaled(x, xr, d)
}

/// In-place scaled addition `xr[i] += c * x[i]`.
#[inline]
pub fn add<T: Float>(xr: &mut [T], c: T, x: &[T]) {
    debug_assert_eq!(xr.len(), x.len(), "add: length mismatch");
    for (r, &v) in xr.iter_mut().zip(x) {
        *r = *r + c * v;
    }
}

/// Transpose matrix-vector product `out = dzr' * v`.
///
/// `dzr` is n x m column-major with n = `v.len()` and m = `out.len()`, so
/// `out[j]` is the inner product of column `j` with `v`. Every element of
/// `out` is overwritten; with m = 0 nothing is written.
#[inline]
pub fn matrixvec<T: SimdKernel>(dzr: &[T], v: &[T], out: &mut [T]) {
    let n = v.len();
    debug_assert_eq!(dzr.len(), n * out.len(), "matrixvec: shape mismatch");
    if n == 0 {
        out.iter_mut().for_each(|o| *o = T::zero());
        return;
    }
    for (o, column) in out.iter_mut().zip(dzr.chunks_exact(n)) {
        *o = T::simd_dot(column, v);
    }
}
