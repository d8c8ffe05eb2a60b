// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Standard Sparse Kernels Module** - *Scalar Fallback / Non-SIMD Implementations*
//!
//! Portable scalar implementation of the selective add over an index list.
//!
//! Prefer dispatch.rs for easily handling the general case; this inner
//! function is for low-level hot loops that want to fully avoid abstraction
//! overhead, and it is the correctness oracle the vectorised body is tested
//! against.

use num_traits::Float;

/// Scalar selective-add kernel over an index list.
///
/// For each `index` in `indices`, sets `out[index] = lhs[index] + rhs[index]`.
/// Positions not listed are never touched. Caller guarantees every index is
/// in bounds (the dispatch layer validates upfront).
#[inline(always)]
pub fn sparse_add_body_std<T: Float>(lhs: &[T], rhs: &[T], out: &mut [T], indices: &[usize]) {
    for &index in indices {
        out[index] = lhs[index] + rhs[index];
    }
}
