// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SIMD Sparse Kernels Module** - *Gather/Scatter Selective Add*
//!
//! Inner SIMD-accelerated implementations using `std::simd`.
//! Prefer dispatch.rs for easily handling the general case, otherwise you can
//! use these inner functions directly.
//!
//! ## Overview
//! - **Portable SIMD**: `std::simd` gather/scatter with compile-time lane counts
//! - **Lane grouping**: full `LANES`-sized groups of indices are gathered,
//!   added, and scattered in one shot, amortising per-element load/store cost
//! - **Scalar tail**: the final `count % LANES` indices fall back to the
//!   per-index loop; when `count < LANES` the vector loop never runs
//! - **Safety**: callers guarantee indices are in bounds; the dispatch layer
//!   validates before routing here
//!
//! ## Architecture Notes
//! - Building blocks for the engine tier, or for low-level hot loops
//!   where one wants to fully avoid abstraction overhead.
//! - Parallelisation intentionally excluded to allow flexible chunking strategies

use core::simd::Simd;

/// SIMD f32 selective-add kernel over an index list.
///
/// Processes indices in `LANES`-sized groups: loads the group's index lanes,
/// gathers `lhs` and `rhs` at those positions, adds, and scatters the sums
/// back to `out` at the same positions. Remaining indices use the scalar tail.
#[inline(always)]
pub fn sparse_add_body_f32_simd<const LANES: usize>(
    lhs: &[f32],
    rhs: &[f32],
    out: &mut [f32],
    indices: &[usize],
) {
    let count = indices.len();
    let vectorisable = count / LANES * LANES;
    let mut i = 0;
    while i < vectorisable {
        let idx = Simd::<usize, LANES>::from_slice(&indices[i..i + LANES]);
        let a = Simd::<f32, LANES>::gather_or_default(lhs, idx);
        let b = Simd::<f32, LANES>::gather_or_default(rhs, idx);
        (a + b).scatter(out, idx);
        i += LANES;
    }

    // Tail often caused by `count % LANES != 0`; uses scalar fallback
    for &index in &indices[vectorisable..] {
        out[index] = lhs[index] + rhs[index];
    }
}

/// SIMD f64 selective-add kernel over an index list.
///
/// Processes indices in `LANES`-sized groups: loads the group's index lanes,
/// gathers `lhs` and `rhs` at those positions, adds, and scatters the sums
/// back to `out` at the same positions. Remaining indices use the scalar tail.
#[inline(always)]
pub fn sparse_add_body_f64_simd<const LANES: usize>(
    lhs: &[f64],
    rhs: &[f64],
    out: &mut [f64],
    indices: &[usize],
) {
    let count = indices.len();
    let vectorisable = count / LANES * LANES;
    let mut i = 0;
    while i < vectorisable {
        let idx = Simd::<usize, LANES>::from_slice(&indices[i..i + LANES]);
        let a = Simd::<f64, LANES>::gather_or_default(lhs, idx);
        let b = Simd::<f64, LANES>::gather_or_default(rhs, idx);
        (a + b).scatter(out, idx);
        i += LANES;
    }

    // Tail often caused by `count % LANES != 0`; uses scalar fallback
    for &index in &indices[vectorisable..] {
        out[index] = lhs[index] + rhs[index];
    }
}
