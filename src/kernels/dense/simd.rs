// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SIMD Dense Kernels Module** - *Blended-Store Selective Add*
//!
//! Inner SIMD-accelerated implementations using `std::simd`.
//! Prefer dispatch.rs for easily handling the general case, otherwise you can
//! use these inner functions directly.
//!
//! ## Overview
//! - **Contiguous strides**: the full array is processed in `LANES`-sized
//!   strides regardless of selection density - one linear pass, no gathers
//! - **Blended store**: each stride computes the per-lane sum and the
//!   "equals sentinel" predicate, then `Mask::select` blends the sum into the
//!   existing `out` lanes so unselected lanes keep their prior contents
//! - **Scalar tail**: the final `n % LANES` positions fall back to the
//!   per-position check
//! - **Safety**: callers guarantee equal lengths; the dispatch layer
//!   validates before routing here

use core::simd::{Mask, Simd, SimdElement};
use std::simd::cmp::SimdPartialEq;

use minarrow::Bitmask;

use crate::config::DENSE_SELECTION_SENTINEL;
use crate::utils::simd_mask;

/// SIMD f32 selective-add kernel over a sentinel mask.
///
/// Loads contiguous lanes of `lhs`, `rhs`, and `mask`, compares the mask
/// lanes against the sentinel, and blends `lhs + rhs` into `out` only where
/// the predicate holds. Remaining positions use the scalar tail.
#[inline(always)]
pub fn mask_add_body_f32_simd<const LANES: usize>(
    lhs: &[f32],
    rhs: &[f32],
    out: &mut [f32],
    mask: &[f32],
) {
    let sentinel = DENSE_SELECTION_SENTINEL as f32;
    let n = lhs.len();
    let sentinel_v = Simd::<f32, LANES>::splat(sentinel);
    let mut i = 0;
    while i + LANES <= n {
        let a = Simd::<f32, LANES>::from_slice(&lhs[i..i + LANES]);
        let b = Simd::<f32, LANES>::from_slice(&rhs[i..i + LANES]);
        let m = Simd::<f32, LANES>::from_slice(&mask[i..i + LANES]);
        let selected = m.simd_eq(sentinel_v);
        let existing = Simd::<f32, LANES>::from_slice(&out[i..i + LANES]);
        selected
            .select(a + b, existing)
            .copy_to_slice(&mut out[i..i + LANES]);
        i += LANES;
    }

    // Tail often caused by `n % LANES != 0`; uses scalar fallback
    for j in i..n {
        if mask[j] == sentinel {
            out[j] = lhs[j] + rhs[j];
        }
    }
}

/// SIMD f64 selective-add kernel over a sentinel mask.
///
/// Loads contiguous lanes of `lhs`, `rhs`, and `mask`, compares the mask
/// lanes against the sentinel, and blends `lhs + rhs` into `out` only where
/// the predicate holds. Remaining positions use the scalar tail.
#[inline(always)]
pub fn mask_add_body_f64_simd<const LANES: usize>(
    lhs: &[f64],
    rhs: &[f64],
    out: &mut [f64],
    mask: &[f64],
) {
    let n = lhs.len();
    let sentinel_v = Simd::<f64, LANES>::splat(DENSE_SELECTION_SENTINEL);
    let mut i = 0;
    while i + LANES <= n {
        let a = Simd::<f64, LANES>::from_slice(&lhs[i..i + LANES]);
        let b = Simd::<f64, LANES>::from_slice(&rhs[i..i + LANES]);
        let m = Simd::<f64, LANES>::from_slice(&mask[i..i + LANES]);
        let selected = m.simd_eq(sentinel_v);
        let existing = Simd::<f64, LANES>::from_slice(&out[i..i + LANES]);
        selected
            .select(a + b, existing)
            .copy_to_slice(&mut out[i..i + LANES]);
        i += LANES;
    }

    // Tail often caused by `n % LANES != 0`; uses scalar fallback
    for j in i..n {
        if mask[j] == DENSE_SELECTION_SENTINEL {
            out[j] = lhs[j] + rhs[j];
        }
    }
}

/// SIMD f32 selective-add kernel over a packed bitmask.
///
/// Same blended store as the sentinel variant, with the lane predicate
/// extracted from an Arrow-style validity window instead of a numeric
/// comparison.
#[inline(always)]
pub fn bitmask_add_body_f32_simd<const LANES: usize>(
    lhs: &[f32],
    rhs: &[f32],
    out: &mut [f32],
    mask: &Bitmask,
) {
    type M = <f32 as SimdElement>::Mask;

    let n = lhs.len();
    let mut i = 0;
    while i + LANES <= n {
        let selected: Mask<M, LANES> = simd_mask::<M, LANES>(mask, i, n);
        let a = Simd::<f32, LANES>::from_slice(&lhs[i..i + LANES]);
        let b = Simd::<f32, LANES>::from_slice(&rhs[i..i + LANES]);
        let existing = Simd::<f32, LANES>::from_slice(&out[i..i + LANES]);
        selected
            .select(a + b, existing)
            .copy_to_slice(&mut out[i..i + LANES]);
        i += LANES;
    }

    // Tail often caused by `n % LANES != 0`; uses scalar fallback
    for j in i..n {
        if unsafe { mask.get_unchecked(j) } {
            out[j] = lhs[j] + rhs[j];
        }
    }
}

/// SIMD f64 selective-add kernel over a packed bitmask.
///
/// Same blended store as the sentinel variant, with the lane predicate
/// extracted from an Arrow-style validity window instead of a numeric
/// comparison.
#[inline(always)]
pub fn bitmask_add_body_f64_simd<const LANES: usize>(
    lhs: &[f64],
    rhs: &[f64],
    out: &mut [f64],
    mask: &Bitmask,
) {
    type M = <f64 as SimdElement>::Mask;

    let n = lhs.len();
    let mut i = 0;
    while i + LANES <= n {
        let selected: Mask<M, LANES> = simd_mask::<M, LANES>(mask, i, n);
        let a = Simd::<f64, LANES>::from_slice(&lhs[i..i + LANES]);
        let b = Simd::<f64, LANES>::from_slice(&rhs[i..i + LANES]);
        let existing = Simd::<f64, LANES>::from_slice(&out[i..i + LANES]);
        selected
            .select(a + b, existing)
            .copy_to_slice(&mut out[i..i + LANES]);
        i += LANES;
    }

    // Tail often caused by `n % LANES != 0`; uses scalar fallback
    for j in i..n {
        if unsafe { mask.get_unchecked(j) } {
            out[j] = lhs[j] + rhs[j];
        }
    }
}
