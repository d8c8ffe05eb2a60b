// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Standard Dense Kernels Module** - *Scalar Fallback / Non-SIMD Implementations*
//!
//! Portable scalar implementations of the mask-driven selective add.
//!
//! Prefer dispatch.rs for easily handling the general case; these inner
//! functions are the fallback tier and the correctness oracle for the
//! vectorised bodies.
//!
//! ## Design Notes
//! - "Selected" is exact equality with the sentinel (1.0); any other value,
//!   including NaN and other non-zero flags, leaves the position untouched
//! - Intentionally avoids parallelisation to allow higher-level chunking strategies

use minarrow::Bitmask;
use num_traits::Float;

/// Scalar selective-add kernel over a sentinel mask.
///
/// For each position `i` where `mask[i]` equals the sentinel, sets
/// `out[i] = lhs[i] + rhs[i]`; every other position is left untouched.
#[inline(always)]
pub fn mask_add_body_std<T: Float>(lhs: &[T], rhs: &[T], out: &mut [T], mask: &[T]) {
    let sentinel = T::one();
    let n = lhs.len();
    for i in 0..n {
        if mask[i] == sentinel {
            out[i] = lhs[i] + rhs[i];
        }
    }
}

/// Scalar selective-add kernel over a packed bitmask.
///
/// Set bits select positions for update; clear bits leave `out` untouched.
/// Caller guarantees the mask covers `lhs.len()` positions.
#[inline(always)]
pub fn bitmask_add_body_std<T: Float>(lhs: &[T], rhs: &[T], out: &mut [T], mask: &Bitmask) {
    let n = lhs.len();
    for i in 0..n {
        if unsafe { mask.get_unchecked(i) } {
            out[i] = lhs[i] + rhs[i];
        }
    }
}
