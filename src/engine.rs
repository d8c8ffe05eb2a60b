// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Engine Module** - *Width-Agnostic Capability Dispatch*
//!
//! One-time selection of the kernel capability tier for the running process.
//!
//! ## Overview
//! - **Build-time lane widths**: `build.rs` fixes the `std::simd` lane counts
//!   (`W32`/`W64`) for the compilation target, so "how many elements fit in
//!   one vector operation" never leaks into call sites.
//! - **Runtime tier probe**: at first use the running CPU is checked for the
//!   feature set matching the compiled width; the winning tier is cached in a
//!   `OnceLock` for the process lifetime (write-once, read-only thereafter,
//!   safe for concurrent readers).
//! - **Graceful degradation**: a missing vector extension routes every call
//!   to the scalar reference tier. This is an ordinary branch, not an error.
//!
//! Callers never pick a tier directly - the per-family `dispatch` functions
//! route through `selected()` after validating their contracts.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use std::sync::OnceLock;

use minarrow::Bitmask;

#[cfg(feature = "simd")]
use crate::kernels::dense::simd::{
    bitmask_add_body_f32_simd, bitmask_add_body_f64_simd, mask_add_body_f32_simd,
    mask_add_body_f64_simd,
};
use crate::kernels::dense::std::{bitmask_add_body_std, mask_add_body_std};
#[cfg(feature = "simd")]
use crate::kernels::sparse::simd::{sparse_add_body_f32_simd, sparse_add_body_f64_simd};
use crate::kernels::sparse::std::sparse_add_body_std;
#[cfg(feature = "simd")]
use crate::utils::is_simd_aligned;

/// A resolved kernel set for one capability tier.
///
/// One implementation exists per tier: `VectorEngine` for the build-time SIMD
/// width, `ScalarEngine` as the universal fallback and correctness oracle.
/// All methods assume the dispatch layer has already validated lengths,
/// bounds, and ordering - bodies run without per-element checks.
pub(crate) trait SelectiveAddEngine: Send + Sync {
    fn name(&self) -> &'static str;

    fn sparse_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], indices: &[usize]);
    fn sparse_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], indices: &[usize]);

    fn dense_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], mask: &[f32]);
    fn dense_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], mask: &[f64]);

    fn bitmask_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], mask: &Bitmask);
    fn bitmask_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], mask: &Bitmask);
}

/// Scalar reference tier - the ground-truth double loop for every operation.
struct ScalarEngine;

impl SelectiveAddEngine for ScalarEngine {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn sparse_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], indices: &[usize]) {
        sparse_add_body_std(lhs, rhs, out, indices);
    }

    fn sparse_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], indices: &[usize]) {
        sparse_add_body_std(lhs, rhs, out, indices);
    }

    fn dense_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], mask: &[f32]) {
        mask_add_body_std(lhs, rhs, out, mask);
    }

    fn dense_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], mask: &[f64]) {
        mask_add_body_std(lhs, rhs, out, mask);
    }

    fn bitmask_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], mask: &Bitmask) {
        bitmask_add_body_std(lhs, rhs, out, mask);
    }

    fn bitmask_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], mask: &Bitmask) {
        bitmask_add_body_std(lhs, rhs, out, mask);
    }
}

/// Vectorised tier at the build-time lane width.
///
/// The contiguous dense family keeps the 64-byte alignment gate and falls
/// back to the scalar body per call when inputs are unaligned. The sparse
/// family addresses elements through index lanes, so alignment of `lhs`/`rhs`
/// does not apply.
#[cfg(feature = "simd")]
struct VectorEngine;

#[cfg(feature = "simd")]
impl SelectiveAddEngine for VectorEngine {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn sparse_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], indices: &[usize]) {
        sparse_add_body_f32_simd::<W32>(lhs, rhs, out, indices);
    }

    fn sparse_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], indices: &[usize]) {
        sparse_add_body_f64_simd::<W64>(lhs, rhs, out, indices);
    }

    fn dense_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], mask: &[f32]) {
        if is_simd_aligned(lhs) && is_simd_aligned(rhs) && is_simd_aligned(mask) {
            mask_add_body_f32_simd::<W32>(lhs, rhs, out, mask);
        } else {
            // Scalar fallback - alignment check failed
            mask_add_body_std(lhs, rhs, out, mask);
        }
    }

    fn dense_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], mask: &[f64]) {
        if is_simd_aligned(lhs) && is_simd_aligned(rhs) && is_simd_aligned(mask) {
            mask_add_body_f64_simd::<W64>(lhs, rhs, out, mask);
        } else {
            // Scalar fallback - alignment check failed
            mask_add_body_std(lhs, rhs, out, mask);
        }
    }

    fn bitmask_f32(&self, lhs: &[f32], rhs: &[f32], out: &mut [f32], mask: &Bitmask) {
        if is_simd_aligned(lhs) && is_simd_aligned(rhs) {
            bitmask_add_body_f32_simd::<W32>(lhs, rhs, out, mask);
        } else {
            // Scalar fallback - alignment check failed
            bitmask_add_body_std(lhs, rhs, out, mask);
        }
    }

    fn bitmask_f64(&self, lhs: &[f64], rhs: &[f64], out: &mut [f64], mask: &Bitmask) {
        if is_simd_aligned(lhs) && is_simd_aligned(rhs) {
            bitmask_add_body_f64_simd::<W64>(lhs, rhs, out, mask);
        } else {
            // Scalar fallback - alignment check failed
            bitmask_add_body_std(lhs, rhs, out, mask);
        }
    }
}

static SCALAR: ScalarEngine = ScalarEngine;
#[cfg(feature = "simd")]
static VECTOR: VectorEngine = VectorEngine;

/// Selected tier - initialised once at first use, never mutated afterwards.
static ENGINE: OnceLock<&'static dyn SelectiveAddEngine> = OnceLock::new();

/// Returns the process-wide kernel tier, probing hardware on first use.
#[inline]
pub(crate) fn selected() -> &'static dyn SelectiveAddEngine {
    *ENGINE.get_or_init(detect)
}

fn detect() -> &'static dyn SelectiveAddEngine {
    #[cfg(feature = "simd")]
    {
        if vector_tier_supported() {
            return &VECTOR;
        }
    }
    &SCALAR
}

/// True when the running CPU supports the feature set the vector bodies were
/// compiled against.
///
/// With `std::simd` the lane width is fixed at build time, so the runtime
/// choice collapses to "vector tier at the compiled width" versus "scalar".
#[cfg(feature = "simd")]
fn vector_tier_supported() -> bool {
    if W32 < 2 {
        // Build produced single-lane widths; the vector bodies degenerate
        // to the scalar loop anyway.
        return false;
    }

    #[cfg(target_arch = "x86_64")]
    {
        if W32 > 8 {
            return is_x86_feature_detected!("avx512f");
        }
        if W32 > 4 {
            return is_x86_feature_detected!("avx2");
        }
        return is_x86_feature_detected!("sse2");
    }

    #[cfg(target_arch = "aarch64")]
    {
        return std::arch::is_aarch64_feature_detected!("neon");
    }

    #[allow(unreachable_code)]
    true
}

/// Name of the capability tier this process selected: `"vector"` or `"scalar"`.
///
/// Useful for harnesses reporting which path their timings exercised.
#[inline]
pub fn active_engine() -> &'static str {
    selected().name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_stable() {
        let first = active_engine();
        for _ in 0..4 {
            assert_eq!(active_engine(), first);
        }
    }

    #[test]
    fn test_selection_is_a_known_tier() {
        assert!(matches!(active_engine(), "vector" | "scalar"));
    }

    #[test]
    fn test_concurrent_first_use() {
        // Initialisation must not race; hammer it from several threads.
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| selected().name()))
            .collect();
        let names: Vec<&str> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(names.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_lane_widths_nonzero() {
        assert!(W32 >= 1);
        assert!(W64 >= 1);
        assert!(W32 >= W64);
    }
}
