// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sparse Kernels Module** - *Gather/Scatter Selective Add*
//!
//! Selective element-wise addition driven by an ascending index list: lanes
//! of `lhs` and `rhs` are gathered at the selected positions, summed, and
//! scattered back to `out` at the same positions. Preferred at low
//! selectivity, where touching only the selected elements beats streaming
//! the whole array through the dense mask pass.
//!
//! ## Modules
//! - **`dispatch`**: validated entry points routed through the engine tier
//! - **`simd`**: gather/scatter implementation using `std::simd` lane groups
//! - **`std`**: scalar reference loop - fallback tier and correctness oracle
//!
//! ## Scope
//! **These do not leverage parallel-thread processing, as this is expected to
//! be applied in the engine layer, which is app-specific.**

pub mod dispatch;
#[cfg(feature = "simd")]
pub mod simd;
pub mod std;

// Shared tests for SIMD and Std

#[cfg(test)]
mod tests {
    use minarrow::{Vec64, vec64};

    use crate::errors::KernelError;
    use crate::kernels::sparse::dispatch::{add_at_indices_f32, add_at_indices_f64};
    #[cfg(feature = "simd")]
    use crate::kernels::sparse::simd::{sparse_add_body_f32_simd, sparse_add_body_f64_simd};
    #[cfg(feature = "simd")]
    use crate::kernels::sparse::std::sparse_add_body_std;

    #[test]
    fn test_add_at_indices_f32_basic() {
        let lhs = vec64![1.0f32, 2.0, 3.0, 4.0, 5.0];
        let rhs = vec64![10.0f32, 20.0, 30.0, 40.0, 50.0];
        let mut out: Vec64<f32> = vec64![0.0; 5];
        add_at_indices_f32(&lhs, &rhs, &mut out, &[0, 2, 4]).unwrap();
        assert_eq!(out.as_slice(), &[11.0, 0.0, 33.0, 0.0, 55.0]);
    }

    #[test]
    fn test_add_at_indices_f64_basic() {
        let lhs = vec64![1.0f64, 2.0, 3.0, 4.0, 5.0];
        let rhs = vec64![10.0f64, 20.0, 30.0, 40.0, 50.0];
        let mut out: Vec64<f64> = vec64![0.0; 5];
        add_at_indices_f64(&lhs, &rhs, &mut out, &[1, 3]).unwrap();
        assert_eq!(out.as_slice(), &[0.0, 22.0, 0.0, 44.0, 0.0]);
    }

    #[test]
    fn test_unselected_positions_untouched() {
        let lhs = vec64![1.0f32, 2.0, 3.0, 4.0];
        let rhs = vec64![1.0f32, 1.0, 1.0, 1.0];
        // Non-zero baseline proves the kernel writes only selected slots.
        let mut out: Vec64<f32> = vec64![-7.5; 4];
        add_at_indices_f32(&lhs, &rhs, &mut out, &[1]).unwrap();
        assert_eq!(out.as_slice(), &[-7.5, 3.0, -7.5, -7.5]);
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let lhs = vec64![1.0f32, 2.0];
        let rhs = vec64![3.0f32, 4.0];
        let mut out: Vec64<f32> = vec64![9.0; 2];
        add_at_indices_f32(&lhs, &rhs, &mut out, &[]).unwrap();
        assert_eq!(out.as_slice(), &[9.0, 9.0]);
    }

    #[test]
    fn test_zero_length_arrays() {
        let lhs: Vec64<f64> = Vec64::new();
        let rhs: Vec64<f64> = Vec64::new();
        let mut out: Vec64<f64> = Vec64::new();
        add_at_indices_f64(&lhs, &rhs, &mut out, &[]).unwrap();
    }

    #[test]
    fn test_full_selection_matches_plain_add() {
        let n = 23; // not a lane multiple
        let lhs: Vec64<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
        let rhs: Vec64<f64> = (0..n).map(|i| 100.0 - i as f64).collect();
        let indices: Vec<usize> = (0..n).collect();
        let mut out: Vec64<f64> = vec64![0.0; n];
        add_at_indices_f64(&lhs, &rhs, &mut out, &indices).unwrap();
        for i in 0..n {
            assert_eq!(out[i], lhs[i] + rhs[i]);
        }
    }

    #[test]
    fn test_duplicate_indices_idempotent() {
        let lhs = vec64![1.0f32, 2.0, 3.0];
        let rhs = vec64![4.0f32, 5.0, 6.0];
        let mut once: Vec64<f32> = vec64![0.0; 3];
        let mut twice: Vec64<f32> = vec64![0.0; 3];
        add_at_indices_f32(&lhs, &rhs, &mut once, &[0, 2]).unwrap();
        add_at_indices_f32(&lhs, &rhs, &mut twice, &[0, 0, 2, 2]).unwrap();
        assert_eq!(once.as_slice(), twice.as_slice());
    }

    #[test]
    fn test_out_of_range_index_rejected_before_writes() {
        let lhs = vec64![1.0f32, 2.0, 3.0];
        let rhs = vec64![1.0f32, 1.0, 1.0];
        let mut out: Vec64<f32> = vec64![0.0; 3];
        let err = add_at_indices_f32(&lhs, &rhs, &mut out, &[0, 3]).unwrap_err();
        assert!(matches!(err, KernelError::OutOfBounds(_)));
        assert_eq!(out.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_descending_indices_rejected() {
        let lhs = vec64![1.0f64, 2.0, 3.0];
        let rhs = vec64![1.0f64, 1.0, 1.0];
        let mut out: Vec64<f64> = vec64![0.0; 3];
        let err = add_at_indices_f64(&lhs, &rhs, &mut out, &[2, 0]).unwrap_err();
        assert!(matches!(err, KernelError::UnsortedIndices(_)));
        assert_eq!(out.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let lhs = vec64![1.0f32, 2.0];
        let rhs = vec64![1.0f32, 2.0, 3.0];
        let mut out: Vec64<f32> = vec64![0.0; 2];
        let err = add_at_indices_f32(&lhs, &rhs, &mut out, &[0]).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }

    // SIMD body vs scalar oracle, exercised at sizes straddling lane groups.

    #[cfg(feature = "simd")]
    #[test]
    fn test_simd_body_matches_std_f32() {
        const LANES: usize = 8;
        let n = 67;
        let lhs: Vec64<f32> = (0..n).map(|i| (i as f32).sin()).collect();
        let rhs: Vec64<f32> = (0..n).map(|i| (i as f32) * 1.25).collect();
        // counts below, at, and past the lane group boundary
        for count in [0, 1, LANES - 1, LANES, LANES + 1, 2 * LANES + 3, n] {
            let indices: Vec<usize> = (0..count).map(|i| i * n / count.max(1)).collect();
            let mut simd_out: Vec64<f32> = vec64![0.5; n];
            let mut std_out: Vec64<f32> = vec64![0.5; n];
            sparse_add_body_f32_simd::<LANES>(&lhs, &rhs, &mut simd_out, &indices);
            sparse_add_body_std(&lhs, &rhs, &mut std_out, &indices);
            assert_eq!(simd_out.as_slice(), std_out.as_slice(), "count={count}");
        }
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_simd_body_matches_std_f64() {
        const LANES: usize = 4;
        let n = 41;
        let lhs: Vec64<f64> = (0..n).map(|i| (i as f64).cos()).collect();
        let rhs: Vec64<f64> = (0..n).map(|i| (i as f64) / 3.0).collect();
        for count in [0, 1, LANES - 1, LANES, 3 * LANES + 2, n] {
            let indices: Vec<usize> = (0..count).map(|i| i * n / count.max(1)).collect();
            let mut simd_out: Vec64<f64> = vec64![-1.0; n];
            let mut std_out: Vec64<f64> = vec64![-1.0; n];
            sparse_add_body_f64_simd::<LANES>(&lhs, &rhs, &mut simd_out, &indices);
            sparse_add_body_std(&lhs, &rhs, &mut std_out, &indices);
            assert_eq!(simd_out.as_slice(), std_out.as_slice(), "count={count}");
        }
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_simd_body_count_below_one_lane_group() {
        // The vector loop must never execute; everything goes through the tail.
        const LANES: usize = 8;
        let lhs = vec64![1.0f32, 2.0, 3.0];
        let rhs = vec64![10.0f32, 20.0, 30.0];
        let mut out: Vec64<f32> = vec64![0.0; 3];
        sparse_add_body_f32_simd::<LANES>(&lhs, &rhs, &mut out, &[1]);
        assert_eq!(out.as_slice(), &[0.0, 22.0, 0.0]);
    }
}
