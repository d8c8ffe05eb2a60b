// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Validation and SIMD Mask Helpers*
//!
//! Core utilities supporting the selective kernels: contract validation that
//! runs before any output write, and bitmask-to-SIMD-mask extraction for the
//! packed dense selection variant.

use std::simd::{Mask, MaskElement};

use minarrow::Bitmask;

use crate::errors::KernelError;

/// Validates that two lengths are equal for binary kernel operations.
///
/// # Parameters
/// - `label`: Descriptive context label for error reporting (e.g., "add at indices")
/// - `a`: Length of the first input array or data structure
/// - `b`: Length of the second input array or data structure
///
/// # Returns
/// `Ok(())` if lengths are equal, otherwise `KernelError::LengthMismatch` with diagnostic details.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(format!(
            "{}: length mismatch (lhs: {}, rhs: {})",
            label, a, b
        )));
    }
    Ok(())
}

/// Validates a sparse selection: every index in `[0, len)` and the sequence
/// non-decreasing.
///
/// Runs as a single upfront pass so the kernel bodies can update without
/// per-element bounds checks. Duplicate indices are accepted - the update is
/// idempotent - but a descending pair is rejected, since the grouping logic
/// in the gather/scatter tail assumes sorted input.
///
/// # Returns
/// `Ok(())` when the contract holds, otherwise `KernelError::OutOfBounds` or
/// `KernelError::UnsortedIndices`. Nothing is written on rejection.
#[inline(always)]
pub fn confirm_ascending_in_bounds(
    label: &str,
    indices: &[usize],
    len: usize,
) -> Result<(), KernelError> {
    let mut prev = 0usize;
    for (i, &index) in indices.iter().enumerate() {
        if index >= len {
            return Err(KernelError::OutOfBounds(format!(
                "{}: index {} at position {} exceeds array length {}",
                label, index, i, len
            )));
        }
        if i > 0 && index < prev {
            return Err(KernelError::UnsortedIndices(format!(
                "{}: index {} at position {} descends below predecessor {}",
                label, index, i, prev
            )));
        }
        prev = index;
    }
    Ok(())
}

/// Checks the mask covers exactly `cmp_len` positions.
/// Used so we can avoid bounds checks in the hot loop.
#[inline(always)]
pub fn confirm_mask_capacity(cmp_len: usize, mask: &Bitmask) -> Result<(), KernelError> {
    if mask.capacity() != cmp_len {
        return Err(KernelError::InvalidArguments(format!(
            "selection (Bitmask): capacity mismatch (expected {}, got {})",
            cmp_len,
            mask.capacity()
        )));
    }
    Ok(())
}

/// Creates a SIMD mask from a bitmask window for vectorised conditional stores.
///
/// Converts a contiguous section of a bitmask into a SIMD mask. The resulting
/// mask selectively enables lanes during the blended store, providing
/// efficient support for packed selections.
///
/// # Type Parameters
/// - `T`: Mask element type implementing `MaskElement` (i32 for f32 lanes, i64 for f64 lanes)
/// - `N`: Number of SIMD lanes, must match the SIMD vector width for the target operation
///
/// # Parameters
/// - `mask`: Source bitmask containing selection information
/// - `offset`: Starting bit offset within the bitmask
/// - `len`: Maximum number of bits to consider (bounds checking)
///
/// # Returns
/// A `Mask<T, N>` where each lane corresponds to the selection state of the
/// corresponding input element. Lanes beyond `len` are set to false for safety.
#[inline(always)]
pub fn simd_mask<T: MaskElement, const N: usize>(
    mask: &Bitmask,
    offset: usize,
    len: usize,
) -> Mask<T, N>
{
    let mut bits = [false; N];
    for l in 0..N {
        let idx = offset + l;
        bits[l] = idx < len && unsafe { mask.get_unchecked(idx) };
    }
    Mask::from_array(bits)
}

/// SIMD Alignment check. Returns true if the slice is properly
/// 64-byte aligned for SIMD operations, false otherwise.
#[inline(always)]
pub fn is_simd_aligned<T>(slice: &[T]) -> bool {
    if slice.is_empty() {
        true
    } else {
        (slice.as_ptr() as usize) % 64 == 0
    }
}

#[cfg(test)]
mod tests {
    use minarrow::{Vec64, vec64};

    use super::*;

    #[test]
    fn test_confirm_equal_len() {
        assert!(confirm_equal_len("test", 4, 4).is_ok());
        assert!(matches!(
            confirm_equal_len("test", 4, 5),
            Err(KernelError::LengthMismatch(_))
        ));
    }

    #[test]
    fn test_confirm_ascending_in_bounds() {
        assert!(confirm_ascending_in_bounds("test", &[], 0).is_ok());
        assert!(confirm_ascending_in_bounds("test", &[0, 2, 4], 5).is_ok());
        // duplicates tolerated
        assert!(confirm_ascending_in_bounds("test", &[1, 1, 3], 5).is_ok());
        assert!(matches!(
            confirm_ascending_in_bounds("test", &[0, 5], 5),
            Err(KernelError::OutOfBounds(_))
        ));
        assert!(matches!(
            confirm_ascending_in_bounds("test", &[3, 1], 5),
            Err(KernelError::UnsortedIndices(_))
        ));
    }

    #[test]
    fn test_simd_mask_window() {
        let bm = Bitmask::from_bools(&[true, false, true, true, false]);
        let m: Mask<i32, 4> = simd_mask::<i32, 4>(&bm, 0, 5);
        assert_eq!(m.to_array(), [true, false, true, true]);
        // lanes beyond the logical length read as unselected
        let tail: Mask<i32, 4> = simd_mask::<i32, 4>(&bm, 4, 5);
        assert_eq!(tail.to_array(), [false, false, false, false]);
    }

    #[test]
    fn test_is_simd_aligned_vec64() {
        let v: Vec64<f32> = vec64![1.0, 2.0, 3.0];
        assert!(is_simd_aligned(&v));
        let empty: [f32; 0] = [];
        assert!(is_simd_aligned(&empty));
    }
}
