// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Selection Helpers** - *Converting Between Selection Representations*
//!
//! A selection over array positions has two interchangeable encodings: the
//! ascending index list consumed by `kernels::sparse` and the per-position
//! sentinel mask consumed by `kernels::dense`. These helpers convert between
//! them so the kernels themselves stay pure transformations.

use num_traits::Float;

use crate::errors::KernelError;
use crate::utils::confirm_ascending_in_bounds;

/// Writes the "selected" sentinel into `mask` at each position in `indices`.
///
/// The caller owns the baseline: positions not listed are left as-is, so a
/// zeroed mask yields exactly the selection encoded by `indices`. Indices are
/// validated (ascending, in bounds) before any write.
#[inline]
pub fn fill_mask_from_indices<T: Float>(
    mask: &mut [T],
    indices: &[usize],
) -> Result<(), KernelError> {
    confirm_ascending_in_bounds("fill mask from indices", indices, mask.len())?;
    for &index in indices {
        mask[index] = T::one();
    }
    Ok(())
}

/// Collects the positions of `mask` holding the "selected" sentinel, ascending.
///
/// The inverse of `fill_mask_from_indices` over a zeroed baseline.
#[inline]
pub fn indices_from_mask<T: Float>(mask: &[T]) -> Vec<usize> {
    let sentinel = T::one();
    mask.iter()
        .enumerate()
        .filter(|(_, &v)| v == sentinel)
        .map(|(i, _)| i)
        .collect()
}

/// Fraction of positions selected, in `[0.0, 1.0]`. Zero-length arrays report 0.
#[inline]
pub fn selectivity(count: usize, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        count as f64 / len as f64
    }
}
