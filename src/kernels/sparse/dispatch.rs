// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sparse Dispatch Module** - *Entry Points for Gather/Scatter Selective Add*
//!
//! Call-site-stable entry points for the sparse selection family. Each
//! function validates the full contract upfront - equal input/output lengths,
//! every index in bounds, non-decreasing order - and rejects before any write
//! to `out` occurs. Valid calls route through the process-wide engine tier,
//! so callers never choose between vectorised and scalar bodies themselves.
//!
//! ## Contract
//! - `lhs`, `rhs`, `out` share one length `n`
//! - `indices` non-decreasing, each value in `[0, n)`, at most `n` entries
//!   (duplicates are idempotent)
//! - selected positions receive `lhs[i] + rhs[i]`; unselected positions in
//!   `out` are never touched by the call
//! - empty `indices` or `n == 0` is a valid no-op

use crate::engine::selected;
use crate::errors::KernelError;
use crate::utils::{confirm_ascending_in_bounds, confirm_equal_len};

/// Generates the per-type sparse entry points routed through the engine tier.
macro_rules! impl_add_at_indices {
    ($fn_name:ident, $ty:ty, $route:ident) => {
        #[doc = concat!(
            "Selective element-wise addition over `&[", stringify!($ty),
            "]`: for each listed index, `out[index] = lhs[index] + rhs[index]`. \
            Unlisted positions are left untouched. Indices must be non-decreasing \
            and in bounds; violations are rejected before any write."
        )]
        #[inline(always)]
        pub fn $fn_name(
            lhs: &[$ty],
            rhs: &[$ty],
            out: &mut [$ty],
            indices: &[usize],
        ) -> Result<(), KernelError> {
            let len = lhs.len();
            confirm_equal_len("add at indices: lhs/rhs length mismatch", len, rhs.len())?;
            confirm_equal_len("add at indices: lhs/out length mismatch", len, out.len())?;
            confirm_ascending_in_bounds("add at indices", indices, len)?;

            if indices.is_empty() {
                return Ok(());
            }

            selected().$route(lhs, rhs, out, indices);
            Ok(())
        }
    };
}

impl_add_at_indices!(add_at_indices_f32, f32, sparse_f32);
impl_add_at_indices!(add_at_indices_f64, f64, sparse_f64);
