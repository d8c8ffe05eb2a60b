// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Dense Dispatch Module** - *Entry Points for Mask-Driven Selective Add*
//!
//! Call-site-stable entry points for the dense selection family. Each
//! function validates the full contract upfront - equal input/output lengths,
//! mask covering every position - and rejects before any write to `out`
//! occurs. Valid calls route through the process-wide engine tier.
//!
//! ## Contract
//! - `lhs`, `rhs`, `out`, and the mask share one length `n`
//! - a position is selected when its mask value equals the sentinel
//!   (`config::DENSE_SELECTION_SENTINEL`) for the numeric mask, or when its
//!   bit is set for the packed `Bitmask` variant
//! - selected positions receive `lhs[i] + rhs[i]`; unselected positions in
//!   `out` are never touched by the call
//! - `n == 0` is a valid no-op

use minarrow::Bitmask;

use crate::engine::selected;
use crate::errors::KernelError;
use crate::utils::{confirm_equal_len, confirm_mask_capacity};

/// Generates the per-type sentinel-mask entry points routed through the engine tier.
macro_rules! impl_add_where_mask {
    ($fn_name:ident, $ty:ty, $route:ident) => {
        #[doc = concat!(
            "Selective element-wise addition over `&[", stringify!($ty),
            "]`: for each position whose mask value equals the selection \
            sentinel (exactly 1.0), `out[i] = lhs[i] + rhs[i]`. Positions with \
            any other mask value are left untouched. The mask must match the \
            array length; violations are rejected before any write."
        )]
        #[inline(always)]
        pub fn $fn_name(
            lhs: &[$ty],
            rhs: &[$ty],
            out: &mut [$ty],
            mask: &[$ty],
        ) -> Result<(), KernelError> {
            let len = lhs.len();
            confirm_equal_len("add where mask: lhs/rhs length mismatch", len, rhs.len())?;
            confirm_equal_len("add where mask: lhs/out length mismatch", len, out.len())?;
            confirm_equal_len("add where mask: lhs/mask length mismatch", len, mask.len())?;

            if len == 0 {
                return Ok(());
            }

            selected().$route(lhs, rhs, out, mask);
            Ok(())
        }
    };
}

/// Generates the per-type packed-bitmask entry points routed through the engine tier.
macro_rules! impl_add_where_bitmask {
    ($fn_name:ident, $ty:ty, $route:ident) => {
        #[doc = concat!(
            "Selective element-wise addition over `&[", stringify!($ty),
            "]` driven by a packed `Bitmask`: set bits select positions for \
            `out[i] = lhs[i] + rhs[i]`, clear bits leave `out[i]` untouched. \
            The mask must cover exactly the array length; violations are \
            rejected before any write."
        )]
        #[inline(always)]
        pub fn $fn_name(
            lhs: &[$ty],
            rhs: &[$ty],
            out: &mut [$ty],
            mask: &Bitmask,
        ) -> Result<(), KernelError> {
            let len = lhs.len();
            confirm_equal_len("add where bitmask: lhs/rhs length mismatch", len, rhs.len())?;
            confirm_equal_len("add where bitmask: lhs/out length mismatch", len, out.len())?;
            confirm_mask_capacity(len, mask)?;

            if len == 0 {
                return Ok(());
            }

            selected().$route(lhs, rhs, out, mask);
            Ok(())
        }
    };
}

impl_add_where_mask!(add_where_mask_f32, f32, dense_f32);
impl_add_where_mask!(add_where_mask_f64, f64, dense_f64);

impl_add_where_bitmask!(add_where_bitmask_f32, f32, bitmask_f32);
impl_add_where_bitmask!(add_where_bitmask_f64, f64, bitmask_f64);
