// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Dense Kernels Module** - *Mask-Driven Blended-Store Selective Add*
//!
//! Selective element-wise addition driven by a per-position mask: the whole
//! array streams through in contiguous lane strides, and a blended
//! (conditional) store writes `lhs + rhs` only into lanes whose mask
//! predicate holds, leaving the rest of `out` untouched. Preferred at high
//! selectivity, where one linear pass beats per-element gather/scatter
//! regardless of which positions are selected.
//!
//! Two mask encodings are supported: the numeric sentinel mask (a value of
//! exactly 1.0 selects its position) and the packed Arrow-style `Bitmask`.
//!
//! ## Modules
//! - **`dispatch`**: validated entry points routed through the engine tier
//! - **`simd`**: contiguous-load + `Mask::select` blended-store implementation
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
