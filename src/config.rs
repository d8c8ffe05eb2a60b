// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling kernel behaviour and strategy
//! selection. These values are compile-time constants optimised for typical
//! workloads.

/// The numeric flag value denoting "selected" in a dense selection mask.
///
/// A mask position is selected when it compares exactly equal to this value;
/// any other value (including other non-zero values and NaN) is unselected.
/// Both the vectorised and scalar dense kernels apply the same exact-equality
/// test.
pub const DENSE_SELECTION_SENTINEL: f64 = 1.0;

/// Selectivity fraction above which the dense mask strategy is recommended
/// over sparse gather/scatter.
///
/// Below this density the per-lane gather/scatter of only the selected
/// positions wins; above it the single contiguous pass with a blended store
/// wins. Used by `operators::SelectionKind::recommended`.
pub const DENSE_STRATEGY_SELECTIVITY_THRESHOLD: f64 = 0.5;
