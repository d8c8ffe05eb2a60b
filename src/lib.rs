// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// At the time of writing this unlocks extra std::simd that the developers
// intend on stabilising but haven't yet.
// This includes gather/scatter lane addressing and related features.
#![feature(portable_simd)]

// compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build

//! # **Selective Kernels** - *SIMD Selective Element-Wise Addition*
//!
//! Data-parallel element-wise addition over a *selection* of array positions:
//! `out[i] = lhs[i] + rhs[i]` for selected `i`, with every unselected position
//! left untouched. Two strategy families cover the density spectrum:
//!
//! - **`kernels::sparse`** - gather/scatter over an ascending index list.
//!   Preferred at low selectivity, where touching only the selected lanes
//!   beats streaming the whole array.
//! - **`kernels::dense`** - contiguous loads with a blended (conditional)
//!   store driven by a per-position mask. Preferred at high selectivity,
//!   where one linear pass amortises better than lane gathers.
//!
//! Both families ship a vectorised body (`std::simd`, lane counts fixed at
//! build time by `build.rs`) and a scalar reference body that doubles as the
//! correctness oracle and the fallback tier. The `engine` module selects the
//! capability tier once per process and routes every call through it.
//!
//! Results are bit-identical to the scalar double loop regardless of tier,
//! lane width, or tail length.

pub mod operators;

pub mod kernels {
    pub mod dense;
    pub mod sparse;
}

pub mod engine;

pub mod selection;

pub mod config;

pub mod errors;

pub mod utils;
