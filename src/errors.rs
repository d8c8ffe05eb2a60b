// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel operations with structured error reporting.
//!
//! All contract violations are reported to the caller before any write to the
//! output buffer occurs; kernels never partially apply a rejected call.

use core::fmt;
use std::error::Error;

/// Error type for all selective-kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition, enabling precise debugging and error reporting.
#[derive(Debug, Clone)]
pub enum KernelError {
    /// Array length mismatch between operands.
    LengthMismatch(String),

    /// Array index or memory access out of bounds.
    OutOfBounds(String),

    /// Sparse selection indices are not in ascending order.
    UnsortedIndices(String),

    /// Invalid arguments provided to kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            KernelError::UnsortedIndices(msg) => write!(f, "Unsorted indices: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}
