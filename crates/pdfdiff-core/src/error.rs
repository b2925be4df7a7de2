// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for pdfdiff.

use thiserror::Error;

use crate::types::PageRect;

/// Top-level error type for all pdfdiff operations.
#[derive(Debug, Error)]
pub enum PdfDiffError {
    // -- Input documents --
    #[error("cannot open or parse document: {0}")]
    Document(String),

    #[error("page index {index} out of range (document has {count} pages)")]
    OutOfRange { index: usize, count: usize },

    // -- Comparison --
    #[error("unknown image diff method: {0:?}")]
    InvalidArgument(String),

    #[error("page {index} rectangles differ: {left} vs {right}")]
    GeometryMismatch {
        index: usize,
        left: PageRect,
        right: PageRect,
    },

    #[error("page counts differ: {left} vs {right}")]
    PageCountMismatch { left: usize, right: usize },

    #[error("image processing failed: {0}")]
    Image(String),

    // -- Output --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PdfDiffError>;
