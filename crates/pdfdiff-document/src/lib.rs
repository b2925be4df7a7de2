// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfdiff-document — the comparison pipeline: page rasterization, image
// diffing, and assembly of the output diff PDF.

pub mod compare;
pub mod diff;
pub mod output;
pub mod raster;

// Re-export the primary surface so callers can use `pdfdiff_document::compare_files` etc.
pub use compare::{compare_documents, compare_files};
pub use diff::{encode_jpeg, image_diff};
pub use output::DiffDocument;
pub use raster::{PageSource, Rasterizer, SourceDocument};
