// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfdiff — Core types, options, and error definitions shared across crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CompareOptions, GeometryPolicy, PageCountPolicy};
pub use error::{PdfDiffError, Result};
pub use types::{DiffMethod, PageRect};
