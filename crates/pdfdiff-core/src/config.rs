// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Comparison configuration.

use serde::{Deserialize, Serialize};

use crate::types::DiffMethod;

/// What to do when the two documents have different page counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageCountPolicy {
    /// Compare the first `min(len_a, len_b)` page pairs and warn.
    #[default]
    Truncate,
    /// Abort the comparison with `PageCountMismatch`.
    Fail,
}

/// What to do when a page pair has different rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryPolicy {
    /// Log the mismatch and continue, sizing the output page from the first
    /// document. Sub-pixel rounding differences should not abort a batch run.
    #[default]
    Tolerate,
    /// Abort the comparison with `GeometryMismatch`.
    Abort,
}

/// Settings for a single document comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Render resolution in dots per inch.
    pub dpi: f32,
    /// Highlighting method for differing pixels.
    pub method: DiffMethod,
    /// Handling of documents with different page counts.
    pub page_count_policy: PageCountPolicy,
    /// Handling of page pairs with different rectangles.
    pub geometry_policy: GeometryPolicy,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            dpi: 192.0,
            method: DiffMethod::Any,
            page_count_policy: PageCountPolicy::Truncate,
            geometry_policy: GeometryPolicy::Tolerate,
        }
    }
}
