// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for pdfdiff.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PdfDiffError;

/// A page rectangle in PDF points (1 pt = 1/72 inch), anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRect {
    pub width: f32,
    pub height: f32,
}

impl PageRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for PageRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} pt", self.width, self.height)
    }
}

/// How differing pixels are highlighted in the output page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMethod {
    /// Any per-channel difference paints the pixel pure red on white.
    #[default]
    Any,
    /// The white background is XOR-ed with the raw per-channel difference,
    /// tinting changed pixels by the actual differing bit pattern.
    Xor,
}

impl DiffMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffMethod::Any => "any",
            DiffMethod::Xor => "xor",
        }
    }
}

impl std::fmt::Display for DiffMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffMethod {
    type Err = PdfDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(DiffMethod::Any),
            "xor" => Ok(DiffMethod::Xor),
            other => Err(PdfDiffError::InvalidArgument(other.to_string())),
        }
    }
}
