// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page comparator — walks matched page pairs across two documents, rasterizes
// and diffs each pair, and assembles the output document.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use pdfdiff_core::config::{CompareOptions, GeometryPolicy, PageCountPolicy};
use pdfdiff_core::error::{PdfDiffError, Result};

use crate::diff::{encode_jpeg, image_diff};
use crate::output::DiffDocument;
use crate::raster::{PageSource, Rasterizer};

/// Compare two open documents page by page, producing the assembled diff
/// document (not yet persisted).
///
/// Pages are processed strictly in ascending index order; output page N
/// corresponds to input pair N and takes the first document's rectangle. A
/// hard error on any page aborts the whole run.
#[instrument(skip_all, fields(dpi = options.dpi, method = %options.method))]
pub fn compare_documents<A, B>(
    doc_a: &A,
    doc_b: &B,
    options: &CompareOptions,
) -> Result<DiffDocument>
where
    A: PageSource,
    B: PageSource,
{
    let count_a = doc_a.page_count();
    let count_b = doc_b.page_count();

    if count_a != count_b {
        match options.page_count_policy {
            PageCountPolicy::Fail => {
                return Err(PdfDiffError::PageCountMismatch {
                    left: count_a,
                    right: count_b,
                });
            }
            PageCountPolicy::Truncate => {
                warn!(
                    count_a,
                    count_b, "page counts differ; comparing the shorter prefix"
                );
            }
        }
    }

    let pair_count = count_a.min(count_b);
    let mut output = DiffDocument::new();

    for index in 0..pair_count {
        let rect_a = doc_a.page_rect(index)?;
        let rect_b = doc_b.page_rect(index)?;

        if rect_a != rect_b {
            match options.geometry_policy {
                GeometryPolicy::Abort => {
                    return Err(PdfDiffError::GeometryMismatch {
                        index,
                        left: rect_a,
                        right: rect_b,
                    });
                }
                GeometryPolicy::Tolerate => {
                    info!(
                        page = index,
                        rect_a = %rect_a,
                        rect_b = %rect_b,
                        "page rectangles differ; sizing output from the first document"
                    );
                }
            }
        }

        let raster_a = doc_a.render(index, options.dpi)?;
        let raster_b = doc_b.render(index, options.dpi)?;

        let diff = image_diff(&raster_a, &raster_b, options.method)?;
        let encoded = encode_jpeg(&diff)?;
        output.append_page(rect_a, &encoded)?;

        debug!(page = index, "page pair compared");
    }

    info!(pages = output.page_count(), "comparison complete");

    Ok(output)
}

/// Open both PDFs through the rasterizer and compare them.
pub fn compare_files(
    rasterizer: &Rasterizer,
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    options: &CompareOptions,
) -> Result<DiffDocument> {
    let doc_a = rasterizer.open(path_a)?;
    let doc_b = rasterizer.open(path_b)?;
    compare_documents(&doc_a, &doc_b, options)
}

// -- Tests --------------------------------------------------------------------
