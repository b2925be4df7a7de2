// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page rasterizer — renders PDF pages to raster images at a controlled DPI
// using the `pdfium-render` crate.

use std::path::Path;

use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::{debug, info, instrument};

use pdfdiff_core::error::{PdfDiffError, Result};
use pdfdiff_core::types::PageRect;

/// PDF user space is fixed at 72 points per inch; the render zoom factor is
/// `dpi / POINTS_PER_INCH`, applied uniformly to both axes.
const POINTS_PER_INCH: f32 = 72.0;

/// A paginated document the comparator can query and rasterize.
///
/// This is the seam between the comparison pipeline and the PDF rendering
/// collaborator: production code goes through [`SourceDocument`], tests
/// substitute in-memory sources.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Rectangle of the page at `index` in points.
    fn page_rect(&self, index: usize) -> Result<PageRect>;

    /// Render the page at `index` to a raster image at the given DPI.
    ///
    /// The full page is rendered with annotations included and an opaque
    /// white background, row-major top-to-bottom.
    fn render(&self, index: usize, dpi: f32) -> Result<DynamicImage>;
}

/// Owns the pdfium library binding and opens documents through it.
pub struct Rasterizer {
    pdfium: Pdfium,
}

impl Rasterizer {
    /// Bind the pdfium library, preferring a copy next to the executable and
    /// falling back to the system library.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|err| {
                PdfDiffError::Document(format!(
                    "failed to load the pdfium library (is libpdfium installed?): {:?}",
                    err
                ))
            })?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(&self, path: impl AsRef<Path>) -> Result<SourceDocument<'_>> {
        let path_ref = path.as_ref();
        let document = self.pdfium.load_pdf_from_file(path_ref, None).map_err(|err| {
            PdfDiffError::Document(format!("failed to open {}: {:?}", path_ref.display(), err))
        })?;

        info!(pages = document.pages().len(), "PDF opened");

        Ok(SourceDocument {
            document,
            source_path: path_ref.display().to_string(),
        })
    }
}

/// An open input PDF, read-only for the lifetime of one comparison.
pub struct SourceDocument<'a> {
    document: PdfDocument<'a>,
    source_path: String,
}

impl SourceDocument<'_> {
    /// Path the document was opened from (useful for diagnostics).
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    fn page(&self, index: usize) -> Result<PdfPage<'_>> {
        let count = self.page_count();
        if index >= count {
            return Err(PdfDiffError::OutOfRange { index, count });
        }
        self.document.pages().get(index as u16).map_err(|err| {
            PdfDiffError::Document(format!(
                "cannot load page {} of {}: {:?}",
                index, self.source_path, err
            ))
        })
    }
}

impl PageSource for SourceDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_rect(&self, index: usize) -> Result<PageRect> {
        let page = self.page(index)?;
        Ok(PageRect::new(page.width().value, page.height().value))
    }

    fn render(&self, index: usize, dpi: f32) -> Result<DynamicImage> {
        let page = self.page(index)?;
        let zoom = dpi / POINTS_PER_INCH;

        let config = PdfRenderConfig::new()
            .scale_page_by_factor(zoom)
            .render_annotations(true);

        let bitmap = page.render_with_config(&config).map_err(|err| {
            PdfDiffError::Image(format!(
                "failed to render page {} of {}: {:?}",
                index, self.source_path, err
            ))
        })?;

        // Flatten to RGB: the comparison operates on opaque samples.
        let image = DynamicImage::ImageRgb8(bitmap.as_image().into_rgb8());

        debug!(
            page = index,
            width = image.width(),
            height = image.height(),
            zoom,
            "page rasterized"
        );

        Ok(image)
    }
}
