// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output assembler — builds the diff PDF, one page per compared pair, using
// `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info};

use pdfdiff_core::error::{PdfDiffError, Result};
use pdfdiff_core::types::PageRect;

/// The diff PDF under construction.
///
/// Pages are append-only and keep their insertion order, which the comparator
/// guarantees is the source page order. Nothing touches the disk until
/// [`DiffDocument::save`].
#[derive(Debug)]
pub struct DiffDocument {
    document: PdfDocument,
    pages: Vec<PdfPage>,
}

impl DiffDocument {
    /// Create an empty output document.
    pub fn new() -> Self {
        Self {
            document: PdfDocument::new("pdfdiff"),
            pages: Vec::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a page of the given rectangle carrying one encoded diff image,
    /// scaled to fill the page bounds exactly.
    pub fn append_page(&mut self, rect: PageRect, image_bytes: &[u8]) -> Result<()> {
        let decoded = image::load_from_memory(image_bytes).map_err(|err| {
            PdfDiffError::Image(format!("failed to decode diff image: {}", err))
        })?;

        let rgb = decoded.to_rgb8();
        let (image_width, image_height) = rgb.dimensions();
        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: image_width as usize,
            height: image_height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = self.document.add_image(&raw);

        // At 72 dpi one image pixel occupies one point, so the fill scale is
        // simply the page extent over the pixel extent per axis.
        let transform = XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(0.0)),
            scale_x: Some(rect.width / image_width as f32),
            scale_y: Some(rect.height / image_height as f32),
            dpi: Some(72.0),
            rotate: None,
        };

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform,
        }];

        let page_width: Mm = Pt(rect.width).into();
        let page_height: Mm = Pt(rect.height).into();
        self.pages.push(PdfPage::new(page_width, page_height, ops));

        debug!(
            page = self.pages.len(),
            width_pt = rect.width,
            height_pt = rect.height,
            image_width,
            image_height,
            "diff page appended"
        );

        Ok(())
    }

    /// Serialise the assembled document to PDF bytes.
    pub fn to_bytes(mut self) -> Vec<u8> {
        let page_count = self.pages.len();
        self.document.with_pages(self.pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = self.document.save(&PdfSaveOptions::default(), &mut warnings);

        debug!(
            pages = page_count,
            bytes = bytes.len(),
            warnings = warnings.len(),
            "diff PDF serialised"
        );

        bytes
    }

    /// Write the final multi-page document to disk. This is the only disk
    /// write in the comparison pipeline and happens once, at the end.
    pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes();
        std::fs::write(path.as_ref(), &bytes)?;
        info!(path = %path.as_ref().display(), "Wrote diff PDF");
        Ok(())
    }
}

impl Default for DiffDocument {
    fn default() -> Self {
        Self::new()
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use lopdf::{Document, Object};

    use crate::diff::encode_jpeg;

    fn white_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
        encode_jpeg(&img).unwrap()
    }

    /// Find the effective /MediaBox of a page, following /Parent when the
    /// page dictionary does not carry one itself.
    fn media_box(doc: &Document, page_id: lopdf::ObjectId) -> Vec<f32> {
        let mut current = page_id;
        loop {
            let dict = doc
                .get_object(current)
                .and_then(Object::as_dict)
                .expect("page object is a dictionary");
            if let Ok(array) = dict.get(b"MediaBox").and_then(Object::as_array) {
                return array
                    .iter()
                    .map(|obj| obj.as_float().expect("numeric media box entry"))
                    .collect();
            }
            current = dict
                .get(b"Parent")
                .and_then(Object::as_reference)
                .expect("page without media box has a parent");
        }
    }

    #[test]
    fn empty_document_has_no_pages() {
        let doc = DiffDocument::new();
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn appended_pages_keep_insertion_order_and_count() {
        let mut doc = DiffDocument::new();
        doc.append_page(PageRect::new(100.0, 100.0), &white_jpeg(100, 100))
            .unwrap();
        doc.append_page(PageRect::new(200.0, 300.0), &white_jpeg(50, 75))
            .unwrap();
        assert_eq!(doc.page_count(), 2);

        let reloaded = Document::load_mem(&doc.to_bytes()).unwrap();
        assert_eq!(reloaded.get_pages().len(), 2);
    }

    #[test]
    fn page_rect_matches_requested_rect() {
        let mut doc = DiffDocument::new();
        doc.append_page(PageRect::new(100.0, 150.0), &white_jpeg(100, 150))
            .unwrap();

        let reloaded = Document::load_mem(&doc.to_bytes()).unwrap();
        let pages = reloaded.get_pages();
        let rect = media_box(&reloaded, pages[&1]);

        assert_eq!(rect.len(), 4);
        assert!((rect[2] - rect[0] - 100.0).abs() < 0.1, "width: {:?}", rect);
        assert!((rect[3] - rect[1] - 150.0).abs() < 0.1, "height: {:?}", rect);
    }

    #[test]
    fn undecodable_image_bytes_are_rejected() {
        let mut doc = DiffDocument::new();
        let err = doc
            .append_page(PageRect::new(100.0, 100.0), b"not an image")
            .unwrap_err();
        assert!(matches!(err, PdfDiffError::Image(_)));
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn save_writes_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.pdf");

        let mut doc = DiffDocument::new();
        doc.append_page(PageRect::new(100.0, 100.0), &white_jpeg(100, 100))
            .unwrap();
        doc.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
