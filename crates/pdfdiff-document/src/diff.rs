// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image differencer — computes a highlighted difference image for two
// same-shaped rasters.
//
// Both inputs are normalized to an explicit channel axis (grayscale stays a
// single channel, everything else becomes RGB). The raw difference is a
// per-pixel, per-channel bitwise XOR; a single channel broadcasts across the
// other image's channels when the counts differ. The result is always a
// 3-channel image on a white background.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tracing::debug;

use pdfdiff_core::error::{PdfDiffError, Result};
use pdfdiff_core::types::DiffMethod;

/// Raw 8-bit samples of an image with an explicit channel count.
struct SamplePlane {
    samples: Vec<u8>,
    width: u32,
    height: u32,
    channels: usize,
}

impl SamplePlane {
    fn from_image(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(gray) => Self {
                samples: gray.as_raw().clone(),
                width: gray.width(),
                height: gray.height(),
                channels: 1,
            },
            other => {
                let rgb = other.to_rgb8();
                let (width, height) = rgb.dimensions();
                Self {
                    samples: rgb.into_raw(),
                    width,
                    height,
                    channels: 3,
                }
            }
        }
    }

    /// Sample at (x, y); a single channel broadcasts across requests for
    /// higher channel indices.
    #[inline]
    fn sample(&self, x: u32, y: u32, channel: usize) -> u8 {
        let channel = channel.min(self.channels - 1);
        let offset = (y as usize * self.width as usize + x as usize) * self.channels;
        self.samples[offset + channel]
    }
}

/// Compute the highlighted difference of two rasters.
///
/// The inputs must have identical (height, width); channel counts may differ
/// (grayscale vs color). The result is always 3 channels at the input shape.
/// Identical inputs yield a uniformly white image under both methods.
pub fn image_diff(
    image_a: &DynamicImage,
    image_b: &DynamicImage,
    method: DiffMethod,
) -> Result<RgbImage> {
    let plane_a = SamplePlane::from_image(image_a);
    let plane_b = SamplePlane::from_image(image_b);

    if (plane_a.width, plane_a.height) != (plane_b.width, plane_b.height) {
        return Err(PdfDiffError::Image(format!(
            "raster shapes differ: {}x{} vs {}x{}",
            plane_a.width, plane_a.height, plane_b.width, plane_b.height
        )));
    }

    let channels = plane_a.channels.max(plane_b.channels);

    // Blank page, white background.
    let mut result = RgbImage::from_pixel(plane_a.width, plane_a.height, Rgb([255, 255, 255]));

    for y in 0..plane_a.height {
        for x in 0..plane_a.width {
            let mut raw = [0u8; 3];
            for c in 0..channels {
                raw[c] = plane_a.sample(x, y, c) ^ plane_b.sample(x, y, c);
            }

            let pixel = result.get_pixel_mut(x, y);
            match method {
                DiffMethod::Xor => {
                    // XOR the white background with the raw difference; a
                    // single-channel difference tints all three channels.
                    for c in 0..3 {
                        pixel[c] ^= raw[c.min(channels - 1)];
                    }
                }
                DiffMethod::Any => {
                    if raw[..channels].iter().any(|&d| d != 0) {
                        *pixel = Rgb([255, 0, 0]);
                    }
                }
            }
        }
    }

    debug!(
        width = plane_a.width,
        height = plane_a.height,
        method = %method,
        "diff image computed"
    );

    Ok(result)
}

/// Encode a diff image as default-quality JPEG bytes for embedding.
pub fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|err| PdfDiffError::Image(format!("failed to encode diff image: {}", err)))?;
    Ok(buffer.into_inner())
}

// -- Tests --------------------------------------------------------------------
