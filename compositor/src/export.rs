//! Flattening the overlay onto the background for download.
//!
//! The on-screen container shows the background scaled to fit; the export
//! works at the background's natural resolution instead. Overlay position and
//! size are therefore scaled per axis by `natural / on-screen` so the logo
//! lands on the same spot of the product photo regardless of display zoom.
//!
//! ERROR HANDLING
//! ==============
//! Every step that can fail (missing measurements, undecodable images, PNG
//! encoding) returns an [`ExportError`] so the widget can tell the user what
//! went wrong instead of leaving the download button inert.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat};

use crate::data_url::DataUrlError;
use crate::geom::{Point, Size};

/// Error returned by the export pipeline.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExportError {
    /// Export was requested before any logo was uploaded.
    #[error("upload a logo before downloading")]
    NoOverlay,
    /// The on-screen container has no usable size yet.
    #[error("the preview area has not been laid out yet")]
    ContainerNotMeasured,
    /// The background image could not be retrieved.
    #[error("could not load the product image: {0}")]
    BackgroundFetch(String),
    /// The background bytes are not a supported image.
    #[error("could not decode the product image: {0}")]
    BackgroundDecode(String),
    /// The uploaded logo's data URL is malformed.
    #[error("uploaded image is not readable: {0}")]
    OverlayData(#[from] DataUrlError),
    /// The uploaded logo bytes are not a supported image.
    #[error("could not decode the uploaded image: {0}")]
    OverlayDecode(String),
    /// PNG encoding of the composite failed.
    #[error("could not encode the final image: {0}")]
    Encode(String),
    /// The host could not hand the PNG to the user.
    #[error("could not start the download: {0}")]
    Delivery(String),
}

/// Where the overlay lands on the full-resolution background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Overlay size in whole pixels, never below 1×1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round().max(1.0) as u32, self.height.round().max(1.0) as u32)
    }

    /// Top-left corner in whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel_origin(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// Map the on-screen overlay rectangle onto a background of `natural` pixels.
///
/// # Errors
///
/// Returns [`ExportError::ContainerNotMeasured`] if `container` has a zero or
/// non-finite dimension.
pub fn plan(natural: (u32, u32), container: Size, position: Point, size: Size) -> Result<Placement, ExportError> {
    if !container.is_measurable() {
        return Err(ExportError::ContainerNotMeasured);
    }
    let scale_x = f64::from(natural.0) / container.width;
    let scale_y = f64::from(natural.1) / container.height;
    Ok(Placement {
        x: position.x * scale_x,
        y: position.y * scale_y,
        width: size.width * scale_x,
        height: size.height * scale_y,
    })
}

/// Draw `overlay` onto `background` at the scaled placement and encode a PNG.
///
/// Both inputs are encoded image files (PNG, JPEG, GIF, WebP or BMP). The
/// background keeps its natural size; the overlay is stretched to the
/// placement rectangle and alpha-blended over it.
///
/// # Errors
///
/// Returns an [`ExportError`] if either image fails to decode, the container
/// is unmeasured, or PNG encoding fails.
pub fn compose_png(
    background: &[u8],
    overlay: &[u8],
    container: Size,
    position: Point,
    size: Size,
) -> Result<Vec<u8>, ExportError> {
    let mut canvas = image::load_from_memory(background)
        .map_err(|e| ExportError::BackgroundDecode(e.to_string()))?
        .to_rgba8();
    let logo = image::load_from_memory(overlay)
        .map_err(|e| ExportError::OverlayDecode(e.to_string()))?
        .to_rgba8();

    let placement = plan(canvas.dimensions(), container, position, size)?;
    let (width, height) = placement.pixel_size();
    let (x, y) = placement.pixel_origin();
    let scaled = imageops::resize(&logo, width, height, FilterType::Triangle);
    imageops::overlay(&mut canvas, &scaled, x, y);

    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}
