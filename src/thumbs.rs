//! Thumbnail generation.
//!
//! For each photo, a bounded-size copy is written to a `thumbnails/`
//! subdirectory of the photo directory, same base file name, always
//! JPEG. The resize fits within the configured bounds (default 250×250)
//! preserving aspect ratio, using Lanczos3 resampling, and never
//! upscales.
//!
//! Failures here are fatal for the run: thumbnail writes sit on the
//! same output path as the HTML and sidecar writes.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{GenericImageView, ImageFormat, ImageReader};
use thiserror::Error;

use crate::templates::TemplateConfig;

/// Subdirectory thumbnails are written into.
pub const THUMB_DIRNAME: &str = "thumbnails";

#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Can't read image {0}: {1}")]
    Decode(PathBuf, image::ImageError),
    #[error("Can't write thumbnail {0}: {1}")]
    Encode(PathBuf, image::ImageError),
}

/// Scale `source` dimensions to fit within `bounds`, preserving aspect
/// ratio. Images already within bounds are returned unchanged — no
/// upscaling.
pub fn fit_within(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (width, height) = source;
    let (max_w, max_h) = bounds;

    if width <= max_w && height <= max_h {
        return (width, height);
    }

    let scale = (max_w as f64 / width as f64).min(max_h as f64 / height as f64);
    let scaled_w = ((width as f64 * scale).round() as u32).max(1);
    let scaled_h = ((height as f64 * scale).round() as u32).max(1);
    (scaled_w, scaled_h)
}

/// Generate the thumbnail for one photo, returning the path written.
///
/// Creates `<dir>/thumbnails/` if needed and writes
/// `<dir>/thumbnails/<img_name>` as JPEG.
pub fn make_thumbnail(
    dir: &Path,
    img_name: &str,
    config: &TemplateConfig,
) -> Result<PathBuf, ThumbError> {
    let thumb_dir = dir.join(THUMB_DIRNAME);
    std::fs::create_dir_all(&thumb_dir)?;

    let source_path = dir.join(img_name);
    let image = ImageReader::open(&source_path)?
        .decode()
        .map_err(|why| ThumbError::Decode(source_path.clone(), why))?;

    let (width, height) = fit_within(
        image.dimensions(),
        (config.thumbnail_w, config.thumbnail_h),
    );
    let thumb = image.resize_exact(width, height, FilterType::Lanczos3);

    let thumb_path = thumb_dir.join(img_name);
    // JPEG has no alpha channel; flatten before encoding
    image::DynamicImage::ImageRgb8(thumb.to_rgb8())
        .save_with_format(&thumb_path, ImageFormat::Jpeg)
        .map_err(|why| ThumbError::Encode(thumb_path.clone(), why))?;

    Ok(thumb_path)
}
