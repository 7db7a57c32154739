//! Grayscale PNG export.

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::{Result, TextureError};
use crate::grid::Grid;

/// Fixed output filename.
pub const OUTPUT_FILE: &str = "denoiser.png";

/// Round a normalized intensity into an 8-bit gray level, saturating
/// anything outside `[0, 255]`.
#[inline]
pub fn to_gray(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    v.round() as u8
}

pub fn to_gray_image(grid: &Grid) -> Result<GrayImage> {
    let w = u32::try_from(grid.width).map_err(|_| TextureError::TooLarge(grid.width))?;
    let h = u32::try_from(grid.height).map_err(|_| TextureError::TooLarge(grid.height))?;
    Ok(GrayImage::from_fn(w, h, |x, y| Luma([to_gray(grid.get(y as usize, x as usize))])))
}

/// Encode `grid` as an 8-bit grayscale PNG at `path`.
pub fn write_png(grid: &Grid, path: &Path) -> Result<()> {
    let img = to_gray_image(grid)?;
    img.save_with_format(path, ImageFormat::Png)?;
    tracing::debug!("wrote {}×{} PNG to {}", grid.width, grid.height, path.display());
    Ok(())
}
