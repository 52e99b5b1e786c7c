//! Framebuffer the tracers write into.
//!
//! Pixels are stored unclamped; clamping to [0, 1] happens only when
//! converting to 8-bit for display or saving.

use crate::bucket::BucketResult;
use std::path::Path;
use thiserror::Error;
use tinyray_core::Color;

/// Errors that can occur when writing or saving a framebuffer.
#[derive(Error, Debug)]
pub enum FramebufferError {
    #[error("Pixel ({column}, {row}) is outside the {width}x{height} framebuffer")]
    OutOfBounds {
        column: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Linear RGB pixel store addressed by (column, row).
///
/// Row 0 is the bottom of the view plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; pixel_count(width, height)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major from row 0.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Get the pixel at (column, row).
    pub fn get(&self, column: u32, row: u32) -> Color {
        self.pixels[self.index(column, row)]
    }

    /// Set the pixel at (column, row).
    pub fn write(&mut self, column: u32, row: u32, color: Color) {
        let index = self.index(column, row);
        self.pixels[index] = color;
    }

    /// Bounds-checked variant of [`Framebuffer::write`].
    pub fn try_write(&mut self, column: u32, row: u32, color: Color) -> Result<(), FramebufferError> {
        if column >= self.width || row >= self.height {
            return Err(FramebufferError::OutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        self.write(column, row, color);
        Ok(())
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = result.bucket;
        for (row_offset, row_pixels) in result.pixels.chunks(bucket.width.max(1) as usize).enumerate() {
            let start = self.index(bucket.x, bucket.y + row_offset as u32);
            self.pixels[start..start + row_pixels.len()].copy_from_slice(row_pixels);
        }
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(Color::ZERO);
    }

    /// Convert to RGBA bytes, top row first (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for row in (0..self.height).rev() {
            for column in 0..self.width {
                bytes.extend_from_slice(&color_to_rgba(self.get(column, row)));
            }
        }
        bytes
    }

    /// Save as an 8-bit PNG (or any format `image` infers from the extension).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FramebufferError> {
        let path = path.as_ref();
        image::save_buffer(path, &self.to_rgba(), self.width, self.height, image::ColorType::Rgba8)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    #[inline]
    fn index(&self, column: u32, row: u32) -> usize {
        pixel_index(self.width, column, row)
    }
}

/// Number of pixels in a `width` x `height` image, computed without `u32` overflow.
#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[inline]
fn pixel_index(width: u32, column: u32, row: u32) -> usize {
    row as usize * width as usize + column as usize
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)).round() as u8;
    let g = (255.0 * clamp_01(color.y)).round() as u8;
    let b = (255.0 * clamp_01(color.z)).round() as u8;
    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::Bucket;

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(-1.0, 0.5, 7.0)), [0, 128, 255, 255]);
        assert_eq!(color_to_rgba(Color::ONE), [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_and_get() {
        let mut fb = Framebuffer::new(4, 3);
        fb.write(3, 2, Color::new(2.0, 0.0, 0.0));

        // Stored unclamped
        assert_eq!(fb.get(3, 2), Color::new(2.0, 0.0, 0.0));
        assert_eq!(fb.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_try_write_out_of_bounds() {
        let mut fb = Framebuffer::new(4, 3);
        assert!(fb.try_write(1, 1, Color::ONE).is_ok());
        assert!(matches!(
            fb.try_write(4, 0, Color::ONE),
            Err(FramebufferError::OutOfBounds { column: 4, row: 0, .. })
        ));
    }

    #[test]
    fn test_write_bucket() {
        let mut fb = Framebuffer::new(5, 5);
        let bucket = Bucket::new(1, 2, 2, 3, 0);
        let pixels: Vec<Color> = (0..6).map(|i| Color::splat(i as f32)).collect();

        fb.write_bucket(&BucketResult::new(bucket, pixels));

        assert_eq!(fb.get(1, 2), Color::splat(0.0));
        assert_eq!(fb.get(2, 2), Color::splat(1.0));
        assert_eq!(fb.get(1, 3), Color::splat(2.0));
        assert_eq!(fb.get(2, 4), Color::splat(5.0));
        assert_eq!(fb.get(0, 2), Color::ZERO);
    }

    #[test]
    fn test_to_rgba_flips_rows() {
        let mut fb = Framebuffer::new(1, 2);
        fb.write(0, 0, Color::ONE);

        let bytes = fb.to_rgba();
        // Row 0 (bottom) comes last
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[4..8], &[255, 255, 255, 255]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_large_resolution_indexing_does_not_wrap() {
        assert_eq!(pixel_count(65_536, 65_536), 1 << 32);
        assert_eq!(pixel_index(100_000, 5, 50_000), 5_000_000_005);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(2, 2);
        fb.write(1, 1, Color::ONE);
        fb.clear();
        assert!(fb.pixels().iter().all(|c| *c == Color::ZERO));
    }
}
