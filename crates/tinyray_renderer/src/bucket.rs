//! Bucket-based tile rendering.
//!
//! Divides the framebuffer into tiles (buckets) that are shaded
//! independently and in parallel using rayon. Each bucket owns its pixel
//! vector, so workers never write shared memory.

use rayon::prelude::*;
use tinyray_core::Color;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Column of the bucket's first pixel
    pub x: u32,
    /// Row of the bucket's first pixel
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted in spiral order from center.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center (spiral order).
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| {
        distance(a)
            .partial_cmp(&distance(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Shade a single bucket; `shade` receives (row, column).
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket<F>(bucket: &Bucket, shade: &F) -> Vec<Color>
where
    F: Fn(u32, u32) -> Color,
{
    let mut pixels = Vec::with_capacity(bucket.width as usize * bucket.height as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(shade(bucket.y + local_y, bucket.x + local_x));
        }
    }

    pixels
}

/// Shade every pixel of a `width` x `height` image across the rayon pool.
pub fn render_buckets<F>(width: u32, height: u32, bucket_size: u32, shade: F) -> Vec<BucketResult>
where
    F: Fn(u32, u32) -> Color + Sync,
{
    let buckets = generate_buckets(width, height, bucket_size);
    let total = buckets.len();

    buckets
        .into_par_iter()
        .map(|bucket| {
            let pixels = render_bucket(&bucket, &shade);
            log::trace!("Bucket {}/{} done ({} px)", bucket.index + 1, total, pixels.len());
            BucketResult::new(bucket, pixels)
        })
        .collect()
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}
