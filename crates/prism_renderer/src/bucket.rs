//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Each bucket produces its own pixel list, and
//! the results are written into the framebuffer after the parallel map, so
//! workers never share mutable state.

use std::time::Instant;

use rayon::prelude::*;

use crate::renderer::{render_pixel, RenderConfig, RenderError, RenderResult};
use crate::Framebuffer;
use prism_core::Scene;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering a `width` x `height` image, row-major.
///
/// Edge buckets are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    if bucket_size == 0 {
        return buckets;
    }

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order, `None` where the ray missed
    pub pixels: Vec<Option<[u8; 4]>>,
}

/// Render a single bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, config: &RenderConfig) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(scene, config, global_x, global_y));
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
    }
}

impl BucketResult {
    /// Copy the hit pixels into the framebuffer.
    pub fn write_to(&self, framebuffer: &mut Framebuffer) {
        let bucket = &self.bucket;
        let rows = self.pixels.chunks(bucket.width.max(1) as usize);

        for (local_y, row) in (0..bucket.height).zip(rows) {
            for (local_x, pixel) in (0..bucket.width).zip(row) {
                if let Some(rgba) = pixel {
                    framebuffer.set(bucket.x + local_x, bucket.y + local_y, *rgba);
                }
            }
        }
    }
}

/// Render the scene into `framebuffer` using parallel buckets.
///
/// Produces exactly the same bytes as [`crate::render`].
pub fn render_buckets(
    scene: &Scene,
    config: &RenderConfig,
    framebuffer: &mut Framebuffer,
    bucket_size: u32,
) -> RenderResult<()> {
    config.validate()?;
    config.check_framebuffer(framebuffer)?;
    if bucket_size == 0 {
        return Err(RenderError::InvalidConfig("bucket size must be non-zero".into()));
    }

    let buckets = generate_buckets(config.width, config.height, bucket_size);
    log::info!(
        "Rendering {}x{} over {} triangles ({} buckets of {}px, {} threads)",
        config.width,
        config.height,
        scene.triangle_count(),
        buckets.len(),
        bucket_size,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect();

    for result in &results {
        result.write_to(framebuffer);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}
