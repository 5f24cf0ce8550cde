//! Prism Renderer - CPU Blinn-Phong ray caster.
//!
//! Casts one ray per pixel from a fixed eye, finds the nearest triangle by
//! testing every triangle in the scene, and shades the hit with Blinn-Phong.
//! No acceleration structure, no shadows, no secondary rays.

mod bucket;
mod framebuffer;
mod hittable;
mod renderer;
mod shading;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use framebuffer::Framebuffer;
pub use hittable::{HitRecord, Hittable};
pub use renderer::{
    primary_ray, render, render_pixel, trace, RenderConfig, RenderError, RenderResult, IMAGE_PLANE_DEPTH,
};
pub use shading::{blinn_phong, color_to_rgba, shade, Color};
pub use triangle::{Triangle, TriangleHit};

/// Re-export math and scene types used in the public API
pub use prism_core::{Material, Scene, TriangleSet};
pub use prism_math::{Interval, Ray, Vec3};
