//! Core ray casting renderer.
//!
//! One primary ray per pixel from a fixed eye through an axis-aligned image
//! window, nearest hit over every triangle, Blinn-Phong at the hit point.

use std::time::Instant;

use crate::{shade, Framebuffer, Hittable};
use prism_core::Scene;
use prism_math::{Interval, Ray, Vec3};
use thiserror::Error;

/// Distance from the eye to the image window along +Z.
///
/// With the default eye at (0.5, 0.5, -0.5) the window is the unit square
/// on the z = 0 plane.
pub const IMAGE_PLANE_DEPTH: f32 = 0.5;

/// Errors that can occur when starting a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Framebuffer is {actual_width}x{actual_height}, config expects {width}x{height}")]
    FramebufferSize {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration, constant for a whole frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Ray origin for every pixel
    pub eye: Vec3,
    /// Point light position
    pub light: Vec3,
    /// Intersection tolerance (parallel rays and self-hits)
    pub epsilon: f32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.5, 0.5, -0.5),
            light: Vec3::new(-0.5, 1.5, -0.5),
            epsilon: 1e-5,
            width: 256,
            height: 256,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Set the light position.
    pub fn with_light(mut self, light: Vec3) -> Self {
        self.light = light;
        self
    }

    /// Set the intersection tolerance.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Check the configuration before rendering.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "resolution {}x{} has no pixels",
                self.width, self.height
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(self.eye.is_finite() && self.light.is_finite()) {
            return Err(RenderError::InvalidConfig(
                "eye and light positions must be finite".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn check_framebuffer(&self, framebuffer: &Framebuffer) -> RenderResult<()> {
        if framebuffer.width() != self.width || framebuffer.height() != self.height {
            return Err(RenderError::FramebufferSize {
                width: self.width,
                height: self.height,
                actual_width: framebuffer.width(),
                actual_height: framebuffer.height(),
            });
        }
        Ok(())
    }
}

/// Build the primary ray for pixel (x, y).
///
/// Pixel rows grow downwards while the image window's y grows upwards.
pub fn primary_ray(config: &RenderConfig, x: u32, y: u32) -> Ray {
    let width = config.width as f32;
    let height = config.height as f32;
    let direction = Vec3::new(
        x as f32 / width - 0.5,
        (height - y as f32) / height - 0.5,
        IMAGE_PLANE_DEPTH,
    );
    Ray::new(config.eye, direction)
}

/// Compute the color seen by a ray, or `None` if it hits nothing.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Option<[u8; 4]> {
    let rec = scene.hit(ray, Interval::ahead(config.epsilon))?;
    Some(shade(&rec, config.eye, config.light))
}

/// Render a single pixel. `None` means the pixel keeps its background.
pub fn render_pixel(scene: &Scene, config: &RenderConfig, x: u32, y: u32) -> Option<[u8; 4]> {
    trace(&primary_ray(config, x, y), scene, config)
}

/// Render the scene into `framebuffer`, one pixel at a time.
///
/// Pixels whose ray misses every triangle are left untouched.
pub fn render(scene: &Scene, config: &RenderConfig, framebuffer: &mut Framebuffer) -> RenderResult<()> {
    config.validate()?;
    config.check_framebuffer(framebuffer)?;

    log::info!(
        "Rendering {}x{} over {} triangles (serial)",
        config.width,
        config.height,
        scene.triangle_count()
    );
    let start = Instant::now();

    for y in 0..config.height {
        for x in 0..config.width {
            if let Some(rgba) = render_pixel(scene, config, x, y) {
                framebuffer.set(x, y, rgba);
            }
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}
