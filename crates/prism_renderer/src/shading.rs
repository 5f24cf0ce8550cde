//! Blinn-Phong local illumination.
//!
//! A single point light, no shadow test: the light contributes even when
//! another triangle sits between it and the shaded point.

use crate::HitRecord;
use prism_core::Material;
use prism_math::{unit, Interval, Vec3};

/// Linear RGB color (0-1 per channel before clamping)
pub type Color = Vec3;

/// Evaluate the Blinn-Phong model at a surface point.
///
/// `normal` must be unit length. The light and the eye must not coincide
/// with `p`. Returns the unclamped linear color.
///
/// When the light and the eye sit on opposite sides of `p` along one line
/// the half vector vanishes and the specular term is zero.
pub fn blinn_phong(p: Vec3, normal: Vec3, eye: Vec3, material: &Material, light: Vec3) -> Color {
    let light_dir = unit(light - p);
    let view_dir = unit(eye - p);
    let half = light_dir + view_dir;

    let diffuse_term = normal.dot(light_dir).max(0.0);
    let specular_term = if half.length_squared() > 0.0 {
        normal.dot(unit(half)).max(0.0).powf(material.shininess)
    } else {
        0.0
    };

    material.ambient + material.diffuse * diffuse_term + material.specular * specular_term
}

/// Convert a linear color to opaque 8-bit RGBA.
///
/// Channels are clamped to [0, 1], scaled by 255 and truncated.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b, 255]
}

/// Shade a scene hit as seen from `eye`, lit from `light`.
pub fn shade(rec: &HitRecord, eye: Vec3, light: Vec3) -> [u8; 4] {
    color_to_rgba(blinn_phong(rec.p, rec.normal, eye, rec.material, light))
}
