//! Scene types for Prism.
//!
//! A scene is an ordered list of triangle sets, each carrying its own
//! Blinn-Phong material. Scenes are validated once on construction and are
//! read-only afterwards, so the renderer can index geometry without checks.

use prism_math::Vec3;
use thiserror::Error;

use crate::mesh::TriangleSet;

/// Scene data integrity errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("triangle {triangle} of set {set} uses vertex index {index}, but the set has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        set: usize,
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("vertex {vertex} of set {set} is not finite")]
    NonFiniteVertex { set: usize, vertex: usize },

    #[error("material of set {set} has invalid shininess {shininess}")]
    InvalidShininess { set: usize, shininess: f32 },

    #[error("material of set {set} has a non-finite reflectance")]
    NonFiniteReflectance { set: usize },
}

/// Result type for scene validation.
pub type SceneResult<T> = Result<T, SceneError>;

/// A Blinn-Phong material.
///
/// Reflectances are per channel (RGB, 0-1). Shared by all triangles of the
/// owning `TriangleSet`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Ambient reflectance
    pub ambient: Vec3,

    /// Diffuse (Lambertian) reflectance
    pub diffuse: Vec3,

    /// Specular reflectance
    pub specular: Vec3,

    /// Specular exponent (non-negative)
    pub shininess: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// A material that only reflects ambient light.
    pub fn ambient_only(ambient: Vec3) -> Self {
        Self::new(ambient, Vec3::ZERO, Vec3::ZERO, 0.0)
    }

    pub(crate) fn validate(&self, set: usize) -> SceneResult<()> {
        if !(self.ambient.is_finite() && self.diffuse.is_finite() && self.specular.is_finite()) {
            return Err(SceneError::NonFiniteReflectance { set });
        }
        if !self.shininess.is_finite() || self.shininess < 0.0 {
            return Err(SceneError::InvalidShininess {
                set,
                shininess: self.shininess,
            });
        }
        Ok(())
    }
}

/// The scene to render: an ordered collection of triangle sets.
///
/// Order matters only for ties: when two triangles are hit at exactly the
/// same distance, the one that comes first wins.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    sets: Vec<TriangleSet>,
}

impl Scene {
    /// Create a scene, rejecting it if any set fails validation.
    pub fn new(sets: Vec<TriangleSet>) -> SceneResult<Self> {
        for (index, set) in sets.iter().enumerate() {
            set.validate(index)?;
        }

        let scene = Self { sets };
        log::debug!(
            "Scene: {} triangle sets, {} vertices, {} triangles",
            scene.triangle_set_count(),
            scene.vertex_count(),
            scene.triangle_count()
        );
        Ok(scene)
    }

    /// Get the triangle sets in order.
    pub fn sets(&self) -> &[TriangleSet] {
        &self.sets
    }

    /// Get the number of triangle sets.
    pub fn triangle_set_count(&self) -> usize {
        self.sets.len()
    }

    /// Get the total number of triangles across all sets.
    pub fn triangle_count(&self) -> usize {
        self.sets.iter().map(TriangleSet::triangle_count).sum()
    }

    /// Get the total number of vertices across all sets.
    pub fn vertex_count(&self) -> usize {
        self.sets.iter().map(TriangleSet::vertex_count).sum()
    }

    /// Check if the scene has no triangle sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(material: Material) -> TriangleSet {
        TriangleSet::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![[0, 1, 2]],
            material,
        )
    }

    #[test]
    fn test_scene_creation() {
        let material = Material::ambient_only(Vec3::splat(0.2));
        let scene = Scene::new(vec![triangle(material), triangle(material)]).unwrap();

        assert_eq!(scene.triangle_set_count(), 2);
        assert_eq!(scene.triangle_count(), 2);
        assert_eq!(scene.vertex_count(), 6);
        assert!(!scene.is_empty());
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(Vec::new()).unwrap();
        assert!(scene.is_empty());
        assert_eq!(scene.triangle_count(), 0);
    }

    #[test]
    fn test_scene_rejects_bad_indices() {
        let good = triangle(Material::ambient_only(Vec3::ONE));
        let mut bad = good.clone();
        bad.triangles.push([0, 1, 7]);

        let err = Scene::new(vec![good, bad]).unwrap_err();
        assert_eq!(
            err,
            SceneError::VertexIndexOutOfRange {
                set: 1,
                triangle: 1,
                index: 7,
                vertex_count: 3,
            }
        );
    }

    #[test]
    fn test_scene_rejects_negative_shininess() {
        let material = Material::new(Vec3::ZERO, Vec3::ONE, Vec3::ONE, -1.0);
        let err = Scene::new(vec![triangle(material)]).unwrap_err();

        assert!(matches!(err, SceneError::InvalidShininess { set: 0, .. }));
    }

    #[test]
    fn test_scene_rejects_nan_reflectance() {
        let material = Material::ambient_only(Vec3::new(0.1, f32::NAN, 0.1));
        let err = Scene::new(vec![triangle(material)]).unwrap_err();

        assert_eq!(err, SceneError::NonFiniteReflectance { set: 0 });
    }

    #[test]
    fn test_error_messages() {
        let err = SceneError::VertexIndexOutOfRange {
            set: 0,
            triangle: 2,
            index: 9,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "triangle 2 of set 0 uses vertex index 9, but the set has 4 vertices"
        );
    }
}
