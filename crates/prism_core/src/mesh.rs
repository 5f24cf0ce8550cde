//! Triangle set geometry.
//!
//! A triangle set is an indexed triangle mesh with a single material: a list
//! of vertex positions, a list of index triples into it, and the material
//! every triangle in the set is shaded with.

use prism_math::Vec3;

use crate::scene::{Material, SceneError, SceneResult};

/// An indexed triangle mesh sharing one material.
#[derive(Clone, Debug)]
pub struct TriangleSet {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangles as index triples into `positions`, in winding order
    pub triangles: Vec<[u32; 3]>,

    /// Material shared by every triangle in the set
    pub material: Material,
}

impl TriangleSet {
    /// Create a new triangle set.
    ///
    /// Indices are not checked here; `Scene::new` validates every set
    /// before it can be rendered.
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[u32; 3]>, material: Material) -> Self {
        Self {
            positions,
            triangles,
            material,
        }
    }

    /// Get the number of triangles in the set.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get the number of vertices in the set.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Resolve the triangle at `index` to its three vertex positions.
    ///
    /// Returns `None` if `index` or any of the triangle's vertex indices is
    /// out of range.
    #[inline]
    pub fn triangle(&self, index: usize) -> Option<[Vec3; 3]> {
        let [i0, i1, i2] = *self.triangles.get(index)?;
        Some([
            *self.positions.get(i0 as usize)?,
            *self.positions.get(i1 as usize)?,
            *self.positions.get(i2 as usize)?,
        ])
    }

    /// Iterate over resolvable triangles as `(index, vertices)`, in order.
    ///
    /// Triangles with out-of-range vertex indices are skipped.
    pub fn triangle_vertices(&self) -> impl Iterator<Item = (usize, [Vec3; 3])> + '_ {
        (0..self.triangles.len()).filter_map(move |i| Some((i, self.triangle(i)?)))
    }

    /// Check the set for data errors that would corrupt rendering.
    ///
    /// `set` is the index of this set within its scene, used for reporting.
    pub fn validate(&self, set: usize) -> SceneResult<()> {
        self.material.validate(set)?;

        if let Some(vertex) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(SceneError::NonFiniteVertex { set, vertex });
        }

        let vertex_count = self.positions.len();
        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(SceneError::VertexIndexOutOfRange {
                    set,
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}
