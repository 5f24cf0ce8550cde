//! JSON triangle-set scene loading.
//!
//! The file is a top-level array of triangle sets:
//!
//! ```json
//! [
//!   {
//!     "material": {"ambient": [0.1,0.1,0.1], "diffuse": [0.6,0.4,0.4],
//!                  "specular": [0.3,0.3,0.3], "n": 11},
//!     "vertices": [[0.15,0.6,0.75], [0.25,0.9,0.75], [0.35,0.6,0.75]],
//!     "triangles": [[0,1,2]]
//!   }
//! ]
//! ```
//!
//! Reflectances may also be given as a single number for all three channels.
//! Keys the renderer has no use for (`normals`, `uvs`, ...) are ignored.

use std::fs;
use std::path::Path;

use prism_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::mesh::TriangleSet;
use crate::scene::{Material, Scene, SceneError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum Reflectance {
    Rgb([f32; 3]),
    Uniform(f32),
}

impl From<Reflectance> for Vec3 {
    fn from(r: Reflectance) -> Self {
        match r {
            Reflectance::Rgb(rgb) => Vec3::from_array(rgb),
            Reflectance::Uniform(k) => Vec3::splat(k),
        }
    }
}

#[derive(Deserialize)]
struct MaterialDesc {
    ambient: Reflectance,
    diffuse: Reflectance,
    specular: Reflectance,
    n: f32,
}

#[derive(Deserialize)]
struct TriangleSetDesc {
    material: MaterialDesc,
    vertices: Vec<[f32; 3]>,
    triangles: Vec<[u32; 3]>,
}

impl From<TriangleSetDesc> for TriangleSet {
    fn from(desc: TriangleSetDesc) -> Self {
        let m = desc.material;
        let material = Material::new(m.ambient.into(), m.diffuse.into(), m.specular.into(), m.n);
        let positions = desc.vertices.into_iter().map(Vec3::from_array).collect();
        TriangleSet::new(positions, desc.triangles, material)
    }
}

/// Load a JSON scene file and return a validated Scene.
///
/// # Example
///
/// ```ignore
/// use prism_core::load_json;
///
/// let scene = load_json("triangles.json")?;
/// println!("Loaded {} triangles", scene.triangle_count());
/// ```
pub fn load_json<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());

    let text = fs::read_to_string(path)?;
    load_json_from_str(&text)
}

/// Parse a JSON scene from a string and return a validated Scene.
pub fn load_json_from_str(text: &str) -> LoadResult<Scene> {
    let descs: Vec<TriangleSetDesc> = serde_json::from_str(text)?;
    let sets = descs.into_iter().map(TriangleSet::from).collect();
    Ok(Scene::new(sets)?)
}
