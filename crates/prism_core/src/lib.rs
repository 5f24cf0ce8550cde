//! Prism Core - Scene data model and scene loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `TriangleSet`, `Material`
//! - **Scene loading**: JSON triangle-set files
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_json;
//!
//! let scene = load_json("triangles.json")?;
//! println!("Loaded {} triangle sets, {} triangles",
//!     scene.triangle_set_count(),
//!     scene.triangle_count());
//! ```

pub mod json;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use json::{load_json, load_json_from_str, LoadError, LoadResult};
pub use mesh::TriangleSet;
pub use scene::{Material, Scene, SceneError, SceneResult};
