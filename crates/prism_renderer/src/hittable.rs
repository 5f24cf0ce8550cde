//! Hittable trait and HitRecord for nearest-hit scene traversal.

use crate::triangle::{Triangle, TriangleHit};
use prism_core::{Material, Scene, TriangleSet};
use prism_math::{Interval, Ray, Vec3};

/// Record of the nearest ray-scene intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit face normal of the hit triangle (winding order, not flipped)
    pub normal: Vec3,
    /// Material of the owning triangle set
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Index of the owning triangle set within the scene
    pub set_index: usize,
    /// Index of the triangle within its set
    pub triangle_index: usize,
}

impl<'a> HitRecord<'a> {
    fn new(hit: TriangleHit, material: &'a Material, triangle_index: usize) -> Self {
        Self {
            p: hit.p,
            normal: hit.normal,
            material,
            t: hit.t,
            set_index: 0,
            triangle_index,
        }
    }
}

/// Trait for geometry that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest hit with `t` strictly inside `ray_t`.
    ///
    /// `ray_t.min` is the epsilon of the intersection test. Candidates only
    /// replace the current best when strictly closer, so on equal distances
    /// the first one in iteration order wins.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// Nearest hit within one triangle set, `set_index` left at 0.
fn hit_set<'a>(set: &'a TriangleSet, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
    let mut closest = None;
    let mut ray_t = ray_t;

    for (index, vertices) in set.triangle_vertices() {
        let Some(hit) = Triangle::from(vertices).intersect(ray, ray_t.min) else {
            continue;
        };
        if ray_t.surrounds(hit.t) {
            ray_t = ray_t.with_max(hit.t);
            closest = Some(HitRecord::new(hit, &set.material, index));
        }
    }

    closest
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut ray_t = ray_t;

        for (set_index, set) in self.sets().iter().enumerate() {
            if let Some(mut rec) = hit_set(set, ray, ray_t) {
                rec.set_index = set_index;
                ray_t = ray_t.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}
