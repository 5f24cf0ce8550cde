//! Triangle primitive for ray casting.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use prism_math::{unit, Ray, Vec3};

/// A triangle given by three vertices in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

/// Where a ray meets a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit face normal, `edge1 x edge2`. Follows the winding, never the ray.
    pub normal: Vec3,
    /// Barycentric weight of `v1`
    pub u: f32,
    /// Barycentric weight of `v2`
    pub v: f32,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Unit face normal from the winding order.
    pub fn normal(&self) -> Vec3 {
        unit((self.v1 - self.v0).cross(self.v2 - self.v0))
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// `epsilon` is both the parallel-plane tolerance on the determinant and
    /// the minimum accepted distance, so hits at or behind the origin miss.
    pub fn intersect(&self, ray: &Ray, epsilon: f32) -> Option<TriangleHit> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < epsilon {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if t <= epsilon {
            return None;
        }

        Some(TriangleHit {
            t,
            p: ray.at(t),
            normal: self.normal(),
            u,
            v,
        })
    }
}

impl From<[Vec3; 3]> for Triangle {
    fn from([v0, v1, v2]: [Vec3; 3]) -> Self {
        Self::new(v0, v1, v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    // Triangle in the z=1 plane, normal +Z
    fn unit_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        )
    }

    #[test]
    fn test_triangle_hit_centroid() {
        let tri = unit_triangle();
        let centroid = (tri.v0 + tri.v1 + tri.v2) / 3.0;

        let ray = Ray::new(Vec3::new(centroid.x, centroid.y, 0.0), Vec3::Z);
        let hit = tri.intersect(&ray, EPSILON).expect("ray through centroid must hit");

        assert!(hit.t > 0.0);
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert!(hit.p.abs_diff_eq(centroid, 1e-5));
        assert!((hit.u - 1.0 / 3.0).abs() < 1e-5);
        assert!((hit.v - 1.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_normal_follows_winding() {
        let tri = unit_triangle();
        let flipped = Triangle::new(tri.v0, tri.v2, tri.v1);

        assert_eq!(tri.normal(), Vec3::Z);
        assert_eq!(flipped.normal(), -Vec3::Z);

        // Not turned towards the viewer: hit from either side keeps +Z
        let from_front = Ray::new(Vec3::new(0.25, 0.25, 0.0), Vec3::Z);
        let from_back = Ray::new(Vec3::new(0.25, 0.25, 2.0), -Vec3::Z);
        assert_eq!(tri.intersect(&from_front, EPSILON).unwrap().normal, Vec3::Z);
        assert_eq!(tri.intersect(&from_back, EPSILON).unwrap().normal, Vec3::Z);

        // The hit reports the same normal the triangle computes
        let hit = flipped.intersect(&from_back, EPSILON).unwrap();
        assert_eq!(hit.normal, flipped.normal());
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let tri = unit_triangle();

        // u < 0
        let ray = Ray::new(Vec3::new(-0.1, 0.5, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray, EPSILON).is_none());

        // v < 0
        let ray = Ray::new(Vec3::new(0.5, -0.1, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray, EPSILON).is_none());

        // u + v > 1
        let ray = Ray::new(Vec3::new(0.6, 0.6, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn test_triangle_pointing_away() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, 0.0), -Vec3::Z);

        assert!(tri.intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(-1.0, 0.25, 1.0), Vec3::X);

        assert!(tri.intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn test_origin_on_plane_is_not_a_hit() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), Vec3::Z);

        assert!(tri.intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn test_edge_is_inclusive() {
        // Lands exactly on the hypotenuse u + v = 1
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.5, 0.5, -0.5), Vec3::Z);

        let hit = tri.intersect(&ray, EPSILON).expect("hypotenuse counts as inside");
        assert_eq!(hit.u + hit.v, 1.0);
        assert_eq!(hit.t, 1.5);
    }
}
