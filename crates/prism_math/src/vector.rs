use crate::Vec3;

/// Normalize a vector to unit length.
///
/// The vector must have non-zero length. Every direction the renderer
/// normalizes is derived from two distinct points, so a zero vector here
/// means the caller handed in degenerate input; debug builds panic instead
/// of quietly producing NaN pixels.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    let length_squared = v.dot(v);
    debug_assert!(
        length_squared > 0.0,
        "cannot normalize a zero-length vector"
    );
    v / length_squared.sqrt()
}
