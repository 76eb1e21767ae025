use super::{Point3, Vector3, TOLERANCE};

/// Compute the 3D point along a segment at parameter `t`.
#[must_use]
pub fn segment_point_at(start: &Point3, end: &Point3, t: f64) -> Point3 {
    let dir = end - start;
    start + dir * t
}

/// Midpoint of a segment.
#[must_use]
pub fn segment_midpoint(start: &Point3, end: &Point3) -> Point3 {
    segment_point_at(start, end, 0.5)
}

/// Unit direction of a segment, or `None` if it is degenerate.
#[must_use]
pub fn segment_direction(start: &Point3, end: &Point3) -> Option<Vector3> {
    let dir = end - start;
    let len = dir.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(dir / len)
}

/// Removes the component of `v` along the unit vector `axis`.
#[must_use]
pub fn perpendicular_component(v: &Vector3, axis: &Vector3) -> Vector3 {
    v - axis * v.dot(axis)
}
