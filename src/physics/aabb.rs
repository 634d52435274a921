/// Axis-Aligned Bounding Boxes
///
/// Pure functions over plain bounds. Hosts use them to decide when a block's
/// bounds have reached the boundary zone or the ground.

use glam::Vec3;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

/// Create new AABB from min/max points
pub fn create_aabb(min: Vec3, max: Vec3) -> AABB {
    AABB {
        min: min.min(max),
        max: min.max(max),
    }
}

/// Create AABB from center point and half extents
pub fn aabb_from_center_half_extents(center: Vec3, half_extents: Vec3) -> AABB {
    let half_extents = half_extents.abs();
    AABB {
        min: center - half_extents,
        max: center + half_extents,
    }
}

/// Get center point of AABB
pub fn aabb_center(aabb: &AABB) -> Vec3 {
    (aabb.min + aabb.max) * 0.5
}

/// Test if two AABBs intersect (touching counts)
pub fn aabb_intersects(aabb1: &AABB, aabb2: &AABB) -> bool {
    aabb1.min.cmple(aabb2.max).all() && aabb1.max.cmpge(aabb2.min).all()
}

/// Test if AABB contains a point
pub fn aabb_contains_point(aabb: &AABB, point: Vec3) -> bool {
    point.cmpge(aabb.min).all() && point.cmple(aabb.max).all()
}

/// Create translated copy of AABB
pub fn aabb_translated(aabb: &AABB, offset: Vec3) -> AABB {
    AABB {
        min: aabb.min + offset,
        max: aabb.max + offset,
    }
}
