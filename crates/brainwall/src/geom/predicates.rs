//! Segment/polygon predicates.
//!
//! The containment test handles boundary contact through an ordered branch
//! ladder per hole edge: vertex pass-through, then segment endpoints lying on
//! the open edge, then strict crossing. The ladder is deliberately asymmetric
//! in how it treats the two endpoints and in its `>=` directions; the exact
//! behavior, reflex-vertex corners included, is pinned by the tests in this
//! module's test file. Do not reorder branches or flip inequalities.

use super::types::{Hole, Pt};

/// z-component of the 2D cross product. Sign gives orientation (positive for
/// a left turn from `v1` to `v2`); zero means collinear/parallel.
#[inline]
pub fn cross(v1: Pt, v2: Pt) -> i64 {
    v1.x * v2.y - v1.y * v2.x
}

#[inline]
pub fn dot(v1: Pt, v2: Pt) -> i64 {
    v1.x * v2.x + v1.y * v2.y
}

/// True iff `mid` lies on the closed segment from `a` to `b`.
///
/// Exact: collinearity plus the requirement that `a` and `b` sit on opposite
/// sides of `mid` (or coincide with it).
pub fn between(a: Pt, mid: Pt, b: Pt) -> bool {
    let v1 = a - mid;
    let v2 = b - mid;
    cross(v1, v2) == 0 && dot(v1, v2) <= 0
}

/// Strict proper crossing of segments `(ua, ub)` and `(va, vb)`: they
/// intersect at an interior point of both. Collinear, touching, and
/// shared-endpoint configurations are all false — those are the containment
/// ladder's business, not this test's.
pub fn properly_crosses(ua: Pt, ub: Pt, va: Pt, vb: Pt) -> bool {
    let d1 = cross(ub - ua, va - ua);
    let d2 = cross(ub - ua, vb - ua);
    let d3 = cross(vb - va, ua - va);
    let d4 = cross(vb - va, ub - va);
    ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0))
}

/// Probe `p` against the interior cone at hole vertex `b`, whose incident
/// edges run to `a` (previous vertex) and `c` (next vertex). At a convex
/// corner both half-plane conditions must hold; at a reflex corner either
/// suffices.
fn inside_corner(a: Pt, b: Pt, c: Pt, p: Pt) -> bool {
    let lead = cross(c - b, p - b) >= 0;
    let trail = cross(p - b, a - b) >= 0;
    if cross(c - b, a - b) >= 0 {
        lead && trail
    } else {
        lead || trail
    }
}

/// True iff the segment `(ua, ub)` ever leaves the hole's interior, i.e. the
/// edge is invalid for placement. Boundary contact alone is not an exit: an
/// edge may run vertex-to-vertex along the boundary or touch it at a point,
/// as long as it approaches from inside.
pub fn exits_hole(ua: Pt, ub: Pt, hole: &Hole) -> bool {
    for i in 0..hole.len() {
        let a = hole.vertex(i);
        let b = hole.vertex(i + 1);
        let c = hole.vertex(i + 2);
        if between(ua, b, ub) {
            // Candidate passes through hole vertex b: both endpoints must
            // approach it from inside the corner cone.
            if !inside_corner(a, b, c, ua) || !inside_corner(a, b, c, ub) {
                return true;
            }
        } else if between(ua, a, ub) {
            // Vertex a was handled as the `b` of the previous hole edge.
            continue;
        } else if between(a, ua, b) {
            if cross(a - b, ub - b) >= 0 {
                return true;
            }
        } else if between(a, ub, b) {
            if cross(a - b, ua - b) >= 0 {
                return true;
            }
        } else if properly_crosses(ua, ub, a, b) {
            return true;
        }
    }
    false
}
