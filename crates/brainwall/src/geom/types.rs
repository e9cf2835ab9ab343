//! Lattice points and the validated hole polygon.

use nalgebra::Vector2;

use crate::Error;

/// Lattice point / vector. All core predicates are exact over `i64`.
pub type Pt = Vector2<i64>;

/// Shorthand constructor.
#[inline]
pub fn pt(x: i64, y: i64) -> Pt {
    Vector2::new(x, y)
}

/// Squared euclidean distance.
#[inline]
pub fn dist2(p: Pt, q: Pt) -> i64 {
    let d = p - q;
    d.x * d.x + d.y * d.y
}

/// The target polygon the figure must stay inside.
///
/// Invariants:
/// - at least 3 vertices (checked by `new`);
/// - simple (non-self-intersecting), counter-clockwise, implicitly closed
///   (assumed, not checked — loaders are expected to hand over well-formed
///   contest data).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    vertices: Vec<Pt>,
}

impl Hole {
    pub fn new(vertices: Vec<Pt>) -> Result<Self, Error> {
        if vertices.len() < 3 {
            return Err(Error::InvalidPolygon {
                len: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A constructed hole always has at least 3 vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn vertices(&self) -> &[Pt] {
        &self.vertices
    }

    /// Vertex by modular index (the polygon is implicitly closed).
    #[inline]
    pub fn vertex(&self, i: usize) -> Pt {
        self.vertices[i % self.vertices.len()]
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn bbox(&self) -> (Pt, Pt) {
        let mut lo = self.vertices[0];
        let mut hi = self.vertices[0];
        for &v in &self.vertices[1..] {
            lo.x = lo.x.min(v.x);
            lo.y = lo.y.min(v.y);
            hi.x = hi.x.max(v.x);
            hi.y = hi.y.max(v.y);
        }
        (lo, hi)
    }
}
