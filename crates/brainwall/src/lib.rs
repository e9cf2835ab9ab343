//! Validity engine for the hole-and-figure packing puzzle.
//!
//! A *problem* is a simple polygon (the hole), a figure graph with reference
//! vertex positions, and an integer tolerance `epsilon` (parts per million of
//! allowed squared-length deviation). A *solution* is a candidate placement
//! of the figure vertices. This crate answers, purely and synchronously:
//! - does every placed edge stay inside the hole (boundary contact allowed)?
//! - does every edge keep its squared length within the epsilon band?
//! - how far over or under the pooled ("globalist") budget is the placement?
//!
//! All predicates use exact integer arithmetic over lattice coordinates;
//! callers with fractional input (drag handles) snap to the lattice before
//! calling in. The crate performs no I/O — loading, persistence, and
//! rendering belong to the caller.

pub mod api;
pub mod eval;
pub mod geom;
pub mod jitter;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Hole, Pt};

use thiserror::Error;

/// Failures of a single evaluation. Every variant indicates malformed input
/// data; all numeric paths over well-formed data are total.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The reference edge has zero squared length; its stretch ratio is
    /// undefined.
    #[error("degenerate reference edge: zero squared length")]
    DegenerateEdge,
    /// A hole polygon needs at least 3 vertices.
    #[error("invalid hole polygon: {len} vertices, need at least 3")]
    InvalidPolygon { len: usize },
    /// A figure edge references a vertex outside the vertex sequence.
    #[error("edge references vertex {index}, but only {len} vertices exist")]
    InvalidReference { index: usize, len: usize },
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::eval::{
        dislikes, evaluate, within_tolerance, Edge, EdgeStatus, EvalCfg, Evaluation, Figure,
        Problem, Solution,
    };
    pub use crate::geom::{
        between, cross, dist2, dot, exits_hole, properly_crosses, pt, Hole, Pt,
    };
    pub use crate::Error;
}
