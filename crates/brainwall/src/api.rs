//! Curated internal API for tools (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for
//!   project-internal binaries and experiments. Breaking changes are allowed
//!   and expected.
//! - Prefer these re-exports for clarity and consistency across tools.

// Exact lattice geometry
pub use crate::geom::{between, cross, dist2, dot, exits_hole, properly_crosses, pt, Hole, Pt};
// Pose evaluation and scoring
pub use crate::eval::{
    dislikes, evaluate, within_tolerance, Edge, EdgeStatus, EvalCfg, Evaluation, Figure, Problem,
    Solution, MILLION,
};
// Randomized pose perturbation
pub use crate::jitter::{jitter_solution, JitterCfg, ReplayToken};

pub use crate::Error;
