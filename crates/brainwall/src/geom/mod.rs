//! Exact 2D predicates over lattice coordinates.
//!
//! Purpose
//! - Provide the minimal predicate set the validity engine needs: signed
//!   area / orientation, betweenness on a closed segment, strict segment
//!   crossing, and the boundary-aware "does this segment leave the hole"
//!   test.
//!
//! Why integer-exact
//! - Coordinates are lattice points, so every orientation sign and every
//!   on-segment test is decided exactly with `i64` arithmetic. There is no
//!   tolerance knob anywhere in this module; floating point enters only in
//!   the stretch/score layer (`eval`).
//!
//! Code cross-refs: `types::{Pt, Hole}`, `eval::evaluate`

mod predicates;
mod types;

pub use predicates::{between, cross, dot, exits_hole, properly_crosses};
pub use types::{dist2, pt, Hole, Pt};

#[cfg(test)]
mod tests;
