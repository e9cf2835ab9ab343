//! Random pose perturbation (lattice jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler that nudges pose vertices on the
//!   integer lattice, for randomized search loops and stress tests. The
//!   perturbation is parameterizable, reproducible, and stays inside the
//!   hole's bounding box.
//!
//! Model
//! - Perform `moves` rounds; each round picks one vertex and adds an offset
//!   drawn uniformly from `[-max_step, max_step]^2`, clamped to the bounding
//!   box of the hole.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use crate::eval::Solution;
use crate::geom::{pt, Hole};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lattice-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct JitterCfg {
    /// Maximum per-axis displacement of a single move. Clamped to >= 1.
    pub max_step: i64,
    /// Number of single-vertex moves per draw.
    pub moves: usize,
}
impl Default for JitterCfg {
    fn default() -> Self {
        Self {
            max_step: 2,
            moves: 8,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a perturbed copy of `base` via repeated single-vertex moves.
///
/// Notes
/// - Vertices are clamped to the hole's bounding box, not to the hole itself;
///   callers re-evaluate the pose to decide whether the draw is legal.
/// - An empty pose is returned unchanged.
pub fn jitter_solution(cfg: JitterCfg, tok: ReplayToken, hole: &Hole, base: &Solution) -> Solution {
    let mut rng = tok.to_std_rng();
    let mut out = base.clone();
    if out.vertices.is_empty() {
        return out;
    }
    let step = cfg.max_step.max(1);
    let (lo, hi) = hole.bbox();
    for _ in 0..cfg.moves {
        let i = rng.gen_range(0..out.vertices.len());
        let dx = rng.gen_range(-step..=step);
        let dy = rng.gen_range(-step..=step);
        let p = out.vertices[i];
        out.vertices[i] = pt(
            (p.x + dx).clamp(lo.x, hi.x),
            (p.y + dy).clamp(lo.y, hi.y),
        );
    }
    out
}
