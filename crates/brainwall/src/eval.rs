//! Pose evaluation: per-edge stretch tolerance and hole containment.
//!
//! Purpose: decide whether a figure pose is legal for a hole under an
//! epsilon stretch budget, and score it.
//!
//! Why exact-then-float: containment and betweenness stay in i64 (no rounding,
//! no misclassification near the boundary), while the tolerance ratio is the
//! one place f64 enters, with a fixed slack folded into epsilon so that
//! boundary cases round in the solver's favour.

use crate::geom::{dist2, exits_hole, Hole, Pt};
use crate::Error;

/// Parts-per-million denominator for epsilon.
pub const MILLION: f64 = 1_000_000.0;

/// An undirected figure edge, by vertex index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

/// The flexible figure: reference vertex positions plus its edge graph.
#[derive(Clone, Debug)]
pub struct Figure {
    pub vertices: Vec<Pt>,
    pub edges: Vec<Edge>,
}

impl Figure {
    /// Checks every edge endpoint index against the vertex count.
    pub fn validate(&self) -> Result<(), Error> {
        let len = self.vertices.len();
        for &Edge(u, v) in &self.edges {
            let index = if u >= len { u } else { v };
            if index >= len {
                return Err(Error::InvalidReference { index, len });
            }
        }
        Ok(())
    }
}

/// A problem instance: hole, figure, and the stretch budget in ppm.
#[derive(Clone, Debug)]
pub struct Problem {
    pub hole: Hole,
    pub figure: Figure,
    pub epsilon: u64,
}

/// Candidate vertex placements for a figure. Indices parallel
/// `Figure::vertices`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub vertices: Vec<Pt>,
}

impl Solution {
    /// The identity pose: every vertex at its reference position.
    pub fn from_figure(figure: &Figure) -> Self {
        Solution { vertices: figure.vertices.clone() }
    }

    /// Moves one vertex, rejecting out-of-range indices.
    pub fn move_vertex(&mut self, index: usize, to: Pt) -> Result<(), Error> {
        let len = self.vertices.len();
        match self.vertices.get_mut(index) {
            Some(slot) => {
                *slot = to;
                Ok(())
            }
            None => Err(Error::InvalidReference { index, len }),
        }
    }
}

/// Per-edge verdict. `Stretched` shadows any containment problem on the
/// same edge: a too-long edge is reported as `Stretched` even when it also
/// leaves the hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStatus {
    Ok,
    Stretched,
    Crossing,
}

/// Evaluation knobs. `eps_slack` is added to epsilon before the ppm divide,
/// so exact-boundary ratios pass.
#[derive(Clone, Copy, Debug)]
pub struct EvalCfg {
    pub eps_slack: f64,
}

impl Default for EvalCfg {
    fn default() -> Self {
        EvalCfg { eps_slack: 1e-12 }
    }
}

/// Full evaluation of a pose against a problem.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// One verdict per figure edge, same order as `Figure::edges`.
    pub statuses: Vec<EdgeStatus>,
    /// `|new_d2 / old_d2 - 1|` per edge, same order.
    pub ratios: Vec<f64>,
    /// Pooled stretch usage: sum of ratios over the aggregate budget.
    /// `<= 1.0` means the pose fits the pooled budget. 0.0 for an empty
    /// edge set.
    pub globalist: f64,
}

impl Evaluation {
    /// True when every edge is `Ok`.
    pub fn is_valid(&self) -> bool {
        self.statuses.iter().all(|s| *s == EdgeStatus::Ok)
    }

    /// True when the pooled stretch budget is not exceeded.
    pub fn within_global_budget(&self) -> bool {
        self.globalist <= 1.0
    }
}

/// `|new_d2 / old_d2 - 1|`, the ppm-scaled deviation of one edge.
fn stretch_ratio(new_d2: i64, old_d2: i64) -> Result<f64, Error> {
    if old_d2 == 0 {
        return Err(Error::DegenerateEdge);
    }
    Ok((new_d2 as f64 / old_d2 as f64 - 1.0).abs())
}

#[inline]
fn tolerance(epsilon: u64, cfg: &EvalCfg) -> f64 {
    (epsilon as f64 + cfg.eps_slack) / MILLION
}

/// Whether an edge moved from `(old1, old2)` to `(new1, new2)` stays within
/// the epsilon stretch budget.
pub fn within_tolerance(
    new1: Pt,
    new2: Pt,
    old1: Pt,
    old2: Pt,
    epsilon: u64,
    cfg: &EvalCfg,
) -> Result<bool, Error> {
    let ratio = stretch_ratio(dist2(new1, new2), dist2(old1, old2))?;
    Ok(ratio <= tolerance(epsilon, cfg))
}

/// Evaluates `solution` against `problem` edge by edge.
///
/// Each edge is checked for stretch first, then for containment, so a
/// stretched edge is never reported as `Crossing`. The pooled `globalist`
/// figure is computed from the ratios regardless of the per-edge verdicts.
pub fn evaluate(problem: &Problem, solution: &Solution, cfg: &EvalCfg) -> Result<Evaluation, Error> {
    problem.figure.validate()?;
    if solution.vertices.len() != problem.figure.vertices.len() {
        return Err(Error::InvalidReference {
            index: problem.figure.vertices.len().saturating_sub(1),
            len: solution.vertices.len(),
        });
    }

    let tol = tolerance(problem.epsilon, cfg);
    let edges = &problem.figure.edges;
    let mut statuses = Vec::with_capacity(edges.len());
    let mut ratios = Vec::with_capacity(edges.len());
    let mut total = 0.0;

    for &Edge(u, v) in edges {
        let old1 = problem.figure.vertices[u];
        let old2 = problem.figure.vertices[v];
        let new1 = solution.vertices[u];
        let new2 = solution.vertices[v];

        let ratio = stretch_ratio(dist2(new1, new2), dist2(old1, old2))?;
        total += ratio;
        ratios.push(ratio);

        let status = if ratio > tol {
            EdgeStatus::Stretched
        } else if exits_hole(new1, new2, &problem.hole) {
            EdgeStatus::Crossing
        } else {
            EdgeStatus::Ok
        };
        statuses.push(status);
    }

    let globalist = if edges.is_empty() {
        0.0
    } else {
        total / (tol * edges.len() as f64)
    };

    Ok(Evaluation { statuses, ratios, globalist })
}

/// Contest score for a pose: for each hole vertex, the squared distance to
/// the nearest solution vertex, summed. Lower is better; 0 means every hole
/// vertex is covered.
pub fn dislikes(hole: &Hole, solution: &Solution) -> i64 {
    hole.vertices()
        .iter()
        .map(|&h| {
            solution
                .vertices
                .iter()
                .map(|&v| dist2(h, v))
                .min()
                .unwrap_or(0)
        })
        .sum()
}
