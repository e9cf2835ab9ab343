//! JSON interchange for problem and pose files.
//!
//! The on-disk layout mirrors the contest format: coordinate pairs as
//! two-element arrays, edges as index pairs, and an optional `bonuses` key
//! that we accept and ignore.

use anyhow::{Context, Result};
use brainwall::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct RawProblem {
    pub hole: Vec<[i64; 2]>,
    pub figure: RawFigure,
    pub epsilon: u64,
}

#[derive(Debug, Deserialize)]
pub struct RawFigure {
    pub edges: Vec<[usize; 2]>,
    pub vertices: Vec<[i64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct RawPose {
    pub vertices: Vec<[i64; 2]>,
}

fn to_points(raw: &[[i64; 2]]) -> Vec<Pt> {
    raw.iter().map(|&[x, y]| pt(x, y)).collect()
}

pub fn load_problem(path: &Path) -> Result<Problem> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading problem file {}", path.display()))?;
    let raw: RawProblem = serde_json::from_str(&text)
        .with_context(|| format!("parsing problem JSON {}", path.display()))?;
    let hole = Hole::new(to_points(&raw.hole))
        .with_context(|| format!("hole polygon in {}", path.display()))?;
    let figure = Figure {
        vertices: to_points(&raw.figure.vertices),
        edges: raw.figure.edges.iter().map(|&[u, v]| Edge(u, v)).collect(),
    };
    figure
        .validate()
        .with_context(|| format!("figure graph in {}", path.display()))?;
    Ok(Problem {
        hole,
        figure,
        epsilon: raw.epsilon,
    })
}

pub fn load_pose(path: &Path) -> Result<Solution> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading pose file {}", path.display()))?;
    let raw: RawPose = serde_json::from_str(&text)
        .with_context(|| format!("parsing pose JSON {}", path.display()))?;
    Ok(Solution {
        vertices: to_points(&raw.vertices),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) const PROBLEM_13_JSON: &str = r#"{"bonuses":[{"bonus":"GLOBALIST","problem":46,"position":[20,20]}],"hole":[[20,0],[40,20],[20,40],[0,20]],"epsilon":2494,"figure":{"edges":[[0,1],[0,2],[1,3],[2,3]],"vertices":[[15,21],[34,0],[0,45],[19,24]]}}"#;

    pub(crate) const POSE_13_JSON: &str = r#"{"vertices":[[20,0],[40,20],[0,20],[20,40]]}"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_problem_with_extra_keys() {
        let f = write_temp(PROBLEM_13_JSON);
        let p = load_problem(f.path()).unwrap();
        assert_eq!(p.epsilon, 2494);
        assert_eq!(p.hole.len(), 4);
        assert_eq!(p.figure.vertices.len(), 4);
        assert_eq!(p.figure.edges, vec![Edge(0, 1), Edge(0, 2), Edge(1, 3), Edge(2, 3)]);
    }

    #[test]
    fn loads_pose() {
        let f = write_temp(POSE_13_JSON);
        let s = load_pose(f.path()).unwrap();
        assert_eq!(s.vertices, vec![pt(20, 0), pt(40, 20), pt(0, 20), pt(20, 40)]);
    }

    #[test]
    fn rejects_malformed_json() {
        let f = write_temp("{\"hole\": [[0,0],[1,0]");
        assert!(load_problem(f.path()).is_err());
    }

    #[test]
    fn rejects_degenerate_hole() {
        let f = write_temp(
            r#"{"hole":[[0,0],[1,0]],"epsilon":0,"figure":{"edges":[],"vertices":[]}}"#,
        );
        let err = load_problem(f.path()).unwrap_err();
        assert!(err.to_string().contains("hole polygon"));
    }

    #[test]
    fn rejects_out_of_range_edge() {
        let f = write_temp(
            r#"{"hole":[[0,0],[10,0],[10,10],[0,10]],"epsilon":0,"figure":{"edges":[[0,9]],"vertices":[[1,1],[2,2]]}}"#,
        );
        let err = load_problem(f.path()).unwrap_err();
        assert!(err.to_string().contains("figure graph"));
    }
}
