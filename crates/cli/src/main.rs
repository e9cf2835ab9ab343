use anyhow::Result;
use brainwall::prelude::*;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

mod format;

/// Exit code for a well-formed but invalid pose, matching the contest
/// checker convention.
const EXIT_INVALID: u8 = 42;

#[derive(Parser)]
#[command(name = "brainwall")]
#[command(about = "Pose checker for the hole-and-figure packing puzzle")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate a pose and print its dislikes score; exits 42 if invalid
    Check {
        problem: PathBuf,
        pose: PathBuf,
        /// Pool the stretch budget across all edges instead of checking
        /// each edge separately
        #[arg(long)]
        globalist: bool,
    },
    /// Print per-edge verdicts and ratios as JSON
    Edges { problem: PathBuf, pose: PathBuf },
}

fn main() -> Result<ExitCode> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            problem,
            pose,
            globalist,
        } => check(&problem, &pose, globalist),
        Action::Edges { problem, pose } => edges(&problem, &pose),
    }
}

fn check(problem_path: &Path, pose_path: &Path, globalist: bool) -> Result<ExitCode> {
    let problem = format::load_problem(problem_path)?;
    let pose = format::load_pose(pose_path)?;
    match check_pose(&problem, &pose, globalist)? {
        Some(score) => {
            println!("{score}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::from(EXIT_INVALID)),
    }
}

/// Returns the dislikes score for a valid pose, `None` for an invalid one.
/// Invalid edges are reported on the log.
fn check_pose(problem: &Problem, pose: &Solution, globalist: bool) -> Result<Option<i64>> {
    let eval = evaluate(problem, pose, &EvalCfg::default())?;
    let valid = if globalist {
        // The pooled budget replaces the per-edge stretch check, but every
        // edge must still stay inside the hole.
        let mut contained = true;
        for (i, &Edge(u, v)) in problem.figure.edges.iter().enumerate() {
            if exits_hole(pose.vertices[u], pose.vertices[v], &problem.hole) {
                tracing::warn!(edge = i, u, v, "edge leaves the hole");
                contained = false;
            }
        }
        if !eval.within_global_budget() {
            tracing::warn!(globalist = eval.globalist, "pooled stretch budget exceeded");
        }
        contained && eval.within_global_budget()
    } else {
        for (i, status) in eval.statuses.iter().enumerate() {
            if *status != EdgeStatus::Ok {
                let Edge(u, v) = problem.figure.edges[i];
                tracing::warn!(
                    edge = i,
                    u,
                    v,
                    status = ?status,
                    ratio = eval.ratios[i],
                    "invalid edge"
                );
            }
        }
        eval.is_valid()
    };
    Ok(valid.then(|| dislikes(&problem.hole, pose)))
}

fn edges(problem_path: &Path, pose_path: &Path) -> Result<ExitCode> {
    let problem = format::load_problem(problem_path)?;
    let pose = format::load_pose(pose_path)?;
    let eval = evaluate(&problem, &pose, &EvalCfg::default())?;
    let rows: Vec<_> = problem
        .figure
        .edges
        .iter()
        .zip(eval.statuses.iter().zip(&eval.ratios))
        .map(|(&Edge(u, v), (status, ratio))| {
            serde_json::json!({
                "edge": [u, v],
                "status": format!("{status:?}"),
                "ratio": ratio,
            })
        })
        .collect();
    let doc = serde_json::json!({
        "edges": rows,
        "globalist": eval.globalist,
        "valid": eval.is_valid(),
        "dislikes": dislikes(&problem.hole, &pose),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(ExitCode::SUCCESS)
}
