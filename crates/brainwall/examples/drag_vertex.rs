//! Walks contest problem 13 through a small drag session: start from the
//! reference pose, drag vertices one by one onto the hole corners, and print
//! the per-edge verdicts and scores after every move.
//!
//! Run with: cargo run -p brainwall --example drag_vertex

use brainwall::prelude::*;

fn report(label: &str, problem: &Problem, solution: &Solution) {
    let eval = evaluate(problem, solution, &EvalCfg::default()).unwrap();
    println!("{label}:");
    for (i, (status, ratio)) in eval.statuses.iter().zip(&eval.ratios).enumerate() {
        let Edge(u, v) = problem.figure.edges[i];
        println!("  edge {u}-{v}: {status:?} (ratio {ratio:.6})");
    }
    println!(
        "  valid={} globalist={:.4} dislikes={}",
        eval.is_valid(),
        eval.globalist,
        dislikes(&problem.hole, solution)
    );
}

fn main() {
    let problem = Problem {
        hole: Hole::new(vec![pt(20, 0), pt(40, 20), pt(20, 40), pt(0, 20)]).unwrap(),
        figure: Figure {
            vertices: vec![pt(15, 21), pt(34, 0), pt(0, 45), pt(19, 24)],
            edges: vec![Edge(0, 1), Edge(0, 2), Edge(1, 3), Edge(2, 3)],
        },
        epsilon: 2494,
    };

    let mut pose = Solution::from_figure(&problem.figure);
    report("reference pose", &problem, &pose);

    let targets = [pt(20, 0), pt(40, 20), pt(0, 20), pt(20, 40)];
    for (i, &target) in targets.iter().enumerate() {
        pose.move_vertex(i, target).unwrap();
        report(&format!("after dragging vertex {i} to {target:?}"), &problem, &pose);
    }
}
