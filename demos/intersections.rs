//! Intersections of `x cos(pi x)` and `1 - 0.6 x^2`. 
//! Run with `RUST_LOG=debug` to trace every Newton iterate. 

use std::f64::consts::PI;

use polyroot::root_finding::intersection::{intersections_traced, IntersectionError};
use polyroot::root_finding::newton::{log_iterate, NewtonCfg};
use polyroot::root_finding::report::Iterate;

const GUESSES: [f64; 4] = [-2.15, -1.7, -0.9, 1.3];

fn fvals_intersect(x: f64) -> (f64, f64) {
    let f  = x * (PI * x).cos() - 1.0 + 0.6 * x * x;
    let fp = -x * (PI * x).sin() * PI + (PI * x).cos() + 1.2 * x;
    (f, fp)
}

fn main() -> Result<(), IntersectionError> {
    env_logger::init();
    let cfg = NewtonCfg::new();

    let pts = intersections_traced(
        fvals_intersect,
        &GUESSES,
        |x| x * (PI * x).cos(),
        cfg,
        |_: usize, it: &Iterate| log_iterate(it),
    )?;
    for p in &pts {
        println!("With initial guess x0 = {:22.15e},", p.guess);
        println!("\tsolve returns x = {:22.15e} after {} iterations", p.root, p.iterations);
        if let Some(w) = p.warning {
            println!("\twarning: {w}");
        }
    }

    println!("points to plot:");
    for p in &pts {
        println!("  ({:.6}, {:.6})", p.root, p.y);
    }
    Ok(())
}
