use std::f64::consts::PI;

use polyroot::root_finding::intersection::{
    dedup_roots, difference, intersections, intersections_traced, IntersectionError,
};
use polyroot::root_finding::newton::{NewtonCfg, NewtonError};
use polyroot::root_finding::report::Iterate;

const GUESSES: [f64; 4] = [-2.15, -1.7, -0.9, 1.3];

// h(x) = x cos(pi x) - (1 - 0.6 x^2)
fn fvals_intersect(x: f64) -> (f64, f64) {
    let f  = x * (PI * x).cos() - 1.0 + 0.6 * x * x;
    let fp = -x * (PI * x).sin() * PI + (PI * x).cos() + 1.2 * x;
    (f, fp)
}

fn wave(x: f64) -> f64 {
    x * (PI * x).cos()
}

#[test]
fn wave_meets_parabola() -> Result<(), IntersectionError> {
    let pts = intersections(fvals_intersect, &GUESSES, wave, NewtonCfg::new())?;

    assert_eq!(pts.len(), GUESSES.len());
    for (p, g) in pts.iter().zip(GUESSES.iter()) {
        assert_eq!(p.guess, *g);
        assert!(p.warning.is_none());
        // both curves meet at the root
        assert!((p.y - (1.0 - 0.6 * p.root * p.root)).abs() < 1e-12);
        assert_eq!(p.y, wave(p.root));
        assert!(fvals_intersect(p.root).0.abs() < 1e-14);
    }
    Ok(())
}

#[test]
fn difference_of_curves_matches_hand_written() -> Result<(), IntersectionError> {
    let f = |x: f64| (x * (PI * x).cos(), (PI * x).cos() - PI * x * (PI * x).sin());
    let g = |x: f64| (1.0 - 0.6 * x * x, -1.2 * x);

    let by_hand  = intersections(fvals_intersect, &GUESSES, wave, NewtonCfg::new())?;
    let composed = intersections(difference(f, g), &GUESSES, wave, NewtonCfg::new())?;

    for (a, b) in by_hand.iter().zip(composed.iter()) {
        assert!((a.root - b.root).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn repeated_roots_are_kept() -> Result<(), IntersectionError> {
    let fvals = |x: f64| (x * x - 4.0, 2.0 * x);
    let pts = intersections(fvals, &[1.0, 3.0, -5.0], |x| x, NewtonCfg::new())?;

    assert_eq!(pts.len(), 3);
    assert!((pts[0].root - 2.0).abs() < 1e-14);
    assert!((pts[1].root - 2.0).abs() < 1e-14);
    assert!((pts[2].root + 2.0).abs() < 1e-14);

    let unique = dedup_roots(&pts, 1e-10);
    assert_eq!(unique.len(), 2);
    assert_eq!(unique[0].guess, 1.0);
    assert_eq!(unique[1].guess, -5.0);
    Ok(())
}

#[test]
fn empty_guesses() -> Result<(), IntersectionError> {
    let pts = intersections(fvals_intersect, &[], wave, NewtonCfg::new())?;
    assert!(pts.is_empty());
    Ok(())
}

#[test]
fn failure_names_the_guess() {
    let fvals = |x: f64| (x * x + 1.0, 2.0 * x);
    let err = intersections(fvals, &[0.5, 0.0], |x| x, NewtonCfg::new()).unwrap_err();

    let IntersectionError::Newton { index, guess, source } = err;
    // guess 0.5 never converges but is not fatal; guess 0.0 has f'(0) = 0
    assert_eq!(index, 1);
    assert_eq!(guess, 0.0);
    assert!(matches!(source, NewtonError::DerivativeVanished { .. }));
}

#[test]
fn capped_run_keeps_warning_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    // x^2 + 1 has no real root; x^2 - 4 converges from 3.0
    let fvals = |x: f64| {
        if x > 1.0 { (x * x - 4.0, 2.0 * x) } else { (x * x + 1.0, 2.0 * x) }
    };
    let cfg = NewtonCfg::new().set_max_iter(2)?;
    let pts = intersections(fvals, &[0.5, 2.0], |x| x, cfg)?;

    assert_eq!(pts.len(), 2);
    let warning = pts[0].warning.expect("capped run should carry a warning");
    assert_eq!(warning.iterations, 2);
    assert_eq!(pts[0].iterations, 2);
    assert!(pts[1].warning.is_none());
    assert_eq!(pts[1].root, 2.0);
    Ok(())
}

#[test]
fn traced_driver_reports_each_run_once() -> Result<(), IntersectionError> {
    let mut trace: Vec<(usize, Iterate)> = Vec::new();
    let pts = intersections_traced(
        fvals_intersect,
        &GUESSES,
        wave,
        NewtonCfg::new(),
        |index: usize, it: &Iterate| trace.push((index, *it)),
    )?;

    let plain = intersections(fvals_intersect, &GUESSES, wave, NewtonCfg::new())?;
    assert_eq!(pts, plain);

    for (index, p) in pts.iter().enumerate() {
        let run: Vec<&Iterate> = trace
            .iter()
            .filter(|(i, _)| *i == index)
            .map(|(_, it)| it)
            .collect();
        assert_eq!(run.len(), p.iterations + 1);
        assert_eq!(run[0].x, p.guess);
        assert_eq!(run[run.len() - 1].x, p.root);
    }
    Ok(())
}
