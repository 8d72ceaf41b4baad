use polyroot::interpolation::quadratic::{fit, interpolate, QuadraticCfg};
use polyroot::interpolation::errors::InterpolationError;

type PolyResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}",
            i, ai, bi, ATOL
        );
    }
}

#[test]
fn known_parabola() -> PolyResult {
    let x = [-1.0, 0.0, 2.0];
    let y = [ 1.0, -1.0, 7.0];

    let p = fit(&x, &y)?;
    assert_vec_close(p.coefficients(), &[-1.0, 0.0, 2.0]);
    assert_eq!(p.degree(), 2);
    Ok(())
}

#[test]
fn report_evaluates_requested_points() -> PolyResult {
    let x      = [-1.0, 0.0, 2.0];
    let y      = [ 1.0, -1.0, 7.0];
    let x_eval = [-3.0, 0.5, 3.0];

    let cfg = QuadraticCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "quadratic");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 3);
    // p(x) = -1 + 2x^2, extrapolation allowed
    assert_vec_close(&rep.evaluated, &[17.0, -0.5, 17.0]);
    Ok(())
}

#[test]
fn reproduces_plot_fixture() -> PolyResult {
    let x = [1.0, 2.0, 3.0];
    let y = [3.0, 6.0, 7.0];

    let p = fit(&x, &y)?;
    for (xi, yi) in x.iter().zip(y.iter()) {
        assert!(approx_eq(p.eval(*xi), *yi));
    }
    Ok(())
}

#[test]
fn rejects_four_points() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];

    let err = fit(&x, &y).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::PointCountMismatch { algorithm: "quadratic", expected: 3, got: 4 }
    ));
    assert!(err.is_invalid_input());
}

#[test]
fn rejects_unequal_lengths() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];

    let err = QuadraticCfg::new().set_x(&x).and_then(|c| c.set_y(&y)).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn missing_y_caught_at_interpolate() -> PolyResult {
    let x = [0.0, 1.0, 2.0];
    let cfg = QuadraticCfg::new().set_x(&x)?;
    assert!(matches!(interpolate(cfg), Err(InterpolationError::EmptyInput)));
    Ok(())
}

#[test]
fn repeated_x_is_singular() {
    let x = [1.0, 1.0, 2.0];
    let y = [0.0, 3.0, 4.0];

    let err = fit(&x, &y).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x } if x == 1.0));
    assert!(err.is_singular());
    assert!(!err.is_invalid_input());
}

#[test]
fn non_finite_rejected() {
    let x = [0.0, f64::NAN, 2.0];
    let err = QuadraticCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}
