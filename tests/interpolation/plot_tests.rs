use polyroot::interpolation::errors::InterpolationError;
use polyroot::interpolation::plot::{plot_range, PlotSamples, DEFAULT_PLOT_POINTS};
use polyroot::interpolation::quadratic;

type PolyResult = Result<(), InterpolationError>;

#[test]
fn samples_span_padded_range() -> PolyResult {
    let x = [-1.0, 0.0, 2.0];
    let y = [ 1.0, -1.0, 7.0];
    let p = quadratic::fit(&x, &y)?;

    let pts: Vec<(f64, f64)> = p.plot_samples(&x, DEFAULT_PLOT_POINTS)?.collect();
    assert_eq!(pts.len(), DEFAULT_PLOT_POINTS);
    assert_eq!(pts[0].0, -2.0);
    assert_eq!(pts[DEFAULT_PLOT_POINTS - 1].0, 3.0);
    assert!(pts.windows(2).all(|w| w[0].0 < w[1].0));
    for (xq, yq) in pts {
        assert!((yq - (-1.0 + 2.0 * xq * xq)).abs() <= 1e-10);
    }
    Ok(())
}

#[test]
fn range_of_unsorted_samples() -> PolyResult {
    assert_eq!(plot_range(&[3.0, -4.0, 0.5])?, (-5.0, 4.0));
    Ok(())
}

#[test]
fn range_rejects_empty_and_nan() {
    assert!(matches!(plot_range(&[]), Err(InterpolationError::EmptyInput)));
    assert!(matches!(
        plot_range(&[0.0, f64::INFINITY]),
        Err(InterpolationError::NonFiniteVec { idx: 1 })
    ));
}

#[test]
fn lazy_iteration_can_stop_early() -> PolyResult {
    let p = quadratic::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])?;
    let first: Vec<_> = PlotSamples::new(&p, 0.0, 10.0, 11)?.take(3).collect();
    assert_eq!(first.len(), 3);
    assert!((first[2].0 - 2.0).abs() <= 1e-15);
    assert!((first[2].1 - 4.0).abs() <= 1e-12);
    Ok(())
}
