//! Monomial (Vandermonde) Interpolation
//!
//! Implements global polynomial interpolation in the monomial basis by 
//! solving the dense [Vandermonde system](https://en.wikipedia.org/wiki/Vandermonde_matrix)
//!
//! ```text
//! | 1  x0  x0^2 ... x0^(n-1) | | c0     |   | y0     |
//! | 1  x1  x1^2 ... x1^(n-1) | | c1     | = | y1     |
//! | :                        | | :      |   | :      |
//! | 1  xn  xn^2 ... xn^(n-1) | | c(n-1) |   | y(n-1) |
//! ```
//!
//! with an LU decomposition with partial pivoting. Accuracy is bounded by 
//! the conditioning of the Vandermonde matrix, which grows quickly with `n` 
//! and with the spread of `x`.


use nalgebra::{DMatrix, DVector};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::report::InterpolationReport;


/// General monomial interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`MonomialCfg::new`] then setters. 
#[derive(Debug, Clone, Copy)] 
pub struct MonomialCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> MonomialCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(MonomialCfg<'a>);


/// First repeated value in `x`, if any. 
fn first_duplicate(x: &[f64]) -> Option<f64> { 
    let mut sorted = x.to_vec(); 
    sorted.sort_by(f64::total_cmp); 
    sorted.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
}


/// Solves `A c = y` for the monomial coefficients `c`. 
///
/// # Errors 
/// - [`InterpolationError::DuplicateX`]     : two samples share an x-value 
/// - [`InterpolationError::SingularSystem`] : zero pivot or non-finite solution 
pub(crate) fn solve_coefficients(
    x: &[f64], 
    y: &[f64]
) -> Result<Polynomial, InterpolationError> { 
    if let Some(x) = first_duplicate(x) { 
        log::trace!("vandermonde: duplicate x-value {x}");
        return Err(InterpolationError::DuplicateX { x }); 
    }

    let n = x.len(); 
    log::trace!("vandermonde: solving {n}x{n} system");

    // column c holds x^c 
    let a = DMatrix::from_fn(n, n, |r, c| x[r].powi(c as i32)); 
    let b = DVector::from_column_slice(y); 

    let c = a.lu().solve(&b).ok_or(InterpolationError::SingularSystem { n })?; 
    if c.iter().any(|ci| !ci.is_finite()) { 
        log::trace!("vandermonde: non-finite coefficients for n={n}");
        return Err(InterpolationError::SingularSystem { n }); 
    }

    Ok(Polynomial::new(c.as_slice().to_vec()))
}


/// Validates `common` for `algorithm`, solves for the coefficients and 
/// evaluates the result at every `x_eval` point. 
pub(crate) fn interpolate_with(
    algorithm: Algorithm, 
    common: &CommonCfg, 
) -> Result<InterpolationReport, InterpolationError> { 
    common.validate(algorithm)?; 

    let polynomial = solve_coefficients(common.x(), common.y())?; 

    let evals = common.x_eval(); 
    let mut report = InterpolationReport::new(algorithm, polynomial, evals.len()); 
    for &xq in evals { 
        let p = report.polynomial.eval(xq); 
        report.evaluated.push(p); 
    }

    Ok(report)
}


/// Performs monomial interpolation through all `N >= 1` samples.
///
/// # Behavior
/// - Builds the `N x N` Vandermonde matrix with column `i` holding `x^i`.
/// - Solves for `c` with LU decomposition.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`, evaluates 
///   `p(xq)` with Horner's method. Extrapolation is allowed. 
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"monomial"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `polynomial`     : coefficients `c[0..N]`
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`], 
///   [`InterpolationError::NonFiniteVec`] on malformed samples. 
/// - [`InterpolationError::DuplicateX`], [`InterpolationError::SingularSystem`] 
///   if the system cannot be solved. 
pub fn interpolate(cfg: MonomialCfg) -> Result<InterpolationReport, InterpolationError> { 
    interpolate_with(Algorithm::Monomial, &cfg.common)
}


/// Coefficients of the unique degree `N - 1` polynomial through `(x[i], y[i])`. 
pub fn fit(x: &[f64], y: &[f64]) -> Result<Polynomial, InterpolationError> { 
    let cfg = MonomialCfg::new().set_x(x)?.set_y(y)?; 
    Ok(interpolate(cfg)?.polynomial)
}
