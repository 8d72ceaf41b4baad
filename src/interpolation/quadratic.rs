//! Quadratic Interpolation 
//!
//! Fits `p(x) = c[0] + c[1] x + c[2] x^2` through exactly three samples. 
//! Fixed-size specialization of [`crate::interpolation::monomial`]. 


use crate::interpolation::algorithms::Algorithm; 
use crate::interpolation::config::{impl_common_cfg, CommonCfg}; 
use crate::interpolation::errors::InterpolationError; 
use crate::interpolation::monomial::interpolate_with; 
use crate::interpolation::polynomial::Polynomial; 
use crate::interpolation::report::InterpolationReport; 


/// Quadratic interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`]
///
/// # Construction 
/// - Use [`QuadraticCfg::new`] then setters; `x` and `y` must hold 3 values. 
#[derive(Debug, Clone, Copy)] 
pub struct QuadraticCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> QuadraticCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(QuadraticCfg<'a>);


/// Performs quadratic interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name` `"quadratic"`, 
/// three coefficients and `p` evaluated at each `x_eval` point. 
///
/// # Errors
/// - [`InterpolationError::PointCountMismatch`] unless exactly 3 samples are given. 
/// - Any error of [`crate::interpolation::monomial::interpolate`]. 
pub fn interpolate(cfg: QuadraticCfg) -> Result<InterpolationReport, InterpolationError> { 
    interpolate_with(Algorithm::Quadratic, &cfg.common)
}


/// Coefficients `[c0, c1, c2]` of the parabola through three samples. 
pub fn fit(x: &[f64], y: &[f64]) -> Result<Polynomial, InterpolationError> { 
    let cfg = QuadraticCfg::new().set_x(x)?.set_y(y)?; 
    Ok(interpolate(cfg)?.polynomial)
}
