//! Cubic Interpolation 
//!
//! Fits `p(x) = c[0] + c[1] x + c[2] x^2 + c[3] x^3` through exactly 
//! four samples. 


use crate::interpolation::algorithms::Algorithm; 
use crate::interpolation::config::{impl_common_cfg, CommonCfg}; 
use crate::interpolation::errors::InterpolationError; 
use crate::interpolation::monomial::interpolate_with; 
use crate::interpolation::polynomial::Polynomial; 
use crate::interpolation::report::InterpolationReport; 


/// Cubic interpolation configuration; `x` and `y` must hold 4 values. 
#[derive(Debug, Clone, Copy)] 
pub struct CubicCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> CubicCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(CubicCfg<'a>);


/// Performs cubic interpolation; see [`crate::interpolation::quadratic::interpolate`]. 
///
/// # Errors
/// - [`InterpolationError::PointCountMismatch`] unless exactly 4 samples are given. 
pub fn interpolate(cfg: CubicCfg) -> Result<InterpolationReport, InterpolationError> { 
    interpolate_with(Algorithm::Cubic, &cfg.common)
}


pub fn fit(x: &[f64], y: &[f64]) -> Result<Polynomial, InterpolationError> { 
    let cfg = CubicCfg::new().set_x(x)?.set_y(y)?; 
    Ok(interpolate(cfg)?.polynomial)
}
