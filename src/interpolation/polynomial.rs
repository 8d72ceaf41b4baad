//! Monomial-basis polynomial 
//!
//! Holds the coefficient vector `c` of 
//!
//! ```text
//! p(x) = c[0] + c[1] x + c[2] x^2 + ... + c[n-1] x^(n-1)
//! ```
//!
//! and evaluates it with [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method). 


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::plot::{plot_range, PlotSamples};
use crate::interpolation::traits::Interpolator;


/// Coefficients in ascending power order. Immutable once built. 
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial { 
    coefficients: Vec<f64>, 
}

impl Polynomial { 
    pub fn new(coefficients: Vec<f64>) -> Self { 
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] { 
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<f64> { 
        self.coefficients
    }

    /// Nominal degree `n - 1`; trailing zero coefficients are not stripped. 
    pub fn degree(&self) -> usize { 
        self.coefficients.len().saturating_sub(1)
    }

    /// Horner evaluation, `O(n)` per point. 
    ///
    /// ```text
    /// p(x) = c[0] + x * (c[1] + x * (c[2] + ... + x * c[n-1]))
    /// ```
    #[inline]
    pub fn eval(&self, x: f64) -> f64 { 
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Lazily samples `p` on `n` evenly spaced points spanning 
    /// `[min(x_data) - 1, max(x_data) + 1]`. 
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] / [`InterpolationError::NonFiniteVec`] 
    ///   for unusable `x_data` 
    /// - [`InterpolationError::InvalidSampleCount`] if `n == 0` 
    pub fn plot_samples(
        &self, 
        x_data: &[f64], 
        n: usize
    ) -> Result<PlotSamples<'_>, InterpolationError> { 
        let (start, end) = plot_range(x_data)?; 
        PlotSamples::new(self, start, end, n)
    }
}

impl Interpolator for Polynomial { 
    #[inline]
    fn eval(&self, x: f64) -> f64 { 
        Polynomial::eval(self, x)
    }
}
