//! Plot data for fitted polynomials. 
//!
//! Rendering is left to the caller; this module only produces the 
//! `(x, p(x))` pairs a plotting backend would draw. 
//!
//! - [`plot_range`]  : `[min(x) - 1, max(x) + 1]` around the samples 
//! - [`PlotSamples`] : lazy, evenly spaced `(x, p(x))` iterator 


use crate::interpolation::config::non_finite_idx;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;


/// Default sampling density for plot data. 
pub const DEFAULT_PLOT_POINTS: usize = 1000; 

/// Padding added on each side of the sample range. 
pub const PLOT_MARGIN: f64 = 1.0; 


/// Interval `[min(x) - 1, max(x) + 1]`. 
///
/// # Errors 
/// - [`InterpolationError::EmptyInput`]   : `x` is empty 
/// - [`InterpolationError::NonFiniteVec`] : `x` holds NaN or inf 
pub fn plot_range(x: &[f64]) -> Result<(f64, f64), InterpolationError> { 
    if x.is_empty() { 
        return Err(InterpolationError::EmptyInput); 
    }
    if let Some(idx) = non_finite_idx(x) { 
        return Err(InterpolationError::NonFiniteVec { idx }); 
    }

    let (lo, hi) = x.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY), 
        |(lo, hi), &xi| (lo.min(xi), hi.max(xi))
    ); 

    Ok((lo - PLOT_MARGIN, hi + PLOT_MARGIN))
}


/// Lazy `(x, p(x))` pairs on `n` evenly spaced points of `[start, end]`. 
///
/// Endpoints are inclusive; with `n == 1` only `start` is produced. 
#[derive(Debug, Clone)]
pub struct PlotSamples<'p> { 
    polynomial: &'p Polynomial, 
    start: f64, 
    end: f64, 
    step: f64, 
    n: usize, 
    next: usize, 
}

impl<'p> PlotSamples<'p> { 
    pub fn new(
        polynomial: &'p Polynomial, 
        start: f64, 
        end: f64, 
        n: usize
    ) -> Result<Self, InterpolationError> { 
        if n == 0 { 
            return Err(InterpolationError::InvalidSampleCount { got: n }); 
        }
        if let Some(idx) = non_finite_idx(&[start, end]) { 
            return Err(InterpolationError::NonFiniteVec { idx }); 
        }

        let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 }; 
        Ok(Self { polynomial, start, end, step, n, next: 0 })
    }

    #[inline]
    fn abscissa(&self, i: usize) -> f64 { 
        // pin the last point so rounding never overshoots `end` 
        if self.n > 1 && i == self.n - 1 { 
            self.end
        } else { 
            self.start + i as f64 * self.step
        }
    }
}

impl Iterator for PlotSamples<'_> { 
    type Item = (f64, f64); 

    fn next(&mut self) -> Option<Self::Item> { 
        if self.next >= self.n { 
            return None; 
        }
        let x = self.abscissa(self.next); 
        self.next += 1; 
        Some((x, self.polynomial.eval(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { 
        let remaining = self.n - self.next; 
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlotSamples<'_> {}
