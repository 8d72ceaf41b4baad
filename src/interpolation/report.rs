//! Defines the struct returned by all interpolation algorithms.
//!
//! This report summarizes key metadata about the interpolation process,
//! including the algorithm used, number of data and evaluation points,
//! the fitted polynomial, and results of evaluating it.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::polynomial::Polynomial;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"quadratic"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `polynomial`     : fitted coefficients, ascending powers
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub polynomial: Polynomial,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, polynomial: Polynomial, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided: polynomial.coefficients().len(),
            n_evaluated,
            polynomial,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }

    /// Coefficients `c[0..n]` of the fitted polynomial. 
    pub fn coefficients(&self) -> &[f64] { 
        self.polynomial.coefficients()
    }
}
