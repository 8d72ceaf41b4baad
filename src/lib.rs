//! Polynomial interpolation and scalar root finding.
//!
//! - [`interpolation`] : monomial-basis interpolation through `N` samples,
//!   Horner evaluation and plot-data generation
//! - [`root_finding`]  : Newton-Raphson iteration and an intersection driver

pub mod interpolation;
pub mod root_finding;
