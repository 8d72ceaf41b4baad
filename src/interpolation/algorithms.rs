//! Defines the interpolation algorithm variants 
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods. 

/// Interpolation algorithm variants.
/// - [`Algorithm::Quadratic`] exactly 3 samples, degree 2 
/// - [`Algorithm::Cubic`]     exactly 4 samples, degree 3 
/// - [`Algorithm::Monomial`]  any `N >= 1` samples, degree `N - 1` 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Quadratic,
    Cubic, 
    Monomial, 
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Quadratic => "quadratic",
            Algorithm::Cubic     => "cubic",
            Algorithm::Monomial  => "monomial",
        }
    }

    /// Number of samples a fixed-size specialization requires. 
    /// `None` for the general case. 
    pub const fn expected_points(self) -> Option<usize> { 
        match self { 
            Algorithm::Quadratic => Some(3), 
            Algorithm::Cubic     => Some(4), 
            Algorithm::Monomial  => None, 
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
