//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : common runtime errors  
//! │   ├ non-finite function evaluation  
//! │   └ invalid global parameters (e.g. max_iter) 
//! │
//! └ [`ToleranceError`]   : invalid input tolerances  


use thiserror::Error; 


/// Root-finding runtime errors.  
/// 
/// ┌ Non-finite function evaluation  
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Tolerance configuration errors.  
#[derive(Debug, Error)]
pub enum ToleranceError { 
    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },
}
