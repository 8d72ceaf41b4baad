//! Defines the [`RootFindingReport`] struct returned by the Newton solver 
//! and the non-fatal [`ConvergenceWarning`] it may carry. 

use thiserror::Error; 

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum TerminationReason { 
    /// `|f(root)| < abs_fx` 
    ToleranceReached, 
    /// `max_iter` updates performed without meeting `abs_fx` 
    IterationLimit,
}


/// Soft failure: the iteration cap was reached before the residual 
/// tolerance was met. The iterate is still the best estimate available. 
#[derive(Debug, Clone, Copy, PartialEq, Error)] 
#[error("convergence not reached after {iterations} iterations, |f(x)|={residual:e}")]
pub struct ConvergenceWarning { 
    pub iterations: usize, 
    pub residual: f64, 
}


/// One Newton iterate, as handed to a trace observer. 
/// `iteration == 0` is the initial guess. 
#[derive(Debug, Clone, Copy, PartialEq)] 
pub struct Iterate { 
    pub iteration: usize, 
    pub x: f64, 
}


/// Final report returned by root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`               : final iterate  
/// - `f_root`             : function value at `root`  
/// - `iterations`         : number of updates `x <- x - f/f'` performed  
/// - `evaluations`        : total calls of the `(f, f')` closure  
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])  
/// - `warning`            : set when convergence was not certified  
/// - `algorithm_name`     : `"newton"`  
#[derive(Debug, Copy, Clone)] 
pub struct RootFindingReport {
    pub root               : f64, 
    pub f_root             : f64, 
    pub iterations         : usize, 
    pub evaluations        : usize, 
    pub termination_reason : TerminationReason, 
    pub warning            : Option<ConvergenceWarning>, 
    pub algorithm_name     : &'static str, 
}

impl RootFindingReport { 
    pub fn converged(&self) -> bool { 
        self.termination_reason == TerminationReason::ToleranceReached
    }
}
