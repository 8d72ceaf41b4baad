//! Newton-Raphson method

use super::config::{CommonCfg, impl_common_cfg}; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::report::{ConvergenceWarning, Iterate, RootFindingReport, TerminationReason}; 
use thiserror::Error;


pub const ALGORITHM_NAME: &str = "newton"; 


#[derive(Debug, Error)] 
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError), 

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 }, 

    #[error("derivative vanished at x={x}, f'(x)={dfx} (iteration {iteration})")]
    DerivativeVanished { x: f64, dfx: f64, iteration: usize },
}


/// Newton configuration.
/// 
/// # Fields
/// - `common` : [`CommonCfg`] with `abs_fx` (default `1e-14`) and 
///   `max_iter` (default `20`).
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)] 
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg { 
    fn default() -> Self { 
        Self::new()
    }
}
impl_common_cfg!(NewtonCfg);


/// Evaluates `(f(x), f'(x))`, rejecting a non-finite `f(x)`. 
#[inline] 
fn eval_checked<F>(
    fvals: &mut F, 
    x: f64,
    evals: &mut usize
) -> Result<(f64, f64), NewtonError> where F: FnMut(f64) -> (f64, f64) { 
    let (fx, dfx) = { *evals += 1; fvals(x) }; 
    if !fx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into()); 
    }

    Ok((fx, dfx))
}


/// `f'` too small for a meaningful step: zero, non-finite, or below 
/// `eps * |f|`, where the step would exceed `1 / eps`. 
#[inline] 
fn derivative_vanished(fx: f64, dfx: f64) -> bool { 
    !dfx.is_finite() || dfx == 0.0 || dfx.abs() <= f64::EPSILON * fx.abs()
}


/// Trace observer that forwards every iterate to `log::debug!`. 
///
/// ```no_run
/// use polyroot::root_finding::newton::{newton_traced, log_iterate, NewtonCfg};
/// let fvals = |x: f64| (x * x - 4.0, 2.0 * x);
/// let _report = newton_traced(fvals, 1.0, NewtonCfg::new(), log_iterate)?;
/// # Ok::<(), polyroot::root_finding::newton::NewtonError>(())
/// ```
pub fn log_iterate(it: &Iterate) { 
    if it.iteration == 0 { 
        log::debug!("newton: initial guess x = {:22.15e}", it.x); 
    } else { 
        log::debug!("newton: after {} iterations, x = {:22.15e}", it.iteration, it.x); 
    }
}


/// Finds a root of `f` with the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `fvals` : returns `(f(x), f'(x))`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (`abs_fx`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`               : final iterate
/// - `f_root`             : function value at `root`
/// - `iterations`         : number of updates performed
/// - `evaluations`        : calls of `fvals`
/// - `termination_reason` : why it stopped
/// - `warning`            : [`ConvergenceWarning`] if `max_iter` was exhausted
/// - `algorithm_name`     : `"newton"`
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::DerivativeVanished`]  : `f'(x)` zero, NaN/inf, or tiny 
///   relative to `f(x)` (`|f'| <= eps |f|`), so the step is unusable
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Stops as soon as `|f(x)| < abs_fx`, before stepping; an exact root 
///   at `x0` returns with `iterations == 0`. 
/// - Once `max_iter` updates are done, `f` is evaluated once more at the 
///   final iterate; if the tolerance still fails the report carries a 
///   [`ConvergenceWarning`] and a `log::warn!` record is emitted. 
///
/// # Notes
/// - Convergence is *local only*: a poor `x0` may diverge or cycle. 
/// - Identical inputs give bit-identical results. 
pub fn newton<F>( 
    fvals: F, 
    x0: f64, 
    cfg: NewtonCfg, 
) -> Result<RootFindingReport, NewtonError> 
where 
    F: FnMut(f64) -> (f64, f64) { 
    newton_traced(fvals, x0, cfg, |_: &Iterate| {})
}


/// [`newton`] with an observer called on the initial guess and after 
/// every update. The observer never influences the iteration. 
pub fn newton_traced<F, O>( 
    mut fvals: F, 
    x0: f64, 
    cfg: NewtonCfg, 
    mut observer: O, 
) -> Result<RootFindingReport, NewtonError> 
where 
    F: FnMut(f64) -> (f64, f64), 
    O: FnMut(&Iterate) 
{   
    if !x0.is_finite() { 
        return Err(NewtonError::InvalidGuess { x0 }); 
    }

    let abs_fx   = cfg.common.abs_fx(); 
    let max_iter = cfg.common.max_iter(); 
    if max_iter == 0 { 
        return Err(RootFindingError::InvalidMaxIter { got: 0 }.into());
    }

    let mut evals: usize = 0; 
    let mut x = x0; 
    observer(&Iterate { iteration: 0, x }); 

    for iter in 0..max_iter { 
        let (fx, dfx) = eval_checked(&mut fvals, x, &mut evals)?; 
        if fx.abs() < abs_fx { 
            return Ok(RootFindingReport { 
                root               : x, 
                f_root             : fx, 
                iterations         : iter, 
                evaluations        : evals, 
                termination_reason : TerminationReason::ToleranceReached, 
                warning            : None, 
                algorithm_name     : ALGORITHM_NAME, 
            });
        }

        if derivative_vanished(fx, dfx) { 
            return Err(NewtonError::DerivativeVanished { x, dfx, iteration: iter }); 
        }
        let step = fx / dfx; 
        if !step.is_finite() { 
            return Err(NewtonError::DerivativeVanished { x, dfx, iteration: iter }); 
        }

        x -= step; 
        observer(&Iterate { iteration: iter + 1, x }); 
    }

    // cap reached; check whether the last update landed on a root 
    let (fx, _) = eval_checked(&mut fvals, x, &mut evals)?; 
    if fx.abs() < abs_fx { 
        return Ok(RootFindingReport { 
            root               : x, 
            f_root             : fx, 
            iterations         : max_iter, 
            evaluations        : evals, 
            termination_reason : TerminationReason::ToleranceReached, 
            warning            : None, 
            algorithm_name     : ALGORITHM_NAME, 
        });
    }

    let warning = ConvergenceWarning { iterations: max_iter, residual: fx.abs() }; 
    log::warn!("newton from x0={x0}: {warning}"); 

    Ok(RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : max_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        warning            : Some(warning),
        algorithm_name     : ALGORITHM_NAME,
    })
}
