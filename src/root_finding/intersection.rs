//! Intersections of two curves via Newton's method. 
//!
//! An intersection of `f` and `g` is a root of `h = f - g`. The driver 
//! runs [`newton`] once per initial guess, in order, and evaluates a 
//! target curve at each root to get the point to plot. 
//!
//! Roots are not deduplicated: two guesses in the same basin give two 
//! entries. Use [`dedup_roots`] when unique points are wanted. 


use thiserror::Error; 

use super::newton::{newton_traced, NewtonCfg, NewtonError}; 
use super::report::{ConvergenceWarning, Iterate}; 


#[derive(Debug, Error)] 
pub enum IntersectionError { 
    #[error("newton failed for guess #{index} (x0={guess})")]
    Newton { 
        index: usize, 
        guess: f64, 
        #[source] 
        source: NewtonError, 
    },
}


/// One located intersection. 
/// 
/// - `guess`      : initial guess that produced it 
/// - `root`       : x-coordinate found by Newton 
/// - `y`          : target curve evaluated at `root` 
/// - `iterations` : Newton updates performed 
/// - `warning`    : carried over from the Newton report 
#[derive(Debug, Clone, Copy, PartialEq)] 
pub struct Intersection { 
    pub guess: f64, 
    pub root: f64, 
    pub y: f64, 
    pub iterations: usize, 
    pub warning: Option<ConvergenceWarning>, 
}


/// `(h, h') = (f - g, f' - g')` from two `(value, derivative)` closures. 
pub fn difference<F, G>(mut f: F, mut g: G) -> impl FnMut(f64) -> (f64, f64) 
where 
    F: FnMut(f64) -> (f64, f64), 
    G: FnMut(f64) -> (f64, f64) 
{ 
    move |x| { 
        let (fx, dfx) = f(x); 
        let (gx, dgx) = g(x); 
        (fx - gx, dfx - dgx)
    }
}


/// Runs Newton on `fvals` from every guess and pairs each root with 
/// `target(root)`. 
///
/// # Errors 
/// - [`IntersectionError::Newton`] for the first guess whose run fails; 
///   earlier results are discarded. 
pub fn intersections<F, T>( 
    fvals: F, 
    guesses: &[f64], 
    target: T, 
    cfg: NewtonCfg, 
) -> Result<Vec<Intersection>, IntersectionError> 
where 
    F: FnMut(f64) -> (f64, f64), 
    T: FnMut(f64) -> f64 
{ 
    intersections_traced(fvals, guesses, target, cfg, |_: usize, _: &Iterate| {})
}


/// [`intersections`] with an observer receiving the guess index and 
/// every Newton iterate of that guess's run. 
pub fn intersections_traced<F, T, O>( 
    mut fvals: F, 
    guesses: &[f64], 
    mut target: T, 
    cfg: NewtonCfg, 
    mut observer: O, 
) -> Result<Vec<Intersection>, IntersectionError> 
where 
    F: FnMut(f64) -> (f64, f64), 
    T: FnMut(f64) -> f64, 
    O: FnMut(usize, &Iterate) 
{ 
    guesses
        .iter()
        .enumerate()
        .map(|(index, &guess)| -> Result<Intersection, IntersectionError> { 
            let report = newton_traced(&mut fvals, guess, cfg, |it: &Iterate| observer(index, it))
                .map_err(|source| IntersectionError::Newton { index, guess, source })?; 

            log::debug!(
                "intersection: x0 = {guess:22.15e} -> x = {:22.15e} after {} iterations", 
                report.root, 
                report.iterations
            ); 

            Ok(Intersection { 
                guess, 
                root: report.root, 
                y: target(report.root), 
                iterations: report.iterations, 
                warning: report.warning, 
            })
        })
        .collect()
}


/// Keeps the first intersection of every cluster of roots closer than `tol`. 
pub fn dedup_roots(points: &[Intersection], tol: f64) -> Vec<Intersection> { 
    let mut unique: Vec<Intersection> = Vec::with_capacity(points.len()); 
    for p in points { 
        if !unique.iter().any(|u| (u.root - p.root).abs() <= tol) { 
            unique.push(*p); 
        }
    }
    unique
}
