//! Fits the quadratic, cubic and general fixtures and prints a coarse 
//! sampling of each curve. Set `RUST_LOG=trace` to see the solver records. 

use polyroot::interpolation::errors::InterpolationError;
use polyroot::interpolation::polynomial::Polynomial;
use polyroot::interpolation::{cubic, monomial, quadratic};

fn show(name: &str, x: &[f64], p: &Polynomial) -> Result<(), InterpolationError> {
    println!("{name}: c = {:?}", p.coefficients());
    for (xq, yq) in p.plot_samples(x, 11)? {
        println!("  p({xq:>6.2}) = {yq:>10.4}");
    }
    Ok(())
}

fn main() -> Result<(), InterpolationError> {
    env_logger::init();

    let x = [-1.0, 0.0, 2.0];
    let y = [ 1.0, -1.0, 7.0];
    show("quadratic", &x, &quadratic::fit(&x, &y)?)?;

    let x = [ 0.0, -1.0, 1.0, -2.0];
    let y = [-1.0, -2.0, 4.0, 13.0];
    show("cubic", &x, &cubic::fit(&x, &y)?)?;

    let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let y = [ 3.0, -1.0, 0.5, 2.0, -4.0];
    show("quartic", &x, &monomial::fit(&x, &y)?)?;

    Ok(())
}
