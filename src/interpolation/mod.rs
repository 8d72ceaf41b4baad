pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub mod traits;
pub use traits::Interpolator;

pub mod polynomial; 
pub mod plot; 

pub mod monomial; 
pub mod quadratic; 
pub mod cubic; 
