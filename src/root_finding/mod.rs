// common helpers 
pub mod report; 
pub mod errors; 
pub mod config;

// algorithms 
pub mod newton;
pub mod intersection; 
