pub mod steps;
pub mod unicode;
