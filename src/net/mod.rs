pub mod persistence;
pub mod presence;
