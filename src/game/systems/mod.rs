pub mod ai;
pub mod collision;
pub mod motion;
pub mod spawn;
