//! Neon Serpent simulation core
//!
//! The tick-driven heart of a slither-style arena game: a growing player
//! serpent on a toroidal world, a food field, rival AI serpents that scale
//! with score, and score-gated difficulty tiers. Rendering and input capture
//! live outside; this crate owns the rules, the entities, and the boundaries
//! to the leaderboard and presence services.

pub mod config;
pub mod util;
pub mod game;
pub mod net;
pub mod metrics;
