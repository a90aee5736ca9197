//! Rules engine for long backgammon: two players race fifteen checkers each
//! from their start point around the 24 points and bear them off. Checkers
//! are never hit, a point belongs to whoever occupies it.

pub mod backgammon;
pub mod command;
pub mod config;
pub mod misc;
pub mod render;
pub mod session;
pub mod simulate;
