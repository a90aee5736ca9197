use thiserror::Error as ThisError;

use crate::backgammon::Turn;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised at the boundary between the engine and its callers.
/// The engine itself never fails; illegal moves are simply absent.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unknown layout `{0}` (expected default, test-end or test-win)")]
    UnknownLayout(String),
    #[error("unknown locale `{0}` (expected en or ru)")]
    UnknownLocale(String),
    #[error("point {0} is outside the board (0..24)")]
    PointOutOfRange(usize),
    #[error("{turn} has {count} checkers, at most {max} allowed")]
    TooManyCheckers { turn: Turn, count: u32, max: u8 },
    #[error("die value {0} is outside 1..=6")]
    InvalidDie(u8),
    #[error("a roll holds 1 to 4 values, got {0}")]
    InvalidRollCount(usize),
    #[error("cannot parse command `{0}`")]
    InvalidCommand(String),
}
