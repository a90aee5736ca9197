/// Number of points on the board.
pub const PLACE_NUMBER: u8 = 24;
/// Checkers per player.
pub const CHECKERS_NUMBER: u8 = 15;

pub const START_POS_FIRST: u8 = 0;
pub const START_POS_SECOND: u8 = PLACE_NUMBER / 2;

mod board;
pub use board::Board;
pub use board::Consumed;
pub use board::Moves;

mod turn;
pub use turn::Turn;

mod layout;
pub use layout::Layout;
pub use layout::Preset;

mod dice;
pub use dice::Dice;

mod error;
pub use error::Error;
pub use error::Result;
