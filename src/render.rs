use std::fmt::Display;

use crate::backgammon::{Board, PLACE_NUMBER, Turn};

fn cell(count: i8) -> String {
    match Turn::from_count(count) {
        Some(Turn::First) => format!("W{}", count.unsigned_abs()),
        Some(Turn::Second) => format!("B{}", count.unsigned_abs()),
        None => ".".to_string(),
    }
}

/// Top row holds points 23 down to 12, bottom row 0 up to 11, so both
/// players travel counter-clockwise.
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let half = PLACE_NUMBER / 2;
        let points = self.get_board();

        for point in (half..PLACE_NUMBER).rev() {
            write!(f, "{:>4}", point)?;
        }
        writeln!(f)?;
        for point in (half..PLACE_NUMBER).rev() {
            write!(f, "{:>4}", cell(points[point as usize]))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(4 * half as usize))?;
        for point in 0..half {
            write!(f, "{:>4}", cell(points[point as usize]))?;
        }
        writeln!(f)?;
        for point in 0..half {
            write!(f, "{:>4}", point)?;
        }
        writeln!(f)?;
        write!(f, "{} to move", self.turn())
    }
}
