use std::fmt::Display;

/// The player to move. The discriminant is the arithmetic sign of that
/// player's checkers on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    First = 1,
    Second = -1,
}

impl Turn {
    pub const ALL: [Turn; 2] = [Turn::First, Turn::Second];

    pub fn opposite(&self) -> Turn {
        match self {
            Turn::First => Turn::Second,
            Turn::Second => Turn::First,
        }
    }

    /// `+1` for [`Turn::First`], `-1` for [`Turn::Second`].
    pub const fn sign(&self) -> i8 {
        *self as i8
    }

    /// Owner of a signed point count. Zero is unowned.
    pub fn from_count(count: i8) -> Option<Turn> {
        match count.signum() {
            1 => Some(Turn::First),
            -1 => Some(Turn::Second),
            _ => None,
        }
    }

    pub fn owns(&self, count: i8) -> bool {
        Turn::from_count(count) == Some(*self)
    }

    /// Point the player's checkers enter play from.
    pub const fn start_point(&self) -> u8 {
        match self {
            Turn::First => super::START_POS_FIRST,
            Turn::Second => super::START_POS_SECOND,
        }
    }

    /// Inclusive bounds of the six points nearest the bear-off edge.
    pub const fn exit_range(&self) -> (u8, u8) {
        match self {
            Turn::First => (super::PLACE_NUMBER - 6, super::PLACE_NUMBER - 1),
            Turn::Second => (super::START_POS_SECOND - 6, super::START_POS_SECOND - 1),
        }
    }

    pub fn in_exit_range(&self, point: u8) -> bool {
        let (min, max) = self.exit_range();
        (min..=max).contains(&point)
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Turn::First => 0,
            Turn::Second => 1,
        }
    }
}

impl Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::First => write!(f, "White"),
            Turn::Second => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_owner() {
        assert_eq!(Turn::First.sign(), 1);
        assert_eq!(Turn::Second.sign(), -1);
        assert_eq!(Turn::from_count(0), None);
        assert_eq!(Turn::from_count(3), Some(Turn::First));
        assert_eq!(Turn::from_count(-15), Some(Turn::Second));
        assert!(!Turn::First.owns(0));
        assert!(!Turn::Second.owns(0));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(Turn::First.start_point(), 0);
        assert_eq!(Turn::Second.start_point(), 12);
        assert_eq!(Turn::First.exit_range(), (18, 23));
        assert_eq!(Turn::Second.exit_range(), (6, 11));
        assert!(Turn::Second.in_exit_range(6));
        assert!(!Turn::Second.in_exit_range(12));
        assert_eq!(Turn::First.opposite(), Turn::Second);
    }
}
