use std::str::FromStr;

use hashbrown::HashMap;

use crate::backgammon::{CHECKERS_NUMBER, Error, PLACE_NUMBER, Result, START_POS_SECOND, Turn};

/// Initial checker placement of a [`crate::backgammon::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    /// 15 checkers on each player's start point.
    #[default]
    Opening,
    /// Count for every point.
    Dense([i8; PLACE_NUMBER as usize]),
    /// Counts for some points. Missing points are empty.
    Sparse(HashMap<u8, i8>),
}

impl Layout {
    pub fn sparse(points: impl IntoIterator<Item = (u8, i8)>) -> Self {
        Layout::Sparse(points.into_iter().collect())
    }

    /// Expands the layout into one count per point.
    ///
    /// Sparse entries outside the board are not guarded against here, run
    /// [`Self::validate`] first on untrusted input.
    pub fn to_points(&self) -> [i8; PLACE_NUMBER as usize] {
        match self {
            Layout::Opening => {
                let mut points = [0; PLACE_NUMBER as usize];
                points[Turn::First.start_point() as usize] = CHECKERS_NUMBER as i8;
                points[START_POS_SECOND as usize] = -(CHECKERS_NUMBER as i8);
                points
            }
            Layout::Dense(points) => *points,
            Layout::Sparse(map) => {
                let mut points = [0; PLACE_NUMBER as usize];
                for (&point, &count) in map {
                    points[point as usize] = count;
                }
                points
            }
        }
    }

    /// Checks that every point exists and neither player has more than
    /// [`CHECKERS_NUMBER`] checkers.
    pub fn validate(&self) -> Result<()> {
        if let Layout::Sparse(map) = self {
            if let Some(&point) = map.keys().find(|&&p| p >= PLACE_NUMBER) {
                return Err(Error::PointOutOfRange(point as usize));
            }
        }
        let points = self.to_points();
        for turn in Turn::ALL {
            let count: u32 = points
                .iter()
                .filter(|&&c| turn.owns(c))
                .map(|&c| c.unsigned_abs() as u32)
                .sum();
            if count > CHECKERS_NUMBER as u32 {
                return Err(Error::TooManyCheckers { turn, count, max: CHECKERS_NUMBER });
            }
        }
        Ok(())
    }
}

/// Fixed layouts selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Opening,
    /// Both sides close to bearing off.
    TestEnd,
    /// White one bear-off away from winning.
    TestWin,
}

impl Preset {
    pub fn layout(&self) -> Layout {
        match self {
            Preset::Opening => Layout::Opening,
            Preset::TestEnd => {
                Layout::sparse([(20, 2), (22, 2), (16, 1), (8, -2), (9, -2), (5, -1)])
            }
            Preset::TestWin => Layout::sparse([(22, 1), (8, -2), (9, -2), (5, -1)]),
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "default" => Ok(Preset::Opening),
            "test-end" => Ok(Preset::TestEnd),
            "test-win" => Ok(Preset::TestWin),
            other => Err(Error::UnknownLayout(other.to_string())),
        }
    }
}
