use std::fmt::{Debug, Display};

use rand::Rng;

use crate::{backgammon::{Error, Result}, misc::TinyVec};

/// The dice values still available to the current turn.
///
/// A roll of two equal faces expands to four values. Values are removed one
/// by one with [`Dice::consume`] as the turn moves checkers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    values: TinyVec<u8, 4>,
    double: bool,
}

impl Dice {
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let die1 = rng.random_range(1..=6);
        let die2 = rng.random_range(1..=6);
        Dice::from_numbers(die1, die2)
    }

    pub fn from_numbers(die1: u8, die2: u8) -> Self {
        if die1 == die2 {
            Dice { values: TinyVec::repeat(die1, 4), double: true }
        } else {
            Dice { values: TinyVec::from_slice(&[die1, die2]), double: false }
        }
    }

    /// Validated construction for scripted input. More than two values are
    /// only accepted when they are all equal.
    pub fn try_from_values(values: &[u8]) -> Result<Self> {
        if values.is_empty() || values.len() > 4 {
            return Err(Error::InvalidRollCount(values.len()));
        }
        if let Some(&bad) = values.iter().find(|&&v| !(1..=6).contains(&v)) {
            return Err(Error::InvalidDie(bad));
        }
        if values.len() > 2 && values.iter().any(|&v| v != values[0]) {
            return Err(Error::InvalidRollCount(values.len()));
        }
        let double = values.len() >= 2 && values.iter().all(|&v| v == values[0]);
        Ok(Dice { values: TinyVec::from_slice(values), double })
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Removes one occurrence of `value`. Returns `false` if it was not available.
    pub fn consume(&mut self, value: u8) -> bool {
        self.values.remove(&value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the roll was a double. Stays set while its values are spent.
    pub fn is_double(&self) -> bool {
        self.double
    }
}

impl Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dice({})", self)
    }
}
