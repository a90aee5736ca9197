use std::str::FromStr;

use crate::backgammon::{Dice, Error, PLACE_NUMBER, Result};

/// One line of input to the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Roll random dice, or use the given values.
    Roll(Option<Dice>),
    Select(u8),
    Board,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Help);
        };
        let rest: Vec<&str> = words.collect();

        match head {
            "roll" | "r" if rest.is_empty() => Ok(Command::Roll(None)),
            "roll" | "r" => {
                let values = rest
                    .iter()
                    .map(|w| w.parse::<u8>().map_err(|_| Error::InvalidCommand(line.to_string())))
                    .collect::<Result<Vec<_>>>()?;
                let dice = match values.as_slice() {
                    &[a, b] => {
                        Dice::try_from_values(&[a, b])?;
                        Dice::from_numbers(a, b)
                    }
                    other => Dice::try_from_values(other)?,
                };
                Ok(Command::Roll(Some(dice)))
            }
            "board" | "b" => Ok(Command::Board),
            "help" | "h" => Ok(Command::Help),
            "quit" | "q" => Ok(Command::Quit),
            word if rest.is_empty() => {
                let point: usize =
                    word.parse().map_err(|_| Error::InvalidCommand(line.to_string()))?;
                if point >= PLACE_NUMBER as usize {
                    return Err(Error::PointOutOfRange(point));
                }
                Ok(Command::Select(point as u8))
            }
            _ => Err(Error::InvalidCommand(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("roll".parse::<Command>().unwrap(), Command::Roll(None));
        let three_five = Command::Roll(Some(Dice::from_numbers(3, 5)));
        assert_eq!("roll 3 5".parse::<Command>().unwrap(), three_five);
        let double_four = Command::Roll(Some(Dice::from_numbers(4, 4)));
        assert_eq!("r 4 4".parse::<Command>().unwrap(), double_four);
        assert_eq!(" 17 ".parse::<Command>().unwrap(), Command::Select(17));
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("".parse::<Command>().unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("24".parse::<Command>(), Err(Error::PointOutOfRange(24))));
        assert!(matches!("roll 7 1".parse::<Command>(), Err(Error::InvalidDie(7))));
        assert!(matches!("roll x".parse::<Command>(), Err(Error::InvalidCommand(_))));
        assert!(matches!("jump 3".parse::<Command>(), Err(Error::InvalidCommand(_))));
    }
}
