use std::str::FromStr;

use crate::backgammon::{Error, Preset, Result};

/// Language of the text shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Strings shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub roll_the_dice: &'static str,
    pub rolled: &'static str,
    pub no_moves: &'static str,
    pub destinations: &'static str,
    pub turn_of: &'static str,
    pub you_won: &'static str,
    pub help: &'static str,
}

const EN: Messages = Messages {
    title: "Backgammon",
    roll_the_dice: "Roll the dice",
    rolled: "Rolled",
    no_moves: "No legal moves, the turn passes",
    destinations: "Possible destinations",
    turn_of: "Turn of",
    you_won: "You won!",
    help: "commands: roll [a b], <point>, board, quit",
};

const RU: Messages = Messages {
    title: "Нарды",
    roll_the_dice: "Бросить кости",
    rolled: "Выпало",
    no_moves: "Нет возможных ходов, ход переходит",
    destinations: "Возможные ходы",
    turn_of: "Ходит",
    you_won: "Вы победили!",
    help: "команды: roll [a b], <поле>, board, quit",
};

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(Error::UnknownLocale(other.to_string())),
        }
    }
}

/// Startup settings handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub locale: Locale,
    pub preset: Preset,
    /// Seed for the dice. Entropy from the OS when absent.
    pub seed: Option<u64>,
    /// Run this many random playouts instead of an interactive game.
    pub simulate: Option<usize>,
    /// Turn limit of a single playout.
    pub max_turns: u32,
}
