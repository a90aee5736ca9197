use std::fmt::Display;

use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{backgammon::{Board, Dice, Layout, Turn}, session::{Phase, Session}};

/// How one random game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// `None` when the turn limit was reached first.
    pub winner: Option<Turn>,
    pub turns: u32,
    pub moves: u32,
}

/// Plays one game where both sides pick uniformly among their legal moves.
pub fn play_random_game(layout: &Layout, seed: u64, max_turns: u32) -> GameRecord {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new(Board::from_layout(layout));
    let mut turns = 0;
    let mut moves = 0;

    loop {
        match session.phase() {
            Phase::Finished(winner) => return GameRecord { winner: Some(winner), turns, moves },
            Phase::AwaitingRoll if turns >= max_turns => break,
            Phase::AwaitingRoll => {
                turns += 1;
                session.roll(Dice::roll(&mut rng));
            }
            Phase::Moving => {
                let Some((from, to, _)) = session.legal_moves().into_iter().choose(&mut rng) else {
                    log::warn!("{} has dice left but no legal move", session.turn());
                    break;
                };
                session.select(from);
                session.select(to);
                moves += 1;
            }
        }
    }

    GameRecord { winner: None, turns, moves }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationReport {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub unfinished: usize,
    pub total_turns: u64,
    pub total_moves: u64,
}

impl SimulationReport {
    fn record(mut self, game: GameRecord) -> Self {
        self.games += 1;
        match game.winner {
            Some(Turn::First) => self.first_wins += 1,
            Some(Turn::Second) => self.second_wins += 1,
            None => self.unfinished += 1,
        }
        self.total_turns += game.turns as u64;
        self.total_moves += game.moves as u64;
        self
    }

    pub fn win_rate(&self, turn: Turn) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match turn {
            Turn::First => self.first_wins,
            Turn::Second => self.second_wins,
        };
        wins as f32 / self.games as f32 * 100.0
    }
}

impl Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games: {}, Unfinished: {}", self.games, self.unfinished)?;
        writeln!(
            f,
            "White Wins: {}, Winrate: {:.2}%",
            self.first_wins,
            self.win_rate(Turn::First)
        )?;
        writeln!(
            f,
            "Black Wins: {}, Winrate: {:.2}%",
            self.second_wins,
            self.win_rate(Turn::Second)
        )?;
        let games = self.games.max(1) as f32;
        write!(
            f,
            "Average turns: {:.1}, Average moves: {:.1}",
            self.total_turns as f32 / games,
            self.total_moves as f32 / games
        )
    }
}

/// Plays `games` independent random games in parallel. Game `i` is seeded
/// with `seed + i`, so a report is reproducible for a given seed.
pub fn simulate(layout: &Layout, games: usize, seed: u64, max_turns: u32) -> SimulationReport {
    let records = (0..games)
        .into_par_iter()
        .map(|i| play_random_game(layout, seed.wrapping_add(i as u64), max_turns))
        .collect::<Vec<_>>();

    let report = records.into_iter().fold(SimulationReport::default(), SimulationReport::record);
    log::info!(
        "simulated {} games: {} white, {} black, {} unfinished",
        report.games,
        report.first_wins,
        report.second_wins,
        report.unfinished
    );
    report
}
