//! Turn lifecycle on top of [`Board`].
//!
//! The board only answers rules questions. A [`Session`] decides when a turn
//! starts and ends: it holds the dice that are left, remembers which point
//! was selected, spends dice as moves are made and hands the turn over once
//! the dice are gone or nothing can move.

use crate::backgammon::{Board, Consumed, Dice, Moves, PLACE_NUMBER, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to move to roll.
    AwaitingRoll,
    /// Dice rolled, moves being made.
    Moving,
    Finished(Turn),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    Rolled,
    /// No checker could move with the roll, the turn passed on.
    NoMoves,
    /// A roll is only accepted while [`Phase::AwaitingRoll`].
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The point became the origin of the next move.
    Origin { point: u8, moves: Moves },
    Moved { from: u8, to: u8, consumed: Consumed, turn_over: bool },
    Won(Turn),
    /// Nothing to select outside [`Phase::Moving`].
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    dice: Option<Dice>,
    origin: Option<u8>,
    possible_moves: Moves,
    phase: Phase,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Session {
            board,
            dice: None,
            origin: None,
            possible_moves: Moves::new(),
            phase: Phase::AwaitingRoll,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.board.turn()
    }

    /// Dice values the current turn has not spent yet.
    pub fn remaining(&self) -> &[u8] {
        match &self.dice {
            Some(dice) => dice.values(),
            None => &[],
        }
    }

    pub fn roll(&mut self, dice: Dice) -> RollOutcome {
        if self.phase != Phase::AwaitingRoll {
            return RollOutcome::Ignored;
        }
        log::debug!("{} rolled {}", self.turn(), dice);
        self.dice = Some(dice);
        self.phase = Phase::Moving;

        if self.has_any_move() {
            RollOutcome::Rolled
        } else {
            log::info!("{} cannot move with {}", self.turn(), dice);
            self.end_turn();
            RollOutcome::NoMoves
        }
    }

    /// Selects a point: either the destination offered by the previous
    /// selection, which makes the move, or a new origin.
    pub fn select(&mut self, point: u8) -> Selection {
        if self.phase != Phase::Moving {
            return Selection::Ignored;
        }

        let offered = self.possible_moves.get(&point).copied();
        if let (Some(from), Some(consumed)) = (self.origin, offered) {
            return self.apply(from, point, consumed);
        }

        let moves = match self.dice {
            Some(dice) => self.board.get_moves(point, dice.values()),
            None => Moves::new(),
        };
        log::debug!("{} selected {} with {} destinations", self.turn(), point, moves.len());
        self.origin = Some(point);
        self.possible_moves = moves.clone();
        Selection::Origin { point, moves }
    }

    fn apply(&mut self, from: u8, to: u8, consumed: Consumed) -> Selection {
        let turn = self.turn();
        let won = self.board.make_move(from, to);
        if let Some(dice) = self.dice.as_mut() {
            for value in consumed.iter() {
                dice.consume(*value);
            }
        }
        self.origin = None;
        self.possible_moves.clear();
        log::debug!("{} moved {} -> {} using {:?}", turn, from, to, consumed);

        if won {
            log::info!("{} won", turn);
            self.phase = Phase::Finished(turn);
            return Selection::Won(turn);
        }

        let turn_over = self.remaining().is_empty() || !self.has_any_move();
        if turn_over {
            self.end_turn();
        }
        Selection::Moved { from, to, consumed, turn_over }
    }

    /// Every move available to the player with the remaining dice, ordered
    /// by origin then destination.
    pub fn legal_moves(&mut self) -> Vec<(u8, u8, Consumed)> {
        if self.phase != Phase::Moving {
            return Vec::new();
        }
        let Some(dice) = self.dice else {
            return Vec::new();
        };
        let mut legal = Vec::new();
        for from in 0..PLACE_NUMBER {
            let mut moves: Vec<_> = self.board.get_moves(from, dice.values()).into_iter().collect();
            moves.sort_unstable_by_key(|&(to, _)| to);
            legal.extend(moves.into_iter().map(|(to, consumed)| (from, to, consumed)));
        }
        legal
    }

    fn has_any_move(&mut self) -> bool {
        let Some(dice) = self.dice else {
            return false;
        };
        let board = &mut self.board;
        (0..PLACE_NUMBER).any(|point| !board.get_moves(point, dice.values()).is_empty())
    }

    fn end_turn(&mut self) {
        self.dice = None;
        self.origin = None;
        self.possible_moves.clear();
        self.board.change_turn();
        self.phase = Phase::AwaitingRoll;
        log::info!("turn passes to {}", self.turn());
    }
}

#[cfg(test)]
mod tests {
    use crate::backgammon::Layout;

    use super::*;

    #[test]
    fn test_select_then_move() {
        let mut session = Session::new(Board::new());
        assert_eq!(session.select(0), Selection::Ignored);
        assert_eq!(session.roll(Dice::from_numbers(3, 5)), RollOutcome::Rolled);
        assert_eq!(session.roll(Dice::from_numbers(1, 2)), RollOutcome::Ignored);

        let Selection::Origin { point, moves } = session.select(0) else {
            panic!("expected an origin selection");
        };
        assert_eq!(point, 0);
        assert_eq!(moves.len(), 3);

        let selection = session.select(3);
        assert_eq!(
            selection,
            Selection::Moved {
                from: 0,
                to: 3,
                consumed: Consumed::from_slice(&[3]),
                turn_over: false,
            }
        );
        assert_eq!(session.remaining(), &[5]);
        assert_eq!(session.board().get_board()[3], 1);
        assert_eq!(session.phase(), Phase::Moving);
    }

    #[test]
    fn test_start_point_used_once_per_turn() {
        let mut session = Session::new(Board::new());
        session.roll(Dice::from_numbers(3, 5));
        session.select(0);
        session.select(3);

        let Selection::Origin { moves, .. } = session.select(0) else {
            panic!("expected an origin selection");
        };
        assert!(moves.is_empty());

        let selection = session.select(3);
        let Selection::Origin { moves, .. } = selection else {
            panic!("expected an origin selection");
        };
        assert!(moves.contains_key(&8));
        let selection = session.select(8);
        assert!(matches!(selection, Selection::Moved { turn_over: true, .. }));
        assert_eq!(session.turn(), Turn::Second);
        assert_eq!(session.phase(), Phase::AwaitingRoll);
        assert!(!session.board().is_start_used());
    }

    #[test]
    fn test_combined_hop_spends_both_dice() {
        let mut session = Session::new(Board::new());
        session.roll(Dice::from_numbers(3, 5));
        session.select(0);
        let selection = session.select(8);
        assert!(matches!(selection, Selection::Moved { to: 8, turn_over: true, .. }));
        assert!(session.remaining().is_empty());
        assert_eq!(session.turn(), Turn::Second);
    }

    #[test]
    fn test_double_leaves_remaining_dice() {
        let mut session = Session::new(Board::new());
        session.roll(Dice::from_numbers(2, 2));
        session.select(0);
        session.select(4);
        assert_eq!(session.remaining(), &[2, 2]);
        assert_eq!(session.turn(), Turn::First);
    }

    #[test]
    fn test_no_moves_passes_turn() {
        // Every landing point of a 1 or 2 from White's checker is blocked.
        let layout = Layout::sparse([(0, 15), (1, -1), (2, -1), (3, -1), (12, -12)]);
        let mut session = Session::new(Board::from_layout(&layout));
        assert_eq!(session.roll(Dice::from_numbers(1, 2)), RollOutcome::NoMoves);
        assert_eq!(session.turn(), Turn::Second);
        assert_eq!(session.phase(), Phase::AwaitingRoll);
    }

    #[test]
    fn test_win() {
        let mut session = Session::new(Board::from_layout(&Layout::sparse([(22, 1), (8, -2)])));
        session.roll(Dice::from_numbers(3, 5));
        let Selection::Origin { moves, .. } = session.select(22) else {
            panic!("expected an origin selection");
        };
        assert!(moves.contains_key(&22));
        assert_eq!(session.select(22), Selection::Won(Turn::First));
        assert_eq!(session.phase(), Phase::Finished(Turn::First));
        assert_eq!(session.select(8), Selection::Ignored);
        assert_eq!(session.roll(Dice::from_numbers(1, 2)), RollOutcome::Ignored);
    }

    #[test]
    fn test_legal_moves() {
        let mut session = Session::new(Board::new());
        assert!(session.legal_moves().is_empty());
        session.roll(Dice::from_numbers(3, 5));
        let legal = session.legal_moves();
        let targets: Vec<_> = legal.iter().map(|&(from, to, _)| (from, to)).collect();
        assert_eq!(targets, vec![(0, 3), (0, 5), (0, 8)]);
    }
}
