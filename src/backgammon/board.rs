use hashbrown::HashMap;

use crate::{backgammon::{Layout, PLACE_NUMBER, Turn}, misc::TinyVec};

/// Dice values spent by one move, in the order they were applied.
pub type Consumed = TinyVec<u8, 4>;

/// Reachable destinations of one checker mapped to the dice they cost.
/// A destination equal to the origin is a bear-off.
pub type Moves = HashMap<u8, Consumed>;

/// Complete rules state of a game.
///
/// Every point holds a signed count: positive for [`Turn::First`], negative
/// for [`Turn::Second`], zero when empty. There is no off-board pile, a checker
/// is borne off by moving it onto its own point once the player may exit,
/// which removes it from the origin without placing it anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    points: [i8; PLACE_NUMBER as usize],
    turn: Turn,
    start_used: bool,
    exit_state: [bool; 2],
}

impl Board {
    /// Creates a board with the opening layout, [`Turn::First`] to move.
    pub fn new() -> Self {
        Self::from_layout(&Layout::Opening)
    }

    pub fn from_layout(layout: &Layout) -> Self {
        Self::with_turn(layout, Turn::First)
    }

    pub fn with_turn(layout: &Layout, turn: Turn) -> Self {
        Board {
            points: layout.to_points(),
            turn,
            start_used: false,
            exit_state: [false, false],
        }
    }

    /// Current checker counts. Only [`Self::make_move`] changes them.
    pub fn get_board(&self) -> &[i8; PLACE_NUMBER as usize] {
        &self.points
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Whether a checker already left the start point this turn.
    pub fn is_start_used(&self) -> bool {
        self.start_used
    }

    pub fn exit_state(&self, turn: Turn) -> bool {
        self.exit_state[turn.index()]
    }

    /// Overrides the exit flag of `turn`. Meant for scripted positions and
    /// tests; normal play recomputes the flag on every move.
    pub fn force_exit_state(&mut self, turn: Turn, value: bool) {
        self.exit_state[turn.index()] = value;
    }

    pub fn owner_at(&self, point: u8) -> Option<Turn> {
        Turn::from_count(self.points[point as usize])
    }

    /// Number of checkers `turn` still has on the board.
    pub fn checkers_of(&self, turn: Turn) -> u32 {
        self.points
            .iter()
            .filter(|&&count| turn.owns(count))
            .map(|&count| count.unsigned_abs() as u32)
            .sum()
    }

    pub fn change_turn(&mut self) {
        self.turn = self.turn.opposite();
        self.start_used = false;
    }

    pub fn is_start_place(&self, point: u8) -> bool {
        point == self.turn.start_point()
    }

    /// Whether landing on `to` would carry the checker past the player's
    /// exit edge. Always `false` until the player may bear off.
    pub fn is_end_move(&self, to: u8) -> bool {
        if !self.exit_state(self.turn) {
            return false;
        }
        match self.turn {
            Turn::First => to < PLACE_NUMBER - 6,
            Turn::Second => {
                let (exit_start, _) = Turn::Second.exit_range();
                to >= Turn::Second.start_point() || to < exit_start
            }
        }
    }

    /// Whether `to` is empty or already holds the current player's checkers.
    pub fn is_place_for_me(&self, to: u8) -> bool {
        let count = self.points[to as usize];
        count == 0 || self.turn.owns(count)
    }

    pub fn is_move_possible(&self, from: u8, to: u8) -> bool {
        if self.exit_state(self.turn) {
            return self.is_end_move(to) || self.is_place_for_me(to);
        }
        let forward = match self.turn {
            Turn::First => to >= from,
            Turn::Second => {
                let start = Turn::Second.start_point();
                !(from < start && to >= start)
            }
        };
        forward && self.is_place_for_me(to)
    }

    /// Destinations reachable from `from` with the `rolled` dice values.
    ///
    /// Single dice are tried in ascending order, then the combined hop of
    /// both dice, or for doubles every multiple of the die value. Combined
    /// hops only check the landing point. When the landing point lies past
    /// the exit edge the entry is keyed by `from` itself (bear-off). The
    /// first entry found for a key wins.
    pub fn get_moves(&mut self, from: u8, rolled: &[u8]) -> Moves {
        self.update_exit_state();

        let mut moves = Moves::new();
        if !self.turn.owns(self.points[from as usize]) {
            return moves;
        }
        if self.is_start_place(from) && self.start_used {
            return moves;
        }

        let mut sorted = Consumed::from_slice(rolled);
        sorted.sort_unstable();
        for &number in sorted.iter() {
            self.try_insert(&mut moves, from, number as usize, || Consumed::from_slice(&[number]));
        }

        match rolled.len() {
            2 => {
                let distance = rolled.iter().map(|&n| n as usize).sum();
                self.try_insert(&mut moves, from, distance, || Consumed::from_slice(rolled));
            }
            n if n >= 3 => {
                let die = rolled[0];
                for count in 2..=n {
                    let distance = count * die as usize;
                    self.try_insert(&mut moves, from, distance, || Consumed::repeat(die, count));
                }
            }
            _ => {}
        }

        moves
    }

    fn try_insert(
        &self,
        moves: &mut Moves,
        from: u8,
        distance: usize,
        consumed: impl FnOnce() -> Consumed,
    ) {
        let to = ((from as usize + distance) % PLACE_NUMBER as usize) as u8;
        let key = if self.is_end_move(to) { from } else { to };
        if !moves.contains_key(&key) && self.is_move_possible(from, to) {
            moves.insert(key, consumed());
        }
    }

    /// Recomputes the exit flag of the player to move.
    pub fn update_exit_state(&mut self) {
        let turn = self.turn;
        let can_exit = self
            .points
            .iter()
            .enumerate()
            .all(|(point, &count)| !turn.owns(count) || turn.in_exit_range(point as u8));
        self.exit_state[turn.index()] = can_exit;
    }

    /// `true` once the player to move has no checker left on the board.
    pub fn get_win_status(&self) -> bool {
        !self.points.iter().any(|&count| self.turn.owns(count))
    }

    /// Moves one checker of the player to move. `to == from` bears it off.
    /// Legality is not checked, use [`Self::get_moves`] to find legal moves.
    /// Returns whether the player has won.
    pub fn make_move(&mut self, from: u8, to: u8) -> bool {
        let sign = self.turn.sign();
        self.points[from as usize] -= sign;
        if to != from {
            self.points[to as usize] += sign;
        }
        if self.is_start_place(from) {
            self.start_used = true;
        }
        log::trace!("{} moved {} -> {}", self.turn, from, to);

        self.update_exit_state();
        self.get_win_status()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
