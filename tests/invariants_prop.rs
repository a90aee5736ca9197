//! Random playouts must keep the checker accounting intact: a move never
//! changes the opponent's checkers, only a bear-off removes one, and a
//! player leaves the start point at most once per turn.

use long_backgammon::{
    backgammon::{Board, Dice, Layout, Preset, Turn},
    session::{Phase, Selection, Session},
    simulate::play_random_game,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};

fn counts(board: &Board) -> (u32, u32) {
    (board.checkers_of(Turn::First), board.checkers_of(Turn::Second))
}

fn check_playout(layout: Layout, seed: u64, max_turns: u32) -> Result<(), TestCaseError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new(Board::from_layout(&layout));
    let mut turns = 0;
    let mut start_departures = 0;

    while turns < max_turns {
        match session.phase() {
            Phase::Finished(winner) => {
                prop_assert_eq!(session.board().checkers_of(winner), 0);
                break;
            }
            Phase::AwaitingRoll => {
                turns += 1;
                start_departures = 0;
                session.roll(Dice::roll(&mut rng));
            }
            Phase::Moving => {
                let picked = session.legal_moves().into_iter().choose(&mut rng);
                let Some((from, to, consumed)) = picked else {
                    return Err(TestCaseError::fail("moving phase without legal moves"));
                };
                let turn = session.turn();
                let remaining_before = session.remaining().len();
                let (first, second) = counts(session.board());
                if from == turn.start_point() {
                    start_departures += 1;
                    prop_assert!(start_departures <= 1);
                }

                session.select(from);
                let selection = session.select(to);
                let moved = matches!(selection, Selection::Moved { .. } | Selection::Won(_));
                prop_assert!(moved, "selecting {} after {} gave {:?}", to, from, selection);

                let removed = u32::from(from == to);
                let (first_after, second_after) = counts(session.board());
                match turn {
                    Turn::First => {
                        prop_assert_eq!(first_after, first - removed);
                        prop_assert_eq!(second_after, second);
                    }
                    Turn::Second => {
                        prop_assert_eq!(second_after, second - removed);
                        prop_assert_eq!(first_after, first);
                    }
                }
                if session.turn() == turn && session.phase() == Phase::Moving {
                    prop_assert_eq!(session.remaining().len(), remaining_before - consumed.len());
                }
                for &count in session.board().get_board() {
                    prop_assert!(count.unsigned_abs() <= 15);
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn opening_playouts_conserve_checkers(seed in any::<u64>(), max_turns in 1u32..150) {
        check_playout(Layout::Opening, seed, max_turns)?;
    }

    #[test]
    fn endgame_playouts_conserve_checkers(seed in any::<u64>(), max_turns in 1u32..60) {
        check_playout(Preset::TestEnd.layout(), seed, max_turns)?;
    }

    #[test]
    fn random_games_respect_turn_limit(seed in any::<u64>(), max_turns in 1u32..80) {
        let record = play_random_game(&Layout::Opening, seed, max_turns);
        prop_assert!(record.turns <= max_turns);
        prop_assert!(record.moves <= record.turns * 4);
    }
}
