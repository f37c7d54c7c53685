use crate::search::{Randomizer, State};

pub const GOAL: &str = "12345678-";
pub const ONE_MOVE: &str = "1234567-8";
pub const TWO_MOVES: &str = "123456-78";
/// The goal after the blank slid up, left and up.
pub const THREE_MOVES: &str = "1-3425786";
/// One of the two configurations furthest from the goal, 31 moves away.
pub const HARDEST: &str = "8672543-1";
pub const SECOND_HARDEST: &str = "64785-321";
/// Two tiles of the goal swapped, which flips the permutation parity.
pub const UNSOLVABLE: &str = "21345678-";
/// Size of each of the two parity classes, 9! / 2.
pub const REACHABLE_STATES: usize = 181_440;

pub fn state(text: &str) -> State {
    text.parse().expect("Invalid state in test")
}

/// `count` states scrambled from the goal with `moves` random moves each.
pub fn scrambled_states(count: usize, moves: usize, seed: u64) -> Vec<State> {
    let mut randomizer = Randomizer::seeded(seed);
    (0..count)
        .map(|_| randomizer.scramble(&State::goal(), moves))
        .collect()
}
