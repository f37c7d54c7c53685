use crate::search::State;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

/// Produce a scrambled state by making `move_count` moves from `start`, each
/// chosen uniformly among the legal moves of the current state. The result
/// is always reachable from `start`.
pub fn randomize<R: Rng>(start: &State, move_count: usize, rng: &mut R) -> State {
    let mut state = *start;
    for _ in 0..move_count {
        if let Some(next) = state.neighbors().choose(rng) {
            state = *next;
        }
    }
    state
}

/// Source of scrambled instances. Seeded randomizers produce the same
/// sequence of instances on every run.
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn scramble(&mut self, start: &State, move_count: usize) -> State {
        let state = randomize(start, move_count, &mut self.rng);
        debug!(scrambled = %state, move_count = move_count);
        state
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::manhattan_distance;

    #[test]
    fn zero_moves_keeps_start() {
        let mut randomizer = Randomizer::seeded(1);
        assert_eq!(randomizer.scramble(&State::goal(), 0), State::goal());
    }

    #[test]
    fn one_move_is_a_neighbor() {
        let mut randomizer = Randomizer::seeded(2);
        for _ in 0..20 {
            let scrambled = randomizer.scramble(&State::goal(), 1);
            assert!(State::goal().neighbors().contains(&scrambled));
        }
    }

    #[test]
    fn every_legal_move_is_chosen() {
        let mut randomizer = Randomizer::seeded(5);
        let neighbors = State::goal().neighbors();
        let chosen: Vec<State> = (0..50)
            .map(|_| randomizer.scramble(&State::goal(), 1))
            .collect();
        for neighbor in &neighbors {
            assert!(chosen.contains(neighbor));
        }
    }

    #[test]
    fn same_seed_same_instances() {
        let mut a = Randomizer::seeded(42);
        let mut b = Randomizer::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.scramble(&State::goal(), 100),
                b.scramble(&State::goal(), 100)
            );
        }
    }

    #[test]
    fn scrambled_states_are_solvable_and_bounded() {
        let goal = State::goal();
        let mut randomizer = Randomizer::seeded(9);
        for move_count in [3, 10, 50] {
            let scrambled = randomizer.scramble(&goal, move_count);
            assert!(scrambled.is_solvable_from(&goal));
            assert!(manhattan_distance(&scrambled, &goal) as usize <= move_count);
        }
    }
}
