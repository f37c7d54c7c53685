//! The 3×3 sliding-tile puzzle configuration. A [`State`] holds the tiles in
//! row-major order with [`BLANK`] marking the empty cell. States are small
//! `Copy` values compared by content, so they double as keys of the visited
//! set.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use itertools::Itertools;
use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::search::{InvalidStateError, Move};

/// Number of rows (and columns) of the board.
pub const SIDE: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;
/// The tile value used for the empty cell.
pub const BLANK: Tile = 0;
/// The symbol used for the empty cell in the textual form.
pub const BLANK_SYMBOL: char = '-';

pub type Tile = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct State {
    tiles: [Tile; CELLS],
}

impl State {
    /// The solved configuration `12345678-`.
    pub fn goal() -> Self {
        let mut tiles = [BLANK; CELLS];
        for (position, tile) in tiles.iter_mut().take(CELLS - 1).enumerate() {
            *tile = position as Tile + 1;
        }
        Self { tiles }
    }

    /// Build a state from raw tiles, checking that every tile `1..=8` and the
    /// blank appear exactly once.
    pub fn from_tiles(tiles: [Tile; CELLS]) -> Result<Self, InvalidStateError> {
        let input: String = tiles.iter().map(|&tile| tile_symbol(tile)).collect();
        let mut seen = [false; CELLS];
        for (position, &tile) in tiles.iter().enumerate() {
            let index = tile as usize;
            if index >= CELLS {
                return Err(InvalidStateError::UnknownSymbol {
                    symbol: tile_symbol(tile),
                    position,
                    input,
                });
            }
            if seen[index] {
                return Err(InvalidStateError::DuplicateSymbol {
                    symbol: tile_symbol(tile),
                    input,
                });
            }
            seen[index] = true;
        }
        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[Tile; CELLS] {
        &self.tiles
    }

    pub fn tile_at(&self, position: usize) -> Tile {
        self.tiles[position]
    }

    /// Position of `tile` on the board. Every valid state holds every tile,
    /// so a miss means the state invariant was broken upstream.
    pub fn position_of(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .unwrap_or_else(|| panic!("Tile {} not found in state {}", tile, self))
    }

    /// Positions of every tile, indexed by tile value.
    pub fn positions(&self) -> [usize; CELLS] {
        let mut positions = [0; CELLS];
        for (position, &tile) in self.tiles.iter().enumerate() {
            positions[tile as usize] = position;
        }
        positions
    }

    pub fn blank_position(&self) -> usize {
        self.position_of(BLANK)
    }

    pub fn find_row(&self, tile: Tile) -> usize {
        self.position_of(tile) / SIDE
    }

    pub fn find_column(&self, tile: Tile) -> usize {
        self.position_of(tile) % SIDE
    }

    /// The state reached by sliding the blank in the given direction, if the
    /// move stays on the board.
    pub fn apply(&self, transition: Move) -> Option<Self> {
        let blank = self.blank_position();
        transition.target(blank).map(|target| {
            let mut tiles = self.tiles;
            tiles.swap(blank, target);
            Self { tiles }
        })
    }

    /// Every legal move with its resulting state, in the order down, up,
    /// right, left.
    pub fn successors(&self) -> Vec<(Move, Self)> {
        Move::iter()
            .filter_map(|transition| self.apply(transition).map(|next| (transition, next)))
            .collect()
    }

    pub fn neighbors(&self) -> Vec<Self> {
        self.successors()
            .into_iter()
            .map(|(_, state)| state)
            .collect()
    }

    /// Number of tile pairs that appear in the opposite order to their
    /// labels, ignoring the blank.
    pub fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .filter(|&&tile| tile != BLANK)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }

    /// On a board with an odd side every move preserves the inversion
    /// parity, so two states are mutually reachable exactly when their
    /// parities agree.
    pub fn is_solvable_from(&self, goal: &State) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    /// A view of the state that renders as a grid, three symbols per line.
    pub fn grid(&self) -> Grid<'_> {
        Grid(self)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::goal()
    }
}

fn tile_symbol(tile: Tile) -> char {
    match tile {
        BLANK => BLANK_SYMBOL,
        t => char::from_digit(t as u32, 36).unwrap_or('?'),
    }
}

fn symbol_tile(symbol: char) -> Option<Tile> {
    match symbol {
        BLANK_SYMBOL => Some(BLANK),
        '1'..='8' => symbol.to_digit(10).map(|d| d as Tile),
        _ => None,
    }
}

impl FromStr for State {
    type Err = InvalidStateError;

    /// Parse the compact form, e.g. `1234567-8`. Whitespace is ignored so the
    /// grid rendering also parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELLS {
            return Err(InvalidStateError::WrongLength {
                expected: CELLS,
                got: symbols.len(),
                input: s.to_string(),
            });
        }

        let mut tiles = [BLANK; CELLS];
        let mut seen = [false; CELLS];
        for (position, &symbol) in symbols.iter().enumerate() {
            let tile = symbol_tile(symbol).ok_or_else(|| InvalidStateError::UnknownSymbol {
                symbol,
                position,
                input: s.to_string(),
            })?;
            if seen[tile as usize] {
                return Err(InvalidStateError::DuplicateSymbol {
                    symbol,
                    input: s.to_string(),
                });
            }
            seen[tile as usize] = true;
            tiles[position] = tile;
        }
        Ok(Self { tiles })
    }
}

impl TryFrom<&str> for State {
    type Error = InvalidStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for State {
    type Error = InvalidStateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for &tile in &self.tiles {
            write!(f, "{}", tile_symbol(tile))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Grid<'a>(&'a State);

impl Display for Grid<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.0.tiles.chunks(SIDE) {
            writeln!(f, "{}", row.iter().map(|&tile| tile_symbol(tile)).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn goal_round_trips_through_text() {
        assert_eq!(State::goal().to_string(), GOAL);
        assert_eq!(state(GOAL), State::goal());
    }

    #[test]
    fn rejects_malformed_states() {
        assert!(matches!(
            "12345678".parse::<State>(),
            Err(InvalidStateError::WrongLength { got: 8, .. })
        ));
        assert!(matches!(
            "1234567899".parse::<State>(),
            Err(InvalidStateError::WrongLength { got: 10, .. })
        ));
        assert!(matches!(
            "1234567x-".parse::<State>(),
            Err(InvalidStateError::UnknownSymbol {
                symbol: 'x',
                position: 7,
                ..
            })
        ));
        assert!(matches!(
            "1234567-0".parse::<State>(),
            Err(InvalidStateError::UnknownSymbol { symbol: '0', .. })
        ));
        assert!(matches!(
            "11345678-".parse::<State>(),
            Err(InvalidStateError::DuplicateSymbol { symbol: '1', .. })
        ));
        assert!(matches!(
            "123456781".parse::<State>(),
            Err(InvalidStateError::DuplicateSymbol { symbol: '1', .. })
        ));
    }

    #[test]
    fn from_tiles_checks_invariant() {
        assert_eq!(
            State::from_tiles([1, 2, 3, 4, 5, 6, 7, 8, 0]),
            Ok(State::goal())
        );
        assert!(matches!(
            State::from_tiles([1, 2, 3, 4, 5, 6, 7, 9, 0]),
            Err(InvalidStateError::UnknownSymbol { position: 7, .. })
        ));
        assert!(matches!(
            State::from_tiles([1, 1, 3, 4, 5, 6, 7, 8, 0]),
            Err(InvalidStateError::DuplicateSymbol { symbol: '1', .. })
        ));
    }

    #[test]
    fn find_row_and_column() {
        let s = state("7145-6832");
        assert_eq!(s.find_row(7), 0);
        assert_eq!(s.find_column(7), 0);
        assert_eq!(s.find_row(6), 1);
        assert_eq!(s.find_column(6), 2);
        assert_eq!(s.find_row(2), 2);
        assert_eq!(s.find_column(2), 2);
        assert_eq!(s.blank_position(), 4);
    }

    #[test]
    #[should_panic(expected = "not found")]
    fn position_of_missing_tile_panics() {
        State::goal().position_of(9);
    }

    #[test]
    fn neighbors_follow_blank_position() {
        // corner
        assert_eq!(
            State::goal().neighbors(),
            vec![state("12345-786"), state("1234567-8")]
        );
        // edge
        assert_eq!(
            state("1234567-8").neighbors(),
            vec![state("1234-6758"), state("12345678-"), state("123456-78")]
        );
        // centre
        assert_eq!(
            state("1234-5678").neighbors(),
            vec![
                state("1234756-8"),
                state("1-3425678"),
                state("12345-678"),
                state("123-45678"),
            ]
        );
    }

    #[test]
    fn neighbors_differ_by_one_adjacent_swap() {
        for s in scrambled_states(20, 40, 7) {
            let successors = s.successors();
            assert!((2..=4).contains(&successors.len()));
            for (transition, next) in successors {
                assert_ne!(next, s);
                let changed: Vec<usize> = (0..CELLS)
                    .filter(|&p| next.tile_at(p) != s.tile_at(p))
                    .collect();
                assert_eq!(changed.len(), 2);
                assert!(changed.contains(&s.blank_position()));
                assert_eq!(next.apply(transition.opposite()), Some(s));
            }
        }
    }

    #[test]
    fn grid_rendering() {
        assert_eq!(State::goal().grid().to_string(), "1 2 3\n4 5 6\n7 8 -\n");
        assert_eq!(state("1 2 3\n4 5 6\n7 - 8\n"), state("1234567-8"));
    }

    #[test]
    fn solvability_parity() {
        let goal = State::goal();
        assert!(state("8672543-1").is_solvable_from(&goal));
        assert!(!state("21345678-").is_solvable_from(&goal));
        for s in scrambled_states(10, 25, 3) {
            assert!(s.is_solvable_from(&goal));
        }
    }
}
