use std::fmt;
use strum_macros::EnumIter;

use crate::search::states::SIDE;

/// The direction in which the blank slides. Sliding the blank down swaps it
/// with the tile directly below it, and so on.
///
/// The declaration order is the enumeration order of successors, which the
/// searches rely on for reproducible tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Move {
    Down,
    Up,
    Right,
    Left,
}

impl Move {
    /// The move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Down => Move::Up,
            Move::Up => Move::Down,
            Move::Right => Move::Left,
            Move::Left => Move::Right,
        }
    }

    /// Where the blank ends up when this move is made with the blank at
    /// `position`, or `None` if the move would leave the board.
    pub fn target(&self, position: usize) -> Option<usize> {
        let cells = SIDE * SIDE;
        match self {
            Move::Down if position + SIDE < cells => Some(position + SIDE),
            Move::Up if position >= SIDE => Some(position - SIDE),
            Move::Right if position % SIDE < SIDE - 1 => Some(position + 1),
            Move::Left if position % SIDE > 0 => Some(position - 1),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Down => "Down",
            Move::Up => "Up",
            Move::Right => "Right",
            Move::Left => "Left",
        };
        write!(f, "{}", s)
    }
}
