mod moves;
mod state;

pub use moves::Move;
pub use state::{Grid, State, Tile, BLANK, BLANK_SYMBOL, CELLS, SIDE};
