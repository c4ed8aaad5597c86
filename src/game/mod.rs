//! Board connectivity engine: grid topology, link placement, and the
//! breadth-first win check.

mod cell;
mod connectivity;
mod grid;
mod placement;
mod player;
mod queue;
mod state;

pub use cell::{Cell, CellKind, Coord, Diagonal, Direction, Orientation};
pub use connectivity::{frontier_connected, has_path, has_won};
pub use grid::{Frontier, Grid, MIN_SIZE};
pub use placement::{place_move, preview_link, validate, Placement};
pub use player::Player;
pub use queue::Queue;
pub use state::{CellView, GameState, MoveResult};
