use tracing::debug;

use super::cell::{Coord, Diagonal, Orientation};
use super::connectivity::frontier_connected;
use super::{Grid, Player};
use crate::error::{GameError, MoveError};

/// A link that was committed to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub coord: Coord,
    pub player: Player,
    pub orientation: Orientation,
    /// The mover's links now join their two borders.
    pub completes_path: bool,
}

/// Check that `coord` is an open interior slot, returning its diagonal class.
pub fn validate(grid: &Grid, coord: Coord) -> Result<Diagonal, GameError> {
    let cell = grid.cell(coord)?;
    if cell.is_anchor() {
        return Err(MoveError::Anchor.into());
    }
    if grid.is_border_cell(cell) {
        return Err(MoveError::Border.into());
    }
    if cell.is_linked() {
        return Err(MoveError::AlreadyLinked.into());
    }
    // non-anchor cells always have a diagonal class
    cell.diagonal().ok_or_else(|| MoveError::Anchor.into())
}

/// Orientation a link by `player` would take at `coord`, or `None` if the
/// slot cannot be played.
pub fn preview_link(grid: &Grid, coord: Coord, player: Player) -> Option<Orientation> {
    validate(grid, coord)
        .ok()
        .map(|diagonal| Orientation::for_link(diagonal, player))
}

/// Commit a link for `player` at `coord`, extend their frontier sets, and
/// re-run the connectivity check for that player.
///
/// Rejected moves leave the grid untouched.
pub fn place_move(grid: &mut Grid, coord: Coord, player: Player) -> Result<Placement, GameError> {
    let diagonal = validate(grid, coord)?;
    let orientation = Orientation::for_link(diagonal, player);

    grid.cell_mut(coord)?.link(player, orientation);
    record_frontier(grid, coord, player);

    let completes_path = frontier_connected(grid, player)?;
    debug!(
        x = coord.x,
        y = coord.y,
        player = player.name(),
        ?orientation,
        completes_path,
        "link placed"
    );

    Ok(Placement {
        coord,
        player,
        orientation,
        completes_path,
    })
}

/// A link one step in from a player's border reaches the anchor on that border.
fn record_frontier(grid: &mut Grid, coord: Coord, player: Player) {
    let last = grid.size() - 1;
    let frontier = grid.frontier_mut(player);
    match player {
        Player::One => {
            if coord.x == 1 {
                frontier.push_starter(Coord::new(0, coord.y));
            }
            if coord.x == last - 1 {
                frontier.push_ender(Coord::new(last, coord.y));
            }
        }
        Player::Two => {
            if coord.y == 1 {
                frontier.push_starter(Coord::new(coord.x, 0));
            }
            if coord.y == last - 1 {
                frontier.push_ender(Coord::new(coord.x, last));
            }
        }
    }
}
