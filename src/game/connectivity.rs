//! Breadth-first search over a player's links.
//!
//! Search nodes are the player's anchors. One hop crosses a single linked
//! cell owned by that player whose orientation runs along the hop, landing
//! on the anchor two grid units away.

use std::collections::HashSet;

use super::cell::{Coord, Direction};
use super::queue::Queue;
use super::{Grid, Player};
use crate::error::GameError;

/// True if `player`'s links join `from` to `to`.
pub fn has_path(grid: &Grid, from: Coord, to: Coord, player: Player) -> Result<bool, GameError> {
    grid.cell(from)?;
    grid.cell(to)?;

    let mut worklist = Queue::new();
    let mut visited = HashSet::new();
    worklist.enqueue(from);

    while !worklist.is_empty() {
        let next = worklist.dequeue()?;
        if next == to {
            return Ok(true);
        }
        if !visited.insert(next) {
            continue;
        }
        for landing in hops(grid, next, player) {
            if !visited.contains(&landing) {
                worklist.enqueue(landing);
            }
        }
    }

    Ok(false)
}

/// True on the first (starter, ender) pair that `player`'s links connect.
pub fn has_won(
    grid: &Grid,
    starters: &[Coord],
    enders: &[Coord],
    player: Player,
) -> Result<bool, GameError> {
    for &start in starters {
        for &end in enders {
            if has_path(grid, start, end, player)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Run [`has_won`] against the frontier sets the grid has recorded for
/// `player`.
pub fn frontier_connected(grid: &Grid, player: Player) -> Result<bool, GameError> {
    let frontier = grid.frontier(player);
    has_won(grid, frontier.starters(), frontier.enders(), player)
}

fn hops(grid: &Grid, from: Coord, player: Player) -> impl Iterator<Item = Coord> + '_ {
    Direction::ALL.into_iter().filter_map(move |dir| {
        let bridge = grid.neighbor(from, dir)?;
        if !bridge.carries_link(player, dir.orientation()) {
            return None;
        }
        bridge.neighbor(dir)
    })
}
