use tracing::{debug, info};

use super::cell::{CellKind, Coord, Orientation};
use super::placement::{place_move, preview_link};
use super::{Grid, Player};
use crate::error::{GameError, MoveError};

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Rejected(MoveError),
    Accepted,
    AcceptedAndWon(Player),
}

/// Read-only snapshot of one cell, for whatever draws the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub owner: Option<Player>,
    pub linked: bool,
    pub orientation: Option<Orientation>,
    pub kind: CellKind,
}

/// One game: the grid, the two player identities, whose turn it is, and the
/// winner once there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    players: [String; 2],
    current_player: Player,
    winner: Option<Player>,
    move_count: usize,
}

impl GameState {
    /// Start a game on a `size` x `size` board. Player one moves first.
    pub fn new(
        size: usize,
        player_one: impl Into<String>,
        player_two: impl Into<String>,
    ) -> Result<Self, GameError> {
        Ok(GameState {
            grid: Grid::new(size)?,
            players: [player_one.into(), player_two.into()],
            current_player: Player::One,
            winner: None,
            move_count: 0,
        })
    }

    pub fn board_size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Identity supplied for `player` when the game was created.
    pub fn player_name(&self, player: Player) -> &str {
        &self.players[player.index()]
    }

    /// Winner, once the game is over
    pub fn outcome(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Apply `acting`'s move at `(x, y)`.
    ///
    /// Out-of-range coordinates are an error; every other refusal comes back
    /// as `Rejected` with the board unchanged.
    pub fn submit_move(
        &mut self,
        x: usize,
        y: usize,
        acting: Player,
    ) -> Result<MoveResult, GameError> {
        let coord = Coord::new(x, y);
        self.grid.cell(coord)?;

        if self.is_terminal() {
            return Ok(self.reject(coord, acting, MoveError::GameOver));
        }
        if acting != self.current_player {
            return Ok(self.reject(coord, acting, MoveError::NotYourTurn));
        }

        let placement = match place_move(&mut self.grid, coord, acting) {
            Ok(placement) => placement,
            Err(GameError::IllegalMove(reason)) => return Ok(self.reject(coord, acting, reason)),
            Err(e) => return Err(e),
        };
        self.move_count += 1;

        if placement.completes_path {
            info!(
                winner = self.player_name(acting),
                moves = self.move_count,
                "game won"
            );
            self.winner = Some(acting);
            return Ok(MoveResult::AcceptedAndWon(acting));
        }

        self.current_player = acting.other();
        Ok(MoveResult::Accepted)
    }

    fn reject(&self, coord: Coord, acting: Player, reason: MoveError) -> MoveResult {
        debug!(x = coord.x, y = coord.y, player = acting.name(), %reason, "move rejected");
        MoveResult::Rejected(reason)
    }

    pub fn cell_view(&self, x: usize, y: usize) -> Result<CellView, GameError> {
        let cell = self.grid.cell_at(x, y)?;
        Ok(CellView {
            owner: cell.owner(),
            linked: cell.is_linked(),
            orientation: cell.orientation(),
            kind: cell.kind(),
        })
    }

    /// True iff `(x, y)` lies on the outer ring of the board. Coordinates
    /// beyond the board are not on it.
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        let coord = Coord::new(x, y);
        self.grid.contains(coord) && self.grid.is_border(coord)
    }

    /// Orientation the player on turn would get at `(x, y)`, or `None` if
    /// that move would be rejected.
    pub fn preview(&self, x: usize, y: usize) -> Option<Orientation> {
        if self.is_terminal() {
            return None;
        }
        preview_link(&self.grid, Coord::new(x, y), self.current_player)
    }

    /// Every coordinate the player on turn may still claim.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.grid
            .cells()
            .filter(|cell| cell.kind() == CellKind::Link && !cell.is_linked())
            .map(|cell| cell.coord())
            .collect()
    }
}
