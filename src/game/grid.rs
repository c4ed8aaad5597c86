use super::cell::{Cell, CellKind, Coord, Direction};
use super::Player;
use crate::error::GameError;

pub const MIN_SIZE: usize = 3;

/// Border anchors a player has reached with links so far. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    starters: Vec<Coord>,
    enders: Vec<Coord>,
}

impl Frontier {
    /// Anchors on the player's entry border (left for player one, top for
    /// player two).
    pub fn starters(&self) -> &[Coord] {
        &self.starters
    }

    /// Anchors on the player's exit border (right for player one, bottom for
    /// player two).
    pub fn enders(&self) -> &[Coord] {
        &self.enders
    }

    pub(crate) fn push_starter(&mut self, coord: Coord) {
        self.starters.push(coord);
    }

    pub(crate) fn push_ender(&mut self, coord: Coord) {
        self.enders.push(coord);
    }
}

/// Square arena of cells. Neighbor relations are coordinates into the arena
/// and are fixed once construction finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    frontiers: [Frontier; 2],
}

impl Grid {
    /// Build a `size` x `size` grid. The size must be odd and at least 3.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_SIZE || size % 2 == 0 {
            return Err(GameError::InvalidConfiguration { size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(classify(size, Coord::new(x, y)));
            }
        }

        let mut grid = Grid {
            size,
            cells,
            frontiers: [Frontier::default(), Frontier::default()],
        };
        grid.wire_neighbors();
        Ok(grid)
    }

    /// Second construction pass: connect every pair of adjacent cells in both
    /// directions. Edge cells keep `None` on their open side.
    fn wire_neighbors(&mut self) {
        for y in 0..self.size {
            for x in 0..self.size {
                let here = Coord::new(x, y);
                if x + 1 < self.size {
                    self.join(here, Coord::new(x + 1, y), Direction::Right);
                }
                if y + 1 < self.size {
                    self.join(here, Coord::new(x, y + 1), Direction::Down);
                }
            }
        }
    }

    fn join(&mut self, from: Coord, to: Coord, dir: Direction) {
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.cells[from_idx].set_neighbor(dir, to);
        self.cells[to_idx].set_neighbor(dir.opposite(), from);
    }

    fn index(&self, coord: Coord) -> usize {
        coord.y * self.size + coord.x
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn check_bounds(&self, coord: Coord) -> Result<usize, GameError> {
        if self.contains(coord) {
            Ok(self.index(coord))
        } else {
            Err(GameError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                size: self.size,
            })
        }
    }

    /// Get the cell at `(x, y)`.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, GameError> {
        self.cell(Coord::new(x, y))
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell, GameError> {
        let idx = self.check_bounds(coord)?;
        Ok(&self.cells[idx])
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, GameError> {
        let idx = self.check_bounds(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Follow the neighbor relation of `coord` in `dir`.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<&Cell> {
        let next = self.cell(coord).ok()?.neighbor(dir)?;
        self.cell(next).ok()
    }

    /// True iff the coordinate lies on the outermost ring.
    pub fn is_border(&self, coord: Coord) -> bool {
        let last = self.size - 1;
        coord.x == 0 || coord.y == 0 || coord.x == last || coord.y == last
    }

    pub fn is_border_cell(&self, cell: &Cell) -> bool {
        self.is_border(cell.coord())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn frontier(&self, player: Player) -> &Frontier {
        &self.frontiers[player.index()]
    }

    pub(crate) fn frontier_mut(&mut self, player: Player) -> &mut Frontier {
        &mut self.frontiers[player.index()]
    }

    /// Every anchor on `player`'s entry and exit borders, regardless of
    /// whether a link touches it yet.
    pub fn border_anchors(&self, player: Player) -> (Vec<Coord>, Vec<Coord>) {
        let last = self.size - 1;
        let odd = (1..last).step_by(2);
        match player {
            Player::One => (
                odd.clone().map(|y| Coord::new(0, y)).collect(),
                odd.map(|y| Coord::new(last, y)).collect(),
            ),
            Player::Two => (
                odd.clone().map(|x| Coord::new(x, 0)).collect(),
                odd.map(|x| Coord::new(x, last)).collect(),
            ),
        }
    }
}

/// Anchor ownership follows coordinate parity: (even x, odd y) belongs to
/// player one, (odd x, even y) to player two.
fn classify(size: usize, coord: Coord) -> Cell {
    let last = size - 1;
    let on_border = coord.x == 0 || coord.y == 0 || coord.x == last || coord.y == last;
    match (coord.x % 2, coord.y % 2) {
        (0, 1) => Cell::new(coord, CellKind::Anchor, Some(Player::One)),
        (1, 0) => Cell::new(coord, CellKind::Anchor, Some(Player::Two)),
        _ if on_border => Cell::new(coord, CellKind::Empty, None),
        _ => Cell::new(coord, CellKind::Link, None),
    }
}
