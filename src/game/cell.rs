use super::Player;

/// Grid position. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The link orientation that runs along this direction.
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Orientation a link takes when `player` claims a slot of the given
    /// diagonal class. Each player's links always join two of their own
    /// anchors.
    pub fn for_link(diagonal: Diagonal, player: Player) -> Orientation {
        match (player, diagonal) {
            (Player::One, Diagonal::A) => Orientation::Horizontal,
            (Player::One, Diagonal::B) => Orientation::Vertical,
            (Player::Two, Diagonal::A) => Orientation::Vertical,
            (Player::Two, Diagonal::B) => Orientation::Horizontal,
        }
    }
}

/// Parity class of a non-anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Both coordinates odd.
    A,
    /// Both coordinates even.
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Pre-owned intersection, never playable.
    Anchor,
    /// Interior slot that a player can claim once.
    Link,
    /// Non-anchor border cell; never playable.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    kind: CellKind,
    owner: Option<Player>,
    linked: bool,
    orientation: Option<Orientation>,
    neighbors: [Option<Coord>; 4],
}

impl Cell {
    pub(crate) fn new(coord: Coord, kind: CellKind, owner: Option<Player>) -> Self {
        Cell {
            coord,
            kind,
            owner,
            linked: false,
            orientation: None,
            neighbors: [None; 4],
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Set once, when the cell is linked.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == CellKind::Anchor
    }

    /// Diagonal class, or `None` for anchors.
    pub fn diagonal(&self) -> Option<Diagonal> {
        match (self.coord.x % 2, self.coord.y % 2) {
            (1, 1) => Some(Diagonal::A),
            (0, 0) => Some(Diagonal::B),
            _ => None,
        }
    }

    /// Adjacent cell in `dir`, or `None` on that edge of the grid.
    pub fn neighbor(&self, dir: Direction) -> Option<Coord> {
        self.neighbors[dir.index()]
    }

    pub(crate) fn set_neighbor(&mut self, dir: Direction, coord: Coord) {
        self.neighbors[dir.index()] = Some(coord);
    }

    /// Whether this cell carries a link of `player` running along `orientation`.
    pub fn carries_link(&self, player: Player, orientation: Orientation) -> bool {
        self.linked && self.owner == Some(player) && self.orientation == Some(orientation)
    }

    pub(crate) fn link(&mut self, player: Player, orientation: Orientation) {
        debug_assert!(!self.linked, "cell {} linked twice", self.coord);
        self.owner = Some(player);
        self.linked = true;
        self.orientation = Some(orientation);
    }
}
