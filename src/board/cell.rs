//! Grid cells: coordinates, kinds, adjacency and occupancy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Room;
use crate::core::SeatId;

/// A (row, col) grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours that stay inside a `rows`×`cols` grid,
    /// in the order above, below, left, right.
    pub fn cardinal(self, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (row + 1 < rows).then(|| Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            (col + 1 < cols).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.row, self.col)
    }
}

/// What a cell is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Corridor a token can walk along.
    Open,
    /// Part of a named room.
    Room(Room),
    /// Unusable; never adjacent to anything.
    Void,
}

/// Adjacency set. Corridor cells have at most four entries and rooms a
/// handful of exits, so this never spills to the heap on the standard board.
pub type Adjacency = SmallVec<[Coord; 4]>;

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    kind: CellKind,
    /// Short code from the layout: room code, void label or corridor label.
    label: String,
    adjacency: Adjacency,
    occupant: Option<SeatId>,
    /// Display-only: corridor cell with an edge into a room.
    doorway: bool,
}

impl Cell {
    pub(crate) fn new(coord: Coord, kind: CellKind, label: impl Into<String>) -> Self {
        Self {
            coord,
            kind,
            label: label.into(),
            adjacency: Adjacency::new(),
            occupant: None,
            doorway: false,
        }
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// The room this cell belongs to, if any.
    #[must_use]
    pub fn room(&self) -> Option<Room> {
        match self.kind {
            CellKind::Room(room) => Some(room),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.kind == CellKind::Open
    }

    /// Cells reachable in one step from here.
    #[must_use]
    pub fn adjacency(&self) -> &[Coord] {
        &self.adjacency
    }

    #[must_use]
    pub fn has_neighbour(&self, coord: Coord) -> bool {
        self.adjacency.contains(&coord)
    }

    #[must_use]
    pub fn occupant(&self) -> Option<SeatId> {
        self.occupant
    }

    #[must_use]
    pub fn is_doorway(&self) -> bool {
        self.doorway
    }

    /// Two-character display symbol.
    ///
    /// Occupant first (`P3`), then room or void code, then `dw` for
    /// doorways, then `__` for plain corridor.
    #[must_use]
    pub fn symbol(&self) -> String {
        if let Some(seat) = self.occupant {
            return seat.to_string();
        }
        match self.kind {
            CellKind::Room(room) => room.code().to_string(),
            CellKind::Void => self.label.clone(),
            CellKind::Open if self.doorway => "dw".to_string(),
            CellKind::Open => "__".to_string(),
        }
    }

    pub(crate) fn add_neighbour(&mut self, coord: Coord) {
        if !self.adjacency.contains(&coord) {
            self.adjacency.push(coord);
        }
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<SeatId>) {
        self.occupant = occupant;
    }

    pub(crate) fn mark_doorway(&mut self) {
        self.doorway = true;
    }
}
