//! The board graph: cells, adjacency and token occupancy.
//!
//! Built once from a [`BoardLayout`] and reused across game resets; only
//! occupancy changes after construction.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::cell::{Cell, CellKind, Coord};
use super::layout::{BoardLayout, KindTag, Spawn};
use crate::cards::Room;
use crate::core::{GameError, SeatId};

/// Fixed-size grid of cells with precomputed adjacency.
///
/// ## Adjacency
///
/// Built in two independent passes:
///
/// 1. Every open cell is linked to each cardinal neighbour that is also
///    open. Rooms and voids are never reached this way, so this pass is
///    symmetric.
/// 2. Every cell of a room is linked to that room's exit list, and every
///    entrance corridor cell is linked to its room cell.
///
/// A final display pass tags open cells with an edge into a room as
/// doorways; the tag has no effect on movement.
///
/// ## Occupancy
///
/// Each seat has one location. Stepping does not check whether the
/// destination is already occupied, so two seats can share a corridor
/// cell; the cell then records whichever seat arrived last.
#[derive(Clone, Debug)]
pub struct BoardGraph {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    spawns: Vec<Spawn>,
    locations: FxHashMap<SeatId, Coord>,
}

impl BoardGraph {
    /// Build the standard board.
    #[must_use]
    pub fn standard() -> Self {
        match Self::from_layout(&BoardLayout::standard()) {
            Ok(board) => board,
            Err(err) => unreachable!("standard layout is well-formed: {err}"),
        }
    }

    /// Build a board from an arbitrary layout.
    pub fn from_layout(layout: &BoardLayout) -> Result<Self, GameError> {
        let (rows, cols) = (layout.rows, layout.cols);
        if layout.cells.len() != rows * cols {
            return Err(GameError::LayoutShape {
                rows,
                cols,
                cells: layout.cells.len(),
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (i, descriptor) in layout.cells.iter().enumerate() {
            let coord = Coord::new(i / cols, i % cols);
            let kind = match descriptor.tag {
                KindTag::Room => CellKind::Room(
                    Room::from_code(&descriptor.code)
                        .ok_or_else(|| GameError::UnknownRoomCode(descriptor.code.clone()))?,
                ),
                KindTag::Void => CellKind::Void,
                KindTag::Open => CellKind::Open,
            };
            cells.push(Cell::new(coord, kind, descriptor.code.as_str()));
        }

        let mut board = Self {
            rows,
            cols,
            cells,
            spawns: layout.spawns.clone(),
            locations: FxHashMap::default(),
        };
        board.link_corridors();
        board.link_rooms(layout)?;
        board.tag_doorways();
        Ok(board)
    }

    fn link_corridors(&mut self) {
        for i in 0..self.cells.len() {
            if !self.cells[i].is_open() {
                continue;
            }
            let here = self.cells[i].coord();
            let open: Vec<Coord> = here
                .cardinal(self.rows, self.cols)
                .filter(|c| self.cells[self.idx(*c)].is_open())
                .collect();
            for coord in open {
                self.cells[i].add_neighbour(coord);
            }
        }
    }

    fn link_rooms(&mut self, layout: &BoardLayout) -> Result<(), GameError> {
        for (_, exits) in &layout.exits {
            if let Some(bad) = exits.iter().find(|c| !self.contains(**c)) {
                return Err(GameError::CoordOutOfBounds(*bad));
            }
        }
        for cell in &mut self.cells {
            if let CellKind::Room(room) = cell.kind() {
                for exit in layout.exits_of(room) {
                    cell.add_neighbour(*exit);
                }
            }
        }

        for (outside, inside) in &layout.entrances {
            for coord in [outside, inside] {
                if !self.contains(*coord) {
                    return Err(GameError::CoordOutOfBounds(*coord));
                }
            }
            let i = self.idx(*outside);
            self.cells[i].add_neighbour(*inside);
        }
        Ok(())
    }

    fn tag_doorways(&mut self) {
        for i in 0..self.cells.len() {
            if !self.cells[i].is_open() {
                continue;
            }
            let into_room = self.cells[i]
                .adjacency()
                .iter()
                .any(|c| self.cells[self.idx(*c)].room().is_some());
            if into_room {
                self.cells[i].mark_doorway();
            }
        }
    }

    fn idx(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    // === Queries ===

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `coord` lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The cell at `coord`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if !self.contains(coord) {
            return None;
        }
        self.cells.get(self.idx(coord))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Spawn point for `seat` from the layout.
    pub fn spawn(&self, seat: SeatId) -> Result<Spawn, GameError> {
        if seat.0 == 0 {
            return Err(GameError::MissingSpawn(seat));
        }
        self.spawns
            .get(seat.index())
            .copied()
            .ok_or(GameError::MissingSpawn(seat))
    }

    /// Number of seats the layout can spawn.
    #[must_use]
    pub fn spawn_count(&self) -> usize {
        self.spawns.len()
    }

    /// Coordinate of `seat`, if placed.
    #[must_use]
    pub fn position_of(&self, seat: SeatId) -> Option<Coord> {
        self.locations.get(&seat).copied()
    }

    /// The cell `seat` stands on, if placed.
    #[must_use]
    pub fn location_of(&self, seat: SeatId) -> Option<&Cell> {
        self.position_of(seat).and_then(|c| self.cell(c))
    }

    /// The room `seat` is in, or `None` on a corridor or when unplaced.
    #[must_use]
    pub fn is_in_room(&self, seat: SeatId) -> Option<Room> {
        self.location_of(seat).and_then(Cell::room)
    }

    /// Cells `seat` could step to from where it stands.
    #[must_use]
    pub fn neighbours_of(&self, seat: SeatId) -> &[Coord] {
        self.location_of(seat).map(Cell::adjacency).unwrap_or(&[])
    }

    // === Movement ===

    /// Remove every token from the board.
    pub fn clear_occupancy(&mut self) {
        for cell in &mut self.cells {
            cell.set_occupant(None);
        }
        self.locations.clear();
    }

    /// Put `seat` on `coord` regardless of adjacency. Used at setup.
    pub fn place(&mut self, seat: SeatId, coord: Coord) -> Result<(), GameError> {
        if !self.contains(coord) {
            return Err(GameError::CoordOutOfBounds(coord));
        }
        self.relocate(seat, coord);
        Ok(())
    }

    /// Move `seat` one step to `destination`.
    ///
    /// Legal iff `destination` is in the adjacency of the seat's current
    /// cell. Occupancy of the destination is not checked, so seats can
    /// share a corridor cell; the cell shows the last arrival, and when
    /// that seat leaves it falls back to another seat still standing there.
    pub fn step_move(&mut self, seat: SeatId, destination: Coord) -> bool {
        let legal = self
            .location_of(seat)
            .is_some_and(|cell| cell.has_neighbour(destination));
        if !legal {
            return false;
        }
        self.relocate(seat, destination);
        debug!(%seat, to = %destination, "step");
        true
    }

    /// Move `seat` into the first vacant cell of `room`, scanning row-major.
    ///
    /// Returns false and leaves the board untouched if every cell of the
    /// room is occupied.
    pub fn teleport_move(&mut self, seat: SeatId, room: Room) -> bool {
        let target = self
            .cells
            .iter()
            .find(|cell| cell.room() == Some(room) && cell.occupant().is_none())
            .map(Cell::coord);

        match target {
            Some(coord) => {
                self.relocate(seat, coord);
                debug!(%seat, %room, to = %coord, "teleport");
                true
            }
            None => {
                debug!(%seat, %room, "teleport found no vacant cell");
                false
            }
        }
    }

    fn relocate(&mut self, seat: SeatId, to: Coord) {
        if let Some(from) = self.locations.insert(seat, to) {
            // A shared corridor cell stays marked while anyone remains on it.
            let left_behind = self
                .locations
                .iter()
                .find(|(_, at)| **at == from)
                .map(|(other, _)| *other);
            let i = self.idx(from);
            self.cells[i].set_occupant(left_behind);
        }
        let i = self.idx(to);
        self.cells[i].set_occupant(Some(seat));
    }

    /// Display symbols, one row per grid row.
    #[must_use]
    pub fn symbols(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::CellDescriptor;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_open_cell_has_four_open_neighbours() {
        let board = BoardGraph::standard();
        let cell = board.cell(at(4, 5)).unwrap();

        for n in [at(3, 5), at(5, 5), at(4, 4), at(4, 6)] {
            assert!(cell.has_neighbour(n));
        }
        assert_eq!(cell.adjacency().len(), 4);
    }

    #[test]
    fn test_corridor_between_rooms_only_goes_down() {
        let board = BoardGraph::standard();
        let cell = board.cell(at(0, 5)).unwrap();

        assert_eq!(cell.adjacency(), &[at(1, 5)]);
        assert!(!cell.is_doorway());
    }

    #[test]
    fn test_kitchen_doorway() {
        let board = BoardGraph::standard();
        let dw = board.cell(at(3, 3)).unwrap();

        let mut adj = dw.adjacency().to_vec();
        adj.sort();
        assert_eq!(adj, vec![at(2, 3), at(3, 2), at(3, 4), at(4, 3)]);
        assert!(dw.is_doorway());
        assert_eq!(dw.symbol(), "dw");
    }

    #[test]
    fn test_room_cell_only_reaches_exits() {
        let board = BoardGraph::standard();
        let hall = board.cell(at(13, 7)).unwrap();

        assert_eq!(hall.room(), Some(Room::Hall));
        assert_eq!(hall.adjacency(), &[at(14, 12), at(12, 9)]);
    }

    #[test]
    fn test_void_cell_has_no_neighbours() {
        let board = BoardGraph::standard();
        let centre = board.cell(at(8, 9)).unwrap();

        assert_eq!(centre.kind(), CellKind::Void);
        assert!(centre.adjacency().is_empty());
        assert_eq!(centre.symbol(), "CR");
    }

    #[test]
    fn test_step_and_occupancy() {
        let mut board = BoardGraph::standard();
        let seat = SeatId::new(1);
        board.place(seat, at(17, 5)).unwrap();

        assert!(board.step_move(seat, at(16, 5)));
        assert_eq!(board.position_of(seat), Some(at(16, 5)));
        assert_eq!(board.cell(at(16, 5)).unwrap().occupant(), Some(seat));
        assert_eq!(board.cell(at(17, 5)).unwrap().occupant(), None);
    }

    #[test]
    fn test_step_rejects_non_neighbours() {
        let mut board = BoardGraph::standard();
        let seat = SeatId::new(1);
        board.place(seat, at(17, 5)).unwrap();

        assert!(!board.step_move(seat, at(17, 3)));
        assert!(!board.step_move(seat, at(15, 5)));
        assert!(!board.step_move(seat, at(100, 100)));
        assert_eq!(board.position_of(seat), Some(at(17, 5)));
    }

    #[test]
    fn test_step_unplaced_seat() {
        let mut board = BoardGraph::standard();
        assert!(!board.step_move(SeatId::new(3), at(1, 5)));
    }

    #[test]
    fn test_teleport_fills_first_vacant_cell() {
        let mut board = BoardGraph::standard();
        board.place(SeatId::new(1), at(0, 0)).unwrap();

        assert!(board.teleport_move(SeatId::new(2), Room::Kitchen));
        assert_eq!(board.position_of(SeatId::new(2)), Some(at(0, 1)));
        assert_eq!(board.is_in_room(SeatId::new(2)), Some(Room::Kitchen));
    }

    #[test]
    fn test_teleport_full_room_is_noop() {
        // One-cell room
        let layout = BoardLayout {
            rows: 1,
            cols: 2,
            cells: vec![CellDescriptor::room(Room::Study), CellDescriptor::open()],
            exits: vec![(Room::Study, vec![at(0, 1)])],
            entrances: vec![(at(0, 1), at(0, 0))],
            spawns: vec![],
        };
        let mut board = BoardGraph::from_layout(&layout).unwrap();
        board.place(SeatId::new(1), at(0, 0)).unwrap();
        board.place(SeatId::new(2), at(0, 1)).unwrap();

        assert!(!board.teleport_move(SeatId::new(2), Room::Study));
        assert_eq!(board.position_of(SeatId::new(2)), Some(at(0, 1)));
    }

    #[test]
    fn test_clear_occupancy() {
        let mut board = BoardGraph::standard();
        board.place(SeatId::new(1), at(17, 5)).unwrap();
        board.clear_occupancy();

        assert!(board.position_of(SeatId::new(1)).is_none());
        assert!(board.cells().all(|c| c.occupant().is_none()));
    }

    #[test]
    fn test_layout_shape_mismatch() {
        let layout = BoardLayout {
            rows: 2,
            cols: 2,
            cells: vec![CellDescriptor::open()],
            exits: vec![],
            entrances: vec![],
            spawns: vec![],
        };
        assert_eq!(
            BoardGraph::from_layout(&layout).unwrap_err(),
            GameError::LayoutShape { rows: 2, cols: 2, cells: 1 }
        );
    }

    #[test]
    fn test_unknown_room_code() {
        let layout = BoardLayout {
            rows: 1,
            cols: 1,
            cells: vec![CellDescriptor::new(KindTag::Room, "ZZ")],
            exits: vec![],
            entrances: vec![],
            spawns: vec![],
        };
        assert_eq!(
            BoardGraph::from_layout(&layout).unwrap_err(),
            GameError::UnknownRoomCode("ZZ".to_string())
        );
    }

    #[test]
    fn test_symbols_grid() {
        let mut board = BoardGraph::standard();
        board.place(SeatId::new(3), at(0, 5)).unwrap();
        let symbols = board.symbols();

        assert_eq!(symbols.len(), 18);
        assert_eq!(symbols[0][0], "KC");
        assert_eq!(symbols[0][5], "P3");
        assert_eq!(symbols[2][5], "dw");
        assert_eq!(symbols[4][17], "NL");
    }

    #[test]
    fn test_steps_ignore_occupancy() {
        let mut board = BoardGraph::standard();
        board.place(SeatId::new(1), at(16, 5)).unwrap();
        board.place(SeatId::new(2), at(17, 5)).unwrap();

        assert!(board.step_move(SeatId::new(2), at(16, 5)));
        assert_eq!(board.position_of(SeatId::new(1)), Some(at(16, 5)));
        assert_eq!(board.cell(at(16, 5)).unwrap().occupant(), Some(SeatId::new(2)));

        assert!(board.step_move(SeatId::new(2), at(15, 5)));
        assert_eq!(board.cell(at(16, 5)).unwrap().occupant(), Some(SeatId::new(1)));
    }

    #[test]
    fn test_shared_cell_empties_only_when_last_seat_leaves() {
        let mut board = BoardGraph::standard();
        for seat in 1..=3u8 {
            board.place(SeatId::new(seat), at(16, 5)).unwrap();
        }
        assert_eq!(board.cell(at(16, 5)).unwrap().occupant(), Some(SeatId::new(3)));

        assert!(board.step_move(SeatId::new(3), at(15, 5)));
        assert!(board.step_move(SeatId::new(1), at(17, 5)));
        assert_eq!(board.cell(at(16, 5)).unwrap().occupant(), Some(SeatId::new(2)));

        assert!(board.step_move(SeatId::new(2), at(15, 5)));
        assert_eq!(board.cell(at(16, 5)).unwrap().occupant(), None);
        assert_eq!(board.cell(at(15, 5)).unwrap().occupant(), Some(SeatId::new(2)));
    }
}
