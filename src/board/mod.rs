//! Board representation.
//!
//! Contains the cell grid, the declarative layout tables it is built from,
//! and the graph that owns adjacency and token occupancy.

pub mod cell;
pub mod graph;
pub mod layout;

pub use cell::{Adjacency, Cell, CellKind, Coord};
pub use graph::BoardGraph;
pub use layout::{
    BoardLayout, CellDescriptor, KindTag, Spawn, ROOM_ENTRANCES, ROOM_EXITS, SPAWNS, STANDARD_SIZE,
};
