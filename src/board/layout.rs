//! Board topology as declarative data.
//!
//! A [`BoardLayout`] is everything needed to build a
//! [`BoardGraph`](super::BoardGraph): a row-major grid of cell descriptors,
//! the exits from each room, the corridor cells that lead into rooms, and
//! where each seat starts. The two door tables are authored independently;
//! nothing derives one from the other, so keeping them consistent is up to
//! whoever writes the layout.
//!
//! `BoardLayout::standard()` is the fixed 18×18 board:
//!
//! ```text
//!      0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17
//!  0  KC KC KC KC KC __ BR BR BR BR BR BR __ CV CV CV CV CV
//!  1  KC KC KC KC KC __ BR BR BR BR BR BR __ CV CV CV CV CV
//!  2  KC KC KC KC KC dw BR BR BR BR BR BR dw CV CV CV CV CV
//!  3  __ __ __ dw __ __ BR BR BR BR BR BR __ CV CV CV CV CV
//!  4  __ __ __ __ __ __ __ dw __ __ dw __ __ __ dw __ __ NL
//!  5  __ __ __ __ __ __ __ __ __ __ __ __ __ dw BL BL BL BL
//!  6  __ __ __ __ __ __ __ CR CR CR CR CR __ __ BL BL BL BL
//!  7  DR DR DR DR DR dw __ CR CR CR CR CR __ __ BL BL BL BL
//!  8  DR DR DR DR DR __ __ CR CR CR CR CR __ __ __ __ dw __
//!  9  DR DR DR DR DR __ __ CR CR CR CR CR __ __ __ dw __ __
//! 10  DR DR DR DR DR __ __ CR CR CR CR CR __ __ LB LB LB LB
//! 11  __ __ __ dw __ __ __ __ __ __ __ __ __ dw LB LB LB LB
//! 12  __ __ __ __ __ __ __ __ __ dw __ __ __ __ LB LB LB LB
//! 13  NL __ __ __ dw __ __ HL HL HL HL HL __ __ __ __ __ __
//! 14  LN LN LN LN LN __ __ HL HL HL HL HL dw __ dw __ __ __
//! 15  LN LN LN LN LN __ __ HL HL HL HL HL __ SD SD SD SD SD
//! 16  LN LN LN LN LN __ __ __ __ __ __ __ __ SD SD SD SD SD
//! 17  LN LN LN LN LN __ __ __ __ __ __ __ NL SD SD SD SD SD
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::cell::Coord;
use crate::cards::{Room, Suspect, ROOM_COUNT};
use crate::core::{GameError, SeatId, MAX_SEATS};

macro_rules! c {
    ($row:expr, $col:expr) => {
        Coord { row: $row, col: $col }
    };
}

/// Coarse kind tag of a cell descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindTag {
    /// `RM`: part of a room; the code names the room.
    Room,
    /// `NL`: unusable cell.
    Void,
    /// `PA`: open play area.
    Open,
}

impl KindTag {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            KindTag::Room => "RM",
            KindTag::Void => "NL",
            KindTag::Open => "PA",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<KindTag> {
        match tag {
            "RM" => Some(KindTag::Room),
            "NL" => Some(KindTag::Void),
            "PA" => Some(KindTag::Open),
            _ => None,
        }
    }
}

/// One cell of a layout: kind tag plus a short code.
///
/// For `Room` the code is a two-letter room code; otherwise it is a free
/// label used only for display. The textual form is `KIND.CODE`, e.g.
/// `RM.KC` or `PA.__`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellDescriptor {
    pub tag: KindTag,
    pub code: String,
}

impl CellDescriptor {
    pub fn new(tag: KindTag, code: impl Into<String>) -> Self {
        Self {
            tag,
            code: code.into(),
        }
    }

    #[must_use]
    pub fn room(room: Room) -> Self {
        Self::new(KindTag::Room, room.code())
    }

    #[must_use]
    pub fn open() -> Self {
        Self::new(KindTag::Open, "__")
    }

    #[must_use]
    pub fn void(label: &str) -> Self {
        Self::new(KindTag::Void, label)
    }
}

impl FromStr for CellDescriptor {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, code) = s
            .split_once('.')
            .ok_or_else(|| GameError::MalformedDescriptor(s.to_string()))?;
        if code.is_empty() {
            return Err(GameError::MalformedDescriptor(s.to_string()));
        }
        let tag = KindTag::from_tag(tag).ok_or_else(|| GameError::UnknownKindTag(tag.to_string()))?;
        Ok(Self::new(tag, code))
    }
}

impl std::fmt::Display for CellDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tag.tag(), self.code)
    }
}

/// Where a seat starts and which suspect it portrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub coord: Coord,
    pub suspect: Suspect,
}

/// Exits from a room: every cell of the room gets an edge to each of these.
///
/// Includes the secret stairwells between corner rooms.
pub static ROOM_EXITS: [(Room, &[Coord]); ROOM_COUNT] = [
    (Room::Kitchen, &[c!(3, 3), c!(16, 16)]),
    (Room::BallRoom, &[c!(2, 5), c!(4, 7), c!(4, 10), c!(2, 12)]),
    (Room::Conservatory, &[c!(4, 14), c!(16, 1)]),
    (Room::BilliardRoom, &[c!(5, 13), c!(8, 16)]),
    (Room::Library, &[c!(9, 15), c!(11, 13)]),
    (Room::Study, &[c!(14, 14), c!(1, 1)]),
    (Room::Hall, &[c!(14, 12), c!(12, 9)]),
    (Room::Lounge, &[c!(13, 4), c!(1, 16)]),
    (Room::DiningRoom, &[c!(11, 3), c!(7, 5)]),
];

/// Entrances: (corridor cell, room cell it leads into).
pub static ROOM_ENTRANCES: [(Coord, Coord); 16] = [
    (c!(3, 3), c!(2, 3)),
    (c!(2, 5), c!(2, 6)),
    (c!(4, 7), c!(3, 7)),
    (c!(4, 10), c!(3, 10)),
    (c!(2, 12), c!(2, 11)),
    (c!(4, 14), c!(3, 14)),
    (c!(5, 13), c!(5, 14)),
    (c!(8, 16), c!(7, 16)),
    (c!(9, 15), c!(10, 15)),
    (c!(11, 13), c!(11, 14)),
    (c!(14, 14), c!(15, 14)),
    (c!(14, 12), c!(14, 11)),
    (c!(12, 9), c!(13, 9)),
    (c!(13, 4), c!(14, 4)),
    (c!(11, 3), c!(10, 3)),
    (c!(7, 5), c!(7, 4)),
];

/// Seat spawns, seat 1 first.
pub static SPAWNS: [Spawn; MAX_SEATS] = [
    Spawn { coord: c!(17, 5), suspect: Suspect::MissScarlett },
    Spawn { coord: c!(12, 0), suspect: Suspect::ColonelMustard },
    Spawn { coord: c!(0, 5), suspect: Suspect::MrsWhite },
    Spawn { coord: c!(0, 12), suspect: Suspect::ReverendGreen },
    Spawn { coord: c!(9, 17), suspect: Suspect::MrsPeacock },
    Spawn { coord: c!(13, 17), suspect: Suspect::ProfessorPlum },
];

/// Inclusive row and column spans of each room on the standard board.
static ROOM_AREAS: [(Room, (usize, usize), (usize, usize)); ROOM_COUNT] = [
    (Room::Kitchen, (0, 2), (0, 4)),
    (Room::BallRoom, (0, 3), (6, 11)),
    (Room::Conservatory, (0, 3), (13, 17)),
    (Room::BilliardRoom, (5, 7), (14, 17)),
    (Room::Library, (10, 12), (14, 17)),
    (Room::Study, (15, 17), (13, 17)),
    (Room::Hall, (13, 15), (7, 11)),
    (Room::Lounge, (14, 17), (0, 4)),
    (Room::DiningRoom, (7, 10), (0, 4)),
];

/// The centre block where the envelope sits.
static CENTRE_AREA: ((usize, usize), (usize, usize)) = ((6, 10), (7, 11));

/// Stray unusable cells at the board edge.
static EDGE_VOIDS: [Coord; 3] = [c!(4, 17), c!(13, 0), c!(17, 12)];

/// Standard board side length.
pub const STANDARD_SIZE: usize = 18;

/// Full topology input for building a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, `rows * cols` entries.
    pub cells: Vec<CellDescriptor>,
    pub exits: Vec<(Room, Vec<Coord>)>,
    pub entrances: Vec<(Coord, Coord)>,
    /// Seat `n` spawns at `spawns[n - 1]`.
    pub spawns: Vec<Spawn>,
}

impl BoardLayout {
    /// The fixed 18×18 reference board.
    #[must_use]
    pub fn standard() -> Self {
        let (rows, cols) = (STANDARD_SIZE, STANDARD_SIZE);
        let mut cells = vec![CellDescriptor::open(); rows * cols];

        for (room, (r0, r1), (c0, c1)) in ROOM_AREAS {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    cells[row * cols + col] = CellDescriptor::room(room);
                }
            }
        }

        let ((r0, r1), (c0, c1)) = CENTRE_AREA;
        for row in r0..=r1 {
            for col in c0..=c1 {
                cells[row * cols + col] = CellDescriptor::void("CR");
            }
        }
        for coord in EDGE_VOIDS {
            cells[coord.row * cols + coord.col] = CellDescriptor::void("NL");
        }

        Self {
            rows,
            cols,
            cells,
            exits: ROOM_EXITS
                .iter()
                .map(|(room, exits)| (*room, exits.to_vec()))
                .collect(),
            entrances: ROOM_ENTRANCES.to_vec(),
            spawns: SPAWNS.to_vec(),
        }
    }

    /// Descriptor at `coord`, if inside the grid.
    #[must_use]
    pub fn descriptor(&self, coord: Coord) -> Option<&CellDescriptor> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        self.cells.get(coord.row * self.cols + coord.col)
    }

    /// Exit list for `room`; empty if the layout has none.
    #[must_use]
    pub fn exits_of(&self, room: Room) -> &[Coord] {
        self.exits
            .iter()
            .find(|(r, _)| *r == room)
            .map(|(_, exits)| exits.as_slice())
            .unwrap_or(&[])
    }

    /// Spawn for `seat`.
    pub fn spawn(&self, seat: SeatId) -> Result<Spawn, GameError> {
        if seat.0 == 0 {
            return Err(GameError::MissingSpawn(seat));
        }
        self.spawns
            .get(seat.index())
            .copied()
            .ok_or(GameError::MissingSpawn(seat))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::standard()
    }
}
