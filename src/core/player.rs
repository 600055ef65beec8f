//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. Seats are numbered from 1 in the order they
//! were assigned at setup and are never renumbered, even after a seat is
//! eliminated.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Largest table the fixed spawn data supports.
pub const MAX_SEATS: usize = 6;

/// Seat identifier, 1-based.
///
/// `SeatId(1)` always takes the first turn of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Zero-based storage index of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all seats of a table with `seat_count` seats.
    ///
    /// ```
    /// use rust_cluedo::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], SeatId::new(1));
    /// assert_eq!(seats[3], SeatId::new(4));
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (1..=seat_count as u8).map(SeatId)
    }

    /// The seat after this one, wrapping from `seat_count` back to 1.
    #[must_use]
    pub const fn next(self, seat_count: usize) -> Self {
        if self.0 as usize >= seat_count {
            Self(1)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count < 255, "Fewer than 255 seats supported");

        let data = SeatId::all(seat_count).map(factory).collect();
        Self { data }
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a seat's data, or `None` if the seat is not at this table.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> Option<&T> {
        if seat.0 == 0 {
            return None;
        }
        self.data.get(seat.index())
    }

    /// Get a seat's data mutably, or `None` if the seat is not at this table.
    pub fn get_mut(&mut self, seat: SeatId) -> Option<&mut T> {
        if seat.0 == 0 {
            return None;
        }
        self.data.get_mut(seat.index())
    }

    /// Iterate over (SeatId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8 + 1), v))
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
