//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Opaque identifier supplied by the driver (user id, bot name, ...).
//!
//! ## Seat
//!
//! Bondtolva is strictly two-handed. A `Seat` is the fixed table position
//! (0 or 1) a player occupies for the whole game.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by a two-element array. Supports iteration
//! and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Caller-supplied player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Table position. Seat 0 is the elder hand of the first round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    pub const FIRST: Seat = Seat(0);
    pub const SECOND: Seat = Seat(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent's seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        Seat(1 - self.0)
    }

    /// Both seats in table order.
    pub fn all() -> impl Iterator<Item = Seat> {
        [Seat::FIRST, Seat::SECOND].into_iter()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data with O(1) access.
///
/// ## Example
///
/// ```
/// use bondtolva::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_value(0);
/// scores[Seat::SECOND] += 2;
///
/// assert_eq!(scores[Seat::FIRST], 0);
/// assert_eq!(scores[Seat::SECOND], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::FIRST), factory(Seat::SECOND)],
        }
    }

    /// Create a SeatMap from values in seat order.
    pub fn from_array(data: [T; 2]) -> Self {
        Self { data }
    }

    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::all().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::all().zip(self.data.iter_mut())
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
