//! The `ParkingLot` trait and the stock capacity-bounded lot.

use log::trace;
use pl_core::Tick;

use crate::{Car, LotError, LotResult, Spot};

/// What the simulation engine needs from a parking lot.
///
/// Occupied spots are ordered and addressed by index `0..occupancy()`.
/// Implementations must keep `occupancy() <= capacity()` at all times.
pub trait ParkingLot {
    /// Maximum number of cars the lot can hold.
    fn capacity(&self) -> usize;

    /// Number of currently occupied spots.
    fn occupancy(&self) -> usize;

    /// The occupied spot at `index`, or `None` past the end.
    fn spot_at(&self, index: usize) -> Option<&Spot>;

    /// Admission test for `car` at `now`.
    ///
    /// May update internal bookkeeping (e.g. refusal counters) but never
    /// changes occupancy; only [`park`][Self::park] does that.
    fn attempt_parking(&mut self, car: &Car, now: Tick) -> bool;

    /// Take ownership of `car`, tagging its spot with `now` as the
    /// parking-start tick.
    ///
    /// # Errors
    /// [`LotError::Full`] if there is no room.
    fn park(&mut self, car: Car, now: Tick) -> LotResult<&Spot>;

    /// Remove and return the spot at `index`.  Later spots shift down by one.
    ///
    /// # Errors
    /// [`LotError::IndexOutOfBounds`] if `index >= occupancy()`.
    fn remove(&mut self, index: usize) -> LotResult<Spot>;

    fn is_full(&self) -> bool {
        self.occupancy() >= self.capacity()
    }
}

// ── CapacityLot ───────────────────────────────────────────────────────────────

/// A lot of `capacity` interchangeable spots, kept in parking order.
///
/// Admission succeeds whenever a spot is free.  Refused admission attempts are
/// counted so reports can show how often the entrance was blocked.
#[derive(Debug)]
pub struct CapacityLot {
    capacity: usize,
    spots:    Vec<Spot>,
    refused:  u64,
}

impl CapacityLot {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            spots:   Vec::with_capacity(capacity),
            refused: 0,
        }
    }

    /// All occupied spots, in parking order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// How many `attempt_parking` calls have been refused so far.
    pub fn refused_attempts(&self) -> u64 {
        self.refused
    }
}

impl ParkingLot for CapacityLot {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn occupancy(&self) -> usize {
        self.spots.len()
    }

    fn spot_at(&self, index: usize) -> Option<&Spot> {
        self.spots.get(index)
    }

    fn attempt_parking(&mut self, car: &Car, now: Tick) -> bool {
        if self.spots.len() < self.capacity {
            return true;
        }
        self.refused += 1;
        trace!("{now}: lot full, refusing {car}");
        false
    }

    fn park(&mut self, car: Car, now: Tick) -> LotResult<&Spot> {
        if self.spots.len() >= self.capacity {
            return Err(LotError::Full { capacity: self.capacity });
        }
        self.spots.push(Spot::new(car, now));
        let index = self.spots.len() - 1;
        Ok(&self.spots[index])
    }

    fn remove(&mut self, index: usize) -> LotResult<Spot> {
        if index >= self.spots.len() {
            return Err(LotError::IndexOutOfBounds {
                index,
                occupancy: self.spots.len(),
            });
        }
        Ok(self.spots.remove(index))
    }
}
