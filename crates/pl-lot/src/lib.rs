//! `pl-lot` — the parking lot and the things parked in it.
//!
//! The simulation engine only talks to a lot through the [`ParkingLot`]
//! trait.  [`CapacityLot`] is the stock implementation: a fixed number of
//! interchangeable spots kept in parking order.
//!
//! | Module    | Contents                               |
//! |-----------|----------------------------------------|
//! | [`car`]   | `Plate`, `Car`, `Spot`                 |
//! | [`lot`]   | `ParkingLot` trait, `CapacityLot`      |
//! | [`error`] | `LotError`, `LotResult`                |

pub mod car;
pub mod error;
pub mod lot;


pub use car::{Car, Plate, Spot};
pub use error::{LotError, LotResult};
pub use lot::{CapacityLot, ParkingLot};
