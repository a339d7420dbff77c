//! Cars and the spots that hold them.

use std::fmt;

use pl_core::Tick;

// ── Plate ─────────────────────────────────────────────────────────────────────

/// A car's plate number.  Not guaranteed unique: two cars may share a plate.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Plate(String);

impl Plate {
    pub fn new(plate: impl Into<String>) -> Self {
        Plate(plate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// An immutable car.  Moved (never cloned) from container to container over
/// its lifetime: incoming queue → lot → outgoing queue → dropped.
#[derive(PartialEq, Eq, Debug)]
pub struct Car {
    plate: Plate,
}

impl Car {
    pub fn new(plate: Plate) -> Self {
        Self { plate }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "car[{}]", self.plate)
    }
}

// ── Spot ──────────────────────────────────────────────────────────────────────

/// A car paired with the tick it entered its current container.
///
/// | Container      | `timestamp` means            |
/// |----------------|------------------------------|
/// | incoming queue | arrival tick                 |
/// | lot            | parking-start tick           |
/// | outgoing queue | tick it left its lot spot    |
#[derive(PartialEq, Eq, Debug)]
pub struct Spot {
    car:       Car,
    timestamp: Tick,
}

impl Spot {
    pub fn new(car: Car, timestamp: Tick) -> Self {
        Self { car, timestamp }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn timestamp(&self) -> Tick {
        self.timestamp
    }

    /// Release the car so it can be re-tagged in its next container.
    pub fn into_car(self) -> Car {
        self.car
    }
}
