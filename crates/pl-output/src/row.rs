//! Plain data row types written by output backends.

/// Stage of a car's life an event row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarEventKind {
    Arrive,
    Park,
    /// Left its spot because it reached the maximum stay.
    DepartForced,
    /// Left its spot on a successful departure trial.
    DepartRandom,
    Exit,
}

impl CarEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CarEventKind::Arrive       => "arrive",
            CarEventKind::Park         => "park",
            CarEventKind::DepartForced => "depart_forced",
            CarEventKind::DepartRandom => "depart_random",
            CarEventKind::Exit         => "exit",
        }
    }
}

/// One step in one car's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarEventRow {
    pub tick:  u64,
    pub plate: String,
    pub kind:  CarEventKind,
    /// Ticks spent in the previous container: queue wait for `Park`, stay
    /// for departures, gate wait for `Exit`.  0 for `Arrive`.
    pub waited: u64,
}

/// Queue and lot levels at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub occupancy: u64,
    pub incoming:  u64,
    pub outgoing:  u64,
    pub departed:  u64,
}
