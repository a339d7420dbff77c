use pl_core::{CoreError, Tick};
use pl_lot::LotError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// `simulate` requires a fresh engine whose clock has never moved.
    #[error("simulation must start at tick 0, clock is at {0}")]
    ClockNotZero(Tick),

    #[error("simulation has already been run")]
    AlreadySimulated,

    #[error("simulation finished after {steps} steps")]
    Finished { steps: u64 },

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("lot error: {0}")]
    Lot(#[from] LotError),
}

pub type SimResult<T> = Result<T, SimError>;
