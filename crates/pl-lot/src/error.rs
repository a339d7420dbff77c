use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LotError {
    #[error("lot is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("no occupied spot at index {index} (occupancy {occupancy})")]
    IndexOutOfBounds { index: usize, occupancy: usize },
}

pub type LotResult<T> = Result<T, LotError>;
