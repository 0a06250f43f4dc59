use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The board needs at least one row.
    #[error("invalid grid dimension: {0}")]
    InvalidDimension(usize),

    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// The board is already dark; the run is over.
    #[error("game already terminated after {selections} selections")]
    GameAlreadyTerminated { selections: u64 },
}
