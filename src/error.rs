use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Read outside the current extent of a matrix dataset.
    #[error("matrix index out of bounds: row={row}, col={col} for extent {rows}x{cols}")]
    IndexOutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
