use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    #[error("image dimensions cannot be zero")]
    ZeroDimension,

    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("width {width} does not divide the number of pixels {len}")]
    IndivisibleLength { len: usize, width: usize },

    #[error("pixel index {index} is out of range for {len} pixels")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("pixel ({x}, {y}) is out of range for a {width}x{height} image")]
    CoordinateOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("max_colors must be at least 1, got {0}")]
    InvalidTargetSize(usize),

    #[error("cannot compute the centroid of an empty color population")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, QuantizeError>;
