use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoardError {
    #[error("invalid dimensions: {width}x{height} pixels with a cell size of {cell_size}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        cell_size: usize,
    },
    #[error(
        "pattern of {pattern_width}x{pattern_height} does not fit in a {columns}x{rows} board"
    )]
    OutOfBounds {
        pattern_width: usize,
        pattern_height: usize,
        columns: usize,
        rows: usize,
    },
    #[error("pattern line {line} is {found} cells long, expected {expected}")]
    Format {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("live density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown flag {0}")]
    UnknownFlag(String),
}
