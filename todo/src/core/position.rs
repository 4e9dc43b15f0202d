//! Conversion from user-facing 1-based positions to 0-based indices.

use std::fmt;

/// Why a user-entered position was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Nothing was entered.
    Empty,
    /// Input is not a whole number.
    NotANumber(String),
    /// Number is outside `1..=count`.
    OutOfRange { position: i64, count: usize },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::Empty => f.write_str("no item number given"),
            PositionError::NotANumber(raw) => write!(f, "'{raw}' is not a number"),
            PositionError::OutOfRange { count: 0, .. } => f.write_str("the list is empty"),
            PositionError::OutOfRange { position, count } => {
                write!(f, "item {position} does not exist (choose 1-{count})")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Parse a 1-based position and return the 0-based index if it addresses
/// one of `count` items.
pub fn parse_position(input: &str, count: usize) -> Result<usize, PositionError> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(PositionError::Empty);
    }
    let position: i64 = raw
        .parse()
        .map_err(|_| PositionError::NotANumber(raw.to_string()))?;
    to_index(position, count)
}

/// Validate an already-numeric 1-based position against `count`.
pub fn to_index(position: i64, count: usize) -> Result<usize, PositionError> {
    let out_of_range = PositionError::OutOfRange { position, count };
    if position < 1 {
        return Err(out_of_range);
    }
    let index = usize::try_from(position - 1).map_err(|_| out_of_range.clone())?;
    if index >= count {
        return Err(out_of_range);
    }
    Ok(index)
}
