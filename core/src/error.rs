use std::ops::Range;

use thiserror::Error;

/// Everything that can stop a course from being generated.
///
/// All failures are local to one synchronous generation call; a failed call
/// produces no course and the caller is expected to ask for a different
/// terrain or difficulty.
#[derive(Debug, Error)]
pub enum CourseError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{what} spans rows {rows:?} x cols {cols:?}, outside grid {shape:?}")]
    OutOfBounds {
        what: &'static str,
        rows: Range<i64>,
        cols: Range<i64>,
        shape: (usize, usize),
    },

    #[error("variant `{variant}` assigned {assigned} of {expected} feature goals")]
    UnderfilledGoals {
        variant: &'static str,
        assigned: usize,
        expected: usize,
    },

    #[error("variant `{variant}` recorded more than {capacity} feature goals")]
    GoalOverflow {
        variant: &'static str,
        capacity: usize,
    },

    #[error("unknown terrain variant `{0}`")]
    UnknownVariant(String),

    #[error("malformed course config: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("could not serialise course config: {0}")]
    ConfigWrite(#[from] ron::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CourseError> = std::result::Result<T, E>;

impl CourseError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        CourseError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
