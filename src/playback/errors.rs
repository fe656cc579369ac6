//! Error types for the playback engine
//!
//! This module defines [`SessionError`], which represents all errors a
//! playback session can surface. Invalid-argument variants come from user
//! input reaching the engine; [`SessionError::RodUnderflow`] is an internal
//! invariant violation and means the move list and the board have diverged.

use std::fmt;

/// Errors from playback session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Disk count outside the range the engine supports
    DiskCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// A speed of zero milliseconds per move was requested
    ZeroSpeed,

    /// The move planner refused the request
    PlanFailed { message: String },

    /// A move tried to pop a disk off an empty rod
    RodUnderflow { message: String, move_index: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::DiskCountOutOfRange {
                requested,
                min,
                max,
            } => {
                write!(
                    f,
                    "disk count {} is out of range (must be {} to {})",
                    requested, min, max
                )
            }
            SessionError::ZeroSpeed => {
                write!(f, "speed must be at least 1 ms per move")
            }
            SessionError::PlanFailed { message } => {
                write!(f, "planning failed: {}", message)
            }
            SessionError::RodUnderflow {
                message,
                move_index,
            } => {
                write!(f, "cannot apply move {}: {}", move_index + 1, message)
            }
        }
    }
}

impl std::error::Error for SessionError {}
