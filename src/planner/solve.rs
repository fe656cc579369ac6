//! The recursive move planner
//!
//! [`plan`] produces the canonical optimal solution for a given disk count:
//! exactly `2^n - 1` moves, fixed total order, no randomness. The planner is
//! pure and holds no state, so it can be re-invoked at any time.
//!
//! The sequence is built by the textbook recursion: move `n - 1` disks out of
//! the way, move the largest disk to the target, then move the `n - 1` disks
//! back on top of it.

use super::moves::Move;
use std::fmt;

/// Largest disk count the planner accepts.
///
/// The output grows as `2^n - 1`, so 20 disks already means a million-entry
/// move list. Anything above this is rejected rather than ground through.
pub const MAX_DISKS: usize = 20;

/// Errors from the move planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Disk count exceeds [`MAX_DISKS`]
    TooManyDisks { requested: usize, limit: usize },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::TooManyDisks { requested, limit } => {
                write!(f, "cannot plan {} disks: the limit is {}", requested, limit)
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// Compute the full move sequence for `disk_count` disks.
///
/// Rods are indexed 0 (source), 1 (auxiliary), 2 (target). A disk count of
/// zero yields an empty sequence, not an error; the puzzle is already solved.
pub fn plan(disk_count: usize) -> Result<Vec<Move>, PlanError> {
    if disk_count > MAX_DISKS {
        return Err(PlanError::TooManyDisks {
            requested: disk_count,
            limit: MAX_DISKS,
        });
    }

    let mut moves = Vec::with_capacity((1usize << disk_count) - 1);
    push_moves(disk_count, 0, 2, 1, &mut moves);
    Ok(moves)
}

/// Append the moves that relocate `n` disks from `from` to `to`
fn push_moves(n: usize, from: usize, to: usize, via: usize, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    push_moves(n - 1, from, via, to, moves);
    moves.push(Move::new(from, to));
    push_moves(n - 1, via, to, from, moves);
}

/// The minimal move count for `disk_count` disks (`2^n - 1`), saturating at `u64::MAX`
pub fn minimum_move_count(disk_count: usize) -> u64 {
    if disk_count >= 64 {
        return u64::MAX;
    }
    (1u64 << disk_count) - 1
}
