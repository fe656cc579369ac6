//! Puzzle state for the Tower of Hanoi
//!
//! This module provides the world model the playback engine mutates:
//! - [`disk`]: a sized, immutable unit
//! - [`rod`]: an ordered stack of disks, top = last element
//! - [`board`]: the three rods plus the single-disk relocation operation
//!
//! # Stacking Invariant
//!
//! On every rod, disk sizes strictly decrease from bottom to top. The planner's
//! move sequence preserves this by construction, so the board does not verify
//! it per move; the board only refuses structurally impossible requests
//! (popping an empty rod, indexing a rod that does not exist).

pub mod board;
pub mod disk;
pub mod rod;

pub use board::Board;
pub use disk::Disk;
pub use rod::Rod;

/// Number of rods on the board
pub const ROD_COUNT: usize = 3;
