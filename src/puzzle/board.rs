//! Board implementation
//!
//! The board holds the three rods and applies single-disk relocations. It is
//! the only type that mutates rod contents; callers go through [`Board::move_top`].
//!
//! # Error Handling
//!
//! Methods return `Result<_, String>` for errors. This is an internal API and
//! the string errors are converted to `SessionError` at the playback boundary,
//! where the failing move index is known.

use super::disk::Disk;
use super::rod::Rod;
use super::ROD_COUNT;
use crate::planner::rod_label;

/// The three rods and their disks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rods: [Rod; ROD_COUNT],
    disk_count: usize,
}

impl Board {
    /// Create a board with all disks stacked on rod 0, largest at the bottom
    pub fn new(disk_count: usize) -> Self {
        let mut rods: [Rod; ROD_COUNT] = Default::default();
        for size in (1..=disk_count).rev() {
            rods[0].push(Disk::new(size));
        }
        Board { rods, disk_count }
    }

    /// Relocate the top disk of rod `from` onto rod `to`
    pub fn move_top(&mut self, from: usize, to: usize) -> Result<(), String> {
        if from >= ROD_COUNT || to >= ROD_COUNT {
            return Err(format!("rod index out of range: {} → {}", from, to));
        }
        let disk = self.rods[from]
            .pop()
            .ok_or_else(|| format!("rod {} is empty", rod_label(from)))?;
        self.rods[to].push(disk);
        Ok(())
    }

    /// Get all rods (for UI display)
    pub fn rods(&self) -> &[Rod; ROD_COUNT] {
        &self.rods
    }

    /// Check if every disk has reached the target rod
    pub fn is_solved(&self) -> bool {
        self.rods[2].len() == self.disk_count
    }
}
