#![allow(dead_code)] // Complete API module, not all methods currently used
//! Rod implementation
//!
//! A rod is an ordered stack of disks, top = last element. Disk sizes are
//! strictly decreasing from bottom to top at all times; the planner's move
//! sequence guarantees this, the rod itself does not re-check it.

use super::disk::Disk;

/// One of the three vertical pegs holding a stack of disks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rod {
    disks: Vec<Disk>,
}

impl Rod {
    pub fn new() -> Self {
        Rod { disks: Vec::new() }
    }

    /// Push a disk onto the top of the rod
    pub fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    /// Pop the top disk off the rod
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Peek at the top disk without removing it
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Get the number of disks on the rod
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Check if the rod is empty
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Get all disks, bottom to top (for UI display)
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }
}
