// Move definitions for the Tower of Hanoi planner

use std::fmt;

/// A single relocation of the top disk of one rod to another rod
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", rod_label(self.from), rod_label(self.to))
    }
}

/// Get the display letter for a rod index (0 = A, 1 = B, 2 = C)
pub fn rod_label(index: usize) -> char {
    match index {
        0 => 'A',
        1 => 'B',
        2 => 'C',
        _ => '?',
    }
}
