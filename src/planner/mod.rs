//! Tower of Hanoi move planner
//!
//! This module computes the canonical solution for a given disk count:
//! - [`moves`]: the [`Move`] pair (from rod, to rod) and rod labeling
//! - [`solve`]: the recursive planner producing the full ordered sequence
//!
//! # Determinism
//!
//! [`plan`] is a pure function: the same disk count always yields the same
//! sequence, exactly `2^n - 1` moves long. The playback engine replays the
//! sequence by index and never asks the planner for anything twice.

pub mod moves;
pub mod solve;

pub use moves::{rod_label, Move};
pub use solve::{minimum_move_count, plan, PlanError, MAX_DISKS};
