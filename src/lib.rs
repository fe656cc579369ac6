//! # Introduction
//!
//! HanoiTTY computes the canonical optimal solution to the Tower of Hanoi and
//! replays it in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//! The solution is planned once up front; playback then walks the move list
//! forward and backward, automatically on a timer or manually by key.
//!
//! ## Pipeline
//!
//! ```text
//! Disk count → Planner → Move list → Player → TUI
//! ```
//!
//! 1. [`planner`] — pure recursive solver producing the ordered move list
//!    (exactly `2^n - 1` entries).
//! 2. [`puzzle`] — the board: three rods of stacked disks, plus the
//!    single-disk relocation they are mutated through.
//! 3. [`playback`] — the session engine: replay position, play/pause state,
//!    speed, and the cooperative clock driving auto-play.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Controls
//!
//! Space toggles auto-play; arrow keys step one move either way; digits step
//! several moves at once; Enter and Backspace jump to either end; `+`/`-`
//! resize the puzzle; `]`/`[` change speed; `r` resets; `q` quits.

pub mod planner;
pub mod playback;
pub mod puzzle;
pub mod ui;
