//! The playback session engine
//!
//! [`Player`] owns all mutable session state: the board, the planned move
//! list, the current position in it, the speed, and the auto-play clock.
//! Callers never touch the board directly; every mutation goes through the
//! operations here.
//!
//! # Play/Pause State Machine
//!
//! Playback is either stopped or playing, and starts stopped. It leaves the
//! playing state on: reaching the end of the move list, [`Player::pause`],
//! [`Player::reset`], or [`Player::set_disk_count`]. It enters the playing
//! state only through [`Player::play`], and only when moves remain.

use super::errors::SessionError;
use super::timer::{Stopwatch, Ticker};
use crate::planner::{self, Move};
use crate::puzzle::Board;
use std::time::{Duration, Instant};

/// Smallest disk count a session accepts
pub const MIN_DISKS: usize = 1;

/// Largest disk count a session accepts.
///
/// Tighter than the planner's own limit: 16 disks is 65535 moves, already far
/// beyond what anyone will sit through in a terminal.
pub const MAX_DISKS: usize = 16;

/// Milliseconds per move for a fresh session
pub const DEFAULT_SPEED: Duration = Duration::from_millis(1000);

/// A named playback speed
#[derive(Debug, Clone, Copy)]
pub struct SpeedPreset {
    pub label: &'static str,
    pub interval: Duration,
}

/// The published speed presets, slowest first
pub const SPEED_PRESETS: [SpeedPreset; 4] = [
    SpeedPreset {
        label: "Slow",
        interval: Duration::from_millis(2000),
    },
    SpeedPreset {
        label: "Medium",
        interval: Duration::from_millis(1000),
    },
    SpeedPreset {
        label: "Fast",
        interval: Duration::from_millis(500),
    },
    SpeedPreset {
        label: "Very Fast",
        interval: Duration::from_millis(200),
    },
];

/// A playback session: board, move list, position, and clock
#[derive(Debug, Clone)]
pub struct Player {
    /// Disk count the current plan was built for
    disk_count: usize,

    /// Current rod contents
    board: Board,

    /// The full planned solution, replayed by index
    moves: Vec<Move>,

    /// Number of moves already applied; `moves[move_index]` is next
    move_index: usize,

    /// Interval between auto-play moves
    speed: Duration,

    /// Auto-play deadline; armed exactly while playing
    ticker: Ticker,

    /// Elapsed-time accumulator; runs exactly while playing
    stopwatch: Stopwatch,
}

impl Player {
    /// Create a session with all disks on rod 0 and playback stopped
    pub fn new(disk_count: usize) -> Result<Self, SessionError> {
        let moves = Self::validated_plan(disk_count)?;
        Ok(Player {
            disk_count,
            board: Board::new(disk_count),
            moves,
            move_index: 0,
            speed: DEFAULT_SPEED,
            ticker: Ticker::new(DEFAULT_SPEED),
            stopwatch: Stopwatch::new(),
        })
    }

    /// Range-check `disk_count`, then plan its solution
    fn validated_plan(disk_count: usize) -> Result<Vec<Move>, SessionError> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&disk_count) {
            return Err(SessionError::DiskCountOutOfRange {
                requested: disk_count,
                min: MIN_DISKS,
                max: MAX_DISKS,
            });
        }
        planner::plan(disk_count).map_err(|e| SessionError::PlanFailed {
            message: e.to_string(),
        })
    }

    /// Rebuild the session for a new disk count.
    ///
    /// Always a full reset: playback stops, the board reseeds, the position
    /// and the clock go back to zero. The speed setting survives. On error
    /// the existing session is left untouched.
    pub fn set_disk_count(&mut self, disk_count: usize) -> Result<(), SessionError> {
        let moves = Self::validated_plan(disk_count)?;
        self.disk_count = disk_count;
        self.board = Board::new(disk_count);
        self.moves = moves;
        self.move_index = 0;
        self.ticker.cancel();
        self.stopwatch.reset();
        Ok(())
    }

    /// Rewind the session to its starting configuration.
    ///
    /// Stops playback, reseeds the board, and zeroes the position and the
    /// clock. The move list is unchanged; the disk count stays the same.
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.board = Board::new(self.disk_count);
        self.move_index = 0;
        self.stopwatch.reset();
    }

    /// Apply the next planned move.
    ///
    /// Returns `Ok(false)` when already at the end of the move list. A
    /// [`SessionError::RodUnderflow`] means the board no longer matches the
    /// plan, which is an internal invariant violation.
    pub fn step_forward(&mut self) -> Result<bool, SessionError> {
        let mv = match self.moves.get(self.move_index) {
            Some(mv) => *mv,
            None => return Ok(false),
        };
        self.board
            .move_top(mv.from, mv.to)
            .map_err(|message| SessionError::RodUnderflow {
                message,
                move_index: self.move_index,
            })?;
        self.move_index += 1;
        Ok(true)
    }

    /// Undo the most recently applied move.
    ///
    /// The exact mirror of [`Player::step_forward`]: the disk moves back from
    /// the move's `to` rod to its `from` rod. Returns `Ok(false)` when
    /// already at the start.
    pub fn step_backward(&mut self) -> Result<bool, SessionError> {
        if self.move_index == 0 {
            return Ok(false);
        }
        let mv = self.moves[self.move_index - 1];
        self.board
            .move_top(mv.to, mv.from)
            .map_err(|message| SessionError::RodUnderflow {
                message,
                move_index: self.move_index - 1,
            })?;
        self.move_index -= 1;
        Ok(true)
    }

    /// Start auto-play; no-op if already playing or nothing remains to play
    pub fn play(&mut self, now: Instant) {
        if self.is_playing() || self.is_finished() {
            return;
        }
        self.ticker.arm(now);
        self.stopwatch.resume(now);
    }

    /// Stop auto-play; idempotent
    pub fn pause(&mut self, now: Instant) {
        self.ticker.cancel();
        self.stopwatch.pause(now);
    }

    /// Flip between playing and paused
    pub fn toggle(&mut self, now: Instant) {
        if self.is_playing() {
            self.pause(now);
        } else {
            self.play(now);
        }
    }

    /// Change the interval between auto-play moves.
    ///
    /// If currently playing, the timer restarts at the new cadence without
    /// losing the position. Zero is rejected.
    pub fn set_speed(&mut self, speed: Duration, now: Instant) -> Result<(), SessionError> {
        if speed.is_zero() {
            return Err(SessionError::ZeroSpeed);
        }
        self.speed = speed;
        self.ticker.reschedule(speed, now);
        Ok(())
    }

    /// Advance auto-play to `now`, applying one move per elapsed interval.
    ///
    /// Safe to call every event-loop iteration; does nothing unless playing
    /// and at least one interval has elapsed. Reaching the end of the move
    /// list pauses the session. Returns how many moves were applied.
    pub fn tick(&mut self, now: Instant) -> Result<usize, SessionError> {
        let mut applied = 0;
        while self.ticker.fire(now) {
            match self.step_forward() {
                Ok(true) => {
                    applied += 1;
                    if self.is_finished() {
                        self.pause(now);
                    }
                }
                Ok(false) => {
                    self.pause(now);
                }
                Err(e) => {
                    self.pause(now);
                    return Err(e);
                }
            }
        }
        Ok(applied)
    }

    // ========== Getter methods for UI ==========

    /// Check whether auto-play is running
    pub fn is_playing(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Check whether every planned move has been applied
    pub fn is_finished(&self) -> bool {
        self.move_index >= self.moves.len()
    }

    /// Get the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the planned move list
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get the number of moves already applied
    pub fn move_index(&self) -> usize {
        self.move_index
    }

    /// Get the length of the planned move list
    pub fn total_moves(&self) -> usize {
        self.moves.len()
    }

    /// Get the disk count the session was built for
    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// Get the interval between auto-play moves
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Get the theoretical minimum move count for this disk count
    pub fn minimum_moves(&self) -> u64 {
        planner::minimum_move_count(self.disk_count)
    }

    /// Progress through the move list as a rounded percentage (0 to 100)
    pub fn progress_percent(&self) -> u8 {
        if self.moves.is_empty() {
            return 0;
        }
        let fraction = self.move_index as f64 / self.moves.len() as f64;
        (fraction * 100.0).round() as u8
    }

    /// Wall-clock time spent playing, paused stretches excluded
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.stopwatch.elapsed(now)
    }
}
