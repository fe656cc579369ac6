//! Playback engine for the Tower of Hanoi
//!
//! This module owns a session and replays the planned solution over it:
//! - [`controller`]: the [`Player`] session state machine and speed presets
//! - [`timer`]: cooperative [`timer::Ticker`] and [`timer::Stopwatch`]
//! - [`errors`]: the [`SessionError`] taxonomy
//!
//! # Execution Model
//!
//! Everything is single threaded. The UI event loop polls input with a short
//! timeout and calls [`Player::tick`] with the current time once per
//! iteration; the engine applies however many moves have come due since the
//! last call. Because the clock is passed in rather than read internally, the
//! whole engine runs under simulated time in tests.

pub mod controller;
pub mod errors;
pub mod timer;

pub use controller::{Player, SpeedPreset, DEFAULT_SPEED, MAX_DISKS, MIN_DISKS, SPEED_PRESETS};
pub use errors::SessionError;
