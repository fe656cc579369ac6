//! Main TUI application state and logic

use crate::playback::{Player, SPEED_PRESETS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Smallest disk count reachable from the keyboard
pub const MIN_DISKS: usize = 3;

/// Largest disk count reachable from the keyboard
pub const MAX_DISKS: usize = 10;

/// The main application state
pub struct App {
    /// The playback session
    pub player: Player,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Move list scroll offset (usize::MAX = follow the current move)
    pub move_scroll: usize,

    /// Index into [`SPEED_PRESETS`] for the active speed
    pub speed_index: usize,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a fresh playback session
    pub fn new(player: Player) -> Self {
        App {
            player,
            should_quit: false,
            status_message: String::from("Ready!"),
            move_scroll: usize::MAX,
            speed_index: 1, // Medium, matching the player's default speed
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance auto-play
            match self.player.tick(Instant::now()) {
                Ok(applied) if applied > 0 => {
                    self.move_scroll = usize::MAX;
                    self.status_message = if self.player.is_finished() {
                        "Playback complete".to_string()
                    } else {
                        "Playing...".to_string()
                    };
                }
                Ok(_) => {}
                Err(e) => {
                    self.status_message = format!("Error: {}", e);
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(pane_area);

        // Left column: Rods (top) | Moves (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(columns[0]);

        // Right column: Statistics (top) | Controls (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        // Render each pane
        super::panes::render_rods_pane(frame, left_rows[0], self.player.board());

        super::panes::render_moves_pane(
            frame,
            left_rows[1],
            self.player.moves(),
            self.player.move_index(),
            &mut self.move_scroll,
        );

        super::panes::render_stats_pane(
            frame,
            right_rows[0],
            &self.player,
            self.player.elapsed(Instant::now()),
            SPEED_PRESETS[self.speed_index].label,
        );

        super::panes::render_controls_pane(frame, right_rows[1]);

        // Render status bar
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.player.move_index(),
            self.player.total_moves(),
            self.player.is_playing(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.pause(now);
                let n = c.to_digit(10).unwrap() as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    match self.player.step_forward() {
                        Ok(true) => stepped += 1,
                        Ok(false) => break,
                        Err(e) => {
                            self.status_message = format!("Error: {}", e);
                            return;
                        }
                    }
                }
                self.status_message = format!("Stepped forward {} move(s)", stepped);
                self.move_scroll = usize::MAX;
            }
            KeyCode::Right => {
                self.player.pause(now);
                self.step_forward();
            }
            KeyCode::Left => {
                self.player.pause(now);
                self.step_backward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = now;
                    if !self.player.is_playing() && self.player.is_finished() {
                        self.status_message = "Already at the end - press r to reset".to_string();
                    } else {
                        self.player.toggle(now);
                        if self.player.is_playing() {
                            self.status_message = "Playing...".to_string();
                        } else {
                            self.status_message = "Paused".to_string();
                        }
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to end of the solution
                self.player.pause(now);
                while let Ok(true) = self.player.step_forward() {}
                self.status_message = "Jumped to end".to_string();
                self.move_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                // Jump to start of the solution
                self.player.pause(now);
                while let Ok(true) = self.player.step_backward() {}
                self.status_message = "Jumped to start".to_string();
                self.move_scroll = usize::MAX;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.player.reset();
                self.status_message = "Reset".to_string();
                self.move_scroll = usize::MAX;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_disk_count(1);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.change_disk_count(-1);
            }
            KeyCode::Char(']') => {
                self.change_speed(1, now);
            }
            KeyCode::Char('[') => {
                self.change_speed(-1, now);
            }
            KeyCode::Up => {
                if self.move_scroll != usize::MAX && self.move_scroll > 0 {
                    self.move_scroll -= 1;
                }
            }
            KeyCode::Down => {
                // The render pass clamps to the last page
                if self.move_scroll != usize::MAX {
                    self.move_scroll = self.move_scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    /// Step forward one move
    fn step_forward(&mut self) {
        match self.player.step_forward() {
            Ok(true) => {
                self.status_message = "Stepped forward".to_string();
                self.move_scroll = usize::MAX;
            }
            Ok(false) => {
                self.status_message = "Already at the end".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward one move
    fn step_backward(&mut self) {
        match self.player.step_backward() {
            Ok(true) => {
                self.status_message = "Stepped backward".to_string();
                self.move_scroll = usize::MAX;
            }
            Ok(false) => {
                self.status_message = "Already at the start".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Grow or shrink the puzzle, staying within the keyboard range
    fn change_disk_count(&mut self, delta: i64) {
        let requested = self.player.disk_count() as i64 + delta;
        if requested < MIN_DISKS as i64 {
            self.status_message = format!("Already at the minimum ({} disks)", MIN_DISKS);
            return;
        }
        if requested > MAX_DISKS as i64 {
            self.status_message = format!("Already at the maximum ({} disks)", MAX_DISKS);
            return;
        }

        match self.player.set_disk_count(requested as usize) {
            Ok(()) => {
                self.status_message = format!("{} disks", requested);
                self.move_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Move up or down the speed preset ladder
    fn change_speed(&mut self, delta: i64, now: Instant) {
        let requested = self.speed_index as i64 + delta;
        if requested < 0 {
            self.status_message = format!("Already at {}", SPEED_PRESETS[0].label);
            return;
        }
        if requested >= SPEED_PRESETS.len() as i64 {
            let last = SPEED_PRESETS.len() - 1;
            self.status_message = format!("Already at {}", SPEED_PRESETS[last].label);
            return;
        }

        let preset = SPEED_PRESETS[requested as usize];
        match self.player.set_speed(preset.interval, now) {
            Ok(()) => {
                self.speed_index = requested as usize;
                self.status_message = format!(
                    "Speed: {} ({} ms/move)",
                    preset.label,
                    preset.interval.as_millis()
                );
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
