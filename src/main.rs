// HanoiTTY: Interactive Tower of Hanoi Visualizer for the Terminal

mod planner;
mod playback;
mod puzzle;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use playback::Player;
use ui::App;
use ui::app::{MAX_DISKS, MIN_DISKS};

const DEFAULT_DISKS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("hanoitty");

    let disk_count = match args.get(1) {
        None => DEFAULT_DISKS,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if (MIN_DISKS..=MAX_DISKS).contains(&n) => n,
            _ => {
                eprintln!("Error: invalid disk count '{}'", raw);
                eprintln!();
                eprintln!("Usage: {} [DISKS]", program_name);
                eprintln!();
                eprintln!(
                    "  DISKS: number of disks, {} to {} (default {})",
                    MIN_DISKS, MAX_DISKS, DEFAULT_DISKS
                );
                eprintln!();
                eprintln!("Examples:");
                eprintln!(
                    "  {}            # Solve the default {}-disk puzzle",
                    program_name, DEFAULT_DISKS
                );
                eprintln!(
                    "  {} 8          # Solve an 8-disk puzzle",
                    program_name
                );
                std::process::exit(1);
            }
        },
    };

    // Plan the solution and seed the board
    let player = match Player::new(disk_count) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
