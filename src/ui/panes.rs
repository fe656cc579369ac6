//! Rendering logic for each TUI pane

use crate::planner::{rod_label, Move};
use crate::playback::timer::format_clock;
use crate::playback::Player;
use crate::puzzle::{Board, Rod};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};
use std::time::Duration;

/// Render the rods pane: three columns of stacked disks
pub fn render_rods_pane(frame: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default()
        .title(" Rods ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(inner);

    for (rod_index, rod) in board.rods().iter().enumerate() {
        render_rod(frame, columns[rod_index], rod_index, rod);
    }
}

/// Render a single rod column: disks on top of a base line and its letter
fn render_rod(frame: &mut Frame, area: Rect, rod_index: usize, rod: &Rod) {
    let width = area.width as usize;
    let height = area.height as usize;
    if height < 2 || width == 0 {
        return;
    }

    // Bottom two rows are the base and the rod letter; the rest hold disks
    let slots = height - 2;
    let mut lines: Vec<Line> = Vec::with_capacity(height);

    for row in 0..slots {
        // Disks are stored bottom to top; the top row shows the highest slot
        let slot = slots - 1 - row;
        let line = match rod.disks().get(slot) {
            Some(disk) => {
                let disk_width = (disk.size() * 2 + 1).min(width);
                let color =
                    DEFAULT_THEME.disks[disk.size().saturating_sub(1) % DEFAULT_THEME.disks.len()];
                Line::from(Span::styled(
                    "█".repeat(disk_width),
                    Style::default().fg(color),
                ))
            }
            None => Line::from(Span::styled("│", Style::default().fg(DEFAULT_THEME.rod))),
        };
        lines.push(line);
    }

    lines.push(Line::from(Span::styled(
        "━".repeat(width),
        Style::default().fg(DEFAULT_THEME.rod),
    )));
    lines.push(Line::from(Span::styled(
        rod_label(rod_index).to_string(),
        Style::default()
            .fg(DEFAULT_THEME.rod)
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the move list pane with the current move highlighted
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    moves: &[Move],
    move_index: usize,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Moves ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if moves.is_empty() {
        let paragraph = Paragraph::new("(nothing to solve)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let total_items = moves.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    let max_scroll = total_items.saturating_sub(visible_height);

    // usize::MAX requests follow mode: center the view on the current move
    if *scroll_offset == usize::MAX {
        *scroll_offset = move_index.saturating_sub(visible_height / 2).min(max_scroll);
    } else {
        *scroll_offset = (*scroll_offset).min(max_scroll);
    }

    let visible_items: Vec<ListItem> = moves
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(number, mv)| {
            let style = if number < move_index {
                Style::default().fg(DEFAULT_THEME.muted)
            } else if number == move_index {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .bg(DEFAULT_THEME.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(format!("{:4}. {}", number + 1, mv)).style(style)
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Render the statistics pane
pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    player: &Player,
    elapsed: Duration,
    speed_label: &str,
) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 0, 0, 0));

    let mut lines = vec![
        stat_line("Disks", player.disk_count().to_string()),
        stat_line(
            "Move",
            format!("{} / {}", player.move_index(), player.total_moves()),
        ),
        stat_line(
            "Minimum",
            format!("2^{} - 1 = {}", player.disk_count(), player.minimum_moves()),
        ),
        progress_line(player.progress_percent()),
        stat_line("Elapsed", format_clock(elapsed)),
        stat_line(
            "Speed",
            format!("{} ({} ms)", speed_label, player.speed().as_millis()),
        ),
        state_line(player),
    ];

    if player.board().is_solved() && player.total_moves() > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Solved!",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn label_span(label: &str) -> Span<'static> {
    Span::styled(
        format!("{:<9}", label),
        Style::default().fg(DEFAULT_THEME.muted),
    )
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        label_span(label),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn progress_line(percent: u8) -> Line<'static> {
    const PROGRESS_CELLS: usize = 12;
    let filled = (percent as usize * PROGRESS_CELLS) / 100;

    Line::from(vec![
        label_span("Progress"),
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::styled(
            "░".repeat(PROGRESS_CELLS - filled),
            Style::default().fg(DEFAULT_THEME.muted),
        ),
        Span::styled(
            format!(" {:3}%", percent),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ])
}

fn state_line(player: &Player) -> Line<'static> {
    let (text, color) = if player.is_playing() {
        ("Playing", DEFAULT_THEME.secondary)
    } else if player.is_finished() {
        ("Finished", DEFAULT_THEME.success)
    } else {
        ("Paused", DEFAULT_THEME.muted)
    };

    Line::from(vec![
        label_span("State"),
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

/// Render the controls pane listing every keybinding
pub fn render_controls_pane(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 0, 0, 0));

    let bindings = [
        ("Space", "play / pause"),
        ("→ / ←", "step forward / back"),
        ("1-9", "step forward N moves"),
        ("↵ / ⌫", "jump to end / start"),
        ("+ / -", "more / fewer disks"),
        ("] / [", "faster / slower"),
        ("↑ / ↓", "scroll the move list"),
        ("r", "reset"),
        ("q", "quit"),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>7} ", key),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    move_index: usize,
    total_moves: usize,
    is_playing: bool,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: position info and status
    let left_spans = vec![
        Span::styled(
            format!(" Move {}/{} ", move_index, total_moves),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.muted),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.muted);

    let mut right_spans = vec![
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" disks ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    // Show status indicators based on position and state
    let is_at_start = move_index == 0;
    let is_at_end = move_index >= total_moves;

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
