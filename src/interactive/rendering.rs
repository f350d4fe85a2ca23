//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and status panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterClue, LetterDiff};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board + keyboard
            Constraint::Percentage(45), // Stats + messages
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn clue_style(clue: Option<LetterClue>) -> Style {
    match clue {
        Some(LetterClue::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterClue::Elsewhere) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterClue::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn clue_line(diffs: &[LetterDiff]) -> Line<'static> {
    let spans: Vec<Span> = diffs
        .iter()
        .flat_map(|d| {
            [
                Span::styled(
                    format!(" {} ", d.letter.to_ascii_uppercase()),
                    clue_style(Some(d.clue)),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn pending_line(text: &str, word_length: usize) -> Line<'static> {
    let spans: Vec<Span> = (0..word_length)
        .flat_map(|i| {
            let cell = text
                .chars()
                .nth(i)
                .map_or_else(|| " · ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
            [
                Span::styled(cell, Style::default().fg(Color::White)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let config = app.game.config();
    let rows = usize::from(config.max_attempts);

    let mut lines: Vec<Line> = app.board.iter().map(|row| clue_line(row)).collect();

    if app.input_mode == InputMode::Guessing && lines.len() < rows {
        lines.push(pending_line(&app.input_buffer, config.word_length));
    }
    while lines.len() < rows {
        lines.push(pending_line("", config.word_length));
    }

    if let Some(answer) = &app.revealed_answer {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                answer.clone(),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        clue_style(app.hints.get(c)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Statistics
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.session().statistics();
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![
        Line::from(format!(
            "Played: {}  Win: {:.0}%",
            stats.rounds_played,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {}  Best: {}",
            stats.current_streak, stats.best_streak
        )),
    ];

    for guesses in 1..=usize::from(app.game.config().max_attempts) {
        let count = stats.guess_distribution.get(guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max as f64, 15);
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to quit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Exhausted => (
            " No words left | Press 'q' to quit ",
            String::new(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let session = app.game.session();

    let round = Paragraph::new(format!("Round {}", session.round())).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let tries = Paragraph::new(format!("Tries left: {}", session.attempts_remaining()))
        .alignment(Alignment::Center);
    f.render_widget(tries, chunks[1]);

    let used = Paragraph::new(format!(
        "Words: {}/{}",
        session.used_answers().len(),
        app.game.corpus().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(used, chunks[2]);

    let help = Paragraph::new("Ctrl+C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
