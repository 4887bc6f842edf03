//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::game::{GameSession, Row};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔗 WORD CHAIN - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Board
            Constraint::Length(4), // Hint
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Chain ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(game) = &app.game else {
        let paragraph = Paragraph::new("No puzzle yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let lines: Vec<Line> = game
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = match row {
                Row::Played(_) => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                Row::Hidden(_) => Style::default().fg(Color::DarkGray),
                Row::Target(_) => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            };
            Line::from(vec![
                Span::styled(format!("{:>3}  ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(row.text().to_uppercase(), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.game.as_ref().and_then(GameSession::next_word_hint) {
        Some(hint) => vec![
            Line::from(vec![
                Span::raw("Next: "),
                Span::styled(
                    hint.text.to_uppercase(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Move:  {}", hint.kind)),
        ],
        None if app.input_mode == InputMode::Solved => vec![Line::from("Chain complete!")],
        None => vec![Line::from("No hint available")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (taken, total) = app.game.as_ref().map_or((0, 0), |game| {
        (game.steps_taken(), game.steps_taken() + game.steps_remaining())
    });
    let progress_pct = if total > 0 {
        (taken * 100 / total).min(100) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{taken}/{total} steps"));

    f.render_widget(gauge, area);
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
    let (title, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::Setup => (
            " Enter 'start target' | Enter alone for a random puzzle ",
            Color::Cyan,
        ),
        InputMode::Playing => (
            " Letter = replace | number = delete | slot,letter = insert | or a word ",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
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

    let mode_text = format!("Search: {}", app.config.mode);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Solved: {}",
        app.stats.total_games, app.stats.games_solved
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let rating_text = app.last_rating.map_or_else(
        || format!("Good moves: {}/{}", app.stats.good_moves, app.stats.moves),
        |rating| format!("Last: {rating}"),
    );
    let rating = Paragraph::new(rating_text).alignment(Alignment::Center);
    f.render_widget(rating, chunks[2]);

    let help_text = if app.input_mode == InputMode::Solved {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "Esc: Quit | ^U: Undo | ^N: New Game"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
