//! TUI rendering with ratatui
//!
//! Layout for the Evil Hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Letter;
use crate::output::formatters::spaced_pattern;
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
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("EVIL HANGMAN - I never pick a word until I have to")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(4), // Alphabet
            Constraint::Min(3),    // History
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_alphabet(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let pattern = app.game.pattern();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_pattern(pattern),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if app.input_mode == InputMode::GameOver
        && let Some(answer) = app.game.final_answer()
        && !app.game.player_wins()
    {
        lines.push(Line::from(Span::styled(
            answer.text().chars().map(String::from).collect::<Vec<_>>().join(" "),
            Style::default().fg(Color::Red),
        )));
    }

    let title = format!(
        " Word ({} letters, {} hidden) ",
        pattern.len(),
        pattern.blanks()
    );
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_alphabet(f: &mut Frame, app: &App, area: Rect) {
    let pattern = app.game.pattern();
    let spans: Vec<Span> = Letter::alphabet()
        .flat_map(|letter| {
            let style = if !app.game.has_guessed(letter) {
                Style::default().fg(Color::White)
            } else if pattern.reveals(letter) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            [Span::styled(letter.to_string(), style), Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL),
        );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .enumerate()
        .map(|(i, record)| {
            let (mark, color) = if record.revealed {
                ("hit ", Color::Green)
            } else {
                ("miss", Color::Red)
            };
            let mut spans = vec![
                Span::raw(format!("{:2}: {} ", history.len() - i, record.letter)),
                Span::styled(mark, Style::default().fg(color)),
            ];
            if app.show_running_total {
                spans.push(Span::raw(format!(
                    "  {} → {}",
                    record.candidates_before, record.candidates_after
                )));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses gauge
            Constraint::Length(3), // Candidates
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_guesses(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.guesses_remaining();
    let limit = app.config.guess_limit().max(1);
    let percent = (remaining.min(limit) * 100 / limit) as u16;

    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Wrong Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{limit}"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.show_running_total {
        format!("Possible words: {}", app.game.candidate_count())
    } else {
        "Possible words: hidden (TAB to show)".to_string()
    };

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
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
        InputMode::GameOver if app.game.player_wins() => (
            " YOU WON | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::GameOver => (
            " GAME OVER | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        InputMode::Guessing => (
            " Type a letter to guess | BACKSPACE to undo ",
            "Your guess: _",
            Color::Yellow,
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

    let guessed: String = app.game.guessed_letters().into_iter().collect();
    let guessed_text = format!("Guessed: {guessed}");
    f.render_widget(
        Paragraph::new(guessed_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let total_text = if app.show_running_total {
        "Running total: on"
    } else {
        "Running total: off"
    };
    f.render_widget(
        Paragraph::new(total_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game | TAB: Total",
        InputMode::Guessing => "ESC: Quit | BKSP: Undo | TAB: Total",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
