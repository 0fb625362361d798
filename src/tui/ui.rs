use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::game::GamePhase;
use crate::models::{ActivityField, TierAccent};
use crate::tui::app::{App, InputMode, Screen};
use crate::utils::format_thousands;

pub fn draw(frame: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Calculator => draw_calculator_screen(frame, app),
        Screen::Game => draw_game_screen(frame, app),
        Screen::Share => draw_share_screen(frame, app),
    }
}

fn accent_color(accent: TierAccent) -> Color {
    match accent {
        TierAccent::Muted => Color::Gray,
        TierAccent::Primary => Color::Magenta,
        TierAccent::Secondary => Color::Cyan,
        TierAccent::Accent => Color::Yellow,
    }
}

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
}

fn draw_calculator_screen(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(4),
        ])
        .split(frame.size());

    let title = Paragraph::new("🧮 Goon Score Calculator")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_form(frame, app, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(columns[1]);
    draw_result(frame, app, right[0]);
    draw_rank_table(frame, app, right[1]);

    draw_help(frame, app, rows[2]);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = ActivityField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == app.selected_field_index;
            let value = if selected && app.input_mode == InputMode::Editing {
                format!("{}_", app.current_input)
            } else {
                app.form.get(*field).unwrap_or("").to_string()
            };

            let style = match (selected, &app.input_mode) {
                (true, InputMode::Editing) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                (true, InputMode::Normal) => Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{}: ", field.label())),
                    Span::styled(value, Style::default().fg(Color::Cyan)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", field.hint()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Goon Metrics Input (↑/↓ select, Enter edit)"),
    );
    frame.render_widget(list, area);
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Your Goon Score");

    let Some(result) = &app.score_result else {
        let placeholder = Paragraph::new(vec![
            Line::from("🤔 Calculate Your Power"),
            Line::from(""),
            Line::from("Fill in your goon metrics to discover your rank."),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let rank_style = Style::default()
        .fg(accent_color(result.rank.accent))
        .add_modifier(Modifier::BOLD);

    let mut text = vec![
        Line::from(Span::styled(
            format_thousands(result.total_score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("{} ", result.rank.emoji)),
            Span::styled(result.rank.name, rank_style),
        ]),
        Line::from(match result.points_to_next_rank() {
            Some(points) => format!("{} points to next rank", format_thousands(points)),
            None => "You have achieved maximum goon enlightenment!".to_string(),
        }),
        Line::from(""),
    ];

    for (label, points) in result.breakdown.entries() {
        text.push(Line::from(vec![
            Span::raw(format!("  {}: ", label)),
            Span::styled(format!("{:.1}", points), Style::default().fg(Color::Cyan)),
        ]));
    }

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_rank_table(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.score_result.as_ref().map(|r| r.rank);

    let items: Vec<ListItem> = app
        .engine()
        .tiers()
        .iter()
        .map(|tier| {
            let is_current = current.map_or(false, |rank| rank == tier);
            let mut spans = vec![
                Span::raw(format!("{} ", tier.emoji)),
                Span::styled(
                    format!("{:<13}", tier.name),
                    Style::default().fg(accent_color(tier.accent)).add_modifier(Modifier::BOLD),
                ),
                Span::raw(tier.range_label()),
            ];
            if is_current {
                spans.push(Span::styled(" ◀ Current", Style::default().fg(Color::Green)));
            }
            let style = if is_current {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Goon Rank System"));
    frame.render_widget(list, area);
}

fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = if app.input_mode == InputMode::Normal {
        vec![Line::from(vec![
            Span::raw("Commands: "),
            key("c"),
            Span::raw(" calculate | "),
            key("r"),
            Span::raw(" reset | "),
            key("s"),
            Span::raw(" share | "),
            key("g"),
            Span::raw(" Goon Dash | "),
            Span::styled("q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" quit"),
        ])]
    } else {
        vec![Line::from("Type a whole number, Enter to save, Tab for next field, Esc to cancel")]
    };

    if let Some(error) = &app.error_message {
        lines.push(Line::from(vec![
            Span::styled("Missing Information: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ]));
    } else if let Some(status) = &app.status_message {
        lines.push(Line::from(Span::styled(status.as_str(), Style::default().fg(Color::Green))));
    }

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn draw_game_screen(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let title = Paragraph::new(format!(
        "🎮 Goon Dash   ⏱ {}s   💰 {}",
        app.game.time_left(),
        app.game.score()
    ))
    .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = match app.game.phase() {
        GamePhase::Ready => vec![
            Line::from("Ready to Goon?"),
            Line::from(""),
            Line::from("Press Space as fast as you can to collect $GOON tokens."),
        ],
        GamePhase::Running => vec![
            Line::from(Span::styled(
                format_thousands(i64::try_from(app.game.score()).unwrap_or(i64::MAX)),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("SMASH SPACE!"),
        ],
        GamePhase::Paused => vec![Line::from("⏸ Paused")],
        GamePhase::Over => vec![
            Line::from("Game Over!"),
            Line::from(""),
            Line::from(format!("Final score: {}", format_thousands(i64::try_from(app.game.score()).unwrap_or(i64::MAX)))),
            Line::from(app.game.verdict()),
            Line::from("Press u to use it as your Best Game Score"),
        ],
    };

    let arena = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Arena"));
    frame.render_widget(arena, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        key("Space"),
        Span::raw(" collect | "),
        key("Enter"),
        Span::raw(" start | "),
        key("p"),
        Span::raw(" pause | "),
        key("r"),
        Span::raw(" reset | "),
        key("b"),
        Span::raw(" back"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_share_screen(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 40, frame.size());
    let text = app.share_text().unwrap_or_default();

    let share = Paragraph::new(vec![
        Line::from(text),
        Line::from(""),
        Line::from(Span::styled("Press b to go back", Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(crate::utils::share::SHARE_TITLE),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(share, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
