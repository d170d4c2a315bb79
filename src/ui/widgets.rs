//! Small rendering helpers shared by the views.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Badge color for a review tier, mirroring the badge palette of the
/// original dashboard (green/blue/yellow, gray fallback).
pub fn review_color(review: &str) -> Color {
    match review {
        "Excellent" => Color::Green,
        "Good" => Color::Blue,
        "Needs Improvement" => Color::Yellow,
        _ => Color::Gray,
    }
}

/// Color for an overall satisfaction label.
pub fn satisfaction_color(label: &str) -> Color {
    if label.contains("Positive") {
        Color::Green
    } else if label.contains("Negative") {
        Color::Red
    } else if label == "Neutral" {
        Color::White
    } else {
        Color::Gray
    }
}

pub fn review_badge(review: &str) -> Span<'_> {
    Span::styled(
        format!("[{review}]"),
        Style::default().fg(review_color(review)),
    )
}

/// Bordered card with a centered value, as on the dashboard's stat row.
pub fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let para = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Placeholder for views whose filtered call set is empty.
pub fn empty_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::ALL).title(title.to_string()))
    .alignment(Alignment::Center);
    frame.render_widget(para, area);
}
