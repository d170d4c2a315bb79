use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::widgets::{empty_placeholder, review_badge};
use super::App;
use crate::analytics::EnrichedCall;
use crate::format::format_duration_mmss;
use crate::models::Speaker;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let calls = app.visible_calls();

    if calls.is_empty() {
        empty_placeholder(frame, area, "All Calls", "No calls found.");
        return;
    }

    let (list_area, detail_area) = if app.transcript_open() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    render_call_list(frame, list_area, app, &calls);

    if let (Some(detail_area), Some(selected)) = (detail_area, app.selected_call()) {
        render_transcript(frame, detail_area, selected);
    }
}

fn render_call_list(frame: &mut Frame, area: Rect, app: &App, calls: &[&EnrichedCall]) {
    let items: Vec<ListItem> = calls
        .iter()
        .map(|enriched| {
            let call = &enriched.call;
            let header = Line::from(vec![
                Span::styled(
                    format!("Caller: {}", call.caller_number),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    call.date.format("%b %-d, %Y").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                review_badge(&enriched.agent_review),
            ]);
            let detail = Line::from(vec![
                Span::styled(
                    format!("Agent: {}", enriched.agent_name),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(
                        "Duration: {}",
                        format_duration_mmss(f64::from(call.duration_seconds))
                    ),
                    Style::default().fg(Color::Green),
                ),
            ]);
            let snippet = Line::from(Span::styled(
                format!("\"{}\"", call.transcript_snippet),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(vec![header, detail, snippet, Line::from("")])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("All Calls ({})", calls.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.call_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_transcript(frame: &mut Frame, area: Rect, enriched: &EnrichedCall) {
    let call = &enriched.call;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Agent: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} ({})", enriched.agent_name, enriched.agent_phone_number),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(Color::DarkGray)),
            Span::raw(call.date.format("%b %-d, %Y").to_string()),
            Span::raw("  "),
            Span::styled("Duration: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_duration_mmss(f64::from(call.duration_seconds))),
        ]),
        Line::from(vec![
            Span::styled("Satisfaction: ", Style::default().fg(Color::DarkGray)),
            Span::raw(call.satisfaction.as_str()),
        ]),
        Line::from(""),
    ];

    for message in &call.chat_messages {
        let speaker_style = match message.speaker {
            Speaker::Agent => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Speaker::Caller => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", message.speaker.as_str()), speaker_style),
            Span::raw(message.text.clone()),
        ]));
    }

    if let Some(notes) = &call.notes {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "Notes: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(notes.clone(), Style::default().fg(Color::Gray)),
        ]));
    }

    let para = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Transcript - {}", call.id)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}
