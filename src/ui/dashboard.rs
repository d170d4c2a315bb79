use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, List, ListItem},
    Frame,
};

use super::widgets::{empty_placeholder, review_badge, satisfaction_color, stat_card};
use super::App;
use crate::analytics::PeriodMode;
use crate::format::{format_duration_hms, format_duration_mmss};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Stat cards
            Constraint::Length(12), // Charts
            Constraint::Min(6),     // Recent calls
        ])
        .split(area);

    render_stat_cards(frame, chunks[0], app);
    render_charts(frame, chunks[1], app);
    render_recent_calls(frame, chunks[2], app);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let summary = app.summary();

    stat_card(
        frame,
        chunks[0],
        "Total Calls",
        &summary.total_calls.to_string(),
        Color::Cyan,
    );
    stat_card(
        frame,
        chunks[1],
        "Avg. Call Duration",
        &format_duration_mmss(summary.average_duration_seconds),
        Color::Green,
    );
    stat_card(
        frame,
        chunks[2],
        "Total Call Time",
        &format_duration_hms(summary.total_duration_seconds),
        Color::Magenta,
    );
    stat_card(
        frame,
        chunks[3],
        "Overall Satisfaction",
        summary.overall_satisfaction,
        satisfaction_color(summary.overall_satisfaction),
    );
}

/// Unit of the chart buckets for the active mode.
fn bucket_unit(mode: PeriodMode) -> &'static str {
    match mode {
        PeriodMode::Day | PeriodMode::Week | PeriodMode::All => "Day",
        PeriodMode::Month => "Week",
        PeriodMode::Year => "Month",
    }
}

fn render_charts(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let buckets = app.buckets();
    let unit = bucket_unit(app.window().mode);

    if buckets.is_empty() {
        empty_placeholder(
            frame,
            chunks[0],
            &format!("Calls per {unit}"),
            "No call data available for this period.",
        );
        empty_placeholder(
            frame,
            chunks[1],
            &format!("Call Time per {unit}"),
            "No duration data available for this period.",
        );
        return;
    }

    let volume: Vec<(&str, u64)> = buckets
        .iter()
        .map(|bucket| (bucket.label.as_str(), bucket.count))
        .collect();
    let volume_chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Calls per {unit}")),
        )
        .data(&volume)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(volume_chart, chunks[0]);

    let call_time: Vec<(&str, u64)> = buckets
        .iter()
        .map(|bucket| (bucket.label.as_str(), bucket.total_duration_seconds))
        .collect();
    let call_time_chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Call Time per {unit} (seconds)")),
        )
        .data(&call_time)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    frame.render_widget(call_time_chart, chunks[1]);
}

fn render_recent_calls(frame: &mut Frame, area: Rect, app: &App) {
    let recent = app.recent_calls();

    if recent.is_empty() {
        empty_placeholder(frame, area, "Recent Calls", "No recent calls to display.");
        return;
    }

    let items: Vec<ListItem> = recent
        .iter()
        .map(|enriched| {
            let call = &enriched.call;
            let line = Line::from(vec![
                Span::styled(
                    call.date.format("%b %-d").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    call.caller_number.clone(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" -> "),
                Span::styled(
                    enriched.agent_name.clone(),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled(
                    format_duration_mmss(f64::from(call.duration_seconds)),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  "),
                review_badge(&enriched.agent_review),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Recent Calls (last {})", recent.len())),
    );
    frame.render_widget(list, area);
}
