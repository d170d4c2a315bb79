use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use super::widgets::{empty_placeholder, review_badge, review_color};
use super::App;
use crate::analytics::{agent_stats, percentage, AgentStats};
use crate::models::Agent;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.store().agents().is_empty() {
        empty_placeholder(frame, area, "Agents", "No agents available.");
        return;
    }

    let (table_area, detail_area) = if app.agent_detail_open() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    render_agent_table(frame, table_area, app);

    if let (Some(detail_area), Some(agent), Some(stats)) =
        (detail_area, app.selected_agent(), app.selected_agent_stats())
    {
        render_agent_detail(frame, detail_area, agent, &stats);
    }
}

fn render_agent_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(
        ["Name", "Task", "Calls", "Pos", "Neu", "Neg", "Review"].map(|title| {
            Cell::from(title).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }),
    )
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .store()
        .agents()
        .iter()
        .map(|agent| {
            let stats = agent_stats(&agent.id, app.store().calls());
            Row::new(vec![
                Cell::from(agent.name.clone()).style(Style::default().fg(Color::White)),
                Cell::from(agent.task.clone()).style(Style::default().fg(Color::Gray)),
                Cell::from(stats.total_calls.to_string()),
                Cell::from(stats.positive.to_string()).style(Style::default().fg(Color::Green)),
                Cell::from(stats.neutral.to_string()).style(Style::default().fg(Color::Gray)),
                Cell::from(stats.negative.to_string()).style(Style::default().fg(Color::Red)),
                Cell::from(stats.overall_review)
                    .style(Style::default().fg(review_color(stats.overall_review))),
            ])
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(26),
        Constraint::Percentage(8),
        Constraint::Percentage(8),
        Constraint::Percentage(8),
        Constraint::Percentage(8),
        Constraint::Percentage(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Agents ({})", app.store().agent_count())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ")
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.agent_cursor()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_agent_detail(frame: &mut Frame, area: Rect, agent: &Agent, stats: &AgentStats) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", label),
            Span::styled(agent.name.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Phone: ", label),
            Span::styled(agent.phone_number.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(agent.status.clone().unwrap_or_else(|| "N/A".to_string()), value),
        ]),
        Line::from(vec![
            Span::styled("Task: ", label),
            Span::styled(agent.task.clone(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("Instructions", label)),
        Line::from(Span::styled(
            agent
                .instructions
                .clone()
                .unwrap_or_else(|| "No instructions provided.".to_string()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Overall Review: ", label),
            review_badge(stats.overall_review),
        ]),
        Line::from(vec![
            Span::styled("Total Calls: ", label),
            Span::styled(stats.total_calls.to_string(), value),
        ]),
    ];

    let breakdown: [(&str, usize, Color); 3] = [
        ("Positive", stats.positive, Color::Green),
        ("Neutral", stats.neutral, Color::Gray),
        ("Negative", stats.negative, Color::Red),
    ];
    for (name, count, color) in breakdown {
        lines.push(Line::from(vec![
            Span::styled(format!("{name}: "), label),
            Span::styled(
                format!("{} ({}%)", count, percentage(count, stats.total_calls)),
                Style::default().fg(color),
            ),
        ]));
    }

    let para = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} Details", agent.name)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}
