//! Terminal presentation layer: a single-threaded event loop over the
//! static dataset. Every key event mutates the [`App`] state and the next
//! frame recomputes the filtered analytics from scratch.

pub mod app;

mod agents;
mod calls;
mod dashboard;
mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

pub use app::{App, View};

/// Set up the terminal, run the event loop, and restore the terminal even
/// when the loop errors.
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.settings().tick_rate_ms);
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // View tabs + period selector
            Constraint::Min(10),   // Active view
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    match app.view() {
        View::Dashboard => dashboard::render(frame, chunks[1], app),
        View::Calls => calls::render(frame, chunks[1], app),
        View::Agents => agents::render(frame, chunks[1], app),
    }

    draw_key_hints(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // View tabs (left)
    let views = [View::Dashboard, View::Calls, View::Agents];
    let tabs: Vec<Span> = views
        .iter()
        .enumerate()
        .flat_map(|(idx, view)| {
            let style = if *view == app.view() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Span::styled(format!("[{}] {}", idx + 1, view.title()), style),
                Span::raw("  "),
            ]
        })
        .collect();
    let tabs_para = Paragraph::new(Line::from(tabs))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(tabs_para, chunks[0]);

    // Period selector (right)
    let window = app.window();
    let period_text = vec![
        Span::raw("Period: "),
        Span::styled(
            window.mode.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" · "),
        Span::styled(window.describe(), Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled(
            "[d/w/m/y/a mode, Left/Right navigate]",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let period_para = Paragraph::new(Line::from(period_text))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(period_para, chunks[1]);
}

fn draw_key_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.view() {
        View::Dashboard => "q quit | Tab switch view | d/w/m/y/a period | Left/Right navigate",
        View::Calls => {
            "q quit | Tab switch view | Up/Down select | Enter transcript | Esc close | Left/Right navigate"
        }
        View::Agents => "q quit | Tab switch view | Up/Down select | Enter details | Esc close",
    };
    let para = Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(para, area);
}
