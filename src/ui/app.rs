use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::analytics::{
    agent_stats, bucket_calls, enrich_calls, filter_enriched, summarize, AgentStats, CallSummary,
    EnrichedCall, PeriodMode, PeriodWindow, SeriesBucket,
};
use crate::data::DataStore;
use crate::models::{Agent, Call};
use crate::settings::Settings;

/// Top-level view selection, mirroring the navigation sidebar of the
/// dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Calls,
    Agents,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Calls => "All Calls",
            View::Agents => "Agents",
        }
    }

    pub fn next(self) -> Self {
        match self {
            View::Dashboard => View::Calls,
            View::Calls => View::Agents,
            View::Agents => View::Dashboard,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            View::Dashboard => View::Agents,
            View::Calls => View::Dashboard,
            View::Agents => View::Calls,
        }
    }
}

/// All mutable UI state, owned by the event loop. Everything derived from
/// it (filtered sets, summaries, series) is recomputed synchronously on
/// each interaction; the dataset itself never changes.
pub struct App {
    store: DataStore,
    enriched: Vec<EnrichedCall>,
    settings: Settings,
    view: View,
    window: PeriodWindow,
    call_cursor: usize,
    transcript_open: bool,
    agent_cursor: usize,
    agent_detail_open: bool,
    should_quit: bool,
}

impl App {
    pub fn new(store: DataStore, settings: Settings) -> Self {
        let enriched = enrich_calls(store.calls(), store.agents_by_id());
        // The dataset is a fixed historical sample; anchoring at the most
        // recent call keeps the default day/week/month windows non-empty.
        let anchor = store
            .latest_call_date()
            .unwrap_or_else(|| Utc::now().date_naive());
        Self {
            store,
            enriched,
            window: PeriodWindow::new(settings.default_period, anchor),
            settings,
            view: View::Dashboard,
            call_cursor: 0,
            transcript_open: false,
            agent_cursor: 0,
            agent_detail_open: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn window(&self) -> &PeriodWindow {
        &self.window
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn transcript_open(&self) -> bool {
        self.transcript_open
    }

    pub fn agent_detail_open(&self) -> bool {
        self.agent_detail_open
    }

    /// Calls inside the active period window, dataset order.
    pub fn visible_calls(&self) -> Vec<&EnrichedCall> {
        filter_enriched(&self.enriched, &self.window)
    }

    /// Most recent calls first, limited for the dashboard list.
    pub fn recent_calls(&self) -> Vec<&EnrichedCall> {
        let mut calls = self.visible_calls();
        calls.sort_by(|a, b| b.call.date.cmp(&a.call.date).then(b.call.id.cmp(&a.call.id)));
        calls.truncate(self.settings.recent_call_limit);
        calls
    }

    pub fn summary(&self) -> CallSummary {
        let calls: Vec<&Call> = self.visible_calls().iter().map(|e| &e.call).collect();
        summarize(&calls)
    }

    pub fn buckets(&self) -> Vec<SeriesBucket> {
        let calls: Vec<&Call> = self.visible_calls().iter().map(|e| &e.call).collect();
        bucket_calls(&calls, self.window.mode)
    }

    pub fn call_cursor(&self) -> usize {
        self.call_cursor.min(self.visible_calls().len().saturating_sub(1))
    }

    pub fn selected_call(&self) -> Option<&EnrichedCall> {
        let calls = self.visible_calls();
        calls.get(self.call_cursor.min(calls.len().saturating_sub(1))).copied()
    }

    pub fn agent_cursor(&self) -> usize {
        self.agent_cursor
            .min(self.store.agent_count().saturating_sub(1))
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        self.store.agents().get(self.agent_cursor())
    }

    pub fn selected_agent_stats(&self) -> Option<AgentStats> {
        self.selected_agent()
            .map(|agent| agent_stats(&agent.id, self.store.calls()))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.set_view(self.view.next()),
            KeyCode::BackTab => self.set_view(self.view.prev()),
            KeyCode::Char('1') => self.set_view(View::Dashboard),
            KeyCode::Char('2') => self.set_view(View::Calls),
            KeyCode::Char('3') => self.set_view(View::Agents),
            KeyCode::Char('d') => self.set_mode(PeriodMode::Day),
            KeyCode::Char('w') => self.set_mode(PeriodMode::Week),
            KeyCode::Char('m') => self.set_mode(PeriodMode::Month),
            KeyCode::Char('y') => self.set_mode(PeriodMode::Year),
            KeyCode::Char('a') => self.set_mode(PeriodMode::All),
            KeyCode::Left => self.window = self.window.step_back(),
            KeyCode::Right => self.window = self.window.step_forward(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Esc => self.close_detail(),
            _ => {}
        }
    }

    fn set_view(&mut self, view: View) {
        self.view = view;
        self.transcript_open = false;
        self.agent_detail_open = false;
    }

    fn set_mode(&mut self, mode: PeriodMode) {
        self.window = PeriodWindow::new(mode, self.window.anchor);
        self.call_cursor = 0;
    }

    fn move_cursor(&mut self, delta: i64) {
        match self.view {
            View::Calls => {
                let len = self.visible_calls().len();
                self.call_cursor = step_cursor(self.call_cursor, delta, len);
            }
            View::Agents => {
                let len = self.store.agent_count();
                self.agent_cursor = step_cursor(self.agent_cursor, delta, len);
            }
            View::Dashboard => {}
        }
    }

    fn open_detail(&mut self) {
        match self.view {
            View::Calls => self.transcript_open = self.selected_call().is_some(),
            View::Agents => self.agent_detail_open = self.selected_agent().is_some(),
            View::Dashboard => {}
        }
    }

    fn close_detail(&mut self) {
        self.transcript_open = false;
        self.agent_detail_open = false;
    }
}

fn step_cursor(cursor: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    if delta >= 0 {
        cursor.saturating_add(delta as usize).min(max)
    } else {
        cursor.saturating_sub(delta.unsigned_abs() as usize)
    }
}
