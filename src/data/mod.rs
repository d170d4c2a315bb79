use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::{Agent, Call};

const AGENTS_JSON: &str = include_str!("../../data/agents.json");
const CALLS_JSON: &str = include_str!("../../data/calls.json");

/// In-memory store for the session's agent and call records.
///
/// Loaded once at startup from the datasets embedded in the binary and
/// immutable afterwards. Every view reads through this store.
pub struct DataStore {
    agents: Vec<Agent>,
    calls: Vec<Call>,
    agents_by_id: HashMap<String, Agent>,
}

impl DataStore {
    /// Parse the embedded datasets. Failure here means the shipped data is
    /// malformed, so the error carries enough context to point at the file.
    pub fn load() -> Result<Self> {
        let agents: Vec<Agent> =
            serde_json::from_str(AGENTS_JSON).context("malformed embedded dataset data/agents.json")?;
        let calls: Vec<Call> =
            serde_json::from_str(CALLS_JSON).context("malformed embedded dataset data/calls.json")?;
        Ok(Self::new(agents, calls))
    }

    pub fn new(agents: Vec<Agent>, calls: Vec<Call>) -> Self {
        let agents_by_id = agents
            .iter()
            .map(|agent| (agent.id.clone(), agent.clone()))
            .collect();
        Self {
            agents,
            calls,
            agents_by_id,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents_by_id.get(id)
    }

    pub fn agents_by_id(&self) -> &HashMap<String, Agent> {
        &self.agents_by_id
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Date of the most recent call, used as the default filter anchor.
    pub fn latest_call_date(&self) -> Option<NaiveDate> {
        self.calls.iter().map(|call| call.date).max()
    }
}
