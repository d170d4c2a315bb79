use std::collections::HashMap;

use crate::models::{Agent, Call};

pub const UNKNOWN_AGENT_NAME: &str = "Unknown Agent";
pub const UNKNOWN_AGENT_PHONE: &str = "N/A";

/// A call joined with its owning agent's display attributes.
#[derive(Debug, Clone)]
pub struct EnrichedCall {
    pub call: Call,
    pub agent_name: String,
    pub agent_phone_number: String,
    pub agent_review: String,
}

/// Mock review tier derived from the agent id alone.
///
/// Stand-in for a real scoring pipeline; the tier is stable across calls
/// because it depends only on the id's first byte.
pub fn agent_review(agent_id: &str) -> &'static str {
    match agent_id.as_bytes().first().map(|b| b % 3) {
        Some(0) => "Good",
        Some(1) => "Excellent",
        Some(2) => "Needs Improvement",
        _ => "N/A",
    }
}

/// Join each call with its agent. Output preserves the order and
/// cardinality of `calls`; a missing agent degrades to placeholder values
/// instead of failing.
pub fn enrich_calls(calls: &[Call], agents: &HashMap<String, Agent>) -> Vec<EnrichedCall> {
    calls
        .iter()
        .map(|call| match agents.get(&call.agent_id) {
            Some(agent) => EnrichedCall {
                call: call.clone(),
                agent_name: agent.name.clone(),
                agent_phone_number: agent.phone_number.clone(),
                agent_review: agent_review(&agent.id).to_string(),
            },
            None => EnrichedCall {
                call: call.clone(),
                agent_name: UNKNOWN_AGENT_NAME.to_string(),
                agent_phone_number: UNKNOWN_AGENT_PHONE.to_string(),
                agent_review: "N/A".to_string(),
            },
        })
        .collect()
}
