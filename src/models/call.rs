use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-reported satisfaction for a single call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Satisfaction {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl Satisfaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Satisfaction::VeryPositive => "Very Positive",
            Satisfaction::Positive => "Positive",
            Satisfaction::Neutral => "Neutral",
            Satisfaction::Negative => "Negative",
            Satisfaction::VeryNegative => "Very Negative",
        }
    }

    /// Integer score used when averaging satisfaction over a call set.
    pub fn score(&self) -> i32 {
        match self {
            Satisfaction::VeryPositive => 2,
            Satisfaction::Positive => 1,
            Satisfaction::Neutral => 0,
            Satisfaction::Negative => -1,
            Satisfaction::VeryNegative => -2,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Satisfaction::Positive | Satisfaction::VeryPositive)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Satisfaction::Negative | Satisfaction::VeryNegative)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Speaker {
    Agent,
    Caller,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Agent => "Agent",
            Speaker::Caller => "Caller",
        }
    }
}

/// One utterance in a call transcript. Messages are ordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// A completed call. `agent_id` references an [`Agent`] but referential
/// integrity is not enforced; lookups must degrade to placeholder values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub agent_id: String,
    pub caller_number: String,
    pub transcript_snippet: String,
    pub duration_seconds: u32,
    pub chat_messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub satisfaction: Satisfaction,
}
