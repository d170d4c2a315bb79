use crate::models::Call;

/// Summary statistics for a set of calls.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSummary {
    pub total_calls: usize,
    pub total_duration_seconds: u64,
    pub average_duration_seconds: f64,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub overall_satisfaction: &'static str,
}

impl CallSummary {
    fn empty() -> Self {
        Self {
            total_calls: 0,
            total_duration_seconds: 0,
            average_duration_seconds: 0.0,
            positive_count: 0,
            neutral_count: 0,
            negative_count: 0,
            overall_satisfaction: "N/A",
        }
    }
}

/// Reduce a call set to counts, durations, and an overall satisfaction
/// label. Pure; an empty set yields zero counts and "N/A".
pub fn summarize(calls: &[&Call]) -> CallSummary {
    if calls.is_empty() {
        return CallSummary::empty();
    }

    let total_calls = calls.len();
    let total_duration_seconds: u64 = calls.iter().map(|c| u64::from(c.duration_seconds)).sum();
    let positive_count = calls.iter().filter(|c| c.satisfaction.is_positive()).count();
    let negative_count = calls.iter().filter(|c| c.satisfaction.is_negative()).count();
    let neutral_count = total_calls - positive_count - negative_count;

    let score_sum: i32 = calls.iter().map(|c| c.satisfaction.score()).sum();
    let mean = f64::from(score_sum) / total_calls as f64;

    CallSummary {
        total_calls,
        total_duration_seconds,
        average_duration_seconds: total_duration_seconds as f64 / total_calls as f64,
        positive_count,
        neutral_count,
        negative_count,
        overall_satisfaction: satisfaction_label(mean),
    }
}

/// Classify a mean satisfaction score into one of seven display labels.
fn satisfaction_label(mean: f64) -> &'static str {
    if mean > 1.5 {
        "Very Positive"
    } else if mean > 1.0 {
        "Mostly Positive"
    } else if mean > 0.5 {
        "Positive"
    } else if mean >= -0.5 {
        "Neutral"
    } else if mean >= -1.0 {
        "Negative"
    } else if mean >= -1.5 {
        "Mostly Negative"
    } else {
        "Very Negative"
    }
}

/// Per-agent satisfaction breakdown shown in the agents table and the
/// detail sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentStats {
    pub total_calls: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub overall_review: &'static str,
}

/// Whole-percent share of `count` in `total`, 0 for an empty set.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Compute the satisfaction breakdown for one agent over `calls`.
pub fn agent_stats(agent_id: &str, calls: &[Call]) -> AgentStats {
    let mut total_calls = 0;
    let mut positive = 0;
    let mut neutral = 0;
    let mut negative = 0;

    for call in calls.iter().filter(|c| c.agent_id == agent_id) {
        total_calls += 1;
        if call.satisfaction.is_positive() {
            positive += 1;
        } else if call.satisfaction.is_negative() {
            negative += 1;
        } else {
            neutral += 1;
        }
    }

    AgentStats {
        total_calls,
        positive,
        neutral,
        negative,
        overall_review: overall_review(total_calls, positive, negative),
    }
}

fn overall_review(total_calls: usize, positive: usize, negative: usize) -> &'static str {
    if total_calls == 0 {
        return "N/A";
    }
    let positive_percent = percentage(positive, total_calls);
    let negative_percent = percentage(negative, total_calls);

    if positive_percent >= 75 && negative_percent <= 10 {
        "Excellent"
    } else if positive_percent >= 50 && negative_percent <= 25 {
        "Good"
    } else {
        "Needs Improvement"
    }
}
