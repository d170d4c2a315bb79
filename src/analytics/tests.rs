use std::collections::HashMap;

use chrono::NaiveDate;

use super::*;
use crate::data::DataStore;
use crate::models::{Agent, Call, Satisfaction};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn call(id: &str, agent_id: &str, on: NaiveDate, secs: u32, satisfaction: Satisfaction) -> Call {
    Call {
        id: id.to_string(),
        agent_id: agent_id.to_string(),
        caller_number: "555-0000".to_string(),
        transcript_snippet: String::new(),
        duration_seconds: secs,
        chat_messages: Vec::new(),
        notes: None,
        date: on,
        satisfaction,
    }
}

fn agent(id: &str, name: &str) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        phone_number: "555-0101".to_string(),
        task: "Support".to_string(),
        instructions: None,
        status: None,
    }
}

fn agent_map(agents: &[Agent]) -> HashMap<String, Agent> {
    agents.iter().map(|a| (a.id.clone(), a.clone())).collect()
}

#[test]
fn enrich_substitutes_placeholders_for_missing_agent() {
    let agents = agent_map(&[agent("agent_01", "Alice Wonderland")]);
    let calls = vec![
        call("c1", "agent_01", date(2024, 7, 28), 60, Satisfaction::Positive),
        call("c2", "agent_99", date(2024, 7, 28), 60, Satisfaction::Positive),
    ];

    let enriched = enrich_calls(&calls, &agents);
    assert_eq!(enriched.len(), calls.len());
    assert_eq!(enriched[0].agent_name, "Alice Wonderland");
    assert_eq!(enriched[1].agent_name, "Unknown Agent");
    assert_eq!(enriched[1].agent_phone_number, "N/A");
    assert_eq!(enriched[1].agent_review, "N/A");
}

#[test]
fn enrich_preserves_input_order() {
    let agents = agent_map(&[agent("agent_01", "Alice Wonderland")]);
    let calls = vec![
        call("c3", "agent_01", date(2024, 7, 30), 10, Satisfaction::Neutral),
        call("c1", "agent_01", date(2024, 7, 28), 10, Satisfaction::Neutral),
        call("c2", "agent_01", date(2024, 7, 29), 10, Satisfaction::Neutral),
    ];

    let enriched = enrich_calls(&calls, &agents);
    let ids: Vec<&str> = enriched.iter().map(|e| e.call.id.as_str()).collect();
    assert_eq!(ids, ["c3", "c1", "c2"]);
}

#[test]
fn review_tier_depends_only_on_id_first_byte() {
    // 'a' % 3 == 1, 'b' % 3 == 2, 'c' % 3 == 0
    assert_eq!(enrich::agent_review("agent_01"), "Excellent");
    assert_eq!(enrich::agent_review("agent_02"), enrich::agent_review("agent_01"));
    assert_eq!(enrich::agent_review("bob"), "Needs Improvement");
    assert_eq!(enrich::agent_review("carol"), "Good");
    assert_eq!(enrich::agent_review(""), "N/A");
}

#[test]
fn filter_all_mode_is_identity() {
    let calls = vec![
        call("c1", "agent_01", date(2023, 1, 1), 10, Satisfaction::Neutral),
        call("c2", "agent_01", date(2024, 7, 30), 10, Satisfaction::Neutral),
        call("c3", "agent_01", date(2025, 12, 31), 10, Satisfaction::Neutral),
    ];
    let window = PeriodWindow::new(PeriodMode::All, date(2024, 7, 30));

    let filtered = filter_calls(&calls, &window);
    assert_eq!(filtered.len(), calls.len());
    for (kept, original) in filtered.iter().zip(calls.iter()) {
        assert_eq!(kept.id, original.id);
    }
}

#[test]
fn week_runs_sunday_through_saturday() {
    // 2024-07-30 is a Tuesday; its week is Jul 28 (Sun) .. Aug 3 (Sat).
    let window = PeriodWindow::new(PeriodMode::Week, date(2024, 7, 30));
    assert_eq!(window.range(), Some((date(2024, 7, 28), date(2024, 8, 3))));

    // Both boundary days are included.
    assert!(window.contains(date(2024, 7, 28)));
    assert!(window.contains(date(2024, 8, 3)));
    assert!(!window.contains(date(2024, 7, 27)));
    assert!(!window.contains(date(2024, 8, 4)));
}

#[test]
fn week_anchored_on_boundary_contains_itself() {
    let sunday = PeriodWindow::new(PeriodMode::Week, date(2024, 7, 28));
    assert!(sunday.contains(date(2024, 7, 28)));

    let saturday = PeriodWindow::new(PeriodMode::Week, date(2024, 8, 3));
    assert!(saturday.contains(date(2024, 8, 3)));
    assert_eq!(sunday.range(), saturday.range());
}

#[test]
fn month_window_covers_whole_calendar_month() {
    let window = PeriodWindow::new(PeriodMode::Month, date(2024, 2, 15));
    assert_eq!(window.range(), Some((date(2024, 2, 1), date(2024, 2, 29))));
}

#[test]
fn month_navigation_clamps_to_last_valid_day() {
    let window = PeriodWindow::new(PeriodMode::Month, date(2024, 1, 31));
    assert_eq!(window.step_forward().anchor, date(2024, 2, 29));

    let window = PeriodWindow::new(PeriodMode::Month, date(2023, 3, 31));
    assert_eq!(window.step_back().anchor, date(2023, 2, 28));
}

#[test]
fn year_navigation_handles_leap_day() {
    let window = PeriodWindow::new(PeriodMode::Year, date(2024, 2, 29));
    assert_eq!(window.step_forward().anchor, date(2025, 2, 28));
}

#[test]
fn day_navigation_steps_one_day() {
    let window = PeriodWindow::new(PeriodMode::Day, date(2024, 7, 31));
    assert_eq!(window.step_forward().anchor, date(2024, 8, 1));
    assert_eq!(window.step_back().anchor, date(2024, 7, 30));
}

#[test]
fn summarize_empty_set_is_na() {
    let summary = summarize(&[]);
    assert_eq!(summary.total_calls, 0);
    assert_eq!(summary.positive_count, 0);
    assert_eq!(summary.neutral_count, 0);
    assert_eq!(summary.negative_count, 0);
    assert_eq!(summary.total_duration_seconds, 0);
    assert_eq!(summary.overall_satisfaction, "N/A");
}

#[test]
fn summarize_counts_and_durations() {
    let calls = vec![
        call("c1", "a", date(2024, 7, 28), 100, Satisfaction::VeryPositive),
        call("c2", "a", date(2024, 7, 28), 50, Satisfaction::Positive),
        call("c3", "a", date(2024, 7, 29), 30, Satisfaction::Neutral),
        call("c4", "a", date(2024, 7, 29), 20, Satisfaction::VeryNegative),
    ];
    let refs: Vec<&Call> = calls.iter().collect();

    let summary = summarize(&refs);
    assert_eq!(summary.total_calls, 4);
    assert_eq!(summary.positive_count, 2);
    assert_eq!(summary.neutral_count, 1);
    assert_eq!(summary.negative_count, 1);
    assert_eq!(summary.total_duration_seconds, 200);
    assert_eq!(summary.average_duration_seconds, 50.0);
}

#[test]
fn mean_score_of_zero_is_neutral() {
    let calls = vec![
        call("c1", "a", date(2024, 7, 28), 10, Satisfaction::Positive),
        call("c2", "a", date(2024, 7, 28), 10, Satisfaction::Negative),
    ];
    let refs: Vec<&Call> = calls.iter().collect();
    assert_eq!(summarize(&refs).overall_satisfaction, "Neutral");
}

#[test]
fn satisfaction_label_thresholds() {
    let cases: &[(Satisfaction, &str)] = &[
        (Satisfaction::VeryPositive, "Very Positive"),
        (Satisfaction::Positive, "Positive"),
        (Satisfaction::Neutral, "Neutral"),
        (Satisfaction::Negative, "Negative"),
        (Satisfaction::VeryNegative, "Very Negative"),
    ];
    for (satisfaction, expected) in cases {
        let calls = vec![call("c", "a", date(2024, 7, 28), 10, *satisfaction)];
        let refs: Vec<&Call> = calls.iter().collect();
        assert_eq!(summarize(&refs).overall_satisfaction, *expected);
    }
}

#[test]
fn agent_review_thresholds() {
    // 3 of 4 positive (75%), none negative -> Excellent.
    let calls = vec![
        call("c1", "a1", date(2024, 7, 28), 10, Satisfaction::Positive),
        call("c2", "a1", date(2024, 7, 28), 10, Satisfaction::VeryPositive),
        call("c3", "a1", date(2024, 7, 28), 10, Satisfaction::Positive),
        call("c4", "a1", date(2024, 7, 28), 10, Satisfaction::Neutral),
    ];
    assert_eq!(agent_stats("a1", &calls).overall_review, "Excellent");

    // 2 of 4 positive (50%), 1 negative (25%) -> Good.
    let calls = vec![
        call("c1", "a1", date(2024, 7, 28), 10, Satisfaction::Positive),
        call("c2", "a1", date(2024, 7, 28), 10, Satisfaction::Positive),
        call("c3", "a1", date(2024, 7, 28), 10, Satisfaction::Negative),
        call("c4", "a1", date(2024, 7, 28), 10, Satisfaction::Neutral),
    ];
    assert_eq!(agent_stats("a1", &calls).overall_review, "Good");

    // Mostly negative -> Needs Improvement.
    let calls = vec![
        call("c1", "a1", date(2024, 7, 28), 10, Satisfaction::Negative),
        call("c2", "a1", date(2024, 7, 28), 10, Satisfaction::VeryNegative),
    ];
    assert_eq!(agent_stats("a1", &calls).overall_review, "Needs Improvement");

    // No calls -> N/A, and calls of other agents are ignored.
    assert_eq!(agent_stats("a2", &calls).total_calls, 0);
    assert_eq!(agent_stats("a2", &calls).overall_review, "N/A");
}

#[test]
fn buckets_sort_ascending_by_calendar_key() {
    let calls = vec![
        call("c1", "a", date(2024, 7, 30), 60, Satisfaction::Neutral),
        call("c2", "a", date(2024, 7, 28), 30, Satisfaction::Neutral),
        call("c3", "a", date(2024, 7, 30), 40, Satisfaction::Neutral),
        call("c4", "a", date(2024, 7, 29), 20, Satisfaction::Neutral),
    ];
    let refs: Vec<&Call> = calls.iter().collect();

    let buckets = bucket_calls(&refs, PeriodMode::Week);
    let keys: Vec<NaiveDate> = buckets.iter().map(|b| b.key).collect();
    assert_eq!(
        keys,
        [date(2024, 7, 28), date(2024, 7, 29), date(2024, 7, 30)]
    );
    assert_eq!(buckets[2].count, 2);
    assert_eq!(buckets[2].total_duration_seconds, 100);
}

#[test]
fn month_mode_buckets_by_sunday_week_start() {
    let calls = vec![
        // Jul 28 (Sun) and Jul 30 (Tue) share the week of Jul 28;
        // Aug 4 (Sun) starts the next week.
        call("c1", "a", date(2024, 7, 28), 10, Satisfaction::Neutral),
        call("c2", "a", date(2024, 7, 30), 10, Satisfaction::Neutral),
        call("c3", "a", date(2024, 8, 4), 10, Satisfaction::Neutral),
    ];
    let refs: Vec<&Call> = calls.iter().collect();

    let buckets = bucket_calls(&refs, PeriodMode::Month);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].key, date(2024, 7, 28));
    assert_eq!(buckets[0].count, 2);
    assert_eq!(buckets[1].key, date(2024, 8, 4));
}

#[test]
fn year_mode_buckets_by_month() {
    let calls = vec![
        call("c1", "a", date(2024, 1, 31), 10, Satisfaction::Neutral),
        call("c2", "a", date(2024, 1, 2), 10, Satisfaction::Neutral),
        call("c3", "a", date(2024, 3, 15), 10, Satisfaction::Neutral),
    ];
    let refs: Vec<&Call> = calls.iter().collect();

    let buckets = bucket_calls(&refs, PeriodMode::Year);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].key, date(2024, 1, 1));
    assert_eq!(buckets[0].count, 2);
    assert_eq!(buckets[1].key, date(2024, 3, 1));
}

#[test]
fn embedded_dataset_day_filter_end_to_end() {
    let store = DataStore::load().expect("embedded dataset parses");
    assert_eq!(store.call_count(), 9);

    let window = PeriodWindow::new(PeriodMode::Day, date(2024, 7, 30));
    let filtered = filter_calls(store.calls(), &window);

    let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["call_005", "call_008", "call_009"]);
}

#[test]
fn embedded_dataset_joins_cleanly() {
    let store = DataStore::load().expect("embedded dataset parses");
    assert!(store.agent("agent_01").is_some());
    assert!(store.agent("agent_99").is_none());

    let enriched = enrich_calls(store.calls(), store.agents_by_id());
    assert_eq!(enriched.len(), store.call_count());
    // Every embedded call references a known agent.
    assert!(enriched.iter().all(|e| e.agent_name != "Unknown Agent"));
}
