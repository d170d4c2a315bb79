use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::PeriodMode;
use crate::models::Call;

/// One chart bucket. `key` is the canonical calendar position used for
/// ordering; `label` is display-only.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBucket {
    pub key: NaiveDate,
    pub label: String,
    pub count: u64,
    pub total_duration_seconds: u64,
}

/// Group calls into chart buckets for the active mode: by day for
/// day/week/all, by Sunday week-start for month, by month for year.
/// Buckets come back sorted ascending by calendar key regardless of how
/// labels format.
pub fn bucket_calls(calls: &[&Call], mode: PeriodMode) -> Vec<SeriesBucket> {
    let mut buckets: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
    for call in calls {
        let key = bucket_key(call.date, mode);
        let entry = buckets.entry(key).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(call.duration_seconds);
    }

    buckets
        .into_iter()
        .map(|(key, (count, total_duration_seconds))| SeriesBucket {
            key,
            label: bucket_label(key, mode),
            count,
            total_duration_seconds,
        })
        .collect()
}

fn bucket_key(date: NaiveDate, mode: PeriodMode) -> NaiveDate {
    match mode {
        PeriodMode::Day | PeriodMode::Week | PeriodMode::All => date,
        PeriodMode::Month => {
            // Sunday that starts the call's week.
            let offset = date.weekday().num_days_from_sunday() as i64;
            date.checked_sub_signed(Duration::days(offset)).unwrap_or(date)
        }
        PeriodMode::Year => date.with_day(1).unwrap_or(date),
    }
}

fn bucket_label(key: NaiveDate, mode: PeriodMode) -> String {
    match mode {
        PeriodMode::Day | PeriodMode::Week | PeriodMode::All => {
            key.format("%b %-d").to_string()
        }
        PeriodMode::Month => format!("w/o {}", key.format("%b %-d")),
        PeriodMode::Year => key.format("%b").to_string(),
    }
}
