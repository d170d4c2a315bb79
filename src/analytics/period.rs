use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::EnrichedCall;
use crate::models::Call;

/// Time bucketing mode for the period filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PeriodMode {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl PeriodMode {
    pub fn label(&self) -> &'static str {
        match self {
            PeriodMode::Day => "Day",
            PeriodMode::Week => "Week",
            PeriodMode::Month => "Month",
            PeriodMode::Year => "Year",
            PeriodMode::All => "All",
        }
    }
}

/// A bucketing mode plus anchor date, defining a filter range.
///
/// All comparisons happen at calendar-day granularity (`NaiveDate`), so
/// time-of-day and timezone drift cannot affect membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub mode: PeriodMode,
    pub anchor: NaiveDate,
}

impl PeriodWindow {
    pub fn new(mode: PeriodMode, anchor: NaiveDate) -> Self {
        Self { mode, anchor }
    }

    /// Inclusive date range for the window; `None` means unbounded.
    /// Weeks run Sunday through Saturday.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self.mode {
            PeriodMode::All => None,
            PeriodMode::Day => Some((self.anchor, self.anchor)),
            PeriodMode::Week => {
                let offset = self.anchor.weekday().num_days_from_sunday() as i64;
                let start = self
                    .anchor
                    .checked_sub_signed(Duration::days(offset))
                    .unwrap_or(self.anchor);
                let end = start
                    .checked_add_signed(Duration::days(6))
                    .unwrap_or(start);
                Some((start, end))
            }
            PeriodMode::Month => {
                let start = self.anchor.with_day(1).unwrap_or(self.anchor);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(start);
                Some((start, end))
            }
            PeriodMode::Year => {
                let year = self.anchor.year();
                let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(self.anchor);
                let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(self.anchor);
                Some((start, end))
            }
        }
    }

    /// Whether `date` falls inside the window, boundaries included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.range() {
            None => true,
            Some((start, end)) => date >= start && date <= end,
        }
    }

    /// Shift the anchor forward by one unit of the active mode. Month and
    /// year steps clamp to the last valid day (Jan 31 → Feb 28/29).
    pub fn step_forward(&self) -> Self {
        self.shifted(1)
    }

    /// Shift the anchor back by one unit of the active mode.
    pub fn step_back(&self) -> Self {
        self.shifted(-1)
    }

    fn shifted(&self, direction: i64) -> Self {
        let anchor = match self.mode {
            PeriodMode::All => self.anchor,
            PeriodMode::Day => self
                .anchor
                .checked_add_signed(Duration::days(direction))
                .unwrap_or(self.anchor),
            PeriodMode::Week => self
                .anchor
                .checked_add_signed(Duration::days(7 * direction))
                .unwrap_or(self.anchor),
            PeriodMode::Month => self.shift_months(1, direction),
            PeriodMode::Year => self.shift_months(12, direction),
        };
        Self { anchor, ..*self }
    }

    fn shift_months(&self, months: u32, direction: i64) -> NaiveDate {
        let step = Months::new(months);
        let shifted = if direction >= 0 {
            self.anchor.checked_add_months(step)
        } else {
            self.anchor.checked_sub_months(step)
        };
        shifted.unwrap_or(self.anchor)
    }

    /// Human-readable description of the window, for the filter header.
    pub fn describe(&self) -> String {
        match (self.mode, self.range()) {
            (PeriodMode::All, _) | (_, None) => "All time".to_string(),
            (PeriodMode::Day, Some((start, _))) => start.format("%b %-d, %Y").to_string(),
            (PeriodMode::Week, Some((start, end))) => format!(
                "{} - {}",
                start.format("%b %-d"),
                end.format("%b %-d, %Y")
            ),
            (PeriodMode::Month, Some((start, _))) => start.format("%B %Y").to_string(),
            (PeriodMode::Year, Some((start, _))) => start.format("%Y").to_string(),
        }
    }
}

/// Select the calls whose date falls inside `window`, preserving order.
/// `PeriodMode::All` returns the input set unchanged.
pub fn filter_calls<'a>(calls: &'a [Call], window: &PeriodWindow) -> Vec<&'a Call> {
    calls
        .iter()
        .filter(|call| window.contains(call.date))
        .collect()
}

/// As [`filter_calls`], over enriched calls.
pub fn filter_enriched<'a>(
    calls: &'a [EnrichedCall],
    window: &PeriodWindow,
) -> Vec<&'a EnrichedCall> {
    calls
        .iter()
        .filter(|enriched| window.contains(enriched.call.date))
        .collect()
}
