//! Analytics core: joining calls with agents, period filtering, and
//! aggregation into summary statistics and chart series.
//!
//! Everything here is a pure function of its inputs. The UI recomputes on
//! every interaction; results are idempotent for a given call set and
//! period window.

pub mod enrich;
pub mod period;
pub mod series;
pub mod summary;

#[cfg(test)]
mod tests;

pub use enrich::{enrich_calls, EnrichedCall};
pub use period::{filter_calls, filter_enriched, PeriodMode, PeriodWindow};
pub use series::{bucket_calls, SeriesBucket};
pub use summary::{agent_stats, percentage, summarize, AgentStats, CallSummary};
