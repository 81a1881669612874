//! Tag counting and the synthetic per-year trend distribution.

mod aggregate;
mod config;
mod parse;

pub use aggregate::{ChartData, ChartSeries, PeriodPoint, aggregate};
pub use config::{DEFAULT_PATTERN, PERIODS, Pattern, TrendConfig};
pub use parse::{TagCounts, count_tags, top_tags};
