// Report granularity

use serde::{Deserialize, Serialize};

pub const SECS_PER_HOUR: f64 = 3_600.0;
pub const SECS_PER_DAY: f64 = 86_400.0;
/// Fixed live sampling window for monthly mode (30 days).
pub const LIVE_MONTH_WINDOW_SECS: f64 = 2_592_000.0;

/// Report period; serializes to lowercase JSON (e.g. "hour").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Hour,
    Day,
    Month,
}

impl PeriodKind {
    /// The vnStat short flag selecting this period.
    pub fn flag(self) -> &'static str {
        match self {
            PeriodKind::Hour => "-h",
            PeriodKind::Day => "-d",
            PeriodKind::Month => "-m",
        }
    }

    /// Whitespace-table column counts accepted for a data row, `|` rules excluded.
    /// Months allow a legacy two-token label ("May '24").
    pub fn whitespace_columns(self) -> &'static [usize] {
        match self {
            PeriodKind::Hour | PeriodKind::Day => &[9],
            PeriodKind::Month => &[9, 10],
        }
    }

    /// Sleep window for live counter-delta sampling. Hourly uses the caller's interval.
    pub fn live_window_secs(self, hour_interval_secs: f64) -> f64 {
        match self {
            PeriodKind::Hour => hour_interval_secs,
            PeriodKind::Day => SECS_PER_DAY,
            PeriodKind::Month => LIVE_MONTH_WINDOW_SECS,
        }
    }
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PeriodKind::Hour => "hourly",
            PeriodKind::Day => "daily",
            PeriodKind::Month => "monthly",
        };
        f.write_str(s)
    }
}
