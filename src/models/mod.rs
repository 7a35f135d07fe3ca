// Domain models

mod counters;
mod period;
mod report;

pub use counters::{CounterSnapshot, InterfaceCounters, InterfaceRate};
pub use period::{LIVE_MONTH_WINDOW_SECS, PeriodKind, SECS_PER_DAY, SECS_PER_HOUR};
pub use report::{Report, Sample, Totals};
