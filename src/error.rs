// Error and diagnostic types for report normalization

use thiserror::Error;

use crate::models::PeriodKind;
use crate::parser::RawFormat;

/// A size or rate string could not be converted to canonical units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("empty value")]
    Empty,
    #[error("invalid number in {input:?}")]
    InvalidNumber { input: String },
    #[error("negative value in {input:?}")]
    Negative { input: String },
    #[error("unknown unit {unit:?} in {input:?}")]
    UnknownUnit { unit: String, input: String },
}

/// Month-rate derivation failed; only that sample's rate is affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("days in month must be > 0, got {0}")]
    NonPositiveDays(i64),
    #[error("month length unknown")]
    UnknownMonthLength,
}

/// Fatal for the current invocation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no parsable {kind} rows in {format} report")]
    NoData { format: RawFormat, kind: PeriodKind },
    #[error("invalid report payload: {0}")]
    InvalidPayload(String),
}

/// Why a row was dropped or flagged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WarningKind {
    #[error("expected {expected:?} columns, found {found}")]
    ColumnCount {
        expected: &'static [usize],
        found: usize,
    },
    #[error(transparent)]
    Unit(#[from] UnitError),
    #[error("hour row before any date header")]
    MissingDate,
    #[error("duplicate label {0:?}")]
    DuplicateLabel(String),
    #[error("reported total {reported} B differs from rx+tx {summed} B")]
    TotalMismatch { reported: u64, summed: u64 },
    #[error("rate not derived for {label:?}: {source}")]
    Duration {
        label: String,
        #[source]
        source: DurationError,
    },
    #[error("invalid entry: {0}")]
    InvalidEntry(String),
}

/// Non-fatal parse diagnostic. `row` is the 1-based input line (text), entry
/// index (JSON), or sample position for rate-derivation warnings.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {row}: {kind}")]
pub struct ParseWarning {
    pub row: usize,
    pub kind: WarningKind,
}

impl ParseWarning {
    pub fn new(row: usize, kind: impl Into<WarningKind>) -> Self {
        Self {
            row,
            kind: kind.into(),
        }
    }
}
