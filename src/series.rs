// Label resolution: carries the last date header forward onto hour rows and
// assembles samples in input order.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::error::{ParseWarning, WarningKind};
use crate::models::{PeriodKind, Sample};

/// Date headers are normalized to this layout before labels are built.
pub const ISO_DATE: &str = "%Y-%m-%d";
const DATE_HEADER_FORMATS: [&str; 3] = [ISO_DATE, "%m/%d/%y", "%d.%m.%Y"];

/// Absolute slack for total-vs-sum comparison; text reports round every column.
const TOTAL_TOLERANCE_FLOOR_BYTES: f64 = 1024.0;

/// A parsed line/entry before labels are resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRow {
    /// A date on its own line; applies to following hour rows until the next one.
    DateHeader { row: usize, date: String },
    Entry(RowFields),
}

/// Canonical values of one data row. `token` is the time of day for hour
/// reports and the full label otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFields {
    pub row: usize,
    pub token: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub total_bytes: Option<u64>,
    pub avg_rate_rx_mbps: Option<f64>,
    pub avg_rate_tx_mbps: Option<f64>,
    pub avg_rate_total_mbps: Option<f64>,
    pub days_in_month: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesOptions {
    /// Relative tolerance for a reported total against rx + tx.
    pub total_tolerance_ratio: f64,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            total_tolerance_ratio: 0.01,
        }
    }
}

/// Returns the token if it is a date header (ISO, US short, or dotted European).
pub fn parse_date_header(token: &str) -> Option<NaiveDate> {
    DATE_HEADER_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

/// Number of days in the given month.
pub fn month_length(year: i32, month: u32) -> Option<i64> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days())
}

/// Month length for a month label: "2024-05" or the legacy "May '24".
pub fn month_length_for_label(label: &str) -> Option<i64> {
    let first = NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("01 {label}"), "%d %b '%y"))
        .ok()?;
    month_length(first.year(), first.month())
}

/// Resolve labels and assemble samples. Input order is kept; duplicates are
/// flagged but never merged or dropped.
pub fn build(
    rows: Vec<RawRow>,
    kind: PeriodKind,
    options: &SeriesOptions,
) -> (Vec<Sample>, Vec<ParseWarning>) {
    let mut samples = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let mut carried_date: Option<String> = None;

    for raw in rows {
        let fields = match raw {
            RawRow::DateHeader { date, .. } => {
                carried_date = Some(date);
                continue;
            }
            RawRow::Entry(fields) => fields,
        };
        let label = match (kind, carried_date.as_deref()) {
            (PeriodKind::Hour, Some(date)) => format!("{date} {}", fields.token),
            (PeriodKind::Hour, None) => {
                warnings.push(ParseWarning::new(fields.row, WarningKind::MissingDate));
                continue;
            }
            (PeriodKind::Day | PeriodKind::Month, _) => fields.token.clone(),
        };
        if !seen.insert(label.clone()) {
            warnings.push(ParseWarning::new(
                fields.row,
                WarningKind::DuplicateLabel(label.clone()),
            ));
        }
        let (row, reported) = (fields.row, fields.total_bytes);
        let sample = to_sample(label, fields, kind);
        if let Some(w) = check_total(row, reported, &sample, options) {
            warnings.push(w);
        }
        samples.push(sample);
    }

    (samples, warnings)
}

fn to_sample(label: String, fields: RowFields, kind: PeriodKind) -> Sample {
    let days_in_month = match kind {
        PeriodKind::Month => fields
            .days_in_month
            .or_else(|| month_length_for_label(&label)),
        PeriodKind::Hour | PeriodKind::Day => None,
    };
    Sample {
        total_bytes: fields
            .total_bytes
            .unwrap_or_else(|| fields.rx_bytes.saturating_add(fields.tx_bytes)),
        label,
        rx_bytes: fields.rx_bytes,
        tx_bytes: fields.tx_bytes,
        avg_rate_rx_mbps: fields.avg_rate_rx_mbps,
        avg_rate_tx_mbps: fields.avg_rate_tx_mbps,
        avg_rate_total_mbps: fields.avg_rate_total_mbps,
        days_in_month,
    }
}

fn check_total(
    row: usize,
    reported: Option<u64>,
    sample: &Sample,
    options: &SeriesOptions,
) -> Option<ParseWarning> {
    let reported = reported?;
    let summed = sample.summed_bytes();
    let diff = reported.abs_diff(summed) as f64;
    let allowed = (options.total_tolerance_ratio * reported.max(summed) as f64)
        .max(TOTAL_TOLERANCE_FLOOR_BYTES);
    (diff > allowed).then(|| {
        ParseWarning::new(row, WarningKind::TotalMismatch { reported, summed })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_header_formats() {
        assert!(parse_date_header("2024-05-01").is_some());
        assert!(parse_date_header("05/01/24").is_some());
        assert!(parse_date_header("01.05.2024").is_some());
        assert!(parse_date_header("14:00").is_none());
        assert!(parse_date_header("2024-05").is_none());
    }

    #[test]
    fn month_length_handles_leap_years_and_december() {
        assert_eq!(month_length(2024, 2), Some(29));
        assert_eq!(month_length(2023, 2), Some(28));
        assert_eq!(month_length(2024, 12), Some(31));
        assert_eq!(month_length(2024, 13), None);
    }

    #[test]
    fn month_length_for_both_label_styles() {
        assert_eq!(month_length_for_label("2024-04"), Some(30));
        assert_eq!(month_length_for_label("May '24"), Some(31));
        assert_eq!(month_length_for_label("garbage"), None);
    }
}
