// vnStat JSON report: interfaces[i].traffic.{hours|days|months}[]
// rx/tx are already byte counts; rates are derived downstream from them.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ParseWarning, ReportError, WarningKind};
use crate::models::PeriodKind;
use crate::series::{RawRow, RowFields, month_length};

#[derive(Debug, Deserialize)]
struct JsonReport {
    interfaces: Vec<JsonInterface>,
}

#[derive(Debug, Deserialize)]
struct JsonInterface {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    traffic: JsonTraffic,
}

/// Entries stay untyped so one malformed element only drops that element.
/// vnStat 2.x uses singular keys; older releases use plural.
#[derive(Debug, Default, Deserialize)]
struct JsonTraffic {
    #[serde(default, alias = "hour")]
    hours: Vec<Value>,
    #[serde(default, alias = "day")]
    days: Vec<Value>,
    #[serde(default, alias = "month")]
    months: Vec<Value>,
}

impl JsonTraffic {
    fn entries(&self, kind: PeriodKind) -> &[Value] {
        match kind {
            PeriodKind::Hour => &self.hours,
            PeriodKind::Day => &self.days,
            PeriodKind::Month => &self.months,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonEntry {
    /// Hour of day in legacy hourly entries that carry no `time`.
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    date: Option<JsonDate>,
    #[serde(default)]
    time: Option<JsonTime>,
    rx: u64,
    tx: u64,
    /// Month length supplied by the source.
    #[serde(default)]
    days: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct JsonDate {
    year: i32,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    day: Option<u32>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct JsonTime {
    hour: u32,
    #[serde(default)]
    minute: Option<u32>,
}

pub(super) fn rows(
    raw: &str,
    kind: PeriodKind,
    interface: Option<&str>,
) -> Result<(Vec<RawRow>, Vec<ParseWarning>), ReportError> {
    let report: JsonReport =
        serde_json::from_str(raw).map_err(|e| ReportError::InvalidPayload(e.to_string()))?;
    let iface = select_interface(&report.interfaces, interface)?;

    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    let mut last_date: Option<String> = None;

    for (idx, value) in iface.traffic.entries(kind).iter().enumerate() {
        let row = idx + 1;
        let entry: JsonEntry = match serde_json::from_value(value.clone()) {
            Ok(e) => e,
            Err(e) => {
                warnings.push(ParseWarning::new(row, WarningKind::InvalidEntry(e.to_string())));
                continue;
            }
        };
        match kind {
            PeriodKind::Hour => {
                let Some(date) = entry.date.and_then(day_label) else {
                    warnings.push(ParseWarning::new(
                        row,
                        WarningKind::InvalidEntry("hour entry without full date".into()),
                    ));
                    continue;
                };
                let Some(token) = hour_label(&entry) else {
                    warnings.push(ParseWarning::new(
                        row,
                        WarningKind::InvalidEntry("hour entry without time".into()),
                    ));
                    continue;
                };
                if last_date.as_deref() != Some(date.as_str()) {
                    rows.push(RawRow::DateHeader {
                        row,
                        date: date.clone(),
                    });
                    last_date = Some(date);
                }
                rows.push(RawRow::Entry(fields(row, token, &entry, None)));
            }
            PeriodKind::Day => {
                let Some(label) = entry.date.and_then(day_label) else {
                    warnings.push(ParseWarning::new(
                        row,
                        WarningKind::InvalidEntry("day entry without full date".into()),
                    ));
                    continue;
                };
                rows.push(RawRow::Entry(fields(row, label, &entry, None)));
            }
            PeriodKind::Month => {
                let Some((label, year, month)) = entry.date.and_then(month_label) else {
                    warnings.push(ParseWarning::new(
                        row,
                        WarningKind::InvalidEntry("month entry without year/month".into()),
                    ));
                    continue;
                };
                let days = entry.days.or_else(|| month_length(year, month));
                rows.push(RawRow::Entry(fields(row, label, &entry, days)));
            }
        }
    }

    Ok((rows, warnings))
}

fn select_interface<'a>(
    interfaces: &'a [JsonInterface],
    wanted: Option<&str>,
) -> Result<&'a JsonInterface, ReportError> {
    match wanted {
        Some(name) => interfaces
            .iter()
            .find(|i| i.name.as_deref() == Some(name))
            .ok_or_else(|| ReportError::InvalidPayload(format!("interface {name:?} not in report"))),
        None => interfaces
            .first()
            .ok_or_else(|| ReportError::InvalidPayload("report lists no interfaces".into())),
    }
}

fn fields(row: usize, token: String, entry: &JsonEntry, days: Option<i64>) -> RowFields {
    RowFields {
        row,
        token,
        rx_bytes: entry.rx,
        tx_bytes: entry.tx,
        days_in_month: days,
        ..Default::default()
    }
}

fn day_label(d: JsonDate) -> Option<String> {
    Some(format!("{:04}-{:02}-{:02}", d.year, d.month?, d.day?))
}

fn month_label(d: JsonDate) -> Option<(String, i32, u32)> {
    let month = d.month?;
    Some((format!("{:04}-{:02}", d.year, month), d.year, month))
}

fn hour_label(entry: &JsonEntry) -> Option<String> {
    match entry.time {
        Some(t) => Some(format!("{:02}:{:02}", t.hour, t.minute.unwrap_or(0))),
        None => entry.id.filter(|h| *h < 24).map(|h| format!("{h:02}:00")),
    }
}
