// Plain-text table split on runs of whitespace. Standalone "|" tokens are
// column rules and are dropped before counting.

use super::{skip, whole_bytes};
use crate::error::{ParseWarning, UnitError, WarningKind};
use crate::models::PeriodKind;
use crate::series::{ISO_DATE, RawRow, RowFields, parse_date_header};
use crate::units::{parse_rate_parts, parse_size_parts};

/// rx, tx, total and average rate, each as a number + unit pair.
const VALUE_TOKENS: usize = 8;

pub(super) fn rows(raw: &str, kind: PeriodKind) -> (Vec<RawRow>, Vec<ParseWarning>) {
    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    let expected = kind.whitespace_columns();

    for (idx, line) in raw.lines().enumerate() {
        let row = idx + 1;
        if skip::is_noise(line) {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().filter(|t| *t != "|").collect();

        if let [single] = tokens.as_slice()
            && let Some(date) = parse_date_header(single)
        {
            rows.push(RawRow::DateHeader {
                row,
                date: date.format(ISO_DATE).to_string(),
            });
            continue;
        }

        if !expected.contains(&tokens.len()) {
            warnings.push(ParseWarning::new(
                row,
                WarningKind::ColumnCount {
                    expected,
                    found: tokens.len(),
                },
            ));
            continue;
        }

        let (label, values) = tokens.split_at(tokens.len() - VALUE_TOKENS);
        match entry(row, label.join(" "), values) {
            Ok(fields) => rows.push(RawRow::Entry(fields)),
            Err(e) => warnings.push(ParseWarning::new(row, e)),
        }
    }

    (rows, warnings)
}

fn entry(row: usize, token: String, v: &[&str]) -> Result<RowFields, UnitError> {
    let rx = parse_size_parts(v[0], v[1])?;
    let tx = parse_size_parts(v[2], v[3])?;
    let total = parse_size_parts(v[4], v[5])?;
    let rate = parse_rate_parts(v[6], v[7])?;
    Ok(RowFields {
        row,
        token,
        rx_bytes: whole_bytes(rx),
        tx_bytes: whole_bytes(tx),
        total_bytes: Some(whole_bytes(total)),
        avg_rate_total_mbps: Some(rate),
        ..Default::default()
    })
}
