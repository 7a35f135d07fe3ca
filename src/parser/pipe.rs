// Pipe-delimited table: label | rx | tx | total | avg rx | avg tx

use super::{skip, whole_bytes};
use crate::error::{ParseWarning, UnitError, WarningKind};
use crate::series::{ISO_DATE, RawRow, RowFields, parse_date_header};
use crate::units::{parse_rate, parse_size};

pub const PIPE_COLUMNS: usize = 6;
const EXPECTED: &[usize] = &[PIPE_COLUMNS];

pub(super) fn rows(raw: &str) -> (Vec<RawRow>, Vec<ParseWarning>) {
    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        let row = idx + 1;
        if skip::is_noise(line) {
            continue;
        }
        let trimmed = line.trim();

        if !trimmed.contains('|')
            && let Some(date) = parse_date_header(trimmed)
        {
            rows.push(RawRow::DateHeader {
                row,
                date: date.format(ISO_DATE).to_string(),
            });
            continue;
        }

        let fields = split_fields(trimmed);
        if fields.len() != PIPE_COLUMNS {
            warnings.push(ParseWarning::new(
                row,
                WarningKind::ColumnCount {
                    expected: EXPECTED,
                    found: fields.len(),
                },
            ));
            continue;
        }

        match entry(row, &fields) {
            Ok(f) => rows.push(RawRow::Entry(f)),
            Err(e) => warnings.push(ParseWarning::new(row, e)),
        }
    }

    (rows, warnings)
}

/// Split on '|' and trim; border pipes ("| a | b |") do not produce empty edge fields.
fn split_fields(line: &str) -> Vec<&str> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

fn entry(row: usize, f: &[&str]) -> Result<RowFields, UnitError> {
    if f[0].is_empty() {
        return Err(UnitError::Empty);
    }
    Ok(RowFields {
        row,
        token: f[0].to_string(),
        rx_bytes: whole_bytes(parse_size(f[1])?),
        tx_bytes: whole_bytes(parse_size(f[2])?),
        total_bytes: Some(whole_bytes(parse_size(f[3])?)),
        avg_rate_rx_mbps: Some(parse_rate(f[4])?),
        avg_rate_tx_mbps: Some(parse_rate(f[5])?),
        ..Default::default()
    })
}
