// Totals and average-rate derivation. Byte counts are authoritative; rates are
// only ever derived from them, never the other way round.

use crate::error::{DurationError, ParseWarning, WarningKind};
use crate::models::{PeriodKind, Report, SECS_PER_DAY, SECS_PER_HOUR, Sample, Totals};

/// Sum rx/tx bytes across the report.
pub fn totals(report: &Report) -> Totals {
    report
        .samples()
        .iter()
        .fold(Totals::default(), |acc, s| Totals {
            total_rx_bytes: acc.total_rx_bytes.saturating_add(s.rx_bytes),
            total_tx_bytes: acc.total_tx_bytes.saturating_add(s.tx_bytes),
        })
}

/// Length of one period in seconds. Months need the source's day count.
pub fn period_duration_secs(
    kind: PeriodKind,
    days_in_month: Option<i64>,
) -> Result<f64, DurationError> {
    match kind {
        PeriodKind::Hour => Ok(SECS_PER_HOUR),
        PeriodKind::Day => Ok(SECS_PER_DAY),
        PeriodKind::Month => match days_in_month {
            Some(days) if days > 0 => Ok(days as f64 * SECS_PER_DAY),
            Some(days) => Err(DurationError::NonPositiveDays(days)),
            None => Err(DurationError::UnknownMonthLength),
        },
    }
}

/// Average rate in Mbit/s for `bytes` spread over `duration_secs`.
pub fn mbps(bytes: u64, duration_secs: f64) -> f64 {
    bytes as f64 * 8.0 / (duration_secs * 1e6)
}

/// (rx, tx) average rate in Mbit/s. Rates already on the sample are returned as is.
pub fn derive_rate(sample: &Sample, kind: PeriodKind) -> Result<(f64, f64), DurationError> {
    if let (Some(rx), Some(tx)) = (sample.avg_rate_rx_mbps, sample.avg_rate_tx_mbps) {
        return Ok((rx, tx));
    }
    let secs = period_duration_secs(kind, sample.days_in_month)?;
    Ok((
        sample
            .avg_rate_rx_mbps
            .unwrap_or_else(|| mbps(sample.rx_bytes, secs)),
        sample
            .avg_rate_tx_mbps
            .unwrap_or_else(|| mbps(sample.tx_bytes, secs)),
    ))
}

/// Fill in missing rx/tx rates before a report is sealed. A sample whose
/// duration cannot be determined keeps `None` and yields a warning.
pub fn complete_rates(samples: &mut [Sample], kind: PeriodKind) -> Vec<ParseWarning> {
    let mut warnings = Vec::new();
    for (idx, sample) in samples.iter_mut().enumerate() {
        match derive_rate(sample, kind) {
            Ok((rx, tx)) => {
                sample.avg_rate_rx_mbps = Some(rx);
                sample.avg_rate_tx_mbps = Some(tx);
            }
            Err(source) => warnings.push(ParseWarning::new(
                idx + 1,
                WarningKind::Duration {
                    label: sample.label.clone(),
                    source,
                },
            )),
        }
    }
    warnings
}
