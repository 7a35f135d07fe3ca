// Canonical report: ordered samples + derived totals

use serde::{Deserialize, Serialize};

use super::PeriodKind;
use crate::units::format_size;

/// One reporting period's usage in canonical units (bytes, Mbit/s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Fully qualified period label, e.g. "2024-05-01 14:00", "2024-05-01", "2024-05".
    pub label: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    /// rx + tx, or the source's own total when it reports one.
    pub total_bytes: u64,
    #[serde(default)]
    pub avg_rate_rx_mbps: Option<f64>,
    #[serde(default)]
    pub avg_rate_tx_mbps: Option<f64>,
    /// Combined average rate as printed by text reports that have a single rate column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rate_total_mbps: Option<f64>,
    /// Month length used for monthly rate derivation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_in_month: Option<i64>,
}

impl Sample {
    /// Sample with `total_bytes = rx + tx` and no rates.
    pub fn new(label: impl Into<String>, rx_bytes: u64, tx_bytes: u64) -> Self {
        Self {
            label: label.into(),
            rx_bytes,
            tx_bytes,
            total_bytes: rx_bytes.saturating_add(tx_bytes),
            avg_rate_rx_mbps: None,
            avg_rate_tx_mbps: None,
            avg_rate_total_mbps: None,
            days_in_month: None,
        }
    }

    pub fn summed_bytes(&self) -> u64 {
        self.rx_bytes.saturating_add(self.tx_bytes)
    }
}

/// Period kind plus samples in the order the source emitted them. Never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    period_kind: PeriodKind,
    samples: Vec<Sample>,
}

impl Report {
    pub fn new(period_kind: PeriodKind, samples: Vec<Sample>) -> Self {
        Self {
            period_kind,
            samples,
        }
    }

    pub fn period_kind(&self) -> PeriodKind {
        self.period_kind
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

/// Byte totals across a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_rx_bytes: u64,
    pub total_tx_bytes: u64,
}

impl Totals {
    pub fn total_bytes(&self) -> u64 {
        self.total_rx_bytes.saturating_add(self.total_tx_bytes)
    }

    /// Binary-scaled display strings (rx, tx, total), e.g. "9.41 GiB".
    pub fn display(&self) -> (String, String, String) {
        (
            format_size(self.total_rx_bytes as f64),
            format_size(self.total_tx_bytes as f64),
            format_size(self.total_bytes() as f64),
        )
    }
}
