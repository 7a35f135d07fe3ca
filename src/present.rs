// Plain-text and JSON rendering of reports and live rates.

use serde::Serialize;

use crate::models::{InterfaceRate, Report, Sample, Totals};
use crate::units::{format_bit_rate, format_mbps, format_size};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput<'a> {
    pub report: &'a Report,
    pub totals: Totals,
}

pub fn report_json(report: &Report, totals: Totals) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportOutput { report, totals })
}

/// Table with one line per sample followed by the totals line.
pub fn report_table(report: &Report, totals: &Totals) -> String {
    let rule = "-".repeat(89);
    let (rx, tx, total) = totals.display();

    let mut lines = vec![
        format!("{} report", report.period_kind()),
        format!(
            "{:<18} {:>12} {:>12} {:>12} {:>15} {:>15}",
            "period", "rx", "tx", "total", "avg rx", "avg tx"
        ),
        rule.clone(),
    ];
    lines.extend(report.samples().iter().map(sample_line));
    lines.push(rule);
    lines.push(format!("{:<18} {:>12} {:>12} {:>12}", "total", rx, tx, total));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn sample_line(s: &Sample) -> String {
    let rate = |r: Option<f64>| r.map(format_mbps).unwrap_or_else(|| "n/a".into());
    format!(
        "{:<18} {:>12} {:>12} {:>12} {:>15} {:>15}",
        s.label,
        format_size(s.rx_bytes as f64),
        format_size(s.tx_bytes as f64),
        format_size(s.total_bytes as f64),
        rate(s.avg_rate_rx_mbps),
        rate(s.avg_rate_tx_mbps),
    )
}

const RATE_BOX_RULE: &str = "+----------------------+--------------------+";

/// One box per interface with its receive and transmit rates.
pub fn rates_table(rates: &[InterfaceRate]) -> String {
    rates.iter().map(rate_box).collect()
}

fn rate_box(r: &InterfaceRate) -> String {
    format!(
        "\nInterface: {name}\n{RATE_BOX_RULE}\n| Bandwidth Rates      |                    |\n{RATE_BOX_RULE}\n\
         | Receive rate:        | {rx:<18} |\n| Transmit rate:       | {tx:<18} |\n{RATE_BOX_RULE}\n",
        name = r.name,
        rx = format_bit_rate(r.rx_bits_per_sec),
        tx = format_bit_rate(r.tx_bits_per_sec),
    )
}
