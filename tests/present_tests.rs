// Output rendering tests

mod common;

use common::DAILY_PIPE;
use netbwm::aggregator::totals;
use netbwm::models::{InterfaceRate, PeriodKind};
use netbwm::parser::{ParseOptions, RawFormat, parse};
use netbwm::present::{rates_table, report_json, report_table};

#[test]
fn report_table_lists_samples_and_totals() {
    let out = parse(DAILY_PIPE, RawFormat::Pipe, PeriodKind::Day, &ParseOptions::default()).unwrap();
    let t = totals(&out.report);
    let table = report_table(&out.report, &t);
    assert!(table.starts_with("daily report"));
    assert!(table.contains("2024-05-01"));
    assert!(table.contains("99.42 Kbit/s"));
    assert!(table.contains("4.00 GiB"));
    let last = table.lines().last().unwrap();
    assert!(last.starts_with("total"));
    assert!(last.contains("5.50 GiB"));
}

#[test]
fn report_json_is_camel_case() {
    let out = parse(DAILY_PIPE, RawFormat::Pipe, PeriodKind::Day, &ParseOptions::default()).unwrap();
    let json = report_json(&out.report, totals(&out.report)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["report"]["periodKind"], "day");
    assert_eq!(v["report"]["samples"][0]["rxBytes"], 1_073_741_824u64);
    assert_eq!(v["totals"]["totalTxBytes"], 1_610_612_736u64);
}

#[test]
fn rates_table_formats_bit_rates() {
    let table = rates_table(&[InterfaceRate {
        name: "eth0".into(),
        rx_bits_per_sec: 800_000.0,
        tx_bits_per_sec: 12.0,
    }]);
    assert!(table.contains("Interface: eth0"));
    assert!(table.contains("| Receive rate:        | 800.00 Kbit/s      |"));
    assert!(table.contains("12.00 bit/s"));
}

#[test]
fn rates_table_has_one_box_per_interface() {
    assert_eq!(rates_table(&[]), "");
    let rate = |name: &str| InterfaceRate {
        name: name.into(),
        rx_bits_per_sec: 0.0,
        tx_bits_per_sec: 0.0,
    };
    let table = rates_table(&[rate("eth0"), rate("wlan0")]);
    assert_eq!(table.matches("Interface: ").count(), 2);
    assert_eq!(
        table
            .lines()
            .filter(|l| *l == "+----------------------+--------------------+")
            .count(),
        6
    );
    assert!(table.ends_with("+----------------------+--------------------+\n"));
}
