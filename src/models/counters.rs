// Live interface counter models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cumulative byte counters for one interface. `None` when the OS did not report the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceCounters {
    pub rx_bytes: Option<u64>,
    pub tx_bytes: Option<u64>,
}

impl InterfaceCounters {
    pub fn new(rx_bytes: u64, tx_bytes: u64) -> Self {
        Self {
            rx_bytes: Some(rx_bytes),
            tx_bytes: Some(tx_bytes),
        }
    }
}

/// Point-in-time counters for all interfaces, keyed by interface name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSnapshot {
    pub interfaces: BTreeMap<String, InterfaceCounters>,
}

impl FromIterator<(String, InterfaceCounters)> for CounterSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, InterfaceCounters)>>(iter: I) -> Self {
        Self {
            interfaces: iter.into_iter().collect(),
        }
    }
}

/// Receive/transmit rate of one interface over a sampling window, in bits per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRate {
    pub name: String,
    pub rx_bits_per_sec: f64,
    pub tx_bits_per_sec: f64,
}
