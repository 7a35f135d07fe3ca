// Interface counters via sysinfo, preferring kernel statistics on Linux

mod linux;

use sysinfo::Networks;
use tracing::instrument;

use crate::live::CounterSource;
use crate::models::{CounterSnapshot, InterfaceCounters};

pub struct SysinfoCounters {
    networks: Networks,
}

impl Default for SysinfoCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoCounters {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl CounterSource for SysinfoCounters {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "snapshot"))]
    fn snapshot(&mut self) -> anyhow::Result<CounterSnapshot> {
        self.networks.refresh(true);
        Ok(self
            .networks
            .list()
            .iter()
            .map(|(name, data)| {
                let counters = linux::read_sysfs_counters(name).unwrap_or_else(|| {
                    InterfaceCounters::new(data.total_received(), data.total_transmitted())
                });
                (name.clone(), counters)
            })
            .collect())
    }
}
