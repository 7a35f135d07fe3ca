// Counter-delta sampling: snapshot, wait, snapshot, diff.
// Idle -> Sampling -> Computed; elapsed time is measured, not assumed.

use std::time::{Duration, Instant};

use tracing::{debug, instrument, warn};

use crate::models::{CounterSnapshot, InterfaceRate};

/// Source of cumulative per-interface byte counters.
pub trait CounterSource {
    fn snapshot(&mut self) -> anyhow::Result<CounterSnapshot>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SamplerState {
    Idle,
    Sampling {
        before: CounterSnapshot,
        started: Instant,
    },
    Computed {
        rates: Vec<InterfaceRate>,
        skipped: Vec<String>,
        elapsed_secs: f64,
    },
}

pub struct LiveSampler<S> {
    source: S,
    state: SamplerState,
}

impl<S: CounterSource> LiveSampler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SamplerState::Idle,
        }
    }

    pub fn state(&self) -> &SamplerState {
        &self.state
    }

    /// Take the first snapshot. Allowed from Idle or after a completed cycle.
    pub fn begin(&mut self) -> anyhow::Result<()> {
        if matches!(self.state, SamplerState::Sampling { .. }) {
            anyhow::bail!("sampling already in progress");
        }
        let before = self.source.snapshot()?;
        self.state = SamplerState::Sampling {
            before,
            started: Instant::now(),
        };
        Ok(())
    }

    /// Take the second snapshot and compute rates over the measured elapsed time.
    pub fn finish(&mut self) -> anyhow::Result<Vec<InterfaceRate>> {
        let SamplerState::Sampling { before, started } =
            std::mem::replace(&mut self.state, SamplerState::Idle)
        else {
            anyhow::bail!("finish called without a first snapshot");
        };
        let after = match self.source.snapshot() {
            Ok(s) => s,
            Err(e) => {
                self.state = SamplerState::Sampling { before, started };
                return Err(e);
            }
        };
        let elapsed_secs = started.elapsed().as_secs_f64();
        let (rates, skipped) = compute_rates(&before, &after, elapsed_secs)?;
        self.state = SamplerState::Computed {
            rates: rates.clone(),
            skipped,
            elapsed_secs,
        };
        Ok(rates)
    }

    /// Rates of the last completed cycle, if any.
    pub fn rates(&self) -> Option<&[InterfaceRate]> {
        match &self.state {
            SamplerState::Computed { rates, .. } => Some(rates),
            _ => None,
        }
    }
}

/// Rates in bit/s for interfaces present in both snapshots. Interfaces missing
/// a counter, or whose counter went backwards, are skipped for this cycle and
/// returned by name.
pub fn compute_rates(
    before: &CounterSnapshot,
    after: &CounterSnapshot,
    elapsed_secs: f64,
) -> anyhow::Result<(Vec<InterfaceRate>, Vec<String>)> {
    anyhow::ensure!(
        elapsed_secs > 0.0,
        "elapsed time must be > 0, got {}",
        elapsed_secs
    );
    let mut rates = Vec::with_capacity(before.interfaces.len());
    let mut skipped = Vec::new();

    for (name, prev) in &before.interfaces {
        let Some(cur) = after.interfaces.get(name) else {
            continue;
        };
        let deltas = prev
            .rx_bytes
            .zip(cur.rx_bytes)
            .and_then(|(b, a)| a.checked_sub(b))
            .zip(
                prev.tx_bytes
                    .zip(cur.tx_bytes)
                    .and_then(|(b, a)| a.checked_sub(b)),
            );
        match deltas {
            Some((drx, dtx)) => rates.push(InterfaceRate {
                name: name.clone(),
                rx_bits_per_sec: bits_per_sec(drx, elapsed_secs),
                tx_bits_per_sec: bits_per_sec(dtx, elapsed_secs),
            }),
            None => {
                warn!(interface = %name, "skipping interface due to missing data");
                skipped.push(name.clone());
            }
        }
    }

    Ok((rates, skipped))
}

pub fn bits_per_sec(delta_bytes: u64, elapsed_secs: f64) -> f64 {
    delta_bytes as f64 * 8.0 / elapsed_secs
}

/// One full two-phase cycle: begin, sleep for `window`, finish.
#[instrument(skip(sampler), fields(window_secs = window.as_secs_f64()))]
pub async fn run_cycle<S: CounterSource>(
    sampler: &mut LiveSampler<S>,
    window: Duration,
) -> anyhow::Result<Vec<InterfaceRate>> {
    sampler.begin()?;
    tokio::time::sleep(window).await;
    let rates = sampler.finish()?;
    debug!(interfaces = rates.len(), "live cycle complete");
    Ok(rates)
}
