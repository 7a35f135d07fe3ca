use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::parser::{FormatChoice, ParseOptions};
use crate::series::SeriesOptions;

pub const DEFAULT_CONFIG_FILE: &str = "netbwm.toml";
pub const CONFIG_ENV_VAR: &str = "NETBWM_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub vnstat: VnstatConfig,
    #[serde(default)]
    pub live: LiveConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VnstatConfig {
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Interface passed to vnStat with -i; vnStat's default interface when unset.
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub format: FormatChoice,
}

impl Default for VnstatConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            interface: None,
            format: FormatChoice::Auto,
        }
    }
}

fn default_binary() -> String {
    "vnstat".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveConfig {
    /// Sampling window for hourly live mode, in seconds.
    #[serde(default = "default_hour_interval_secs")]
    pub hour_interval_secs: f64,
    /// Number of consecutive windows sampled in hourly live mode.
    #[serde(default = "default_hour_cycles")]
    pub hour_cycles: u32,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            hour_interval_secs: default_hour_interval_secs(),
            hour_cycles: default_hour_cycles(),
        }
    }
}

fn default_hour_interval_secs() -> f64 {
    1.0
}

fn default_hour_cycles() -> u32 {
    24
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Relative slack allowed between a reported total and rx + tx.
    #[serde(default = "default_total_tolerance_ratio")]
    pub total_tolerance_ratio: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            total_tolerance_ratio: default_total_tolerance_ratio(),
        }
    }
}

fn default_total_tolerance_ratio() -> f64 {
    0.01
}

impl AppConfig {
    /// Load from `path`, else $NETBWM_CONFIG, else ./netbwm.toml. Only the
    /// implicit default file may be absent, in which case defaults apply.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(Into::into));
        match explicit {
            Some(p) => {
                let s = std::fs::read_to_string(&p)
                    .map_err(|e| anyhow::anyhow!("config {}: {}", p.display(), e))?;
                Self::load_from_str(&s)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                let s = std::fs::read_to_string(DEFAULT_CONFIG_FILE)?;
                Self::load_from_str(&s)
            }
            None => {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            interface: self.vnstat.interface.clone(),
            series: SeriesOptions {
                total_tolerance_ratio: self.report.total_tolerance_ratio,
            },
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.vnstat.binary.trim().is_empty(),
            "vnstat.binary must be non-empty"
        );
        anyhow::ensure!(
            self.vnstat
                .interface
                .as_deref()
                .is_none_or(|i| !i.trim().is_empty()),
            "vnstat.interface must be non-empty when set"
        );
        anyhow::ensure!(
            self.live.hour_interval_secs.is_finite() && self.live.hour_interval_secs > 0.0,
            "live.hour_interval_secs must be > 0, got {}",
            self.live.hour_interval_secs
        );
        anyhow::ensure!(
            Duration::try_from_secs_f64(self.live.hour_interval_secs).is_ok(),
            "live.hour_interval_secs is out of range, got {}",
            self.live.hour_interval_secs
        );
        anyhow::ensure!(
            self.live.hour_cycles > 0,
            "live.hour_cycles must be > 0, got {}",
            self.live.hour_cycles
        );
        anyhow::ensure!(
            (0.0..1.0).contains(&self.report.total_tolerance_ratio),
            "report.total_tolerance_ratio must be in [0, 1), got {}",
            self.report.total_tolerance_ratio
        );
        Ok(())
    }
}
