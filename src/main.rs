use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser};
use netbwm::config::AppConfig;
use netbwm::live::{self, LiveSampler};
use netbwm::models::PeriodKind;
use netbwm::parser::{self, FormatChoice};
use netbwm::sysinfo_repo::SysinfoCounters;
use netbwm::vnstat_repo::VnstatRepo;
use netbwm::{aggregator, present};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Network interface bandwidth usage per hour, day or month.
#[derive(Debug, Parser)]
#[command(name = "netbwm", version, about, disable_help_flag = true)]
#[command(group(
    ArgGroup::new("period")
        .required(true)
        .args(["hourly", "daily", "monthly"])
))]
struct Cli {
    /// Hourly report
    #[arg(short = 'h', long)]
    hourly: bool,
    /// Daily report
    #[arg(short = 'd', long)]
    daily: bool,
    /// Monthly report
    #[arg(short = 'm', long)]
    monthly: bool,
    /// Sample live interface counters instead of reading a vnStat report
    #[arg(long)]
    live: bool,
    /// Hourly live sampling window in seconds
    #[arg(long, value_name = "SECS")]
    interval: Option<f64>,
    /// Number of hourly live sampling windows
    #[arg(long, value_name = "N")]
    cycles: Option<u32>,
    /// Interface to report on
    #[arg(short = 'i', long)]
    interface: Option<String>,
    /// Raw report layout ("pipe" only with --input)
    #[arg(short = 'f', long, value_enum)]
    format: Option<FormatChoice>,
    /// Read the raw report from a file ("-" for stdin) instead of running vnStat
    #[arg(long, value_name = "PATH", conflicts_with = "live")]
    input: Option<PathBuf>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
    /// Config file (default: $NETBWM_CONFIG or ./netbwm.toml)
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn period(&self) -> PeriodKind {
        if self.hourly {
            PeriodKind::Hour
        } else if self.daily {
            PeriodKind::Day
        } else {
            PeriodKind::Month
        }
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(iface) = &self.interface {
            config.vnstat.interface = Some(iface.clone());
        }
        if let Some(format) = self.format {
            config.vnstat.format = format;
        }
        if let Some(secs) = self.interval {
            config.live.hour_interval_secs = secs;
        }
        if let Some(cycles) = self.cycles {
            config.live.hour_cycles = cycles;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app_config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut app_config);
    app_config.validate()?;

    let kind = cli.period();
    if cli.live {
        run_live(&app_config, kind, cli.json).await
    } else {
        run_report(&app_config, kind, cli.input.as_deref(), cli.json).await
    }
}

async fn run_report(
    config: &AppConfig,
    kind: PeriodKind,
    input: Option<&Path>,
    json: bool,
) -> Result<()> {
    let choice = config.vnstat.format;
    let raw = match input {
        Some(p) if p == Path::new("-") => {
            let mut s = String::new();
            tokio::io::stdin().read_to_string(&mut s).await?;
            s
        }
        Some(p) => tokio::fs::read_to_string(p)
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", p.display(), e))?,
        None => {
            let request = choice.request_format().ok_or_else(|| {
                anyhow::anyhow!("pipe format needs --input: vnStat does not print pipe tables")
            })?;
            VnstatRepo::new(&config.vnstat.binary, config.vnstat.interface.clone())
                .fetch(kind, request)
                .await?
        }
    };

    let format = choice.resolve(&raw);
    let outcome = parser::parse(&raw, format, kind, &config.parse_options())?;
    let totals = aggregator::totals(&outcome.report);
    info!(
        %format,
        samples = outcome.report.len(),
        warnings = outcome.warnings.len(),
        "report ready"
    );

    if json {
        println!("{}", present::report_json(&outcome.report, totals)?);
    } else {
        print!("{}", present::report_table(&outcome.report, &totals));
    }
    Ok(())
}

async fn run_live(config: &AppConfig, kind: PeriodKind, json: bool) -> Result<()> {
    let window_secs = kind.live_window_secs(config.live.hour_interval_secs);
    let window = Duration::try_from_secs_f64(window_secs)
        .map_err(|e| anyhow::anyhow!("live window of {window_secs} s: {e}"))?;
    let cycles = match kind {
        PeriodKind::Hour => config.live.hour_cycles,
        PeriodKind::Day | PeriodKind::Month => 1,
    };
    let mut sampler = LiveSampler::new(SysinfoCounters::new());

    for cycle in 1..=cycles {
        info!(cycle, cycles, window_secs = window.as_secs_f64(), "sampling interface counters");
        let rates = live::run_cycle(&mut sampler, window).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&rates)?);
        } else {
            print!("{}", present::rates_table(&rates));
        }
    }
    Ok(())
}
