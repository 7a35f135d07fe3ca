// Raw report -> canonical Report. One sub-parser per raw layout; all of them
// share the unit tables, the label resolution and the rate completion.

mod json;
mod pipe;
mod skip;
mod whitespace;

pub use pipe::PIPE_COLUMNS;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::aggregator;
use crate::error::{ParseWarning, ReportError};
use crate::models::{PeriodKind, Report};
use crate::series::{self, SeriesOptions};

/// Layout of a raw report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawFormat {
    Whitespace,
    Pipe,
    Json,
}

impl RawFormat {
    /// Guess the layout: JSON object, pipe table (>= 5 separators on a line), else whitespace.
    pub fn detect(raw: &str) -> Self {
        if raw.trim_start().starts_with('{') {
            RawFormat::Json
        } else if raw.lines().any(|l| l.matches('|').count() >= PIPE_COLUMNS - 1) {
            RawFormat::Pipe
        } else {
            RawFormat::Whitespace
        }
    }
}

impl std::fmt::Display for RawFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RawFormat::Whitespace => "whitespace",
            RawFormat::Pipe => "pipe",
            RawFormat::Json => "json",
        };
        f.write_str(s)
    }
}

/// Configured layout; `Auto` defers to [`RawFormat::detect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    #[default]
    Auto,
    Whitespace,
    Pipe,
    Json,
}

impl FormatChoice {
    pub fn resolve(self, raw: &str) -> RawFormat {
        match self {
            FormatChoice::Auto => RawFormat::detect(raw),
            FormatChoice::Whitespace => RawFormat::Whitespace,
            FormatChoice::Pipe => RawFormat::Pipe,
            FormatChoice::Json => RawFormat::Json,
        }
    }

    /// Layout to ask vnStat for; auto prefers JSON. vnStat never prints pipe
    /// tables, so `Pipe` only applies to report files.
    pub fn request_format(self) -> Option<RawFormat> {
        match self {
            FormatChoice::Auto | FormatChoice::Json => Some(RawFormat::Json),
            FormatChoice::Whitespace => Some(RawFormat::Whitespace),
            FormatChoice::Pipe => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// JSON reports: pick this interface by exact name instead of the first one.
    pub interface: Option<String>,
    pub series: SeriesOptions,
}

/// A report plus every row-level diagnostic gathered while building it.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub report: Report,
    pub warnings: Vec<ParseWarning>,
}

/// Parse a raw report of the given layout. Rows that cannot be normalized are
/// dropped with a warning; a report with no usable rows is an error.
#[instrument(skip(raw, options), fields(bytes = raw.len()))]
pub fn parse(
    raw: &str,
    format: RawFormat,
    kind: PeriodKind,
    options: &ParseOptions,
) -> Result<ParseOutcome, ReportError> {
    let (rows, mut warnings) = match format {
        RawFormat::Whitespace => whitespace::rows(raw, kind),
        RawFormat::Pipe => pipe::rows(raw),
        RawFormat::Json => json::rows(raw, kind, options.interface.as_deref())?,
    };

    let (mut samples, series_warnings) = series::build(rows, kind, &options.series);
    warnings.extend(series_warnings);

    if !samples.is_empty() {
        warnings.extend(aggregator::complete_rates(&mut samples, kind));
    }
    for w in &warnings {
        warn!(%format, %kind, "{}", w);
    }
    if samples.is_empty() {
        return Err(ReportError::NoData { format, kind });
    }

    debug!(samples = samples.len(), warnings = warnings.len(), "report parsed");
    Ok(ParseOutcome {
        report: Report::new(kind, samples),
        warnings,
    })
}

fn whole_bytes(bytes: f64) -> u64 {
    bytes.round() as u64
}
