// vnStat invocation: runs the binary and hands back its raw stdout.

use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::models::PeriodKind;
use crate::parser::RawFormat;

#[derive(Debug, Error)]
pub enum ExternalToolError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{binary} exited with {status}: {stderr}")]
    ExitStatus {
        binary: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("{binary} returned no output")]
    EmptyOutput { binary: String },
    #[error("{binary} output is not UTF-8")]
    InvalidUtf8 { binary: String },
}

pub struct VnstatRepo {
    binary: String,
    interface: Option<String>,
}

impl VnstatRepo {
    pub fn new(binary: impl Into<String>, interface: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            interface,
        }
    }

    /// Fetch a raw report in the requested layout. Whitespace and pipe layouts
    /// both come from the plain-text report.
    #[instrument(skip(self), fields(repo = "vnstat", operation = "fetch", binary = %self.binary))]
    pub async fn fetch(
        &self,
        kind: PeriodKind,
        format: RawFormat,
    ) -> Result<String, ExternalToolError> {
        let args = command_args(kind, format, self.interface.as_deref());
        debug!(?args, "running vnstat");
        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ExternalToolError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExternalToolError::ExitStatus {
                binary: self.binary.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let stdout = String::from_utf8(output.stdout).map_err(|_| {
            ExternalToolError::InvalidUtf8 {
                binary: self.binary.clone(),
            }
        })?;
        if stdout.trim().is_empty() {
            return Err(ExternalToolError::EmptyOutput {
                binary: self.binary.clone(),
            });
        }
        Ok(stdout)
    }
}

/// vnStat arguments: `[-i IFACE] -h|-d|-m` for text, `[-i IFACE] --json h|d|m` for JSON.
pub fn command_args(kind: PeriodKind, format: RawFormat, interface: Option<&str>) -> Vec<String> {
    let mut args = Vec::with_capacity(4);
    if let Some(iface) = interface {
        args.push("-i".to_string());
        args.push(iface.to_string());
    }
    match format {
        RawFormat::Json => {
            args.push("--json".to_string());
            args.push(kind.flag().trim_start_matches('-').to_string());
        }
        RawFormat::Whitespace | RawFormat::Pipe => args.push(kind.flag().to_string()),
    }
    args
}
