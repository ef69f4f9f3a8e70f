use std::process::{ExitCode, Output};

use anstyle::{AnsiColor, Style};
use clap::ValueEnum;
use serde::Serialize;
use strictapt_core::{format_request_tokens, Ledger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    /// Human-readable lines on stdout, diagnostics on stderr.
    Text,
    /// One JSON object on stdout, automation-module style.
    Json,
}

/// Success payload of the automation protocol.
#[derive(Debug, Serialize)]
struct JsonReport {
    changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    packages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stderr: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonFailure {
    failed: bool,
    msg: String,
}

pub(crate) fn report_resolved(format: ReportFormat, resolved: &Ledger) {
    match format {
        ReportFormat::Text => println!("{}", format_request_tokens(resolved).join(" ")),
        ReportFormat::Json => println!("{}", render_resolved_json(resolved)),
    }
}

pub(crate) fn report_nothing_to_do(format: ReportFormat) {
    match format {
        ReportFormat::Text => eprintln!("nothing to do"),
        ReportFormat::Json => println!("{}", render_resolved_json(&Ledger::new())),
    }
}

pub(crate) fn report_install_output(command: &[String], resolved: &Ledger, output: &Output) {
    println!("{}", render_install_json(command, resolved, output));
}

pub(crate) fn report_failure(format: ReportFormat, error: &anyhow::Error) -> ExitCode {
    match format {
        ReportFormat::Text => {
            let style = Style::new().fg_color(Some(AnsiColor::Red.into())).bold();
            eprintln!("{style}error{style:#}: {error:#}");
        }
        ReportFormat::Json => println!("{}", render_failure_json(error)),
    }
    ExitCode::FAILURE
}

pub(crate) fn render_resolved_json(resolved: &Ledger) -> String {
    render(&JsonReport {
        changed: false,
        command: None,
        packages: format_request_tokens(resolved),
        stdout: None,
        stderr: None,
    })
}

pub(crate) fn render_install_json(command: &[String], resolved: &Ledger, output: &Output) -> String {
    render(&JsonReport {
        changed: output.status.success(),
        command: Some(command.join(" ")),
        packages: format_request_tokens(resolved),
        stdout: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
        stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
    })
}

pub(crate) fn render_failure_json(error: &anyhow::Error) -> String {
    render(&JsonFailure {
        failed: true,
        msg: format!("{error:#}"),
    })
}

fn render<T: Serialize>(value: &T) -> String {
    // Reports are flat string/bool maps; serialization cannot fail on them.
    serde_json::to_string(value).unwrap_or_else(|error| {
        format!("{{\"failed\":true,\"msg\":\"report serialization error: {error}\"}}")
    })
}

/// Stderr sink for `--debug` stage tracing, off by default.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DebugSink {
    enabled: bool,
}

impl DebugSink {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub(crate) fn line(&self, message: &str) {
        if self.enabled {
            eprintln!("debug: {message}");
        }
    }
}
