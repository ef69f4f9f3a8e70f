use std::process::{Command, ExitStatus, Output};

use anyhow::{Context, Result};
use strictapt_core::{format_request_tokens, Ledger};

/// Builds and runs the final `apt-get install` step. Arguments always travel
/// as a structured vector; nothing goes through a shell.
#[derive(Debug, Clone, Default)]
pub struct AptGetDriver {
    options: Vec<String>,
}

impl AptGetDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one apt-get option, verbatim, between `--yes` and `install`.
    pub fn push_option(&mut self, option: impl Into<String>) -> &mut Self {
        self.options.push(option.into());
        self
    }

    /// Full argv for the install step, starting with the program name.
    pub fn install_argv(&self, requests: &Ledger) -> Vec<String> {
        let mut argv = vec!["apt-get".to_string(), "--yes".to_string()];
        argv.extend(self.options.iter().cloned());
        argv.push("install".to_string());
        argv.extend(format_request_tokens(requests));
        argv
    }

    /// Run with inherited stdio; the returned status is the caller's to
    /// propagate as its own exit code.
    pub fn run(&self, requests: &Ledger) -> Result<ExitStatus> {
        let argv = self.install_argv(requests);
        command_from_argv(&argv)
            .status()
            .with_context(|| format!("failed to run {}", argv.join(" ")))
    }

    /// Run with captured output, for the structured reporting sink.
    pub fn run_captured(&self, requests: &Ledger) -> Result<Output> {
        let argv = self.install_argv(requests);
        command_from_argv(&argv)
            .output()
            .with_context(|| format!("failed to run {}", argv.join(" ")))
    }
}

fn command_from_argv(argv: &[String]) -> Command {
    let mut command = Command::new(&argv[0]);
    command.args(&argv[1..]);
    command.env("DEBIAN_FRONTEND", "noninteractive");
    command
}
