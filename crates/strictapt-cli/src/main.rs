mod config;
mod dispatch;
mod report;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "strictapt")]
#[command(
    about = "Installs packages with exact versions pinned across the dependency closure",
    long_about = None
)]
struct Cli {
    /// Output protocol for results and errors.
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: ReportFormat,
    /// Print resolution stages to stderr.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the pinned closure and install it.
    Install(ActionArgs),
    /// Like install, but drop seed packages that are already installed.
    InstallOnlyNew(ActionArgs),
    /// Print the computed package list without touching the system.
    Resolve(ActionArgs),
    /// Like resolve, but drop seed packages that are already installed.
    ResolveOnlyNew(ActionArgs),
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
struct ActionArgs {
    /// Packages to request, as `name` or `name=version`.
    #[arg(required = true)]
    packages: Vec<String>,
    /// Extra option passed through to apt-get verbatim (repeatable).
    #[arg(
        short = 'o',
        long = "apt-get-option",
        value_name = "OPTION",
        allow_hyphen_values = true
    )]
    apt_get_options: Vec<String>,
    /// Value for apt-get --target-release.
    #[arg(long, value_name = "RELEASE")]
    target_release: Option<String>,
    /// Pass --no-install-recommends to apt-get.
    #[arg(long)]
    no_install_recommends: bool,
    /// Pass --force-yes to apt-get.
    #[arg(long)]
    force: bool,
    /// Dpkg option, passed as `-o Dpkg::Options::=--<OPTION>` (repeatable).
    #[arg(long = "dpkg-option", value_name = "OPTION")]
    dpkg_options: Vec<String>,
    /// Override the resolver iteration ceiling.
    #[arg(long, value_name = "N")]
    loop_limit: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;
    match dispatch::run_cli(cli) {
        Ok(code) => code,
        Err(error) => report::report_failure(format, &error),
    }
}
