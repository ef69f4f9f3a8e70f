use std::process::{ExitCode, ExitStatus};

use anyhow::{Context, Result};
use clap::CommandFactory;
use strictapt_core::{format_request_tokens, parse_seed_tokens, Mode};
use strictapt_resolver::{resolve_all, ResolveOptions, DEFAULT_LOOP_LIMIT};
use strictapt_system::{AptGetDriver, AptSystemCache};

use crate::config::Config;
use crate::report::{self, DebugSink, ReportFormat};
use crate::{ActionArgs, Cli, Commands};

pub(crate) fn run_cli(cli: Cli) -> Result<ExitCode> {
    let (mode, args) = match cli.command {
        Commands::Install(args) => (Mode::Install, args),
        Commands::InstallOnlyNew(args) => (Mode::InstallOnlyNew, args),
        Commands::Resolve(args) => (Mode::Resolve, args),
        Commands::ResolveOnlyNew(args) => (Mode::ResolveOnlyNew, args),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "strictapt", &mut std::io::stdout());
            return Ok(ExitCode::SUCCESS);
        }
    };

    let debug = DebugSink::new(cli.debug);
    let config = Config::load().context("failed to load configuration")?;
    let seed = parse_seed_tokens(args.packages.iter().map(String::as_str))?;
    debug.line(&format!(
        "mode {mode}, seed: {}",
        format_request_tokens(&seed).join(" ")
    ));

    let cache = AptSystemCache::new();
    let resolve_options = ResolveOptions {
        mode,
        loop_limit: args
            .loop_limit
            .or(config.loop_limit)
            .unwrap_or(DEFAULT_LOOP_LIMIT),
    };
    let resolved = resolve_all(seed, &cache, &resolve_options)?;
    debug.line(&format!(
        "projected install set: {}",
        format_request_tokens(&resolved).join(" ")
    ));

    if !mode.performs_install() {
        report::report_resolved(cli.format, &resolved);
        return Ok(ExitCode::SUCCESS);
    }

    if resolved.is_empty() {
        report::report_nothing_to_do(cli.format);
        return Ok(ExitCode::SUCCESS);
    }

    let driver = build_driver(&args, &config);
    debug.line(&format!(
        "command: {}",
        driver.install_argv(&resolved).join(" ")
    ));
    match cli.format {
        ReportFormat::Text => {
            let status = driver.run(&resolved)?;
            Ok(exit_code_from_status(status))
        }
        ReportFormat::Json => {
            let output = driver.run_captured(&resolved)?;
            report::report_install_output(&driver.install_argv(&resolved), &resolved, &output);
            Ok(exit_code_from_status(output.status))
        }
    }
}

pub(crate) fn build_driver(args: &ActionArgs, config: &Config) -> AptGetDriver {
    let mut driver = AptGetDriver::new();
    if let Some(release) = &args.target_release {
        driver.push_option("--target-release");
        driver.push_option(release);
    }
    if args.no_install_recommends || !config.install_recommends.unwrap_or(true) {
        driver.push_option("--no-install-recommends");
    }
    if args.force {
        driver.push_option("--force-yes");
    }
    for dpkg_option in &args.dpkg_options {
        driver.push_option("-o");
        driver.push_option(format!("Dpkg::Options::=--{dpkg_option}"));
    }
    for option in config.apt_get_options.iter().flatten() {
        driver.push_option(option);
    }
    for option in &args.apt_get_options {
        driver.push_option(option);
    }
    driver
}

fn exit_code_from_status(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => ExitCode::from(code.clamp(0, 255) as u8),
        // Killed by a signal: report plain failure.
        None => ExitCode::FAILURE,
    }
}
