//! # RockRate CLI Application
//!
//! `rockrate calc` prints a classification report, `rockrate tables` lists
//! the rating tables and `rockrate tui` opens the Ratatui dashboard.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

mod app;
mod cli;
mod commands;
mod event;
mod logging;
mod report;
mod tui;
mod view;

use crate::app::App;
use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{print_report, run_calc, run_equations, run_tables, span_arg};
use crate::logging::{init_logging, LogConfig, LogFormat};

fn main() {
    let cli = Cli::parse();
    if let Some(log_config) = log_config_from_cli(&cli) {
        if let Err(error) = init_logging(&log_config) {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.engine_settings();
    match &cli.command {
        Command::Calc(args) => {
            let report = run_calc(args, settings)?;
            print_report(&report, args.json)
        }
        Command::Tables(args) => run_tables(args),
        Command::Equations => run_equations(),
        Command::Tui(args) => {
            let mut app = App::new(settings, span_arg(args.span)?);
            tui::run(&mut app)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// Returns `None` for the dashboard without `--log-file`: it owns the
/// terminal and stderr output would corrupt the screen.
fn log_config_from_cli(cli: &Cli) -> Option<LogConfig> {
    if matches!(cli.command, Command::Tui(_)) && cli.log_file.is_none() {
        return None;
    }

    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };

    // Files are read after the fact, so their lines carry timestamps.
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_timestamps(cli.log_file.is_some())
        .with_target(level_filter >= LevelFilter::DEBUG)
        .with_log_file(cli.log_file.clone())
        .with_ansi(cli.log_file.is_none() && io::stderr().is_terminal());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    Some(config)
}
