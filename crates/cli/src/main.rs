// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! genstatus - Progress indicator for multi-step generation tasks

mod commands;
mod config;
mod error;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{render as render_cmd, replay};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "genstatus",
    version,
    about = "Render the progress of a multi-step generation task"
)]
struct Cli {
    /// Render config (TOML) with glyphs, copy text and bar width
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and draw a single status input
    Render(render_cmd::RenderArgs),
    /// Validate and draw a recorded sequence of status inputs
    Replay(replay::ReplayArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => render_cmd::render(args, &config),
        Commands::Replay(args) => replay::replay(args, &config),
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
