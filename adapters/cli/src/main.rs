#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Mars Rover mission.

mod console;
mod mission;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    console::{ConsoleReport, InlineCommands, PlanetFile, ReportFormat, RoverFile, StreamCommands},
    mission::{run_mission, CommandSource},
};

/// Runs a rover across a wrap-around planet and reports where it stopped.
#[derive(Debug, Parser)]
#[command(name = "mars-rover", version, about)]
struct Cli {
    /// Planet file: a `<width>x<height>` line followed by `<x>,<y>` obstacle lines.
    #[arg(long, value_name = "FILE")]
    planet: PathBuf,
    /// Rover file: an `<x>,<y>` line followed by a direction (N, E, S or W).
    #[arg(long, value_name = "FILE")]
    rover: PathBuf,
    /// Commands (F, B, R, L). Read from stdin until EOF when omitted.
    #[arg(long, value_name = "COMMANDS")]
    commands: Option<String>,
    /// Presentation of the mission report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
    /// Highlight reports with ANSI colors.
    #[arg(long)]
    color: bool,
    /// Log every simulation step to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the Mars Rover command-line interface.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut planet_source = PlanetFile::new(cli.planet);
    let mut rover_source = RoverFile::new(cli.rover);
    let mut command_source: Box<dyn CommandSource> = match cli.commands {
        Some(text) => Box::new(InlineCommands::new(text)),
        None => Box::new(StreamCommands::new(io::stdin().lock(), "stdin")),
    };
    let mut sink = ConsoleReport::new(io::stdout().lock(), cli.format, cli.color);

    let outcome = run_mission(
        &mut planet_source,
        &mut rover_source,
        command_source.as_mut(),
        &mut sink,
    )?;

    Ok(match outcome {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    })
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
