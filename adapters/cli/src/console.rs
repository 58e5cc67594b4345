//! Console-facing sources and report sink used by the command-line adapter.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result as AnyResult};
use clap::ValueEnum;
use mars_rover_core::{Command, Obstacle, Outcome, Rover};
use mars_rover_text::{
    parse_commands, parse_planet, parse_rover, render_complete, render_obstacle,
};
use mars_rover_world::Planet;
use serde::Serialize;

use crate::mission::{CommandSource, MissionError, PlanetSource, ReportSink, RoverSource};

const OK_TAG: &str = "[OK]";
const ERROR_TAG: &str = "[ERROR]";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Planet definition stored in a text file.
#[derive(Clone, Debug)]
pub(crate) struct PlanetFile {
    path: PathBuf,
}

impl PlanetFile {
    /// Creates a source reading the planet from `path`.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PlanetSource for PlanetFile {
    fn read_planet(&mut self) -> Result<Planet, MissionError> {
        Ok(parse_planet(&read_file(&self.path)?)?)
    }
}

/// Rover definition stored in a text file.
#[derive(Clone, Debug)]
pub(crate) struct RoverFile {
    path: PathBuf,
}

impl RoverFile {
    /// Creates a source reading the rover from `path`.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RoverSource for RoverFile {
    fn read_rover(&mut self) -> Result<Rover, MissionError> {
        Ok(parse_rover(&read_file(&self.path)?)?)
    }
}

fn read_file(path: &Path) -> Result<String, MissionError> {
    fs::read_to_string(path).map_err(|source| MissionError::Io {
        origin: path.display().to_string(),
        source,
    })
}

/// Commands supplied directly on the command line.
#[derive(Clone, Debug)]
pub(crate) struct InlineCommands {
    text: String,
}

impl InlineCommands {
    /// Creates a source decoding the provided command string.
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }
}

impl CommandSource for InlineCommands {
    fn read_commands(&mut self) -> Result<Vec<Command>, MissionError> {
        Ok(parse_commands(&self.text)?)
    }
}

/// Commands streamed from a reader until it is exhausted.
#[derive(Debug)]
pub(crate) struct StreamCommands<R> {
    reader: R,
    origin: &'static str,
}

impl<R: Read> StreamCommands<R> {
    /// Creates a source draining `reader`, naming it `origin` in errors.
    pub(crate) fn new(reader: R, origin: &'static str) -> Self {
        Self { reader, origin }
    }
}

impl<R: Read> CommandSource for StreamCommands<R> {
    fn read_commands(&mut self) -> Result<Vec<Command>, MissionError> {
        let mut text = String::new();
        let _ = self
            .reader
            .read_to_string(&mut text)
            .map_err(|source| MissionError::Io {
                origin: self.origin.to_owned(),
                source,
            })?;
        Ok(parse_commands(&text)?)
    }
}

/// Presentation used for mission reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    /// `[OK] x:y:DIR` style lines.
    #[default]
    Text,
    /// One JSON document per report.
    Json,
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
}

/// Writes mission reports to a console stream.
#[derive(Debug)]
pub(crate) struct ConsoleReport<W> {
    writer: W,
    format: ReportFormat,
    color: bool,
}

impl<W: Write> ConsoleReport<W> {
    /// Creates a sink writing reports to `writer`.
    pub(crate) fn new(writer: W, format: ReportFormat, color: bool) -> Self {
        Self {
            writer,
            format,
            color,
        }
    }

    fn write_ok(&mut self, rendered: &str, outcome: &Outcome) -> AnyResult<()> {
        match self.format {
            ReportFormat::Text => {
                let line = format!("{OK_TAG} {rendered}");
                self.write_line(&line, GREEN)
            }
            ReportFormat::Json => {
                let json = serde_json::to_string(outcome).context("failed to encode outcome")?;
                self.write_line(&json, GREEN)
            }
        }
    }

    fn write_line(&mut self, line: &str, color: &str) -> AnyResult<()> {
        let written = if self.color {
            writeln!(self.writer, "{color}{line}{RESET}")
        } else {
            writeln!(self.writer, "{line}")
        };
        written.context("failed to write mission report")
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn sequence_completed(&mut self, rover: &Rover) -> AnyResult<()> {
        self.write_ok(
            &render_complete(rover),
            &Outcome::Completed { rover: *rover },
        )
    }

    fn obstacle_detected(&mut self, rover: &Rover, obstacle: &Obstacle) -> AnyResult<()> {
        self.write_ok(
            &render_obstacle(rover),
            &Outcome::ObstacleHit {
                rover: *rover,
                obstacle: *obstacle,
            },
        )
    }

    fn mission_failed(&mut self, error: &MissionError) -> AnyResult<()> {
        let message = error.to_string();
        match self.format {
            ReportFormat::Text => {
                let line = format!("{ERROR_TAG} {message}");
                self.write_line(&line, RED)
            }
            ReportFormat::Json => {
                let json = serde_json::to_string(&ErrorReport { error: &message })
                    .context("failed to encode error report")?;
                self.write_line(&json, RED)
            }
        }
    }
}
