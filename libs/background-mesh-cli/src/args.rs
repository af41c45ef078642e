//! Command-line arguments.

use std::path::PathBuf;

use background_mesh::TilingMode;
use clap::{Parser, ValueEnum};
use config::constants::{DEFAULT_MARGIN_FRACTION, DEFAULT_MIN_MARGIN_CELLS, DEFAULT_SYSTEM_DIR};
use tracing::Level;

/// Generate the snappyHexMesh background block for an STL geometry
#[derive(Debug, Parser)]
#[command(name = "background-mesh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Writes a blockMeshDict whose single hex block encloses an STL with a margin",
    long_about = None
)]
pub struct Cli {
    /// STL geometry file (ASCII or binary)
    #[arg(long = "stl-path", visible_alias = "stlPath")]
    pub stl_path: PathBuf,

    /// Cell size along x
    #[arg(long, value_parser = positive_f64)]
    pub dx: f64,

    /// Cell size along y
    #[arg(long, value_parser = positive_f64)]
    pub dy: f64,

    /// Cell size along z
    #[arg(long, value_parser = positive_f64)]
    pub dz: f64,

    /// Directory the output file is written into; must already exist
    #[arg(long, default_value = DEFAULT_SYSTEM_DIR)]
    pub system_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::BlockMeshDict)]
    pub format: OutputFormat,

    /// Margin as a fraction of the geometry extent per axis
    #[arg(long, default_value_t = DEFAULT_MARGIN_FRACTION)]
    pub margin_fraction: f64,

    /// Minimum margin in cells per axis
    #[arg(long, default_value_t = DEFAULT_MIN_MARGIN_CELLS)]
    pub min_margin_cells: f64,

    /// How the domain is tiled by whole cells
    #[arg(long, value_enum, default_value_t = Tiling::Stretch)]
    pub tiling: Tiling,

    /// Log level
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Plan and report without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Tracing level for `--log-level`.
    pub fn level(&self) -> Level {
        self.log_level.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// OpenFOAM `blockMeshDict`
    BlockMeshDict,
    /// Full plan as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tiling {
    /// Keep the margin box and shrink cells to fit
    Stretch,
    /// Keep the requested size and push the upper bound out
    ExtendUpper,
}

impl From<Tiling> for TilingMode {
    fn from(tiling: Tiling) -> Self {
        match tiling {
            Tiling::Stretch => TilingMode::Stretch,
            Tiling::ExtendUpper => TilingMode::ExtendUpper,
        }
    }
}

fn positive_f64(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("`{raw}` must be a positive finite number"))
    }
}
