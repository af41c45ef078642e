//! # background-mesh
//!
//! Command-line tool that sizes the snappyHexMesh background block for an STL
//! geometry and writes it into an OpenFOAM case.
//!
//! ```text
//! background-mesh --stl-path constant/triSurface/model.stl --dx 0.1 --dy 0.1 --dz 0.05
//! ```

mod args;
mod run;

use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.level())
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run::execute(&cli)?;
    Ok(())
}
