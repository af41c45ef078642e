//! Plan-and-write command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use background_mesh::export::{write_into_dir, BlockMeshDictWriter, JsonWriter, SpecWriter};
use background_mesh::{plan_from_stl, BackgroundMeshSpec, CellSizes, MarginPolicy, PlannerConfig};
use tracing::info;

use crate::args::{Cli, OutputFormat};

/// Plans the background mesh for `cli` and writes it unless `--dry-run`.
///
/// Returns the written path, or `None` for a dry run.
pub fn execute(cli: &Cli) -> Result<Option<PathBuf>> {
    info!("=== Background mesh ===");
    info!("Geometry: {}", cli.stl_path.display());

    let margin = MarginPolicy::new(cli.margin_fraction, cli.min_margin_cells)
        .context("invalid margin settings")?;
    let config = PlannerConfig::new(margin, cli.tiling.into());
    let sizes = CellSizes::new(cli.dx, cli.dy, cli.dz);

    let spec = plan_from_stl(&cli.stl_path, sizes, &config)
        .with_context(|| format!("failed to plan background mesh for {}", cli.stl_path.display()))?;
    report(&spec);

    if cli.dry_run {
        info!("Dry run, nothing written");
        return Ok(None);
    }

    let writer: Box<dyn SpecWriter> = match cli.format {
        OutputFormat::BlockMeshDict => Box::new(BlockMeshDictWriter::default()),
        OutputFormat::Json => Box::new(JsonWriter),
    };
    let path = write_into_dir(writer.as_ref(), &spec, &cli.system_dir)?;
    info!("Output: {}", path.display());
    Ok(Some(path))
}

fn report(spec: &BackgroundMeshSpec) {
    let raw = spec.raw_bounds();
    info!(
        "Geometry bounds: ({}, {}, {}) - ({}, {}, {})",
        raw.min.x, raw.min.y, raw.min.z, raw.max.x, raw.max.y, raw.max.z
    );
    for grid in spec.axes() {
        info!(
            "  {}: [{}, {}] {} cells, size {} -> {}",
            grid.axis(),
            grid.lower(),
            grid.upper(),
            grid.cell_count(),
            grid.requested_cell_size(),
            grid.effective_cell_size()
        );
    }
    info!("Total cells: {}", spec.total_cells());
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    const BOX_STL: &str = "solid box
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 2 0 0
      vertex 2 1 0.5
    endloop
  endfacet
endsolid box
";

    fn case() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("system")).unwrap();
        fs::write(dir.path().join("box.stl"), BOX_STL).unwrap();
        dir
    }

    fn cli(dir: &TempDir, extra: &[&str]) -> Cli {
        let stl = dir.path().join("box.stl");
        let system = dir.path().join("system");
        let mut argv = vec![
            "background-mesh".to_string(),
            "--stl-path".to_string(),
            stl.display().to_string(),
            "--system-dir".to_string(),
            system.display().to_string(),
            "--dx".to_string(),
            "0.5".to_string(),
            "--dy".to_string(),
            "0.25".to_string(),
            "--dz".to_string(),
            "0.25".to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_writes_block_mesh_dict() {
        let dir = case();
        let path = execute(&cli(&dir, &[])).unwrap().unwrap();
        assert_eq!(path, dir.path().join("system").join("blockMeshDict"));

        let text = fs::read_to_string(path).unwrap();
        // x: 2 + 2*0.25 -> 5 cells; y: 1 + 2*0.125 -> 5; z: 0.5 + 2*0.125 -> 3
        assert!(text.contains("hex (0 1 2 3 4 5 6 7) (5 5 3) simpleGrading (1 1 1)"));
    }

    #[test]
    fn test_writes_json() {
        let dir = case();
        let path = execute(&cli(&dir, &["--format", "json"])).unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), "backgroundMesh.json");
        assert!(fs::read_to_string(path).unwrap().contains("\"cell_count\""));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = case();
        assert!(execute(&cli(&dir, &["--dry-run"])).unwrap().is_none());
        assert_eq!(fs::read_dir(dir.path().join("system")).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_system_dir_fails() {
        let dir = case();
        fs::remove_dir(dir.path().join("system")).unwrap();
        assert!(execute(&cli(&dir, &[])).is_err());
    }

    #[test]
    fn test_invalid_margin_fails_before_reading() {
        let dir = case();
        let err = execute(&cli(&dir, &["--margin-fraction=-1"])).unwrap_err();
        assert!(err.to_string().contains("margin"));
    }
}
