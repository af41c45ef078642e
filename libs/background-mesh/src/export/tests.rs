//! Tests for the plan writers.

use std::fs;

use ::config::constants::BLOCK_MESH_DICT_FILE_NAME;
use geometry_bounds::{BoundingBox, DVec3};
use tempfile::tempdir;

use super::*;
use crate::config::{CellSizes, PlannerConfig};
use crate::planner::plan_background_mesh;

fn cube_spec() -> BackgroundMeshSpec {
    let bounds = BoundingBox::new(DVec3::ZERO, DVec3::ONE);
    plan_background_mesh(&bounds, CellSizes::uniform(0.25), &PlannerConfig::default()).unwrap()
}

/// Writer that fails halfway, used to check nothing is left on disk.
struct FailingWriter;

impl SpecWriter for FailingWriter {
    fn file_name(&self) -> &str {
        "broken"
    }

    fn write_spec(&self, _spec: &BackgroundMeshSpec, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"partial")?;
        Err(io::Error::new(io::ErrorKind::Other, "boom"))
    }
}

#[test]
fn test_block_mesh_dict_vertices_in_hex_order() {
    let text = BlockMeshDictWriter::default().render(&cube_spec()).unwrap();
    let vertices: Vec<&str> = text
        .lines()
        .skip_while(|line| *line != "vertices")
        .skip(2)
        .take(8)
        .collect();
    assert_eq!(
        vertices,
        vec![
            "\t(-0.125 -0.125 -0.125)",
            "\t(1.125 -0.125 -0.125)",
            "\t(1.125 1.125 -0.125)",
            "\t(-0.125 1.125 -0.125)",
            "\t(-0.125 -0.125 1.125)",
            "\t(1.125 -0.125 1.125)",
            "\t(1.125 1.125 1.125)",
            "\t(-0.125 1.125 1.125)",
        ]
    );
}

#[test]
fn test_block_mesh_dict_header_and_block() {
    let text = BlockMeshDictWriter::new("v2406").render(&cube_spec()).unwrap();
    assert!(text.starts_with("/*"));
    assert!(text.contains("| Version:  v2406"));
    assert!(text.contains("\tobject      blockMeshDict;"));
    assert!(text.contains("scale\t1;"));
    assert!(text.contains("\thex (0 1 2 3 4 5 6 7) (5 5 5) simpleGrading (1 1 1)"));
    assert!(text.contains("x 0.25 -> 0.25"));
}

#[test]
fn test_banner_lines_have_equal_width() {
    let text = BlockMeshDictWriter::default().render(&cube_spec()).unwrap();
    let widths: Vec<usize> = text.lines().take(7).map(str::len).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
}

#[test]
fn test_json_contains_counts_and_raw_bounds() {
    let text = JsonWriter.render(&cube_spec()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["axes"][0]["axis"], "x");
    assert_eq!(value["axes"][2]["cell_count"], 5);
    assert_eq!(value["axes"][1]["effective_cell_size"], 0.25);
    assert_eq!(value["raw_bounds"]["max"][0], 1.0);
}

#[test]
fn test_write_into_dir_writes_and_replaces() {
    let dir = tempdir().unwrap();
    let stale = dir.path().join(BLOCK_MESH_DICT_FILE_NAME);
    fs::write(&stale, "stale").unwrap();

    let path = write_into_dir(&BlockMeshDictWriter::default(), &cube_spec(), dir.path()).unwrap();
    assert_eq!(path, stale);
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("blocks"));
    assert!(!written.contains("stale"));
}

#[test]
fn test_write_into_missing_dir_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("system");
    match write_into_dir(&JsonWriter, &cube_spec(), &missing) {
        Err(ExportError::MissingDirectory { path }) => assert_eq!(path, missing),
        other => panic!("expected MissingDirectory, got {other:?}"),
    }
}

#[test]
fn test_failed_render_leaves_no_file() {
    let dir = tempdir().unwrap();
    let err = write_into_dir(&FailingWriter, &cube_spec(), dir.path()).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(!dir.path().join("broken").exists());
}
