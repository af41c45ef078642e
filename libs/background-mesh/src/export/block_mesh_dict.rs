//! OpenFOAM `blockMeshDict` writer.

use std::io::{self, Write};

use ::config::constants::{BLOCK_MESH_DICT_FILE_NAME, OPENFOAM_VERSION};

use super::SpecWriter;
use crate::spec::BackgroundMeshSpec;

const SEPARATOR: &str =
    "// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //";

/// Writes a single-block `blockMeshDict` with uniform grading.
///
/// # Example
///
/// ```rust
/// use background_mesh::export::{BlockMeshDictWriter, SpecWriter};
/// use background_mesh::{plan_background_mesh, CellSizes, PlannerConfig};
/// use geometry_bounds::{BoundingBox, DVec3};
///
/// let bounds = BoundingBox::new(DVec3::ZERO, DVec3::ONE);
/// let spec = plan_background_mesh(&bounds, CellSizes::uniform(0.25), &PlannerConfig::default()).unwrap();
/// let text = BlockMeshDictWriter::default().render(&spec).unwrap();
/// assert!(text.contains("hex (0 1 2 3 4 5 6 7) (5 5 5) simpleGrading (1 1 1)"));
/// ```
#[derive(Debug, Clone)]
pub struct BlockMeshDictWriter {
    version: String,
}

impl BlockMeshDictWriter {
    /// Writer stamping `version` into the banner.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for BlockMeshDictWriter {
    fn default() -> Self {
        Self::new(OPENFOAM_VERSION)
    }
}

impl SpecWriter for BlockMeshDictWriter {
    fn file_name(&self) -> &str {
        BLOCK_MESH_DICT_FILE_NAME
    }

    fn write_spec(&self, spec: &BackgroundMeshSpec, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, r"/*--------------------------------*- C++ -*----------------------------------*\")?;
        writeln!(out, r"| =========                 |                                                 |")?;
        writeln!(out, r"| \\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox           |")?;
        writeln!(out, r"|  \\    /   O peration     | Version:  {:<38}|", self.version)?;
        writeln!(out, r"|   \\  /    A nd           | Website:  www.openfoam.com                      |")?;
        writeln!(out, r"|    \\/     M anipulation  |                                                 |")?;
        writeln!(out, r"\*---------------------------------------------------------------------------*/")?;
        writeln!(out, "FoamFile")?;
        writeln!(out, "{{")?;
        writeln!(out, "\tversion     2.0;")?;
        writeln!(out, "\tformat      ascii;")?;
        writeln!(out, "\tclass       dictionary;")?;
        writeln!(out, "\tobject      {BLOCK_MESH_DICT_FILE_NAME};")?;
        writeln!(out, "}}")?;
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out)?;

        let cells = spec.effective_cell_sizes();
        writeln!(
            out,
            "// Cell size (requested -> effective): x {} -> {}, y {} -> {}, z {} -> {}",
            spec.axes()[0].requested_cell_size(),
            cells.x,
            spec.axes()[1].requested_cell_size(),
            cells.y,
            spec.axes()[2].requested_cell_size(),
            cells.z,
        )?;
        writeln!(out)?;
        writeln!(out, "scale\t1;")?;
        writeln!(out)?;

        writeln!(out, "vertices")?;
        writeln!(out, "(")?;
        for corner in spec.corners() {
            writeln!(out, "\t({} {} {})", corner.x, corner.y, corner.z)?;
        }
        writeln!(out, ");")?;
        writeln!(out)?;

        let [nx, ny, nz] = spec.cell_counts();
        writeln!(out, "blocks")?;
        writeln!(out, "(")?;
        writeln!(
            out,
            "\thex (0 1 2 3 4 5 6 7) ({nx} {ny} {nz}) simpleGrading (1 1 1)"
        )?;
        writeln!(out, ");")?;
        writeln!(out)?;
        writeln!(out, "{SEPARATOR}")?;
        Ok(())
    }
}
