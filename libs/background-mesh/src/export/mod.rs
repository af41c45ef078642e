//! # Plan Export
//!
//! Serializes a [`BackgroundMeshSpec`] for the downstream mesher. Writers are
//! swappable behind [`SpecWriter`]; the planner never depends on them.
//!
//! ## Writers
//!
//! - [`BlockMeshDictWriter`]: OpenFOAM `system/blockMeshDict`
//! - [`JsonWriter`]: the full spec as pretty-printed JSON

mod block_mesh_dict;
mod json;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportResult};
use crate::spec::BackgroundMeshSpec;

pub use block_mesh_dict::BlockMeshDictWriter;
pub use json::JsonWriter;

/// Serializer for a planned background mesh.
pub trait SpecWriter {
    /// File name the output is written to inside the target directory.
    fn file_name(&self) -> &str;

    /// Writes `spec` to `out`.
    fn write_spec(&self, spec: &BackgroundMeshSpec, out: &mut dyn Write) -> io::Result<()>;

    /// Renders `spec` into a string.
    fn render(&self, spec: &BackgroundMeshSpec) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_spec(spec, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Writes `spec` into `dir` using `writer`, returning the written path.
///
/// The output is rendered in memory first, so a failing writer leaves no
/// partial file behind. An existing file with the same name is replaced.
///
/// # Errors
///
/// - [`ExportError::MissingDirectory`] if `dir` is not an existing directory
/// - [`ExportError::Io`] if rendering or writing fails
pub fn write_into_dir(
    writer: &dyn SpecWriter,
    spec: &BackgroundMeshSpec,
    dir: impl AsRef<Path>,
) -> ExportResult<PathBuf> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ExportError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let path = dir.join(writer.file_name());
    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };
    let contents = writer.render(spec).map_err(io_err)?;

    if path.exists() {
        tracing::warn!(path = %path.display(), "replacing existing file");
    }
    fs::write(&path, contents).map_err(io_err)?;

    tracing::info!(path = %path.display(), "wrote background mesh");
    Ok(path)
}

#[cfg(test)]
mod tests;
