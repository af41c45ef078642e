//! JSON writer.

use std::io::{self, Write};

use ::config::constants::JSON_SPEC_FILE_NAME;

use super::SpecWriter;
use crate::spec::BackgroundMeshSpec;

/// Writes the complete spec, raw bounds included, as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl SpecWriter for JsonWriter {
    fn file_name(&self) -> &str {
        JSON_SPEC_FILE_NAME
    }

    fn write_spec(&self, spec: &BackgroundMeshSpec, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, spec)?;
        writeln!(out)
    }
}
