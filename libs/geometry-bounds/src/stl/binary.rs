//! Binary STL triangle records.

use std::io::Read;
use std::path::{Path, PathBuf};

use glam::DVec3;

use super::{read_full, triangle_count, PREAMBLE_SIZE, TRIANGLE_SIZE};
use crate::error::{BoundsError, BoundsResult};

/// Iterator over the vertices of a binary STL source.
///
/// Reads one 50-byte triangle record at a time and yields its three vertices.
pub struct BinaryVertices<R: Read> {
    reader: R,
    origin: PathBuf,
    triangles: u32,
    record: u32,
    pending: [DVec3; 3],
    next_in_record: usize,
    done: bool,
}

impl<R: Read> BinaryVertices<R> {
    /// Builds the iterator from the already-consumed 84-byte preamble.
    pub fn from_preamble(preamble: &[u8], reader: R, origin: impl Into<PathBuf>) -> BoundsResult<Self> {
        let origin = origin.into();
        if preamble.len() < PREAMBLE_SIZE {
            return Err(BoundsError::parse(
                origin,
                0,
                format!(
                    "binary header truncated: expected {PREAMBLE_SIZE} bytes, got {}",
                    preamble.len()
                ),
            ));
        }
        Ok(Self {
            reader,
            origin,
            triangles: triangle_count(preamble),
            record: 0,
            pending: [DVec3::ZERO; 3],
            next_in_record: 3,
            done: false,
        })
    }

    /// Number of triangles announced by the header.
    pub fn triangle_count(&self) -> u32 {
        self.triangles
    }

    /// Name of the source used in error messages.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    fn read_record(&mut self) -> BoundsResult<()> {
        let mut record = [0u8; TRIANGLE_SIZE];
        let line = u64::from(self.record) + 1;
        let filled = read_full(&mut self.reader, &mut record).map_err(|source| BoundsError::Io {
            path: self.origin.clone(),
            source,
        })?;
        if filled < TRIANGLE_SIZE {
            return Err(BoundsError::parse(
                &self.origin,
                line,
                format!(
                    "truncated triangle record: {filled} of {TRIANGLE_SIZE} bytes ({} triangles announced)",
                    self.triangles
                ),
            ));
        }

        // Skip the 12-byte normal, then three 12-byte vertices
        for (i, slot) in self.pending.iter_mut().enumerate() {
            let start = 12 + i * 12;
            let vertex = read_vertex(&record[start..start + 12]);
            if !vertex.is_finite() {
                return Err(BoundsError::parse(
                    &self.origin,
                    line,
                    format!("non-finite coordinate in vertex {}", i + 1),
                ));
            }
            *slot = vertex;
        }
        self.record += 1;
        self.next_in_record = 0;
        Ok(())
    }
}

impl<R: Read> Iterator for BinaryVertices<R> {
    type Item = BoundsResult<DVec3>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.next_in_record == 3 {
            if self.record == self.triangles {
                self.done = true;
                return None;
            }
            if let Err(e) = self.read_record() {
                self.done = true;
                return Some(Err(e));
            }
        }
        let vertex = self.pending[self.next_in_record];
        self.next_in_record += 1;
        Some(Ok(vertex))
    }
}

/// Reads a vertex from 12 bytes (3 little-endian f32s).
fn read_vertex(buf: &[u8]) -> DVec3 {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    DVec3::new(f64::from(x), f64::from(y), f64::from(z))
}
