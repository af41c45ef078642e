//! # STL Vertex Streaming
//!
//! Lazy, single-pass iteration over the vertex coordinates of an STL file.
//!
//! # Format Detection
//!
//! - Binary when the file length equals `84 + 50 * triangle_count` taken from
//!   the header
//! - Otherwise ASCII when the text starts with `solid`
//! - Otherwise binary (a malformed file then fails on its first short record)
//!
//! When the length is unknown (arbitrary readers), a header that starts with
//! `solid` and contains no NUL byte is treated as ASCII.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! Only `vertex` records are read. Several `solid` blocks in one file are all
//! scanned.

mod ascii;
mod binary;

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use glam::DVec3;

use crate::error::{BoundsError, BoundsResult};

pub use ascii::AsciiVertices;
pub use binary::BinaryVertices;

/// Size of the binary header before the triangle count.
pub(crate) const HEADER_SIZE: usize = 80;

/// Header plus the `u32` triangle count.
pub(crate) const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one binary triangle record (normal + 3 vertices + attribute).
pub(crate) const TRIANGLE_SIZE: usize = 50;

/// Encoding of an STL source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    /// Text `solid … endsolid` records.
    Ascii,
    /// Little-endian binary triangles.
    Binary,
}

/// Lazy stream of the vertices of an STL source.
///
/// Yields each vertex once, in file order. After the first error the stream
/// is exhausted.
///
/// # Example
///
/// ```rust
/// use geometry_bounds::{StlFormat, VertexStream};
///
/// let text = "solid s\n facet normal 0 0 1\n  outer loop\n   vertex 0 0 0\n   vertex 1 0 0\n   vertex 0 1 0\n  endloop\n endfacet\nendsolid s\n";
/// let stream = VertexStream::from_reader(text.as_bytes(), "inline.stl", None).unwrap();
/// assert_eq!(stream.format(), StlFormat::Ascii);
/// assert_eq!(stream.count(), 3);
/// ```
pub enum VertexStream<R: Read> {
    /// ASCII source.
    Ascii(AsciiVertices<BufReader<io::Chain<Cursor<Vec<u8>>, R>>>),
    /// Binary source.
    Binary(BinaryVertices<BufReader<R>>),
}

impl VertexStream<File> {
    /// Opens an STL file and detects its encoding.
    ///
    /// Missing or unreadable files fail with [`BoundsError::GeometryNotFound`].
    pub fn open(path: impl AsRef<Path>) -> BoundsResult<Self> {
        let path = path.as_ref();
        let not_found = |source| BoundsError::GeometryNotFound {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(not_found)?;
        let metadata = file.metadata().map_err(not_found)?;
        if !metadata.is_file() {
            return Err(not_found(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        Self::from_reader(file, path, Some(metadata.len()))
    }
}

impl<R: Read> VertexStream<R> {
    /// Wraps an arbitrary reader.
    ///
    /// `origin` names the source in error messages. `len`, when known, is the
    /// total byte length and drives binary detection.
    pub fn from_reader(
        mut reader: R,
        origin: impl Into<PathBuf>,
        len: Option<u64>,
    ) -> BoundsResult<Self> {
        let origin = origin.into();
        let mut preamble = [0u8; PREAMBLE_SIZE];
        let filled = read_full(&mut reader, &mut preamble).map_err(|source| BoundsError::Io {
            path: origin.clone(),
            source,
        })?;
        let preamble = &preamble[..filled];

        let format = detect_format(preamble, len);
        tracing::debug!(origin = %origin.display(), ?format, "detected STL encoding");

        Ok(match format {
            StlFormat::Binary => {
                Self::Binary(BinaryVertices::from_preamble(
                    preamble,
                    BufReader::new(reader),
                    origin,
                )?)
            }
            StlFormat::Ascii => {
                let replay = Cursor::new(preamble.to_vec()).chain(reader);
                Self::Ascii(AsciiVertices::new(BufReader::new(replay), origin))
            }
        })
    }

    /// Encoding detected for this stream.
    pub fn format(&self) -> StlFormat {
        match self {
            Self::Ascii(_) => StlFormat::Ascii,
            Self::Binary(_) => StlFormat::Binary,
        }
    }

    /// Name of the source used in error messages.
    pub fn origin(&self) -> &Path {
        match self {
            Self::Ascii(inner) => inner.origin(),
            Self::Binary(inner) => inner.origin(),
        }
    }
}

impl<R: Read> Iterator for VertexStream<R> {
    type Item = BoundsResult<DVec3>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Ascii(inner) => inner.next(),
            Self::Binary(inner) => inner.next(),
        }
    }
}

/// Picks the encoding from the first bytes and, if known, the total length.
pub(crate) fn detect_format(preamble: &[u8], len: Option<u64>) -> StlFormat {
    let starts_with_solid = starts_with_solid(preamble);

    if preamble.len() == PREAMBLE_SIZE {
        match len {
            Some(len) => {
                let count = triangle_count(preamble);
                if len == PREAMBLE_SIZE as u64 + TRIANGLE_SIZE as u64 * u64::from(count) {
                    return StlFormat::Binary;
                }
            }
            None => {
                if !(starts_with_solid && !preamble[..HEADER_SIZE].contains(&0)) {
                    return StlFormat::Binary;
                }
            }
        }
    }

    if starts_with_solid || preamble.len() < PREAMBLE_SIZE {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    }
}

/// Triangle count stored after the binary header.
pub(crate) fn triangle_count(preamble: &[u8]) -> u32 {
    u32::from_le_bytes([
        preamble[HEADER_SIZE],
        preamble[HEADER_SIZE + 1],
        preamble[HEADER_SIZE + 2],
        preamble[HEADER_SIZE + 3],
    ])
}

fn starts_with_solid(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..]
        .get(..5)
        .is_some_and(|word| word.eq_ignore_ascii_case(b"solid"))
}

/// Reads until `buf` is full or the reader is exhausted.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
