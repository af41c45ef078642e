//! ASCII STL vertex records.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use glam::DVec3;

use crate::error::{BoundsError, BoundsResult};

/// Iterator over the `vertex x y z` records of an ASCII STL source.
///
/// Reads one line at a time into a reused buffer. Keywords are matched
/// case-insensitively; every other record is skipped.
pub struct AsciiVertices<R: BufRead> {
    reader: R,
    origin: PathBuf,
    buf: Vec<u8>,
    line: u64,
    done: bool,
}

impl<R: BufRead> AsciiVertices<R> {
    /// Wraps a buffered reader positioned at the start of the text.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            origin: origin.into(),
            buf: Vec::new(),
            line: 0,
            done: false,
        }
    }

    /// Name of the source used in error messages.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    fn next_vertex(&mut self) -> BoundsResult<Option<DVec3>> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .map_err(|source| BoundsError::Io {
                    path: self.origin.clone(),
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;

            // Solid names and comments may use any encoding
            let Some(rest) = strip_vertex_keyword(&self.buf) else {
                continue;
            };
            let text = std::str::from_utf8(rest).map_err(|_| {
                BoundsError::parse(&self.origin, self.line, "vertex record is not valid UTF-8")
            })?;
            return parse_coordinates(text.split_whitespace())
                .map(Some)
                .map_err(|message| BoundsError::parse(&self.origin, self.line, message));
        }
    }
}

impl<R: BufRead> Iterator for AsciiVertices<R> {
    type Item = BoundsResult<DVec3>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_vertex() {
            Ok(Some(vertex)) => Some(Ok(vertex)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Returns the bytes after a leading `vertex` keyword, if the line has one.
fn strip_vertex_keyword(line: &[u8]) -> Option<&[u8]> {
    const KEYWORD: &[u8] = b"vertex";

    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let line = &line[start..];
    let (keyword, rest) = (line.get(..KEYWORD.len())?, &line[KEYWORD.len()..]);
    let at_boundary = rest.first().map_or(true, |b| b.is_ascii_whitespace());
    (keyword.eq_ignore_ascii_case(KEYWORD) && at_boundary).then_some(rest)
}

/// Parses the three coordinates following a `vertex` keyword.
fn parse_coordinates<'a>(mut fields: impl Iterator<Item = &'a str>) -> Result<DVec3, String> {
    let mut coords = [0.0_f64; 3];
    for (i, slot) in coords.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| format!("vertex record has {i} coordinates, expected 3"))?;
        let value: f64 = field
            .parse()
            .map_err(|_| format!("invalid coordinate `{field}`"))?;
        if !value.is_finite() {
            return Err(format!("non-finite coordinate `{field}`"));
        }
        *slot = value;
    }
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected field `{extra}` after vertex coordinates"));
    }
    Ok(DVec3::from_array(coords))
}
