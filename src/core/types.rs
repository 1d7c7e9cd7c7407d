//! Core data types for the bagging mapper.
//!
//! Records are kept as raw bytes. The mapper never interprets record
//! contents, so it passes them through without UTF-8 validation and a
//! malformed byte sequence in one line cannot abort a whole shard.

use crate::core::constants::{KEY_VALUE_DELIMITER, RECORD_TERMINATOR};
use std::fmt;
use std::io::{self, Write};

/// Ensemble member identifier, always in `[0, num_models)`.
pub type ModelIndex = usize;

/// 0-based position of a record in the input stream.
pub type RecordIndex = u64;

/// One input line, stripped of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Position of the record in the input stream
    pub index: RecordIndex,
    /// Stripped record contents
    pub value: Vec<u8>,
}

impl Record {
    /// Builds a record from a raw line, stripping it on the way in.
    pub fn from_line(index: RecordIndex, line: &[u8]) -> Self {
        Record {
            index,
            value: strip_record(line).to_vec(),
        }
    }

    /// Record contents as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    /// True for blank lines
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.value))
    }
}

/// A `(model, record)` pair ready for emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedPair<'a> {
    /// Model the record was sampled for
    pub key: ModelIndex,
    /// Stripped record contents
    pub value: &'a [u8],
}

impl<'a> EmittedPair<'a> {
    /// Pairs a model index with a record.
    pub fn new(key: ModelIndex, record: &'a Record) -> Self {
        EmittedPair {
            key,
            value: record.as_bytes(),
        }
    }

    /// Writes the pair as `<key>\t<value>\n`.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self.key)?;
        writer.write_all(&[KEY_VALUE_DELIMITER])?;
        writer.write_all(self.value)?;
        writer.write_all(&[RECORD_TERMINATOR])
    }
}

impl fmt::Display for EmittedPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.key, String::from_utf8_lossy(self.value))
    }
}

/// Whitespace removed from both ends of a record: space, tab, newline,
/// carriage return, vertical tab and form feed.
fn is_record_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Strips leading and trailing whitespace from a raw line.
///
/// Interior bytes, tabs included, are left untouched.
pub fn strip_record(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|&b| !is_record_whitespace(b))
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|&b| !is_record_whitespace(b))
        .map_or(start, |pos| pos + 1);
    &line[start..end]
}
