//! Lazy, line-at-a-time record reader.

use crate::core::constants::{DEFAULT_LINE_BUFFER_CAPACITY, RECORD_TERMINATOR};
use crate::core::error::Result;
use crate::core::types::{Record, RecordIndex};

use std::io::BufRead;

/// Iterator over the records of a line-delimited stream.
///
/// Reads one line per call to `next`, so memory use is bounded by the
/// longest line rather than the size of the input. A final line without a
/// terminator is still a record. Blank lines are records with empty values.
#[derive(Debug)]
pub struct RecordReader<R> {
    reader: R,
    buffer: Vec<u8>,
    next_index: RecordIndex,
    finished: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Wraps a buffered reader
    pub fn new(reader: R) -> Self {
        RecordReader {
            reader,
            buffer: Vec::with_capacity(DEFAULT_LINE_BUFFER_CAPACITY),
            next_index: 0,
            finished: false,
        }
    }

    /// Number of records yielded so far
    pub fn records_read(&self) -> RecordIndex {
        self.next_index
    }

    /// Reads the next record, or `None` at end of input.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        if self.finished {
            return Ok(None);
        }

        self.buffer.clear();
        let read = match self.reader.read_until(RECORD_TERMINATOR, &mut self.buffer) {
            Ok(read) => read,
            Err(e) => {
                self.finished = true;
                return Err(e.into());
            }
        };
        if read == 0 {
            self.finished = true;
            return Ok(None);
        }

        let record = Record::from_line(self.next_index, &self.buffer);
        self.next_index += 1;
        Ok(Some(record))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn read_all(input: &[u8]) -> Vec<Record> {
        RecordReader::new(Cursor::new(input.to_vec()))
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_reads_records_in_order() {
        let records = read_all(b"a\nb\nc\n");
        let values: Vec<&[u8]> = records.iter().map(|r| r.as_bytes()).collect();
        assert_eq!(values, vec![&b"a"[..], b"b", b"c"]);
        let indices: Vec<u64> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_all(b"").is_empty());
    }

    #[test]
    fn test_unterminated_last_line() {
        let records = read_all(b"a\nlast");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].as_bytes(), b"last");
    }

    #[test]
    fn test_blank_lines_are_records() {
        let records = read_all(b"a\n\n  \nb\n");
        assert_eq!(records.len(), 4);
        assert!(records[1].is_empty());
        assert!(records[2].is_empty());
        assert_eq!(records[3].index, 3);
    }

    #[test]
    fn test_crlf_and_padding_stripped() {
        let records = read_all(b"  x,1 \r\n\ty\t\r\n");
        assert_eq!(records[0].as_bytes(), b"x,1");
        assert_eq!(records[1].as_bytes(), b"y");
    }

    #[test]
    fn test_invalid_utf8_passes_through() {
        let records = read_all(b"\xc3\x28 ok\n");
        assert_eq!(records[0].as_bytes(), b"\xc3\x28 ok");
    }

    #[test]
    fn test_records_read_counter() {
        let mut reader = RecordReader::new(Cursor::new(b"1\n2\n".to_vec()));
        assert_eq!(reader.records_read(), 0);
        reader.next();
        reader.next();
        assert!(reader.next().is_none());
        assert_eq!(reader.records_read(), 2);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "stdin unreadable"))
        }
    }

    #[test]
    fn test_read_error_stops_iteration() {
        let mut reader = RecordReader::new(io::BufReader::new(FailingReader));
        let first = reader.next().unwrap();
        assert!(first.unwrap_err().is_io_error());
        assert!(reader.next().is_none());
    }
}
