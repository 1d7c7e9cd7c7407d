//! Tab-delimited pair writer.

use crate::core::error::Result;
use crate::core::types::EmittedPair;

use std::io::Write;

/// Writes emitted pairs to the output as they are produced.
///
/// No buffering happens here: each pair is handed to the inner writer
/// immediately, so flushing behavior is that of `W`. Locked stdout is
/// line-buffered, which gives one flush per emitted pair.
#[derive(Debug)]
pub struct PairWriter<W: Write> {
    inner: W,
    pairs_written: u64,
}

impl<W: Write> PairWriter<W> {
    /// Wraps an output stream
    pub fn new(inner: W) -> Self {
        PairWriter {
            inner,
            pairs_written: 0,
        }
    }

    /// Writes one `<key>\t<value>\n` line.
    pub fn emit(&mut self, pair: &EmittedPair<'_>) -> Result<()> {
        pair.write_to(&mut self.inner)?;
        self.pairs_written += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn pairs_written(&self) -> u64 {
        self.pairs_written
    }

    /// Flush the inner writer
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwraps the inner writer without flushing
    pub fn into_inner(self) -> W {
        self.inner
    }
}
