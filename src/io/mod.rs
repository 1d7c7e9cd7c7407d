//! Streaming input and output for the mapper.

pub mod reader;
pub mod writer;

pub use reader::RecordReader;
pub use writer::PairWriter;
