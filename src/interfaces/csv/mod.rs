//! CSV adapters used by the command line tool.

pub mod envelope_writer;
pub mod order_reader;
