//! Document ingestion: turning uploaded bytes into text

mod parser;
mod processor;

pub use parser::{hash_content, FileParser, ParsedDocument};
pub use processor::IngestPipeline;

#[cfg(test)]
pub(crate) use parser::fixtures;
