//! Documentation scraping: section splitting and entry extraction.

pub mod extractor;
pub mod splitter;

pub use extractor::{Extraction, extract_entries};
pub use splitter::{HeadingPartition, partition_by_heading, split_sections};
