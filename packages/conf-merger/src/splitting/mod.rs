//! Section splitting for proxy configuration documents.
//!
//! A document is partitioned into an optional head (text before the first
//! `[Section]` title line) and an ordered list of named blocks. Splitting is a
//! pure partition: nothing is reordered, merged or discarded.

mod engine;
mod types;

pub use engine::{is_section_title, SectionSplitter};
pub use types::{Block, SplitDocument};
