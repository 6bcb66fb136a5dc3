//! Section-by-section merging of an original and an injected document.

mod engine;
mod lines;
mod strategy;

pub use engine::{merge_conf, ConfMerger};
pub use lines::{url_identity, LineKind};
pub use strategy::{ConcatPolicy, KeyUniquePolicy, MergePolicy, MergedBody, UrlUniquePolicy};
