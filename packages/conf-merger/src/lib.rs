//! conf-merger - Merge injected settings into proxy client configurations.
//!
//! QuantumultX and Loon read an INI-like configuration made of `[Section]`
//! blocks. This crate folds an "injected" document into an "original" one
//! section by section, keeping the original's titles, comments and blank
//! lines intact.
//!
//! # Example
//!
//! ```
//! use conf_merger::merge_conf;
//!
//! let original = "# my config\n[General]\nipv6=false\n[filter_local]\nFINAL,direct\n";
//! let injected = "[general]\nipv6=true\n[filter_local]\nHOST,ads.example,reject\n";
//!
//! assert_eq!(
//!     merge_conf(original, injected, "quanx"),
//!     "# my config\n[General]\nipv6=true\n[filter_local]\nHOST,ads.example,reject\nFINAL,direct"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`splitting`]: Partition text into head and named section blocks
//! - [`platform`]: Per-platform canonical sections and merge policy assignment
//! - [`merge`]: Merge policies and the merge engine
//! - [`catalog`]: Resolve a platform/author pair to source URLs
//! - [`sources`]: Load documents from files or URLs
//! - [`http`]: HTTP client for downloading documents
//! - [`injector`]: Load, resolve and merge in one call
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod injector;
pub mod merge;
pub mod platform;
pub mod sources;
pub mod splitting;

// Re-export main functions
pub use injector::{inject_config, merge_locations};
pub use merge::{merge_conf, ConfMerger};

// Re-export commonly used items
pub use catalog::{ResolvedSources, SourceCatalog};
pub use error::{MergerError, Result};
pub use platform::{create_default_registry, PlatformRegistry, PlatformSpec, PolicyKind};
pub use splitting::{Block, SectionSplitter, SplitDocument};
