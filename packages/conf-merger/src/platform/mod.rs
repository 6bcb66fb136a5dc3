//! Platform section registry.
//!
//! Each supported proxy client ("platform") has a canonical, ordered list of
//! section names and a set of sections that merge with a non-default policy.

mod config;
mod registry;
mod types;

pub use config::{create_default_registry, LOON, QUANX};
pub use registry::PlatformRegistry;
pub use types::{PlatformSpec, PolicyKind};
