//! Built-in platform definitions for QuantumultX and Loon.

use super::registry::PlatformRegistry;
use super::types::{PlatformSpec, PolicyKind};

/// QuantumultX platform identifier.
pub const QUANX: &str = "quanx";

/// Loon platform identifier.
pub const LOON: &str = "loon";

/// Sections where every key may appear at most once, on every platform.
const KEY_UNIQUE_SECTIONS: [&str; 2] = ["general", "mitm"];

/// Create the registry of supported platforms.
///
/// QuantumultX is registered first and is therefore the fallback for
/// unrecognized platform identifiers.
///
/// ```text
/// quanx  general dns policy filter_local filter_remote server_local
///        server_remote rewrite_local rewrite_remote task_local
///        http_backend mitm
/// loon   general proxy "remote proxy" "remote filter" "proxy group" rule
///        "remote rule" host rewrite script plugin mitm
/// ```
///
/// Loon's `[plugin]` lines are `url, tag=…, enabled=…` directives and
/// deduplicate by URL.
#[must_use]
pub fn create_default_registry() -> PlatformRegistry {
    let mut registry = PlatformRegistry::new();

    registry.register(with_key_unique(PlatformSpec::new(QUANX).with_sections([
        "general",
        "dns",
        "policy",
        "filter_local",
        "filter_remote",
        "server_local",
        "server_remote",
        "rewrite_local",
        "rewrite_remote",
        "task_local",
        "http_backend",
        "mitm",
    ])));

    registry.register(
        with_key_unique(PlatformSpec::new(LOON).with_sections([
            "general",
            "proxy",
            "remote proxy",
            "remote filter",
            "proxy group",
            "rule",
            "remote rule",
            "host",
            "rewrite",
            "script",
            "plugin",
            "mitm",
        ]))
        .with_policy("plugin", PolicyKind::UrlUnique),
    );

    registry
}

fn with_key_unique(spec: PlatformSpec) -> PlatformSpec {
    KEY_UNIQUE_SECTIONS
        .iter()
        .fold(spec, |spec, name| spec.with_policy(*name, PolicyKind::KeyUnique))
}
