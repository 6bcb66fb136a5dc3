//! Registry of platform specifications.

use super::types::{PlatformSpec, PolicyKind};

/// Ordered registry of platform dialects.
///
/// The first registered platform is the default: lookups for an unknown
/// identifier fall back to it.
#[derive(Debug, Clone, Default)]
pub struct PlatformRegistry {
    specs: Vec<PlatformSpec>,
}

impl PlatformRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Register a platform. Re-registering an identifier replaces it in place.
    pub fn register(&mut self, spec: PlatformSpec) {
        if let Some(existing) = self.specs.iter_mut().find(|s| s.id == spec.id) {
            *existing = spec;
        } else {
            self.specs.push(spec);
        }
    }

    /// Exact lookup without fallback.
    #[must_use]
    pub fn get(&self, platform: &str) -> Option<&PlatformSpec> {
        self.specs.iter().find(|s| s.id == platform)
    }

    /// The default (first registered) platform.
    #[must_use]
    pub fn default_spec(&self) -> Option<&PlatformSpec> {
        self.specs.first()
    }

    /// Lookup with fallback to the default platform.
    ///
    /// Returns `None` only for an empty registry.
    #[must_use]
    pub fn spec_for(&self, platform: &str) -> Option<&PlatformSpec> {
        self.get(platform).or_else(|| {
            tracing::debug!(platform = %platform, "Unknown platform, using default");
            self.default_spec()
        })
    }

    /// Canonical section names for a platform (with fallback).
    #[must_use]
    pub fn sections_for(&self, platform: &str) -> &[String] {
        self.spec_for(platform)
            .map(|spec| spec.sections.as_slice())
            .unwrap_or_default()
    }

    /// Merge policy for a section on a platform (with fallback).
    #[must_use]
    pub fn policy_for(&self, platform: &str, section: &str) -> PolicyKind {
        self.spec_for(platform)
            .map_or(PolicyKind::Concat, |spec| spec.policy_for(section))
    }

    /// Whether a section belongs to a platform's canonical list (with fallback).
    #[must_use]
    pub fn is_known_section(&self, platform: &str, section: &str) -> bool {
        self.spec_for(platform)
            .is_some_and(|spec| spec.is_known_section(section))
    }

    /// Registered platform identifiers in registration order.
    pub fn platform_ids(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.id.as_str())
    }
}
