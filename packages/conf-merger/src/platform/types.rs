//! Types for the platform registry.

use std::fmt;

/// Merge policy applied to one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// At most one line per key; injected values win.
    KeyUnique,

    /// Deduplicate by the token before the first comma; injected entries win.
    UrlUnique,

    /// Injected lines followed by original lines, untouched.
    Concat,
}

impl PolicyKind {
    /// Short identifier used in CLI output and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::KeyUnique => "key-unique",
            PolicyKind::UrlUnique => "url-unique",
            PolicyKind::Concat => "concat",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative description of one platform dialect.
#[derive(Debug, Clone)]
pub struct PlatformSpec {
    /// Platform identifier, matched case-sensitively (e.g. `"quanx"`).
    pub id: String,

    /// Canonical section names in order.
    pub sections: Vec<String>,

    /// Sections that merge with a policy other than [`PolicyKind::Concat`].
    ///
    /// Section names are stored lowercased.
    pub policies: Vec<(String, PolicyKind)>,
}

impl PlatformSpec {
    /// Create a new platform specification with no sections.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sections: Vec::new(),
            policies: Vec::new(),
        }
    }

    /// Set the canonical section list.
    #[must_use]
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Assign a policy to a section. Later assignments for the same section replace earlier ones.
    #[must_use]
    pub fn with_policy(mut self, section: impl Into<String>, policy: PolicyKind) -> Self {
        let section = section.into().to_lowercase();
        self.policies.retain(|(name, _)| *name != section);
        self.policies.push((section, policy));
        self
    }

    /// Policy for a section name (compared lowercased).
    #[must_use]
    pub fn policy_for(&self, section: &str) -> PolicyKind {
        let section = section.to_lowercase();
        self.policies
            .iter()
            .find(|(name, _)| *name == section)
            .map_or(PolicyKind::Concat, |(_, policy)| *policy)
    }

    /// Whether `section` is in the canonical section list.
    #[must_use]
    pub fn is_known_section(&self, section: &str) -> bool {
        let section = section.to_lowercase();
        self.sections.iter().any(|s| *s == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_spec_builder() {
        let spec = PlatformSpec::new("demo")
            .with_sections(["general", "rule"])
            .with_policy("General", PolicyKind::KeyUnique);

        assert_eq!(spec.id, "demo");
        assert_eq!(spec.sections, vec!["general", "rule"]);
        assert_eq!(spec.policy_for("general"), PolicyKind::KeyUnique);
        assert_eq!(spec.policy_for("GENERAL"), PolicyKind::KeyUnique);
        assert_eq!(spec.policy_for("rule"), PolicyKind::Concat);
        assert_eq!(spec.policy_for("not-listed"), PolicyKind::Concat);
    }

    #[test]
    fn test_with_policy_replaces_previous() {
        let spec = PlatformSpec::new("demo")
            .with_policy("plugin", PolicyKind::KeyUnique)
            .with_policy("plugin", PolicyKind::UrlUnique);

        assert_eq!(spec.policies.len(), 1);
        assert_eq!(spec.policy_for("plugin"), PolicyKind::UrlUnique);
    }

    #[test]
    fn test_is_known_section() {
        let spec = PlatformSpec::new("demo").with_sections(["remote filter"]);
        assert!(spec.is_known_section("Remote Filter"));
        assert!(!spec.is_known_section("filter"));
    }

    #[test]
    fn test_policy_kind_display() {
        assert_eq!(PolicyKind::KeyUnique.to_string(), "key-unique");
        assert_eq!(PolicyKind::UrlUnique.to_string(), "url-unique");
        assert_eq!(PolicyKind::Concat.to_string(), "concat");
    }
}
