//! Merge engine that orchestrates splitting, policy dispatch and assembly.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::platform::{create_default_registry, PlatformRegistry, PlatformSpec, PolicyKind};
use crate::splitting::{Block, SectionSplitter, SplitDocument};

/// Three or more consecutive newlines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLANK_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Merges an injected configuration document into an original one.
///
/// Sections are processed in the order they first appear in the original
/// document, followed by sections only the injected document has, in its
/// order. Each section body is merged with the policy the registry assigns
/// to it on the requested platform.
pub struct ConfMerger {
    registry: PlatformRegistry,
    splitter: SectionSplitter,
}

impl ConfMerger {
    /// Create a merger over an explicit platform registry.
    #[must_use]
    pub fn new(registry: PlatformRegistry) -> Self {
        Self {
            registry,
            splitter: SectionSplitter::new(),
        }
    }

    /// The platform registry used for policy dispatch.
    #[must_use]
    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Merge `injected` into `original` for `platform`.
    ///
    /// The original head is kept verbatim; the injected head is dropped.
    /// Output uses `\n` line endings and never contains a run of more than
    /// one blank line.
    pub fn merge(&self, original: &str, injected: &str, platform: &str) -> String {
        let original = self.splitter.split(original);
        let injected = self.splitter.split(injected);
        let spec = self.registry.spec_for(platform);

        warn_duplicates("original", &original);
        warn_duplicates("injected", &injected);
        if injected
            .head
            .as_ref()
            .is_some_and(|head| head.iter().any(|l| !l.trim().is_empty()))
        {
            tracing::debug!("Dropping head of injected document");
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some(head) = original.head_text() {
            parts.push(head);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let order = original
            .section_names()
            .into_iter()
            .chain(injected.section_names());

        for name in order {
            if !seen.insert(name) {
                continue;
            }
            if let Some(section) =
                self.merge_section(name, original.block(name), injected.block(name), spec)
            {
                parts.push(section);
            }
        }

        normalize_blank_lines(&parts.join("\n"))
    }

    /// Merge one section. Returns `None` when neither document has it.
    fn merge_section(
        &self,
        name: &str,
        original: Option<&Block>,
        injected: Option<&Block>,
        spec: Option<&PlatformSpec>,
    ) -> Option<String> {
        if original.is_none() && injected.is_none() {
            return None;
        }

        let title = original
            .or(injected)
            .map_or_else(|| format!("[{name}]"), |block| block.title.clone());

        let policy = spec.map_or(PolicyKind::Concat, |spec| spec.policy_for(name));
        if !spec.is_some_and(|spec| spec.is_known_section(name)) {
            tracing::debug!(section = %name, "Section not in platform's canonical list");
        }
        tracing::debug!(
            section = %name,
            policy = %policy,
            in_original = original.is_some(),
            in_injected = injected.is_some(),
            "Merging section"
        );

        let original_lines = original.map(Block::body_lines).unwrap_or_default();
        let injected_lines = injected.map(Block::body_lines).unwrap_or_default();
        let merged = policy.strategy().merge(&original_lines, &injected_lines);

        let lines = merged.emitted_lines();
        if lines.is_empty() {
            Some(title)
        } else {
            Some(format!("{title}\n{}", lines.join("\n")))
        }
    }
}

impl Default for ConfMerger {
    fn default() -> Self {
        Self::new(create_default_registry())
    }
}

/// Merge two documents using the built-in QuantumultX/Loon registry.
///
/// # Examples
/// ```
/// use conf_merger::merge_conf;
///
/// let original = "[general]\na=1\n#c\n[dns]\nserver=8.8.8.8\n";
/// let injected = "[general]\na=2\nb=3\n";
///
/// assert_eq!(
///     merge_conf(original, injected, "quanx"),
///     "[general]\na=2\nb=3\n#c\n[dns]\nserver=8.8.8.8"
/// );
/// ```
#[must_use]
pub fn merge_conf(original: &str, injected: &str, platform: &str) -> String {
    ConfMerger::default().merge(original, injected, platform)
}

/// Collapse every run of blank lines to a single blank line.
fn normalize_blank_lines(text: &str) -> String {
    BLANK_RUN_PATTERN.replace_all(text, "\n\n").into_owned()
}

fn warn_duplicates(which: &str, document: &SplitDocument) {
    for name in document.duplicate_names() {
        tracing::warn!(
            document = which,
            section = %name,
            "Duplicate section, only the first occurrence is merged"
        );
    }
}
