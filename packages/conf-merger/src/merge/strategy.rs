//! Merge policies applied to one section's pair of bodies.

use std::collections::HashSet;

use super::lines::{url_identity, LineKind};
use crate::platform::PolicyKind;

/// Result of merging one section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedBody {
    /// The original body, returned untouched. Emitted even when it is all blank.
    Preserved(Vec<String>),

    /// A computed body. Emitted as a bare title when it has no non-blank line.
    Merged(Vec<String>),
}

impl MergedBody {
    /// Lines to emit under the section title.
    #[must_use]
    pub fn emitted_lines(&self) -> &[String] {
        match self {
            MergedBody::Preserved(lines) => lines.as_slice(),
            MergedBody::Merged(lines) => {
                if lines.iter().any(|l| !l.trim().is_empty()) {
                    lines.as_slice()
                } else {
                    &[]
                }
            }
        }
    }

    /// All lines regardless of emission rules.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            MergedBody::Preserved(lines) | MergedBody::Merged(lines) => lines.as_slice(),
        }
    }
}

/// Strategy for merging an original section body with an injected one.
///
/// Both inputs are body lines with leading and trailing empty lines already
/// stripped. An absent side is an empty slice.
pub trait MergePolicy {
    /// Merge the two bodies.
    fn merge(&self, original: &[&str], injected: &[&str]) -> MergedBody;
}

impl PolicyKind {
    /// The strategy implementing this policy.
    #[must_use]
    pub fn strategy(&self) -> &'static dyn MergePolicy {
        match self {
            PolicyKind::KeyUnique => &KeyUniquePolicy,
            PolicyKind::UrlUnique => &UrlUniquePolicy,
            PolicyKind::Concat => &ConcatPolicy,
        }
    }
}

/// Insertion-ordered key to line association.
#[derive(Debug, Default)]
struct KeyIndex<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> KeyIndex<'a> {
    /// Insert or overwrite; an overwritten key keeps its original position.
    fn insert(&mut self, key: &'a str, line: &'a str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = line;
        } else {
            self.entries.push((key, line));
        }
    }

    /// Insert only if the key is absent.
    fn insert_first(&mut self, key: &'a str, line: &'a str) {
        if !self.contains(key) {
            self.entries.push((key, line));
        }
    }

    fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, line)| *line)
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Key-unique overwrite.
///
/// Injected lines come first, verbatim and in order. Original key-value lines
/// whose key the injected body does not set follow in original order, one per
/// key. Original comments and blank lines follow unless the same line is
/// already present. Other original lines are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyUniquePolicy;

impl MergePolicy for KeyUniquePolicy {
    fn merge(&self, original: &[&str], injected: &[&str]) -> MergedBody {
        if injected.iter().all(|l| l.trim().is_empty()) {
            return MergedBody::Preserved(to_owned(original));
        }

        let mut injected_keys = KeyIndex::default();
        for &line in injected {
            if let Some(key) = LineKind::of(line).key() {
                injected_keys.insert(key, line);
            }
        }

        let mut original_keys = KeyIndex::default();
        for &line in original {
            if let Some(key) = LineKind::of(line).key() {
                original_keys.insert_first(key, line);
            }
        }

        let mut merged: Vec<&str> = injected.to_vec();
        for &line in original {
            let keep = match LineKind::of(line) {
                LineKind::KeyValue(key) => {
                    !injected_keys.contains(key) && original_keys.get(key) == Some(line)
                }
                kind => kind.is_boilerplate(),
            };
            if keep && !merged.contains(&line) {
                merged.push(line);
            }
        }

        MergedBody::Merged(to_owned(&merged))
    }
}

/// URL-unique deduplication.
///
/// Injected lines come first, verbatim. Original lines follow unless their
/// identity (text before the first comma) also occurs in the injected body.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlUniquePolicy;

impl MergePolicy for UrlUniquePolicy {
    fn merge(&self, original: &[&str], injected: &[&str]) -> MergedBody {
        let injected_urls: HashSet<&str> = injected.iter().filter_map(|&l| url_identity(l)).collect();

        let kept = original.iter().filter(|&&line| {
            !matches!(url_identity(line), Some(url) if injected_urls.contains(url))
        });
        let merged: Vec<&str> = injected.iter().chain(kept).copied().collect();

        MergedBody::Merged(to_owned(&merged))
    }
}

/// Plain concatenation: injected lines, then original lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcatPolicy;

impl MergePolicy for ConcatPolicy {
    fn merge(&self, original: &[&str], injected: &[&str]) -> MergedBody {
        let merged: Vec<&str> = injected.iter().chain(original).copied().collect();
        MergedBody::Merged(to_owned(&merged))
    }
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_string()).collect()
}
