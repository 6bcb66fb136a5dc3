//! Source catalog: which documents to merge for a platform and author.
//!
//! A catalog lists the original configuration published by each author per
//! platform, plus one injected document per platform:
//!
//! ```json
//! {
//!   "sources": [
//!     { "platform": "quanx", "author": "bob", "url": "https://example.com/bob.conf" }
//!   ],
//!   "platforms": { "quanx": "https://example.com/inject-quanx.conf" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MergerError, Result};
use crate::sources::read_document;

/// One original configuration published by an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Platform identifier, matched case-insensitively.
    #[serde(default)]
    pub platform: Option<String>,

    /// Author name, matched case-insensitively.
    #[serde(default)]
    pub author: Option<String>,

    /// URL of the original document.
    #[serde(default)]
    pub url: Option<String>,
}

impl SourceEntry {
    fn matches(&self, platform: &str, author: &str) -> bool {
        let eq = |field: &Option<String>, wanted: &str| {
            field.as_deref().is_some_and(|v| v.to_lowercase() == wanted)
        };
        eq(&self.platform, platform) && eq(&self.author, author)
    }
}

/// Catalog of original and injected document locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCatalog {
    /// Original documents, searched in order.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,

    /// Injected document URL per platform.
    #[serde(default)]
    pub platforms: BTreeMap<String, String>,
}

/// The two document locations for one merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSources {
    /// Lowercased platform identifier.
    pub platform: String,

    /// Lowercased author name.
    pub author: String,

    /// URL of the original document.
    pub original_url: String,

    /// URL of the injected document.
    pub inject_url: String,
}

impl SourceCatalog {
    /// Parse a catalog from JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a catalog from YAML.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Load a catalog file. `.yaml`/`.yml` files are read as YAML, anything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = read_document(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let catalog = if is_yaml {
            Self::from_yaml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };

        tracing::debug!(
            path = %path.display(),
            sources = catalog.sources.len(),
            platforms = catalog.platforms.len(),
            "Loaded source catalog"
        );
        Ok(catalog)
    }

    /// Resolve a platform/author pair to the two document URLs.
    ///
    /// Both names are lowercased before matching. The first matching source
    /// entry wins.
    pub fn resolve(&self, platform: &str, author: &str) -> Result<ResolvedSources> {
        let platform = platform.to_lowercase();
        let author = author.to_lowercase();

        let inject_url = self
            .platforms
            .iter()
            .find(|(id, _)| id.to_lowercase() == platform)
            .map(|(_, url)| url.clone())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| MergerError::UnknownPlatform(platform.clone()))?;

        let original_url = self
            .sources
            .iter()
            .find(|entry| entry.matches(&platform, &author))
            .and_then(|entry| entry.url.clone())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| MergerError::UnknownSource {
                platform: platform.clone(),
                author: author.clone(),
            })?;

        Ok(ResolvedSources {
            platform,
            author,
            original_url,
            inject_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CATALOG_JSON: &str = r#"{
        "sources": [
            { "platform": "QuanX", "author": "Bob", "url": "https://example.com/bob.conf" },
            { "platform": "loon", "author": "bob", "url": "" },
            { "platform": "loon", "author": "alice" }
        ],
        "platforms": {
            "quanx": "https://example.com/inject-quanx.conf",
            "loon": "https://example.com/inject-loon.conf"
        }
    }"#;

    #[test]
    fn test_resolve_case_insensitive() {
        let catalog = SourceCatalog::from_json_str(CATALOG_JSON).unwrap();
        let resolved = catalog.resolve("QUANX", "bob").unwrap();

        assert_eq!(
            resolved,
            ResolvedSources {
                platform: "quanx".to_string(),
                author: "bob".to_string(),
                original_url: "https://example.com/bob.conf".to_string(),
                inject_url: "https://example.com/inject-quanx.conf".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_unknown_platform() {
        let catalog = SourceCatalog::from_json_str(CATALOG_JSON).unwrap();
        let err = catalog.resolve("surge", "bob").unwrap_err();
        assert!(matches!(err, MergerError::UnknownPlatform(p) if p == "surge"));
    }

    #[test]
    fn test_resolve_entry_without_url_is_unknown_source() {
        let catalog = SourceCatalog::from_json_str(CATALOG_JSON).unwrap();

        for author in ["bob", "alice", "carol"] {
            let err = catalog.resolve("loon", author).unwrap_err();
            assert!(matches!(err, MergerError::UnknownSource { .. }), "{author}");
        }
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = "sources:\n  - platform: loon\n    author: alice\n    url: https://example.com/a.conf\nplatforms:\n  loon: https://example.com/i.conf\n";
        let catalog = SourceCatalog::from_yaml_str(yaml).unwrap();
        let resolved = catalog.resolve("loon", "Alice").unwrap();
        assert_eq!(resolved.original_url, "https://example.com/a.conf");
        assert_eq!(resolved.inject_url, "https://example.com/i.conf");
    }

    #[test]
    fn test_missing_fields_default() {
        let catalog = SourceCatalog::from_json_str("{}").unwrap();
        assert_eq!(catalog, SourceCatalog::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = SourceCatalog::from_json_str("[not a catalog").unwrap_err();
        assert!(matches!(err, MergerError::CatalogJson(_)));
    }

    #[test]
    fn test_from_path_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("sources.yml");
        std::fs::write(&yaml_path, "platforms:\n  quanx: https://example.com/i.conf\n").unwrap();
        let json_path = dir.path().join("sources.json");
        std::fs::write(&json_path, CATALOG_JSON).unwrap();

        assert_eq!(SourceCatalog::from_path(&yaml_path).unwrap().platforms.len(), 1);
        assert_eq!(SourceCatalog::from_path(&json_path).unwrap().sources.len(), 3);
    }
}
