//! Main merge service that ties loading, resolution and merging together.

use reqwest::blocking::Client;

use crate::catalog::SourceCatalog;
use crate::error::Result;
use crate::http::{create_client, download_text};
use crate::merge::ConfMerger;
use crate::sources::DocumentLoader;

/// Load two documents (paths or URLs) and merge them.
///
/// # Arguments
/// * `merger` - Merger holding the platform registry
/// * `original` - Location of the original document
/// * `injected` - Location of the injected document
/// * `platform` - Platform identifier
pub fn merge_locations(
    merger: &ConfMerger,
    original: &str,
    injected: &str,
    platform: &str,
) -> Result<String> {
    let mut loader = DocumentLoader::new();
    let original_text = loader.load(original)?;
    let injected_text = loader.load(injected)?;

    Ok(merger.merge(&original_text, &injected_text, platform))
}

/// Resolve a platform/author pair through the catalog, download both
/// documents and merge them.
pub fn inject_config(
    merger: &ConfMerger,
    catalog: &SourceCatalog,
    platform: &str,
    author: &str,
) -> Result<String> {
    let client = create_client()?;
    inject_config_with_client(&client, merger, catalog, platform, author)
}

/// Like [`inject_config`], with a caller-supplied HTTP client.
pub fn inject_config_with_client(
    client: &Client,
    merger: &ConfMerger,
    catalog: &SourceCatalog,
    platform: &str,
    author: &str,
) -> Result<String> {
    let resolved = catalog.resolve(platform, author)?;
    tracing::info!(
        platform = %resolved.platform,
        author = %resolved.author,
        "Resolved sources"
    );

    let original = download_text(client, &resolved.original_url)?;
    let injected = download_text(client, &resolved.inject_url)?;

    Ok(merger.merge(&original, &injected, &resolved.platform))
}
