//! Loading configuration documents from local files or URLs.

use std::path::Path;

use reqwest::blocking::Client;

use crate::config::is_remote;
use crate::error::{MergerError, Result};
use crate::http::{bytes_to_string, create_client, download_text};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource<'a> {
    /// An `http://` or `https://` URL.
    Remote(&'a str),

    /// A path on the local filesystem.
    Local(&'a Path),
}

impl<'a> DocumentSource<'a> {
    /// Interpret a command line location.
    #[must_use]
    pub fn parse(location: &'a str) -> Self {
        if is_remote(location) {
            DocumentSource::Remote(location.trim())
        } else {
            DocumentSource::Local(Path::new(location))
        }
    }
}

/// Loads documents, creating an HTTP client only when a remote source needs one.
#[derive(Default)]
pub struct DocumentLoader {
    client: Option<Client>,
}

impl DocumentLoader {
    /// Create a loader without an HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: None }
    }

    /// Create a loader that uses an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Load the document at `location` (path or URL).
    pub fn load(&mut self, location: &str) -> Result<String> {
        match DocumentSource::parse(location) {
            DocumentSource::Remote(url) => {
                let client = match &self.client {
                    Some(client) => client.clone(),
                    None => {
                        let client = create_client()?;
                        self.client = Some(client.clone());
                        client
                    }
                };
                download_text(&client, url)
            }
            DocumentSource::Local(path) => read_document(path),
        }
    }
}

/// Read a document from disk.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| MergerError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes_to_string(&bytes, &path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            DocumentSource::parse("https://example.com/a.conf"),
            DocumentSource::Remote("https://example.com/a.conf")
        );
        assert_eq!(
            DocumentSource::parse("configs/a.conf"),
            DocumentSource::Local(Path::new("configs/a.conf"))
        );
    }

    #[test]
    fn test_load_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[general]\r\na=1\r\n").unwrap();

        let mut loader = DocumentLoader::new();
        let text = loader.load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "[general]\r\na=1\r\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.conf");

        let mut loader = DocumentLoader::new();
        let err = loader.load(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, MergerError::ReadDocument { .. }));
    }
}
