//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{MergerError, Result};

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Platform used when none is given on the command line.
pub const DEFAULT_PLATFORM: &str = crate::platform::QUANX;

/// Environment variable holding the path of the source catalog.
pub const SOURCES_ENV: &str = "CONF_MERGER_SOURCES";

/// Platform identifier pattern.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PLATFORM_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

/// Validate a platform identifier.
///
/// Only the shape is checked; unknown platforms are valid and fall back to
/// the default platform during merging.
///
/// # Examples
/// ```
/// use conf_merger::config::validate_platform_id;
///
/// assert!(validate_platform_id("quanx").is_ok());
/// assert!(validate_platform_id("surge-5").is_ok());
/// assert!(validate_platform_id("../etc").is_err());
/// assert!(validate_platform_id("").is_err());
/// ```
pub fn validate_platform_id(platform: &str) -> Result<()> {
    if PLATFORM_ID_PATTERN.is_match(platform) {
        Ok(())
    } else {
        Err(MergerError::InvalidPlatform(platform.to_string()))
    }
}

/// Whether a document location is a remote URL rather than a local path.
///
/// ```
/// use conf_merger::config::is_remote;
///
/// assert!(is_remote("https://example.com/a.conf"));
/// assert!(is_remote("HTTP://example.com/a.conf"));
/// assert!(!is_remote("./configs/a.conf"));
/// ```
#[must_use]
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
