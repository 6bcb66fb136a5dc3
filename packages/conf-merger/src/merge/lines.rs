//! Line classification used by the merge policies.

/// Classification of one body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only.
    Blank,

    /// First non-space character is `#`.
    Comment,

    /// Contains `=` after at least one character; carries the trimmed key.
    KeyValue(&'a str),

    /// Anything else (directives, bare words).
    Other,
}

impl<'a> LineKind<'a> {
    /// Classify a line.
    ///
    /// Comment detection wins over key detection, so `#key=value` is a comment.
    ///
    /// ```
    /// use conf_merger::merge::LineKind;
    ///
    /// assert_eq!(LineKind::of("  "), LineKind::Blank);
    /// assert_eq!(LineKind::of(" # note"), LineKind::Comment);
    /// assert_eq!(LineKind::of("dns_exclusion_list = *.lan"), LineKind::KeyValue("dns_exclusion_list"));
    /// assert_eq!(LineKind::of("=orphan"), LineKind::Other);
    /// ```
    #[must_use]
    pub fn of(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if trimmed.starts_with('#') {
            return LineKind::Comment;
        }
        match line.find('=') {
            Some(idx) if idx > 0 => LineKind::KeyValue(line[..idx].trim()),
            _ => LineKind::Other,
        }
    }

    /// Key of a key-value line.
    #[must_use]
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            LineKind::KeyValue(key) => Some(key),
            _ => None,
        }
    }

    /// Blank or comment: lines that carry no setting.
    #[must_use]
    pub fn is_boilerplate(&self) -> bool {
        matches!(self, LineKind::Blank | LineKind::Comment)
    }
}

/// Identity of a comma-separated directive line: the text before the first comma, trimmed.
///
/// Blank and comment lines have no identity.
///
/// ```
/// use conf_merger::merge::url_identity;
///
/// assert_eq!(url_identity(" https://a.com/x.plugin, enabled=true"), Some("https://a.com/x.plugin"));
/// assert_eq!(url_identity("https://b.com/y.plugin"), Some("https://b.com/y.plugin"));
/// assert_eq!(url_identity("# https://a.com/x.plugin"), None);
/// assert_eq!(url_identity("   "), None);
/// ```
#[must_use]
pub fn url_identity(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    trimmed.split(',').next().map(str::trim)
}
