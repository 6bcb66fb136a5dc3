//! Section splitter that partitions raw text into head and named blocks.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Block, SplitDocument};

/// A line that is entirely a section title: `[Name]`, surrounding whitespace allowed.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[([^\]]+)\]\s*$").expect("valid regex"));

/// Check whether a single line is a section title.
///
/// # Examples
/// ```
/// use conf_merger::splitting::is_section_title;
///
/// assert!(is_section_title("[General]"));
/// assert!(is_section_title("  [remote filter]  "));
/// assert!(!is_section_title("[general] # trailing"));
/// assert!(!is_section_title("host = [::1]"));
/// ```
#[must_use]
pub fn is_section_title(line: &str) -> bool {
    SECTION_TITLE_PATTERN.is_match(line)
}

/// Extract the normalized section name from a title line.
fn section_name(line: &str) -> Option<String> {
    SECTION_TITLE_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
}

/// Splitter state for the linear scan.
enum State {
    InHead(Vec<String>),
    InBlock(Block),
}

/// Partitions configuration text into a head and ordered named blocks.
///
/// The scan is a single linear pass. A line that does not match the title
/// pattern is body text, whatever it looks like, so the splitter never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionSplitter;

impl SectionSplitter {
    /// Create a new splitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into head and blocks.
    ///
    /// Accepts `\n` and `\r\n` line endings. The head holds every line before
    /// the first title line (by position) and is `None` when there are none.
    pub fn split(&self, text: &str) -> SplitDocument {
        let mut document = SplitDocument::default();
        let mut state = State::InHead(Vec::new());

        for line in text.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            let Some(name) = section_name(line) else {
                match &mut state {
                    State::InHead(head) => head.push(line.to_string()),
                    State::InBlock(block) => block.lines.push(line.to_string()),
                }
                continue;
            };

            let next = State::InBlock(Block::new(name, line, Vec::<String>::new()));
            match std::mem::replace(&mut state, next) {
                State::InHead(head) => {
                    if !head.is_empty() {
                        document.head = Some(head);
                    }
                }
                State::InBlock(block) => document.blocks.push(block),
            }
        }

        match state {
            State::InHead(head) => {
                if !head.is_empty() {
                    document.head = Some(head);
                }
            }
            State::InBlock(block) => document.blocks.push(block),
        }

        tracing::trace!(
            blocks = document.blocks.len(),
            has_head = document.head.is_some(),
            "Split document"
        );

        document
    }
}
