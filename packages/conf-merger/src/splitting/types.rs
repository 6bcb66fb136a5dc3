//! Types produced by the section splitter.

/// One section's raw extent within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Lowercased, trimmed section identifier (e.g. `"remote filter"`).
    pub name: String,

    /// The title line exactly as written in the source (e.g. `"[Remote Filter]"`).
    pub title: String,

    /// Raw lines between this title and the next one.
    pub lines: Vec<String>,
}

impl Block {
    /// Create a new block.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw body text, newline-joined.
    #[must_use]
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }

    /// Body lines with leading and trailing empty lines stripped.
    ///
    /// Whitespace-only lines are kept; only lines with no characters at all
    /// count as padding. An empty or all-padding body yields no lines.
    #[must_use]
    pub fn body_lines(&self) -> Vec<&str> {
        let start = self.lines.iter().position(|l| !l.is_empty());
        let end = self.lines.iter().rposition(|l| !l.is_empty());

        match (start, end) {
            (Some(start), Some(end)) => self.lines[start..=end]
                .iter()
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A document partitioned into head and named blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitDocument {
    /// Lines preceding the first title line. `None` when the document opens
    /// with a title (or is empty).
    pub head: Option<Vec<String>>,

    /// Named blocks in document order. Duplicate names are kept as-is.
    pub blocks: Vec<Block>,
}

impl SplitDocument {
    /// The head region as text.
    #[must_use]
    pub fn head_text(&self) -> Option<String> {
        self.head.as_ref().map(|lines| lines.join("\n"))
    }

    /// First block carrying `name`, if any.
    #[must_use]
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }

    /// Section names in order of first appearance.
    #[must_use]
    pub fn section_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for block in &self.blocks {
            if !names.contains(&block.name.as_str()) {
                names.push(&block.name);
            }
        }
        names
    }

    /// Names that occur on more than one block.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates: Vec<&str> = Vec::new();
        for block in &self.blocks {
            let name = block.name.as_str();
            if seen.contains(&name) {
                if !duplicates.contains(&name) {
                    duplicates.push(name);
                }
            } else {
                seen.push(name);
            }
        }
        duplicates
    }

    /// Reassemble the document from head and blocks.
    ///
    /// Reproduces the split input with `\n` line endings and no trailing
    /// newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        if let Some(head) = &self.head {
            lines.extend(head.iter().map(String::as_str));
        }
        for block in &self.blocks {
            lines.push(&block.title);
            lines.extend(block.lines.iter().map(String::as_str));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_lines_strips_empty_padding() {
        let block = Block::new("general", "[General]", ["", "a=1", "", "#c", "", ""]);
        assert_eq!(block.body_lines(), vec!["a=1", "", "#c"]);
    }

    #[test]
    fn test_body_lines_keeps_whitespace_only_lines() {
        let block = Block::new("general", "[General]", ["  ", "a=1", "\t"]);
        assert_eq!(block.body_lines(), vec!["  ", "a=1", "\t"]);
    }

    #[test]
    fn test_body_lines_all_empty() {
        let block = Block::new("dns", "[dns]", ["", ""]);
        assert!(block.body_lines().is_empty());

        let block = Block::new("dns", "[dns]", Vec::<String>::new());
        assert!(block.body_lines().is_empty());
    }

    #[test]
    fn test_body_joins_lines() {
        let block = Block::new("dns", "[dns]", ["server=1.1.1.1", "server=8.8.8.8"]);
        assert_eq!(block.body(), "server=1.1.1.1\nserver=8.8.8.8");
    }

    #[test]
    fn test_section_names_and_duplicates() {
        let doc = SplitDocument {
            head: None,
            blocks: vec![
                Block::new("general", "[general]", ["a=1"]),
                Block::new("dns", "[dns]", Vec::<String>::new()),
                Block::new("general", "[General]", ["b=2"]),
            ],
        };

        assert_eq!(doc.section_names(), vec!["general", "dns"]);
        assert_eq!(doc.duplicate_names(), vec!["general"]);
        assert_eq!(doc.block("general").map(|b| b.title.as_str()), Some("[general]"));
        assert!(doc.block("mitm").is_none());
    }
}
