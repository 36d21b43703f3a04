/// Intermediate unit emitted by an extractor before it is rendered into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedFragment {
    TextLine(String),
    /// Zero-based indices; rendered 1-based.
    TableCell {
        row: usize,
        column: usize,
        content: String,
    },
    TableShape {
        rows: usize,
        columns: usize,
    },
}

impl ExtractedFragment {
    pub fn line(content: impl Into<String>) -> Self {
        Self::TextLine(content.into())
    }

    pub fn separator(label: impl std::fmt::Display) -> Self {
        Self::TextLine(format!("--- {label} ---"))
    }
}

/// A titled group of fragments, rendered as `=== TITLE ===` followed by its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    pub title: String,
    pub fragments: Vec<ExtractedFragment>,
}

impl ExtractedSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fragments: Vec::new(),
        }
    }

    pub fn push(&mut self, fragment: ExtractedFragment) {
        self.fragments.push(fragment);
    }

    pub fn push_line(&mut self, content: impl Into<String>) {
        self.fragments.push(ExtractedFragment::line(content));
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
