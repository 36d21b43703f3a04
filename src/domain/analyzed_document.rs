/// Output of the layout/OCR analysis service, independent of the vendor wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalyzedDocument {
    pub pages: Vec<AnalyzedPage>,
    pub tables: Vec<AnalyzedTable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedPage {
    pub page_number: u32,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedTable {
    pub row_count: usize,
    pub column_count: usize,
    pub cells: Vec<AnalyzedCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedCell {
    pub row: usize,
    pub column: usize,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisMode {
    Layout,
    Read,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Read => "read",
        }
    }
}

impl AnalyzedDocument {
    /// Pages in ascending page-number order, whatever order the service returned them in.
    pub fn sorted_pages(&self) -> Vec<&AnalyzedPage> {
        let mut pages: Vec<&AnalyzedPage> = self.pages.iter().collect();
        pages.sort_by_key(|p| p.page_number);
        pages
    }
}
