use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{DocumentAnalyzer, ExtractionError, Extractor};
use crate::domain::construction_heuristics::dimension_lines;
use crate::domain::{
    AnalysisMode, AnalyzedDocument, AnalyzedPage, ExtractedFragment, ExtractedSection,
};

pub struct PdfExtractor {
    analyzer: Arc<dyn DocumentAnalyzer>,
}

impl PdfExtractor {
    pub fn new(analyzer: Arc<dyn DocumentAnalyzer>) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: Bytes) -> Result<Vec<ExtractedSection>, ExtractionError> {
        let document = self.analyzer.analyze(&data, AnalysisMode::Layout).await?;

        tracing::info!(
            pages = document.pages.len(),
            tables = document.tables.len(),
            "PDF layout analysis complete"
        );

        Ok(render_layout(&document))
    }
}

/// Page text, then tables, then per-page dimension lines.
pub fn render_layout(document: &AnalyzedDocument) -> Vec<ExtractedSection> {
    let pages = document.sorted_pages();

    let mut content = ExtractedSection::new("PDF CONTENT");
    content.push_line(format!("Pages: {}", pages.len()));
    push_page_lines(&mut content, &pages);

    let mut sections = vec![content];

    if !document.tables.is_empty() {
        let mut tables = ExtractedSection::new("TABLES");
        for table in &document.tables {
            tables.push(ExtractedFragment::TableShape {
                rows: table.row_count,
                columns: table.column_count,
            });
            for cell in &table.cells {
                tables.push(ExtractedFragment::TableCell {
                    row: cell.row,
                    column: cell.column,
                    content: cell.content.clone(),
                });
            }
        }
        sections.push(tables);
    }

    sections.push(construction_analysis(&pages));
    sections
}

pub(super) fn push_page_lines(section: &mut ExtractedSection, pages: &[&AnalyzedPage]) {
    for page in pages {
        section.push(ExtractedFragment::separator(format!(
            "Page {}",
            page.page_number
        )));
        for line in &page.lines {
            section.push_line(line.as_str());
        }
    }
}

fn construction_analysis(pages: &[&AnalyzedPage]) -> ExtractedSection {
    let mut section = ExtractedSection::new("CONSTRUCTION ANALYSIS");

    for page in pages {
        let matches = dimension_lines(&page.lines);
        if matches.is_empty() {
            continue;
        }
        section.push_line(format!("Page {} dimensions:", page.page_number));
        for line in matches {
            section.push_line(format!("  - {line}"));
        }
    }

    if section.is_empty() {
        section.push_line("No dimension markers detected.");
    }

    section
}
