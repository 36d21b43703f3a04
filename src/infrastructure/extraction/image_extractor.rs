use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{DocumentAnalyzer, ExtractionError, Extractor};
use crate::domain::{AnalysisMode, AnalyzedDocument, ExtractedSection};

use super::pdf_extractor::push_page_lines;

pub struct ImageExtractor {
    analyzer: Arc<dyn DocumentAnalyzer>,
}

impl ImageExtractor {
    pub fn new(analyzer: Arc<dyn DocumentAnalyzer>) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl Extractor for ImageExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: Bytes) -> Result<Vec<ExtractedSection>, ExtractionError> {
        let document = self.analyzer.analyze(&data, AnalysisMode::Read).await?;

        let line_count: usize = document.pages.iter().map(|p| p.lines.len()).sum();
        tracing::info!(lines = line_count, "Image OCR complete");

        Ok(render_read(&document))
    }
}

pub fn render_read(document: &AnalyzedDocument) -> Vec<ExtractedSection> {
    let mut content = ExtractedSection::new("IMAGE OCR CONTENT");
    push_page_lines(&mut content, &document.sorted_pages());

    if content.is_empty() {
        content.push_line("No text recognized.");
    }

    // Drawing analysis is only announced; nothing inspects geometry yet.
    let mut drawing = ExtractedSection::new("DRAWING ANALYSIS");
    drawing.push_line("Drawing analysis (lines, symbols, dimensions, scale) is not implemented.");

    vec![content, drawing]
}
