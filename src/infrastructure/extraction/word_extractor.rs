use std::io::{Cursor, Read};

use async_trait::async_trait;
use bytes::Bytes;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{ExtractionError, Extractor};
use crate::domain::{ExtractedFragment, ExtractedSection};

const DOCUMENT_PART: &str = "word/document.xml";
const MC_FALLBACK: &[u8] = b"mc:Fallback";

/// Reads `.docx` packages. Legacy binary `.doc` files are not zip archives and fail
/// with a package error.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordExtractor;

#[async_trait]
impl Extractor for WordExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: Bytes) -> Result<Vec<ExtractedSection>, ExtractionError> {
        let content = tokio::task::spawn_blocking(move || {
            let xml = read_document_part(&data)?;
            parse_document_xml(&xml)
        })
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))??;

        tracing::info!(
            paragraphs = content.paragraphs.len(),
            tables = content.tables.len(),
            "Word document parsed"
        );

        Ok(render_word(&content))
    }
}

/// Body paragraphs and tables in document order. Paragraph text is kept untrimmed;
/// table cells are trimmed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordContent {
    pub paragraphs: Vec<String>,
    pub tables: Vec<Vec<Vec<String>>>,
}

pub fn render_word(content: &WordContent) -> Vec<ExtractedSection> {
    let mut body = ExtractedSection::new("WORD DOCUMENT CONTENT");
    for paragraph in &content.paragraphs {
        let trimmed = paragraph.trim();
        if !trimmed.is_empty() {
            body.push_line(trimmed);
        }
    }

    let mut sections = vec![body];

    if !content.tables.is_empty() {
        let mut tables = ExtractedSection::new("TABLES");
        for table in &content.tables {
            tables.push(ExtractedFragment::TableShape {
                rows: table.len(),
                columns: table.iter().map(Vec::len).max().unwrap_or(0),
            });
            for row in table {
                tables.push_line(row.join(" | "));
            }
        }
        sections.push(tables);
    }

    sections
}

fn read_document_part(data: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractionError::Package(format!("not a Word package: {e}")))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Package(format!("{DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Package(format!("{DOCUMENT_PART}: {e}")))?;

    Ok(xml)
}

pub fn parse_document_xml(xml: &str) -> Result<WordContent, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut state = DocumentState::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            ExtractionError::Parse(format!(
                "{DOCUMENT_PART} at byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        // `mc:Fallback` repeats the `mc:Choice` content (usually a VML copy of a text box).
        if state.fallback_depth > 0 {
            match event {
                Event::Start(e) if e.name().as_ref() == MC_FALLBACK => state.fallback_depth += 1,
                Event::End(e) if e.name().as_ref() == MC_FALLBACK => state.fallback_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(e) => state.start(e.name().as_ref()),
            Event::Empty(e) => state.empty(e.name().as_ref()),
            Event::End(e) => state.end(e.name().as_ref()),
            Event::Text(e) if state.in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractionError::Parse(e.to_string()))?;
                state.push_text(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(state.content)
}

/// Text inside nested tables is folded into the enclosing top-level cell.
///
/// Body paragraphs reserve their slot in `content.paragraphs` when they open, so a text
/// box paragraph nested inside a run lands after its anchor paragraph and the anchor
/// keeps collecting text once the box closes.
#[derive(Default)]
struct DocumentState {
    content: WordContent,
    table_depth: usize,
    table: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
    open_paragraphs: Vec<usize>,
    run_depth: usize,
    in_text: bool,
    fallback_depth: usize,
}

impl DocumentState {
    fn start(&mut self, name: &[u8]) {
        match name {
            MC_FALLBACK => self.fallback_depth = 1,
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table.clear();
                }
            }
            b"w:tr" if self.table_depth == 1 => self.row.clear(),
            b"w:tc" if self.table_depth == 1 => self.cell.clear(),
            b"w:p" if self.table_depth == 0 => {
                self.open_paragraphs.push(self.content.paragraphs.len());
                self.content.paragraphs.push(String::new());
            }
            b"w:p" => {
                if !self.cell.is_empty() {
                    self.cell.push(' ');
                }
            }
            b"w:r" => self.run_depth += 1,
            b"w:t" => self.in_text = true,
            _ => {}
        }
    }

    fn empty(&mut self, name: &[u8]) {
        match name {
            b"w:p" if self.table_depth == 0 => self.content.paragraphs.push(String::new()),
            b"w:tc" if self.table_depth == 1 => self.row.push(String::new()),
            b"w:tab" if self.run_depth > 0 => self.push_text("\t"),
            b"w:br" | b"w:cr" if self.run_depth > 0 => self.push_text(" "),
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:t" => self.in_text = false,
            b"w:r" => self.run_depth = self.run_depth.saturating_sub(1),
            b"w:p" if self.table_depth == 0 => {
                self.open_paragraphs.pop();
            }
            b"w:tc" if self.table_depth == 1 => {
                let cell = std::mem::take(&mut self.cell);
                self.row.push(cell.trim().to_string());
            }
            b"w:tr" if self.table_depth == 1 => {
                let row = std::mem::take(&mut self.row);
                self.table.push(row);
            }
            b"w:tbl" => {
                if self.table_depth == 1 {
                    let table = std::mem::take(&mut self.table);
                    self.content.tables.push(table);
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.table_depth > 0 {
            self.cell.push_str(text);
        } else if let Some(&index) = self.open_paragraphs.last() {
            self.content.paragraphs[index].push_str(text);
        }
    }
}
