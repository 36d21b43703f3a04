#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use sitescribe::application::ports::{
    AnalysisError, Clock, DocumentAnalyzer, ExtractionError, Extractor,
};
use sitescribe::domain::{
    AnalysisMode, AnalyzedDocument, AnalyzedPage, ConversionRequest, ExtractedSection,
};

pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn request(file_name: &str, mime_type: &str) -> ConversionRequest {
    ConversionRequest {
        blob_location: format!("acme/plans/{file_name}"),
        file_name: file_name.to_string(),
        mime_type: mime_type.to_string(),
        client: "acme".to_string(),
        category: "plans".to_string(),
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_noon() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns a canned document and records the modes it was called with.
pub struct FakeAnalyzer {
    document: AnalyzedDocument,
    pub modes: Mutex<Vec<AnalysisMode>>,
}

impl FakeAnalyzer {
    pub fn new(document: AnalyzedDocument) -> Self {
        Self {
            document,
            modes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_pages(pages: &[&[&str]]) -> Self {
        let pages = pages
            .iter()
            .enumerate()
            .map(|(i, lines)| AnalyzedPage {
                page_number: i as u32 + 1,
                lines: lines.iter().map(|l| l.to_string()).collect(),
            })
            .collect();
        Self::new(AnalyzedDocument {
            pages,
            tables: vec![],
        })
    }

    pub fn modes(&self) -> Vec<AnalysisMode> {
        self.modes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocumentAnalyzer for FakeAnalyzer {
    async fn analyze(
        &self,
        _data: &[u8],
        mode: AnalysisMode,
    ) -> Result<AnalyzedDocument, AnalysisError> {
        self.modes.lock().unwrap().push(mode);
        Ok(self.document.clone())
    }
}

pub struct FailingAnalyzer;

#[async_trait::async_trait]
impl DocumentAnalyzer for FailingAnalyzer {
    async fn analyze(
        &self,
        _data: &[u8],
        _mode: AnalysisMode,
    ) -> Result<AnalyzedDocument, AnalysisError> {
        Err(AnalysisError::ServiceError {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}

#[derive(Default)]
pub struct CountingExtractor {
    calls: AtomicUsize,
}

impl CountingExtractor {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Extractor for CountingExtractor {
    async fn extract(&self, _data: Bytes) -> Result<Vec<ExtractedSection>, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut section = ExtractedSection::new("COUNTED");
        section.push_line("extracted");
        Ok(vec![section])
    }
}

fn zip_package(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in parts {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }

    writer.finish().unwrap().into_inner()
}

/// Minimal `.docx`: one `w:p` per paragraph string, then the given table rows.
pub fn docx(paragraphs: &[&str], table: &[&[&str]]) -> Vec<u8> {
    let mut body = String::new();
    for paragraph in paragraphs {
        body.push_str(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{paragraph}</w:t></w:r></w:p>"#
        ));
    }
    if !table.is_empty() {
        body.push_str("<w:tbl>");
        for row in table {
            body.push_str("<w:tr>");
            for cell in *row {
                body.push_str(&format!(
                    "<w:tc><w:p><w:r><w:t>{cell}</w:t></w:r></w:p></w:tc>"
                ));
            }
            body.push_str("</w:tr>");
        }
        body.push_str("</w:tbl>");
    }

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    zip_package(&[
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#.to_string(),
        ),
        ("word/document.xml", document),
    ])
}

/// Minimal single-sheet `.xlsx` using inline strings. Cells are `(reference, value)`;
/// values that parse as numbers are written as numeric cells.
pub fn xlsx(sheet_name: &str, rows: &[&[(&str, &str)]]) -> Vec<u8> {
    workbook(sheet_name, rows, None)
}

/// Like [`xlsx`], with a second sheet listed in the workbook whose part is missing.
pub fn xlsx_with_missing_sheet(
    sheet_name: &str,
    rows: &[&[(&str, &str)]],
    missing_sheet: &str,
) -> Vec<u8> {
    workbook(sheet_name, rows, Some(missing_sheet))
}

fn workbook(sheet_name: &str, rows: &[&[(&str, &str)]], missing_sheet: Option<&str>) -> Vec<u8> {
    let mut sheet_data = String::new();
    for (i, row) in rows.iter().enumerate() {
        sheet_data.push_str(&format!(r#"<row r="{}">"#, i + 1));
        for (reference, value) in *row {
            if value.parse::<f64>().is_ok() {
                sheet_data.push_str(&format!(r#"<c r="{reference}"><v>{value}</v></c>"#));
            } else {
                sheet_data.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t>{value}</t></is></c>"#
                ));
            }
        }
        sheet_data.push_str("</row>");
    }

    let extra_sheet = missing_sheet
        .map(|name| format!(r#"<sheet name="{name}" sheetId="2" r:id="rId2"/>"#))
        .unwrap_or_default();
    let extra_rel = if missing_sheet.is_some() {
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/>"#
    } else {
        ""
    };

    zip_package(&[
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#.to_string(),
        ),
        (
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#.to_string(),
        ),
        (
            "xl/workbook.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{sheet_name}" sheetId="1" r:id="rId1"/>{extra_sheet}</sheets></workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>{extra_rel}</Relationships>"#
            ),
        ),
        (
            "xl/worksheets/sheet1.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{sheet_data}</sheetData></worksheet>"#
            ),
        ),
    ])
}

/// Drops the two timestamp lines so bodies from different runs can be compared.
pub fn without_timestamps(text: &str) -> String {
    text.lines()
        .filter(|l| !l.starts_with("Upload Date:") && !l.starts_with("Processed:"))
        .collect::<Vec<_>>()
        .join("\n")
}
