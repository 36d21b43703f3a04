use chrono::{DateTime, Utc};

use super::{ConversionRequest, ExtractedFragment, ExtractedSection};

pub const DOCUMENT_HEADER: &str = "=== DOCUMENT ANALYSIS ===";
pub const METADATA_HEADER: &str = "=== METADATA ===";
pub const UNSUPPORTED_SECTION: &str = "UNSUPPORTED FILE TYPE";
pub const ERROR_SECTION: &str = "CONVERSION ERROR";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Values rendered into the trailing `=== METADATA ===` block.
#[derive(Debug, Clone)]
pub struct MetadataFooter<'a> {
    pub byte_size: usize,
    pub mime_type: &'a str,
    pub method_label: &'a str,
    pub processed_at: DateTime<Utc>,
}

/// Assembles the converted document: header, sections separated by blank lines, footer.
///
/// Sections are rendered as `=== TITLE ===` followed by one line per fragment. Table
/// shapes are numbered in the order they appear within a section.
#[derive(Debug)]
pub struct TextSectionBuilder {
    buffer: String,
}

impl TextSectionBuilder {
    pub fn new(request: &ConversionRequest, uploaded_at: DateTime<Utc>) -> Self {
        let buffer = format!(
            "{DOCUMENT_HEADER}\nFile: {}\nClient: {}\nCategory: {}\nUpload Date: {}\n",
            request.file_name,
            request.client,
            request.category,
            format_timestamp(uploaded_at)
        );
        Self { buffer }
    }

    pub fn section(&mut self, section: &ExtractedSection) -> &mut Self {
        self.open_section(&section.title);

        let mut table_number = 0;
        for fragment in &section.fragments {
            match fragment {
                ExtractedFragment::TextLine(content) => {
                    self.buffer.push_str(content);
                }
                ExtractedFragment::TableShape { rows, columns } => {
                    table_number += 1;
                    self.buffer.push_str(&format!(
                        "Table {table_number}: {rows} rows x {columns} columns"
                    ));
                }
                ExtractedFragment::TableCell {
                    row,
                    column,
                    content,
                } => {
                    self.buffer.push_str(&format!(
                        "Row {}, Col {}: {}",
                        row + 1,
                        column + 1,
                        content
                    ));
                }
            }
            self.buffer.push('\n');
        }
        self
    }

    pub fn unsupported_section(&mut self, mime_type: &str) -> &mut Self {
        self.open_section(UNSUPPORTED_SECTION);
        self.buffer
            .push_str(&format!("MIME type '{mime_type}' is not supported.\n"));
        self.buffer
            .push_str("Supported types: PDF, Word, Excel, PNG, JPEG, TIFF\n");
        self
    }

    pub fn error_section(&mut self, message: &str) -> &mut Self {
        self.open_section(ERROR_SECTION);
        self.buffer.push_str(&format!("Error: {message}\n"));
        self
    }

    pub fn finish(mut self, footer: &MetadataFooter<'_>) -> String {
        self.buffer.push_str(&format!(
            "\n{METADATA_HEADER}\nFile Size: {} bytes\nMIME Type: {}\nProcessing Method: {}\nProcessed: {}",
            format_thousands(footer.byte_size),
            footer.mime_type,
            footer.method_label,
            format_timestamp(footer.processed_at)
        ));
        self.buffer
    }

    fn open_section(&mut self, title: &str) {
        self.buffer.push_str(&format!("\n=== {title} ===\n"));
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    format!("{} UTC", at.format(TIMESTAMP_FORMAT))
}

pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn request() -> ConversionRequest {
        ConversionRequest {
            blob_location: "acme/plans/site.pdf".to_string(),
            file_name: "site.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            client: "acme".to_string(),
            category: "plans".to_string(),
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    fn footer() -> MetadataFooter<'static> {
        MetadataFooter {
            byte_size: 1_234_567,
            mime_type: "application/pdf",
            method_label: "Layout+OCR analysis",
            processed_at: at(),
        }
    }

    #[test]
    fn thousands_separator_groups_by_three() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn timestamp_uses_fixed_utc_format() {
        assert_eq!(format_timestamp(at()), "2024-03-05 14:07:09 UTC");
    }

    #[test]
    fn envelope_wraps_sections_with_header_and_footer() {
        let mut section = ExtractedSection::new("PDF CONTENT");
        section.push_line("Pages: 1");

        let mut builder = TextSectionBuilder::new(&request(), at());
        builder.section(&section);
        let text = builder.finish(&footer());

        let expected = "=== DOCUMENT ANALYSIS ===\n\
            File: site.pdf\n\
            Client: acme\n\
            Category: plans\n\
            Upload Date: 2024-03-05 14:07:09 UTC\n\
            \n\
            === PDF CONTENT ===\n\
            Pages: 1\n\
            \n\
            === METADATA ===\n\
            File Size: 1,234,567 bytes\n\
            MIME Type: application/pdf\n\
            Processing Method: Layout+OCR analysis\n\
            Processed: 2024-03-05 14:07:09 UTC";
        assert_eq!(text, expected);
    }

    #[test]
    fn table_shapes_are_numbered_within_a_section() {
        let mut section = ExtractedSection::new("TABLES");
        section.push(ExtractedFragment::TableShape {
            rows: 1,
            columns: 2,
        });
        section.push(ExtractedFragment::TableCell {
            row: 0,
            column: 1,
            content: "Qty".to_string(),
        });
        section.push(ExtractedFragment::TableShape {
            rows: 3,
            columns: 1,
        });

        let mut builder = TextSectionBuilder::new(&request(), at());
        builder.section(&section);
        let text = builder.finish(&footer());

        assert!(text.contains(
            "=== TABLES ===\nTable 1: 1 rows x 2 columns\nRow 1, Col 2: Qty\nTable 2: 3 rows x 1 columns\n"
        ));
    }

    #[test]
    fn unsupported_section_names_the_mime_type() {
        let mut builder = TextSectionBuilder::new(&request(), at());
        builder.unsupported_section("text/plain");
        let text = builder.finish(&footer());

        assert!(text.contains(
            "Upload Date: 2024-03-05 14:07:09 UTC\n\n=== UNSUPPORTED FILE TYPE ===\nMIME type 'text/plain' is not supported.\nSupported types: PDF, Word, Excel, PNG, JPEG, TIFF\n\n=== METADATA ===\n"
        ));
    }

    #[test]
    fn error_section_embeds_message() {
        let mut builder = TextSectionBuilder::new(&request(), at());
        builder.error_section("corrupt file");
        let text = builder.finish(&footer());

        assert!(text.contains("\n=== CONVERSION ERROR ===\nError: corrupt file\n"));
        assert!(text.contains(METADATA_HEADER));
    }
}
