mod excel_extractor;
mod image_extractor;
mod pdf_extractor;
mod word_extractor;

pub use excel_extractor::{ExcelExtractor, WorksheetRange, cell_address, render_workbook};
pub use image_extractor::{ImageExtractor, render_read};
pub use pdf_extractor::{PdfExtractor, render_layout};
pub use word_extractor::{WordContent, WordExtractor, parse_document_xml, render_word};
