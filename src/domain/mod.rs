mod analyzed_document;
mod blob_location;
pub mod construction_heuristics;
mod conversion_request;
mod conversion_result;
mod document_kind;
mod extracted_fragment;
mod text_section_builder;

pub use analyzed_document::{
    AnalysisMode, AnalyzedCell, AnalyzedDocument, AnalyzedPage, AnalyzedTable,
};
pub use blob_location::BlobLocation;
pub use conversion_request::{ConversionRequest, ConversionRequestError};
pub use conversion_result::ConversionResult;
pub use document_kind::{DocumentKind, UNKNOWN_METHOD_LABEL};
pub use extracted_fragment::{ExtractedFragment, ExtractedSection};
pub use text_section_builder::{
    DOCUMENT_HEADER, ERROR_SECTION, METADATA_HEADER, MetadataFooter, TextSectionBuilder,
    UNSUPPORTED_SECTION, format_thousands, format_timestamp,
};
