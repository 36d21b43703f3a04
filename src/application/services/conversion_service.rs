use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{Clock, Extractor};
use crate::domain::{
    ConversionRequest, ConversionRequestError, ConversionResult, DocumentKind, MetadataFooter,
    TextSectionBuilder, UNKNOWN_METHOD_LABEL,
};

/// Dispatches a document to the extractor registered for its MIME type and wraps the
/// outcome in the standard envelope.
pub struct ConversionService {
    extractors: HashMap<DocumentKind, Arc<dyn Extractor>>,
    clock: Arc<dyn Clock>,
}

impl ConversionService {
    pub fn new(extractors: Vec<(DocumentKind, Arc<dyn Extractor>)>, clock: Arc<dyn Clock>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
            clock,
        }
    }

    /// Fails only when the request itself is malformed. Extraction failures are rendered
    /// into the text as a `CONVERSION ERROR` section and the result still succeeds.
    #[tracing::instrument(
        skip(self, data, request),
        fields(
            file_name = %request.file_name,
            mime_type = %request.mime_type,
            bytes = data.len()
        )
    )]
    pub async fn convert(
        &self,
        data: Bytes,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        request.validate()?;

        let uploaded_at = self.clock.now();
        let mime_type = request.mime_type.trim().to_lowercase();
        let byte_size = data.len();
        let mut builder = TextSectionBuilder::new(request, uploaded_at);

        let method_label = match DocumentKind::from_mime(&mime_type) {
            Some(kind) => {
                self.extract_into(kind, data, &mut builder).await;
                kind.method_label()
            }
            None => {
                tracing::warn!(mime_type = %mime_type, "Unsupported file type");
                builder.unsupported_section(&mime_type);
                UNKNOWN_METHOD_LABEL
            }
        };

        let processed_at = self.clock.now();
        let converted_text = builder.finish(&MetadataFooter {
            byte_size,
            mime_type: &mime_type,
            method_label,
            processed_at,
        });

        tracing::info!(
            method = method_label,
            converted_bytes = converted_text.len(),
            "Document converted"
        );

        Ok(ConversionResult::converted(
            request,
            converted_text,
            method_label,
            processed_at,
        ))
    }

    async fn extract_into(&self, kind: DocumentKind, data: Bytes, builder: &mut TextSectionBuilder) {
        let Some(extractor) = self.extractors.get(&kind) else {
            tracing::error!(kind = %kind, "No extractor registered");
            builder.error_section(&format!("no extractor registered for {kind} documents"));
            return;
        };

        match extractor.extract(data).await {
            Ok(sections) => {
                tracing::debug!(kind = %kind, sections = sections.len(), "Extraction complete");
                for section in &sections {
                    builder.section(section);
                }
            }
            Err(e) => {
                tracing::warn!(kind = %kind, error = %e, "Extraction failed");
                builder.error_section(&e.to_string());
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ConversionRequestError),
}
