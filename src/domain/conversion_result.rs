use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ConversionRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub success: bool,
    pub file_name: String,
    pub client: String,
    pub category: String,
    pub converted_text: String,
    pub method_label: String,
    pub converted_at_utc: DateTime<Utc>,
    pub converted_byte_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn converted(
        request: &ConversionRequest,
        converted_text: String,
        method_label: &str,
        converted_at_utc: DateTime<Utc>,
    ) -> Self {
        Self {
            success: true,
            file_name: request.file_name.clone(),
            client: request.client.clone(),
            category: request.category.clone(),
            converted_byte_size: converted_text.len(),
            converted_text,
            method_label: method_label.to_string(),
            converted_at_utc,
            error: None,
        }
    }

    /// Result for a request that never reached an extractor, e.g. the blob could not be read.
    pub fn failed(
        request: &ConversionRequest,
        error: impl Into<String>,
        converted_at_utc: DateTime<Utc>,
    ) -> Self {
        Self {
            success: false,
            file_name: request.file_name.clone(),
            client: request.client.clone(),
            category: request.category.clone(),
            converted_text: String::new(),
            method_label: String::new(),
            converted_at_utc,
            converted_byte_size: 0,
            error: Some(error.into()),
        }
    }
}
