use chrono::{TimeZone, Utc};

use sitescribe::domain::{
    ConversionRequest, ConversionRequestError, ConversionResult, DocumentKind,
    UNKNOWN_METHOD_LABEL,
};

#[test]
fn given_supported_mime_types_when_classifying_then_each_maps_to_its_kind() {
    let cases = [
        ("application/pdf", DocumentKind::Pdf),
        (
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            DocumentKind::Word,
        ),
        ("application/msword", DocumentKind::Word),
        (
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            DocumentKind::Excel,
        ),
        ("application/vnd.ms-excel", DocumentKind::Excel),
        ("image/png", DocumentKind::Image),
        ("image/jpeg", DocumentKind::Image),
        ("image/tiff", DocumentKind::Image),
    ];

    for (mime, kind) in cases {
        assert_eq!(DocumentKind::from_mime(mime), Some(kind), "{mime}");
    }
}

#[test]
fn given_mime_with_parameters_and_mixed_case_when_classifying_then_essence_is_matched() {
    assert_eq!(
        DocumentKind::from_mime(" Application/PDF; charset=binary"),
        Some(DocumentKind::Pdf)
    );
}

#[test]
fn given_unsupported_mime_types_when_classifying_then_none() {
    assert_eq!(DocumentKind::from_mime("text/plain"), None);
    assert_eq!(DocumentKind::from_mime("image/gif"), None);
    assert_eq!(DocumentKind::from_mime(""), None);
}

#[test]
fn given_each_kind_when_labelling_then_method_labels_are_distinct() {
    assert_eq!(DocumentKind::Pdf.method_label(), "Layout+OCR analysis");
    assert_eq!(DocumentKind::Word.method_label(), "Structured document parsing");
    assert_eq!(DocumentKind::Excel.method_label(), "Spreadsheet cell/range parsing");
    assert_eq!(DocumentKind::Image.method_label(), "OCR text extraction");
    assert_eq!(UNKNOWN_METHOD_LABEL, "Unknown");
}

#[test]
fn given_camel_case_json_when_deserializing_request_then_missing_fields_default_to_empty() {
    let request: ConversionRequest = serde_json::from_str(
        r#"{ "blobLocation": "acme/site.pdf", "fileName": "site.pdf", "mimeType": "application/pdf" }"#,
    )
    .unwrap();

    assert_eq!(request.blob_location, "acme/site.pdf");
    assert_eq!(request.client, "");
    assert!(request.validate().is_ok());
}

#[test]
fn given_whitespace_blob_location_when_validating_then_reports_missing_location() {
    let request = ConversionRequest {
        blob_location: "  ".to_string(),
        file_name: "site.pdf".to_string(),
        ..ConversionRequest::default()
    };

    assert_eq!(
        request.validate(),
        Err(ConversionRequestError::MissingBlobLocation)
    );
}

#[test]
fn given_failed_result_when_serializing_then_error_is_present_and_text_is_empty() {
    let request = ConversionRequest {
        blob_location: "acme/site.pdf".to_string(),
        file_name: "site.pdf".to_string(),
        ..ConversionRequest::default()
    };
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let json = serde_json::to_value(ConversionResult::failed(&request, "blob not found", at)).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["convertedText"], "");
    assert_eq!(json["convertedByteSize"], 0);
    assert_eq!(json["error"], "blob not found");
    assert_eq!(json["convertedAtUtc"], "2024-06-01T12:00:00Z");
}
