pub const UNKNOWN_METHOD_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Word,
    Excel,
    Image,
}

impl DocumentKind {
    /// Matches case-insensitively and ignores MIME parameters such as `; charset=utf-8`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();

        match essence.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "application/msword" => Some(Self::Word),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            | "application/vnd.ms-excel" => Some(Self::Excel),
            "image/png" | "image/jpeg" | "image/tiff" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn method_label(&self) -> &'static str {
        match self {
            Self::Pdf => "Layout+OCR analysis",
            Self::Word => "Structured document parsing",
            Self::Excel => "Spreadsheet cell/range parsing",
            Self::Image => "OCR text extraction",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::Excel => "excel",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
