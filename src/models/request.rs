use bytes::Bytes;
use std::fmt;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document formats the service can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        // Content types may carry parameters, e.g. "application/pdf; name=a.pdf"
        let essence = mime_type.split(';').next().unwrap_or("").trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Some(DocumentKind::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
        }
    }
}

/// An upload that already passed admission control.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub kind: DocumentKind,
    pub content: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, kind: DocumentKind, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            kind,
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Resolves the declared media type of an upload.
///
/// Browsers and CLI tools frequently send `application/octet-stream` or no
/// type at all, so those fall back to a guess from the file name.
pub fn resolve_media_type(declared: Option<&str>, file_name: &str) -> String {
    match declared.map(str::trim) {
        Some(ct) if !ct.is_empty() && !ct.eq_ignore_ascii_case("application/octet-stream") => {
            ct.to_string()
        }
        _ => mime_guess::from_path(file_name)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
    }
}
