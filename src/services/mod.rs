pub mod docx_processor;
pub mod extractor;
pub mod google_auth;
pub mod pdf_processor;
pub mod pipeline;
pub mod prompt;
pub mod summarizer;
pub mod vertex;

pub use docx_processor::DocxProcessor;
pub use extractor::{extract, ExtractedText, ExtractionError};
pub use google_auth::{ServiceAccountKey, ServiceAccountTokenSource, TokenSource};
pub use pdf_processor::PdfProcessor;
pub use pipeline::SummaryPipeline;
pub use prompt::build_prompt;
pub use summarizer::{BackendError, Summarizer};
pub use vertex::VertexClient;
