//! Shared fixtures for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use docx_rust::{document::Paragraph, Docx};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use digestor::config::{Config, GoogleCloudConfig};
use digestor::services::{BackendError, Summarizer};

/// Single-page PDF whose text layer is `text`, optionally padded with an
/// unreferenced stream of `padding` bytes.
pub fn pdf_with_text(text: Option<&str>, padding: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let operations = match text {
        Some(text) => vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
        None => vec![],
    };
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content stream"),
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if padding > 0 {
        doc.add_object(Stream::new(dictionary! {}, vec![b'0'; padding]));
    }

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize pdf");
    buffer
}

/// DOCX with one paragraph per entry of `paragraphs`.
pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::default();
    for text in paragraphs {
        docx.document.push(Paragraph::default().push_text(*text));
    }
    docx.write(Cursor::new(Vec::new()))
        .expect("serialize docx")
        .into_inner()
}

pub fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 8080,
        max_file_size_mb: 50,
        max_concurrent_requests: 10,
        worker_threads: 2,
        generation_timeout_seconds: 30,
        max_source_chars: 2_000_000,
        static_dir: "public".to_string(),
        google: GoogleCloudConfig {
            project: "digestor-test".to_string(),
            location: "us-central1".to_string(),
            credentials_path: "tests/fixtures/service_account.json".to_string(),
            model: "gemini-2.5-pro".to_string(),
            endpoint: None,
        },
    }
}

/// Summarizer that records prompts and answers with a canned reply.
pub struct StubSummarizer {
    reply: Result<String, String>,
    panics: bool,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubSummarizer {
    pub fn replying(summary: &str) -> Self {
        Self {
            reply: Ok(summary.to_string()),
            panics: false,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(cause: &str) -> Self {
        Self {
            reply: Err(cause.to_string()),
            panics: false,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Panics inside `summarize` with `reason`.
    pub fn panicking(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            panics: true,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        if self.panics {
            panic!("{}", self.reply.clone().unwrap_err());
        }
        self.reply.clone().map_err(BackendError::request)
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}
