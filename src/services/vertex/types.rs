use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, SafetySetting};
use crate::services::summarizer::BackendError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationParams,
    pub safety_settings: &'a [SafetySetting],
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl<'a> GenerateContentRequest<'a> {
    /// Single-turn request: one user message holding the whole prompt.
    pub fn new(prompt: &'a str, config: &'a GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationParams {
                temperature: config.temperature,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
            safety_settings: &config.safety_settings,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn into_text(self) -> Result<String, BackendError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let candidate = match self.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                return Err(BackendError::empty(match block_reason {
                    Some(reason) => format!("prompt was blocked ({})", reason),
                    None => "response contains no candidates".to_string(),
                }))
            }
        };

        let finish_reason = candidate.finish_reason;
        let text = candidate
            .content
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text);

        match text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(BackendError::empty(match finish_reason {
                Some(reason) => format!("first candidate has no text (finish reason {})", reason),
                None => "first candidate has no text".to_string(),
            })),
        }
    }
}

/// Google's error envelope for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
