//! Google Gemini `generateContent` client over blocking HTTP.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clean::clean_html_response;
use crate::error::DraftingError;
use crate::prompt;
use crate::{DraftRequest, DraftingService, SuggestionRequest};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DRAFT_TEMPERATURE: f32 = 0.2;
const SUGGESTION_TEMPERATURE: f32 = 0.4;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

pub struct GeminiClient {
    agent: ureq::Agent,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, DraftingError> {
        if config.api_key.trim().is_empty() {
            return Err(DraftingError::Config("missing Gemini API key".to_string()));
        }
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();
        Ok(Self { agent, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// One `generateContent` round trip, returning the concatenated text parts.
    fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, DraftingError> {
        let body = serde_json::to_string(&GenerateContentRequest::new(
            system_instruction,
            prompt,
            temperature,
        ))?;

        debug!(model = %self.config.model, temperature, "calling generateContent");

        let mut response = self
            .agent
            .post(&self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .send(body)
            .inspect_err(|e| warn!(error = %e, "generateContent request failed"))?;

        let raw = response.body_mut().read_to_string()?;
        let parsed: GenerateContentResponse = serde_json::from_str(&raw)
            .map_err(|e| DraftingError::ResponseParse(e.to_string()))?;

        let text = parsed.text().ok_or(DraftingError::EmptyResponse)?;
        info!(model = %self.config.model, chars = text.len(), "generateContent succeeded");
        Ok(text)
    }
}

impl DraftingService for GeminiClient {
    fn draft(&self, request: &DraftRequest) -> Result<String, DraftingError> {
        let system = prompt::draft_system_instruction(&request.patient, request.exam_type);
        let user = prompt::draft_prompt(request);
        let text = self.generate(&system, &user, DRAFT_TEMPERATURE)?;
        Ok(clean_html_response(&text))
    }

    fn suggest(&self, request: &SuggestionRequest) -> Result<String, DraftingError> {
        let user = prompt::suggestion_prompt(request);
        let text =
            self.generate(prompt::SUGGESTION_SYSTEM_INSTRUCTION, &user, SUGGESTION_TEMPERATURE)?;
        Ok(text.trim().to_string())
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(system_instruction: &'a str, prompt: &'a str, temperature: f32) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system_instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or `None` when it has no text at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}
