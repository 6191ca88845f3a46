//! Gemini chat and Imagen image-generation client.

use platform_host::{
    image_data_url, AssistantError, AssistantFuture, AssistantService, ChatRequest, ChatRole,
    ImageRequest, ASSISTANT_SYSTEM_PROMPT,
};
use reqwest::Client;
use serde_json::{json, Value};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const CHAT_MODEL: &str = "gemini-1.5-flash";
const IMAGE_MODEL: &str = "imagen-3.0-generate-001";
const MAX_ERROR_BODY_CHARS: usize = 512;

/// [`AssistantService`] backed by the Google Generative Language REST API.
#[derive(Debug, Clone, Default)]
pub struct GeminiAssistantService {
    client: Client,
}

impl GeminiAssistantService {
    /// Creates a client with default transport settings.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, AssistantError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AssistantError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status,
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AssistantError::Parse(e.to_string()))
    }
}

impl AssistantService for GeminiAssistantService {
    fn chat<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        Box::pin(async move {
            let api_key = require_api_key(&request.api_key)?;
            let url = endpoint(CHAT_MODEL, "generateContent", api_key);
            let json = self.post(&url, &chat_request_body(request)).await?;
            extract_chat_text(&json)
        })
    }

    fn generate_image<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        Box::pin(async move {
            let api_key = require_api_key(&request.api_key)?;
            let prompt = request.prompt.trim();
            if prompt.is_empty() {
                return Err(AssistantError::EmptyPrompt);
            }
            let url = endpoint(IMAGE_MODEL, "predict", api_key);
            let json = self.post(&url, &image_request_body(prompt)).await?;
            extract_image_url(&json)
        })
    }
}

fn require_api_key(api_key: &str) -> Result<&str, AssistantError> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        Err(AssistantError::MissingApiKey)
    } else {
        Ok(api_key)
    }
}

fn endpoint(model: &str, method: &str, api_key: &str) -> String {
    format!(
        "{API_BASE_URL}/{model}:{method}?key={}",
        urlencoding::encode(api_key)
    )
}

fn wire_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "model",
    }
}

/// Builds the `generateContent` body: system instruction, history, then the new message.
pub fn chat_request_body(request: &ChatRequest) -> Value {
    let mut contents: Vec<Value> = request
        .prior_turns
        .iter()
        .map(|turn| {
            json!({
                "role": wire_role(turn.role),
                "parts": [{ "text": turn.text }],
            })
        })
        .collect();
    contents.push(json!({
        "role": "user",
        "parts": [{ "text": request.message }],
    }));

    json!({
        "systemInstruction": { "parts": [{ "text": ASSISTANT_SYSTEM_PROMPT }] },
        "contents": contents,
        "generationConfig": { "responseMimeType": "application/json" },
    })
}

/// Reads `candidates[0].content.parts[0].text` from a `generateContent` response.
pub fn extract_chat_text(json: &Value) -> Result<String, AssistantError> {
    let candidate = json["candidates"]
        .get(0)
        .ok_or_else(|| AssistantError::Parse("no candidates in response".to_string()))?;
    candidate["content"]["parts"]
        .get(0)
        .and_then(|part| part["text"].as_str())
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .ok_or(AssistantError::EmptyResponse)
}

/// Builds the Imagen `predict` body for one 16:9 sample.
pub fn image_request_body(prompt: &str) -> Value {
    json!({
        "instances": [{ "prompt": prompt }],
        "parameters": { "sampleCount": 1, "aspectRatio": "16:9" },
    })
}

/// Turns the first Imagen prediction into a `data:` URL.
pub fn extract_image_url(json: &Value) -> Result<String, AssistantError> {
    let prediction = json["predictions"]
        .get(0)
        .ok_or_else(|| AssistantError::Parse("no predictions in response".to_string()))?;
    let bytes = prediction["bytesBase64Encoded"]
        .as_str()
        .filter(|bytes| !bytes.is_empty())
        .ok_or(AssistantError::EmptyResponse)?;
    Ok(image_data_url(prediction["mimeType"].as_str(), bytes))
}
