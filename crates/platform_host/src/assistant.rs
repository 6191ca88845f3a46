//! Chat and image-generation service contract for the desktop assistant.
//!
//! The remote model is asked to answer with a JSON envelope
//! `{"response": "...", "action": {"type": "...", "payload": ...}}`. [`parse_reply`] turns the
//! raw reply text into an [`AssistantReply`] whose [`AssistantAction`] is a closed set; anything
//! the shell does not understand becomes [`AssistantAction::None`].

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Object-safe boxed future used by [`AssistantService`] async methods.
pub type AssistantFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// System instruction sent with every chat request.
pub const ASSISTANT_SYSTEM_PROMPT: &str = r#"You are a helpful assistant embedded in a Web Operating System.
You can control the OS.
Your response must be valid JSON in the following format:
{
  "response": "Text to show the user",
  "action": {
    "type": "OPEN_APP" | "SET_TIMER" | "CHANGE_THEME" | "GENERATE_WALLPAPER" | "NONE",
    "payload": "..."
  }
}

Actions:
- OPEN_APP payload: "settings", "browser", "notes", "clock"
- SET_TIMER payload: number (seconds)
- CHANGE_THEME payload: "dark", "light", "liquid", "frosted"
- GENERATE_WALLPAPER payload: "A detailed description of the image"
- NONE payload: null

If the user asks to generate an image, use the GENERATE_WALLPAPER action with a detailed prompt.
Answer concisely."#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Speaker of one chat turn.
pub enum ChatRole {
    /// Text typed by the person at the desktop.
    User,
    /// Text produced by the assistant.
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One prior exchange entry forwarded as conversation history.
pub struct ChatTurn {
    /// Speaker.
    pub role: ChatRole,
    /// Plain text of the turn.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Chat request sent to an [`AssistantService`].
pub struct ChatRequest {
    /// Caller-owned API credential.
    pub api_key: String,
    /// Conversation history, oldest first, excluding `message`.
    pub prior_turns: Vec<ChatTurn>,
    /// New user message.
    pub message: String,
}

impl ChatRequest {
    /// Builds a history-free request, as used for one-shot text transforms.
    pub fn single(api_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            prior_turns: Vec::new(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Image-generation request sent to an [`AssistantService`].
pub struct ImageRequest {
    /// Caller-owned API credential.
    pub api_key: String,
    /// Free-text image description.
    pub prompt: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures reported by assistant service adapters.
pub enum AssistantError {
    /// No API credential was configured.
    #[error("api key missing")]
    MissingApiKey,
    /// Transport-level failure.
    #[error("http error: {0}")]
    Http(String),
    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated by the adapter.
        body: String,
    },
    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
    /// The service answered without usable content.
    #[error("service returned no content")]
    EmptyResponse,
    /// An image was requested for an empty prompt.
    #[error("image prompt is empty")]
    EmptyPrompt,
}

/// Host service for the remote chat and image-generation backend.
pub trait AssistantService {
    /// Sends `request` and returns the raw reply text produced by the model.
    fn chat<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>>;

    /// Generates an image and returns a URL (possibly a `data:` URL) that renders it.
    fn generate_image<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Assistant service for targets without network access. Every call fails.
pub struct NoopAssistantService;

impl AssistantService for NoopAssistantService {
    fn chat<'a>(
        &'a self,
        _request: &'a ChatRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        Box::pin(async { Err(AssistantError::Http("assistant service unavailable".into())) })
    }

    fn generate_image<'a>(
        &'a self,
        _request: &'a ImageRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        Box::pin(async { Err(AssistantError::Http("image service unavailable".into())) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Shell command carried by an assistant reply.
pub enum AssistantAction {
    /// Open the app with the given slug.
    OpenApp(String),
    /// Start a countdown of this many seconds.
    SetTimer(u32),
    /// Switch theme (`dark`/`light`) or glass style (`frosted`/`liquid`).
    ChangeTheme(String),
    /// Generate a wallpaper from this description.
    GenerateWallpaper(String),
    /// No shell side effect.
    None,
}

impl AssistantAction {
    /// Builds an action from the wire `type` tag and payload.
    ///
    /// Unknown tags and payloads of the wrong shape map to [`AssistantAction::None`].
    pub fn from_wire(kind: &str, payload: &Value) -> Self {
        match kind {
            "OPEN_APP" => non_empty_text(payload).map_or(Self::None, Self::OpenApp),
            "SET_TIMER" => timer_seconds(payload).map_or(Self::None, Self::SetTimer),
            "CHANGE_THEME" => non_empty_text(payload).map_or(Self::None, Self::ChangeTheme),
            "GENERATE_WALLPAPER" => {
                non_empty_text(payload).map_or(Self::None, Self::GenerateWallpaper)
            }
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed assistant reply.
pub struct AssistantReply {
    /// Free text to show in the transcript.
    pub response: String,
    /// Shell command to run after showing `response`.
    pub action: AssistantAction,
}

#[derive(Deserialize)]
struct WireReply {
    response: String,
    #[serde(default)]
    action: Option<WireAction>,
}

#[derive(Deserialize)]
struct WireAction {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    payload: Value,
}

/// Parses raw model output into an [`AssistantReply`].
///
/// Text that is not the expected JSON envelope is shown verbatim with no action.
pub fn parse_reply(raw: &str) -> AssistantReply {
    match serde_json::from_str::<WireReply>(raw) {
        Ok(reply) => AssistantReply {
            response: reply.response,
            action: reply
                .action
                .map(|action| AssistantAction::from_wire(&action.kind, &action.payload))
                .unwrap_or(AssistantAction::None),
        },
        Err(_) => AssistantReply {
            response: raw.to_string(),
            action: AssistantAction::None,
        },
    }
}

fn non_empty_text(payload: &Value) -> Option<String> {
    payload
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn timer_seconds(payload: &Value) -> Option<u32> {
    let seconds = match payload {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !seconds.is_finite() || seconds < 1.0 {
        return None;
    }
    Some(seconds.round() as u32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_envelope_with_action() {
        let reply = parse_reply(
            r#"{"response":"Opening notes.","action":{"type":"OPEN_APP","payload":"notes"}}"#,
        );
        assert_eq!(
            reply,
            AssistantReply {
                response: "Opening notes.".to_string(),
                action: AssistantAction::OpenApp("notes".to_string()),
            }
        );
    }

    #[test]
    fn non_json_text_is_shown_raw_without_action() {
        let reply = parse_reply("Sure! Here you go.");
        assert_eq!(reply.response, "Sure! Here you go.");
        assert_eq!(reply.action, AssistantAction::None);
    }

    #[test]
    fn json_without_response_field_is_treated_as_raw_text() {
        let raw = r#"{"action":{"type":"SET_TIMER","payload":5}}"#;
        let reply = parse_reply(raw);
        assert_eq!(reply.response, raw);
        assert_eq!(reply.action, AssistantAction::None);
    }

    #[test]
    fn missing_action_defaults_to_none() {
        let reply = parse_reply(r#"{"response":"Hi"}"#);
        assert_eq!(reply.action, AssistantAction::None);
    }

    #[test]
    fn unknown_action_type_maps_to_none() {
        assert_eq!(
            AssistantAction::from_wire("REBOOT", &json!("now")),
            AssistantAction::None
        );
        assert_eq!(
            AssistantAction::from_wire("NONE", &Value::Null),
            AssistantAction::None
        );
    }

    #[test]
    fn timer_payload_accepts_numbers_and_numeric_strings() {
        assert_eq!(
            AssistantAction::from_wire("SET_TIMER", &json!(120)),
            AssistantAction::SetTimer(120)
        );
        assert_eq!(
            AssistantAction::from_wire("SET_TIMER", &json!(" 90 ")),
            AssistantAction::SetTimer(90)
        );
        assert_eq!(
            AssistantAction::from_wire("SET_TIMER", &json!(0)),
            AssistantAction::None
        );
        assert_eq!(
            AssistantAction::from_wire("SET_TIMER", &json!("soon")),
            AssistantAction::None
        );
        assert_eq!(
            AssistantAction::from_wire("SET_TIMER", &Value::Null),
            AssistantAction::None
        );
    }

    #[test]
    fn text_payloads_must_be_non_empty_strings() {
        assert_eq!(
            AssistantAction::from_wire("OPEN_APP", &json!("")),
            AssistantAction::None
        );
        assert_eq!(
            AssistantAction::from_wire("CHANGE_THEME", &json!(3)),
            AssistantAction::None
        );
        assert_eq!(
            AssistantAction::from_wire("GENERATE_WALLPAPER", &json!("a misty forest")),
            AssistantAction::GenerateWallpaper("a misty forest".to_string())
        );
    }
}
