use desktop_app_contract::Language;
use platform_host::{ChatRole, ChatTurn};

const IMAGE_REFERENCE_PREFIX: &str = "![Generated Wallpaper](";
/// Stands in for a generated image in chat history.
pub const IMAGE_HISTORY_PLACEHOLDER: &str = "[generated wallpaper]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Messages written by the shell itself. They are localized when rendered, so switching the
/// language also translates earlier notices.
pub enum Notice {
    Greeting,
    MissingApiKey,
    GeneratingWallpaper,
    WallpaperFailed,
    ConnectionError,
}

impl Notice {
    pub fn text(self, language: Language) -> &'static str {
        match self {
            Self::Greeting => language.pick(
                "Hello! I am your AI Assistant. How can I help you today?",
                "Hallo! Ich bin dein AI-Assistent. Wie kann ich dir helfen?",
            ),
            Self::MissingApiKey => language.pick(
                "Please set your API Key in Settings first.",
                "Bitte erstelle erst deinen API-Schlüssel in den Einstellungen.",
            ),
            Self::GeneratingWallpaper => {
                language.pick("Generating wallpaper…", "Hintergrundbild wird erstellt…")
            }
            Self::WallpaperFailed => language.pick(
                "Could not generate a wallpaper.",
                "Das Hintergrundbild konnte nicht erstellt werden.",
            ),
            Self::ConnectionError => language.pick(
                "Error connecting to Gemini.",
                "Fehler bei der Verbindung zu Gemini.",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageBody {
    Text(String),
    Notice(Notice),
}

impl MessageBody {
    pub fn text(&self, language: Language) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Notice(notice) => notice.text(language).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Stable per-session id used as the render key and for in-place replacement.
    pub id: u64,
    pub role: ChatRole,
    pub body: MessageBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Session chat log. Append-only apart from [`Transcript::replace`].
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a message and returns its id.
    pub fn push(&mut self, role: ChatRole, body: MessageBody) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, body });
        id
    }

    /// Replaces the body of message `id`. Returns `false` when no such message exists.
    pub fn replace(&mut self, id: u64, body: MessageBody) -> bool {
        match self.messages.iter_mut().find(|message| message.id == id) {
            Some(message) => {
                message.body = body;
                true
            }
            None => false,
        }
    }

    /// Converts the transcript into chat history for the next request.
    ///
    /// Generated images are sent as [`IMAGE_HISTORY_PLACEHOLDER`]; their URLs may be
    /// multi-megabyte `data:` URLs.
    pub fn prior_turns(&self, language: Language) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .map(|message| {
                let text = message.body.text(language);
                let text = if image_reference_url(&text).is_some() {
                    IMAGE_HISTORY_PLACEHOLDER.to_string()
                } else {
                    text
                };
                ChatTurn {
                    role: message.role,
                    text,
                }
            })
            .collect()
    }
}

/// Formats the transcript entry that shows a generated image.
pub fn image_reference(url: &str) -> String {
    format!("{IMAGE_REFERENCE_PREFIX}{url})")
}

/// Extracts the URL from an [`image_reference`] entry.
pub fn image_reference_url(text: &str) -> Option<&str> {
    text.strip_prefix(IMAGE_REFERENCE_PREFIX)?
        .strip_suffix(')')
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn replace_keeps_position_and_id() {
        let mut transcript = Transcript::default();
        transcript.push(ChatRole::User, MessageBody::Text("draw".into()));
        let pending = transcript.push(
            ChatRole::Assistant,
            MessageBody::Notice(Notice::GeneratingWallpaper),
        );
        transcript.push(ChatRole::User, MessageBody::Text("thanks".into()));

        assert!(transcript.replace(pending, MessageBody::Text(image_reference("u"))));
        assert_eq!(transcript.messages()[1].id, pending);
        assert_eq!(
            transcript.messages()[1].body,
            MessageBody::Text("![Generated Wallpaper](u)".into())
        );
        assert!(!transcript.replace(99, MessageBody::Text(String::new())));
    }

    #[test]
    fn prior_turns_localize_notices() {
        let mut transcript = Transcript::default();
        transcript.push(ChatRole::Assistant, MessageBody::Notice(Notice::Greeting));
        transcript.push(ChatRole::User, MessageBody::Text("hi".into()));

        let turns = transcript.prior_turns(Language::De);
        assert_eq!(
            turns,
            vec![
                ChatTurn {
                    role: ChatRole::Assistant,
                    text: "Hallo! Ich bin dein AI-Assistent. Wie kann ich dir helfen?".into(),
                },
                ChatTurn {
                    role: ChatRole::User,
                    text: "hi".into(),
                },
            ]
        );
    }

    #[test]
    fn prior_turns_replace_images_with_placeholder() {
        let mut transcript = Transcript::default();
        transcript.push(
            ChatRole::Assistant,
            MessageBody::Text(image_reference("data:image/png;base64,AAAA")),
        );

        assert_eq!(
            transcript.prior_turns(Language::En),
            vec![ChatTurn {
                role: ChatRole::Assistant,
                text: IMAGE_HISTORY_PLACEHOLDER.into(),
            }]
        );
    }

    #[test]
    fn image_references_round_trip_through_text() {
        let url = "https://pollinations.ai/p/sunset?seed=4";
        assert_eq!(image_reference_url(&image_reference(url)), Some(url));
        assert_eq!(image_reference_url("plain reply"), None);
        assert_eq!(image_reference_url("![Generated Wallpaper]()"), None);
    }
}
