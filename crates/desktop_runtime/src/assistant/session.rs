use desktop_app_contract::Language;
use platform_host::{parse_reply, AssistantAction, AssistantError, ChatRequest, ChatRole};

use super::transcript::{image_reference, MessageBody, Notice, Transcript};

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the sidebar should do after [`AssistantSession::begin_send`].
pub enum SendStep {
    /// Blank input. Nothing was recorded.
    Ignored,
    /// No API key. The message and a notice were recorded and no request is made.
    NeedsApiKey,
    /// Issue this chat request and pass the result to [`AssistantSession::finish_chat`].
    Request(ChatRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transcript plus the count of outstanding chat and wallpaper requests.
pub struct AssistantSession {
    transcript: Transcript,
    in_flight: u32,
}

impl Default for AssistantSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantSession {
    /// Starts a session with the greeting.
    pub fn new() -> Self {
        let mut transcript = Transcript::default();
        transcript.push(ChatRole::Assistant, MessageBody::Notice(Notice::Greeting));
        Self {
            transcript,
            in_flight: 0,
        }
    }

    /// Messages shown in the sidebar, oldest first.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Drives the single loading indicator.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Records the user's message and decides whether a request is made.
    pub fn begin_send(&mut self, text: &str, api_key: &str, language: Language) -> SendStep {
        if text.trim().is_empty() {
            return SendStep::Ignored;
        }

        let prior_turns = self.transcript.prior_turns(language);
        self.transcript
            .push(ChatRole::User, MessageBody::Text(text.to_string()));

        let api_key = api_key.trim();
        if api_key.is_empty() {
            self.transcript
                .push(ChatRole::Assistant, MessageBody::Notice(Notice::MissingApiKey));
            return SendStep::NeedsApiKey;
        }

        self.in_flight += 1;
        SendStep::Request(ChatRequest {
            api_key: api_key.to_string(),
            prior_turns,
            message: text.to_string(),
        })
    }

    /// Records a chat result and returns the action to dispatch.
    pub fn finish_chat(&mut self, result: Result<String, AssistantError>) -> AssistantAction {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(raw) => {
                let reply = parse_reply(&raw);
                self.transcript
                    .push(ChatRole::Assistant, MessageBody::Text(reply.response));
                reply.action
            }
            Err(_) => {
                self.transcript.push(
                    ChatRole::Assistant,
                    MessageBody::Notice(Notice::ConnectionError),
                );
                AssistantAction::None
            }
        }
    }

    /// Appends the pending wallpaper entry and returns its id.
    pub fn begin_wallpaper(&mut self) -> u64 {
        self.in_flight += 1;
        self.transcript.push(
            ChatRole::Assistant,
            MessageBody::Notice(Notice::GeneratingWallpaper),
        )
    }

    /// Replaces the pending entry `id` with the image or a failure notice.
    ///
    /// Returns the URL to use as the wallpaper on success.
    pub fn finish_wallpaper(
        &mut self,
        id: u64,
        result: Result<String, AssistantError>,
    ) -> Option<String> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(url) => {
                self.transcript
                    .replace(id, MessageBody::Text(image_reference(&url)));
                Some(url)
            }
            Err(_) => {
                self.transcript
                    .replace(id, MessageBody::Notice(Notice::WallpaperFailed));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{AssistantFuture, AssistantService, ChatTurn, ImageRequest};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        assistant::{
            dispatch::{plan_action, ActionPlan},
            transcript::IMAGE_HISTORY_PLACEHOLDER,
        },
        model::{DesktopState, InteractionState},
        reducer::reduce_desktop,
    };
    use desktop_app_contract::AppId;

    struct ScriptedService {
        chat: Result<String, AssistantError>,
    }

    impl ScriptedService {
        fn replying(raw: &str) -> Self {
            Self {
                chat: Ok(raw.to_string()),
            }
        }
    }

    impl AssistantService for ScriptedService {
        fn chat<'a>(
            &'a self,
            _request: &'a ChatRequest,
        ) -> AssistantFuture<'a, Result<String, AssistantError>> {
            Box::pin(async move { self.chat.clone() })
        }

        fn generate_image<'a>(
            &'a self,
            _request: &'a ImageRequest,
        ) -> AssistantFuture<'a, Result<String, AssistantError>> {
            Box::pin(async { Err(AssistantError::EmptyResponse) })
        }
    }

    fn send(
        session: &mut AssistantSession,
        service: &ScriptedService,
        text: &str,
    ) -> AssistantAction {
        let SendStep::Request(request) = session.begin_send(text, "key", Language::En) else {
            panic!("expected a request");
        };
        assert!(session.is_loading());
        let result = block_on(service.chat(&request));
        session.finish_chat(result)
    }

    fn last_text(session: &AssistantSession) -> String {
        session
            .transcript()
            .messages()
            .last()
            .expect("message")
            .body
            .text(Language::En)
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = AssistantSession::new();
        assert_eq!(session.begin_send("   ", "key", Language::En), SendStep::Ignored);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn missing_key_records_notice_without_request() {
        let mut session = AssistantSession::new();
        assert_eq!(
            session.begin_send("hello", " ", Language::De),
            SendStep::NeedsApiKey
        );
        assert!(!session.is_loading());
        let bodies: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|message| message.body.clone())
            .collect();
        assert_eq!(
            bodies[1..].to_vec(),
            vec![
                MessageBody::Text("hello".into()),
                MessageBody::Notice(Notice::MissingApiKey),
            ]
        );
    }

    #[test]
    fn request_carries_history_before_new_message() {
        let mut session = AssistantSession::new();
        let SendStep::Request(request) = session.begin_send("open notes", "key", Language::En)
        else {
            panic!("expected a request");
        };
        assert_eq!(request.message, "open notes");
        assert_eq!(
            request.prior_turns,
            vec![ChatTurn {
                role: ChatRole::Assistant,
                text: Notice::Greeting.text(Language::En).to_string(),
            }]
        );
    }

    #[test]
    fn non_json_reply_is_shown_raw_without_action() {
        let mut session = AssistantSession::new();
        let service = ScriptedService::replying("Sure thing, no JSON here.");
        let action = send(&mut session, &service, "hi");

        assert_eq!(action, AssistantAction::None);
        assert_eq!(last_text(&session), "Sure thing, no JSON here.");
        assert!(!session.is_loading());
    }

    #[test]
    fn set_timer_reply_starts_countdown_and_opens_clock() {
        let mut session = AssistantSession::new();
        let service = ScriptedService::replying(
            r#"{"response":"Timer set.","action":{"type":"SET_TIMER","payload":120}}"#,
        );
        let action = send(&mut session, &service, "two minute timer");
        assert_eq!(last_text(&session), "Timer set.");

        let ActionPlan::Dispatch(desktop_action) = plan_action(action) else {
            panic!("expected a reducer action");
        };
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(&mut state, &mut interaction, desktop_action).expect("reduce");

        assert_eq!(state.timer.remaining_seconds, 120);
        assert!(state.timer.running);
        assert!(state.is_open(AppId::Clock));
    }

    #[test]
    fn transport_failure_appends_connection_error() {
        let mut session = AssistantSession::new();
        let service = ScriptedService {
            chat: Err(AssistantError::Http("offline".into())),
        };
        let action = send(&mut session, &service, "hi");

        assert_eq!(action, AssistantAction::None);
        assert_eq!(last_text(&session), "Error connecting to Gemini.");
    }

    #[test]
    fn generated_image_data_stays_out_of_chat_history() {
        let mut session = AssistantSession::new();
        let pending = session.begin_wallpaper();
        let data_url = format!("data:image/png;base64,{}", "A".repeat(2_000_000));
        assert_eq!(
            session.finish_wallpaper(pending, Ok(data_url.clone())),
            Some(data_url)
        );

        let SendStep::Request(request) = session.begin_send("hi", "key", Language::En) else {
            panic!("expected a request");
        };
        let history_bytes: usize = request
            .prior_turns
            .iter()
            .map(|turn| turn.text.len())
            .sum();
        assert!(history_bytes < 1_000, "history carries {history_bytes} bytes");
        assert_eq!(
            request.prior_turns.last().map(|turn| turn.text.as_str()),
            Some(IMAGE_HISTORY_PLACEHOLDER)
        );
    }

    #[test]
    fn wallpaper_entry_is_replaced_in_place() {
        let mut session = AssistantSession::new();
        let pending = session.begin_wallpaper();
        let second = session.begin_wallpaper();
        assert!(session.is_loading());

        assert_eq!(
            session.finish_wallpaper(pending, Ok("https://img.test/a.png".into())),
            Some("https://img.test/a.png".to_string())
        );
        assert!(session.is_loading());
        assert_eq!(
            session.finish_wallpaper(second, Err(AssistantError::EmptyPrompt)),
            None
        );
        assert!(!session.is_loading());

        let bodies: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|message| message.body.clone())
            .collect();
        assert_eq!(
            bodies[1..].to_vec(),
            vec![
                MessageBody::Text("![Generated Wallpaper](https://img.test/a.png)".into()),
                MessageBody::Notice(Notice::WallpaperFailed),
            ]
        );
    }
}
