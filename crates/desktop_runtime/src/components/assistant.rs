use desktop_app_contract::Language;
use platform_host::ChatRole;
use system_ui::{
    ChatBubble, Icon, IconButton, IconName, IconSize, SidePanel, Spinner, Text, TextField,
    TextRole, TextTone,
};

use super::*;
use crate::{
    assistant::{image_reference_url, ChatMessage},
    window_manager::assistant_icon_accent,
};

fn speaker_token(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    }
}

fn message_view(message: ChatMessage, language: Memo<Language>) -> impl IntoView {
    let speaker = speaker_token(message.role);
    let body = message.body;

    let content = move || {
        let text = body.text(language.get());
        match image_reference_url(&text) {
            Some(url) => view! {
                <figure class="assistant-image">
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {language.get().pick("Generated Image:", "Generiertes Bild:")}
                    </Text>
                    <img src=url.to_string() alt="" loading="lazy" />
                </figure>
            }
            .into_view(),
            None => view! { <Text>{text}</Text> }.into_view(),
        }
    };

    view! { <ChatBubble speaker>{content}</ChatBubble> }
}

#[component]
pub(super) fn AssistantSidebar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = create_memo(move |_| runtime.preferences.with(|prefs| prefs.language));
    let open = create_memo(move |_| runtime.state.with(|desktop| desktop.assistant_open));
    let messages = create_memo(move |_| {
        runtime
            .assistant
            .with(|session| session.transcript().messages().to_vec())
    });
    let loading = create_memo(move |_| runtime.assistant.with(|session| session.is_loading()));
    let input = create_rw_signal(String::new());
    let transcript_end = create_node_ref::<html::Div>();

    create_effect(move |_| {
        let _ = (messages.with(Vec::len), loading.get());
        if let Some(end) = transcript_end.get() {
            end.scroll_into_view();
        }
    });

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());
        crate::host::submit_chat(runtime, text);
    };

    view! {
        <SidePanel
            aria_label=Signal::derive(move || {
                language.get().pick("Assistant", "Assistent").to_string()
            })
            open=open
        >
            <header class="assistant-header">
                <Icon
                    icon=IconName::Sparkle
                    size=IconSize::Md
                    accent=Signal::derive(move || {
                        runtime
                            .preferences
                            .with(|prefs| assistant_icon_accent(prefs.icon_style).to_string())
                    })
                />
                <Text role=TextRole::Title>
                    {move || language.get().pick("Assistant", "Assistent")}
                </Text>
                <IconButton
                    icon=IconName::Dismiss
                    ui_slot="assistant-close"
                    aria_label=Signal::derive(move || {
                        language.get().pick("Close assistant", "Assistent schließen").to_string()
                    })
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::CloseAssistant);
                    })
                />
            </header>
            <div class="assistant-transcript" role="log" aria-live="polite">
                <For
                    each=move || messages.get()
                    key=|message| (message.id, message.body.clone())
                    children=move |message| message_view(message, language)
                />
                <Show when=move || loading.get()>
                    <div class="assistant-loading">
                        <Spinner aria_label="Loading" />
                        <Text tone=TextTone::Secondary>
                            {move || language.get().pick("Thinking...", "Denke nach...")}
                        </Text>
                    </div>
                </Show>
                <div node_ref=transcript_end></div>
            </div>
            <form
                class="assistant-composer"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }
            >
                <TextField
                    ui_slot="assistant-input"
                    placeholder=Signal::derive(move || {
                        language.get().pick("Ask me anything...", "Frag mich etwas...").to_string()
                    })
                    aria_label=Signal::derive(move || {
                        language.get().pick("Message", "Nachricht").to_string()
                    })
                    value=input
                    on_input=Callback::new(move |ev| input.set(event_target_value(&ev)))
                />
                <IconButton
                    icon=IconName::Send
                    ui_slot="assistant-send"
                    aria_label=Signal::derive(move || {
                        language.get().pick("Send", "Senden").to_string()
                    })
                    disabled=Signal::derive(move || input.with(|text| text.trim().is_empty()))
                    on_click=Callback::new(move |_| send())
                />
            </form>
        </SidePanel>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn speakers_map_to_bubble_slots() {
        assert_eq!(speaker_token(ChatRole::User), "user");
        assert_eq!(speaker_token(ChatRole::Assistant), "assistant");
    }
}
