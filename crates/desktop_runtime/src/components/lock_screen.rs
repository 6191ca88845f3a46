use std::time::Duration;

use desktop_app_contract::Language;
use leptos::leptos_dom::helpers::TimeoutHandle;
use system_ui::{
    Button, ButtonShape, ButtonSize, Icon, IconName, IconSize, Text, TextRole, TextTone,
};

use super::*;
use crate::lock::{KeypadKey, LockPad, PadOutcome, ERROR_RESET_MS, PIN_LENGTH};

fn lock_title(language: Language) -> &'static str {
    language.pick("Enter Passcode", "Code eingeben")
}

fn key_aria_label(key: KeypadKey, language: Language) -> String {
    match key {
        KeypadKey::Digit(digit) => digit.to_string(),
        KeypadKey::Clear => language.pick("Clear", "Löschen").to_string(),
        KeypadKey::Submit => language.pick("Unlock", "Entsperren").to_string(),
        KeypadKey::Backspace => language.pick("Delete digit", "Ziffer löschen").to_string(),
    }
}

#[component]
pub(super) fn LockScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = create_memo(move |_| runtime.preferences.with(|prefs| prefs.language));
    let pad = create_rw_signal(LockPad::default());
    let error_timer = store_value(None::<TimeoutHandle>);

    let cancel_error_timer = move || {
        if let Some(handle) = error_timer.get_value() {
            handle.clear();
            error_timer.set_value(None);
        }
    };

    let press = move |key: KeypadKey| {
        let Some(outcome) = pad.try_update(|pad| pad.press(key)) else {
            return;
        };
        match outcome {
            PadOutcome::Pending => {}
            PadOutcome::Unlocked => {
                cancel_error_timer();
                runtime.dispatch_action(DesktopAction::Unlock);
            }
            PadOutcome::Rejected => {
                cancel_error_timer();
                match set_timeout_with_handle(
                    move || {
                        error_timer.set_value(None);
                        pad.update(LockPad::clear_error);
                    },
                    Duration::from_millis(ERROR_RESET_MS),
                ) {
                    Ok(handle) => error_timer.set_value(Some(handle)),
                    Err(err) => {
                        logging::warn!("lock error reset timer failed: {err:?}");
                        pad.update(LockPad::clear_error);
                    }
                }
            }
        }
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if let Some(key) = KeypadKey::from_keyboard(&ev.key()) {
            ev.prevent_default();
            press(key);
        }
    });
    on_cleanup(move || {
        keydown.remove();
        cancel_error_timer();
    });

    let has_error = move || pad.with(LockPad::has_error);

    view! {
        <section
            class="lock-screen"
            role="dialog"
            aria-modal="true"
            aria-label=move || lock_title(language.get())
            data-ui-error=move || has_error().to_string()
        >
            <Icon icon=IconName::Lock size=IconSize::Lg />
            <Text role=TextRole::Title>{move || lock_title(language.get())}</Text>
            <div class="lock-screen-dots" aria-hidden="true">
                {(0..PIN_LENGTH)
                    .map(|index| {
                        view! {
                            <span
                                class="lock-screen-dot"
                                data-ui-filled=move || {
                                    pad.with(|pad| index < pad.digits_entered()).to_string()
                                }
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=has_error>
                <Text role=TextRole::Caption tone=TextTone::Danger>
                    {move || language.get().pick("Wrong passcode", "Falscher Code")}
                </Text>
            </Show>
            <div class="lock-screen-keypad" role="group">
                {KeypadKey::PAD
                    .into_iter()
                    .map(|key| {
                        view! {
                            <Button
                                shape=ButtonShape::Circle
                                size=ButtonSize::Lg
                                ui_slot="keypad-key"
                                aria_label=Signal::derive(move || key_aria_label(key, language.get()))
                                on_click=Callback::new(move |_| press(key))
                            >
                                {key.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keypad_labels_are_localized() {
        assert_eq!(key_aria_label(KeypadKey::Digit(7), Language::De), "7");
        assert_eq!(key_aria_label(KeypadKey::Clear, Language::De), "Löschen");
        assert_eq!(key_aria_label(KeypadKey::Submit, Language::En), "Unlock");
        assert_eq!(lock_title(Language::De), "Code eingeben");
    }
}
