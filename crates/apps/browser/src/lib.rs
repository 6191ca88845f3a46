//! Browser desktop app: an address bar and history around a sandboxed iframe.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod history;

use std::time::Duration;

use desktop_app_contract::AppServices;
use leptos::*;
use system_ui::prelude::*;

pub use history::{normalize_url, BrowserHistory, HOME_URL};

/// Sandbox flags applied to the page frame.
pub const FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups";

const EMBED_WARNING: &str =
    "Note: Many websites (Google, YouTube) block embedding. Try Wikipedia or simple sites.";

#[component]
/// Browser app window contents.
pub fn BrowserApp(
    /// Injected desktop services bundle. The browser only reads the language.
    services: AppServices,
) -> impl IntoView {
    let preferences = services.preferences;
    let history = create_rw_signal(BrowserHistory::default());
    let address = create_rw_signal(HOME_URL.to_string());
    let frame_src = create_rw_signal(HOME_URL.to_string());
    let loading = create_rw_signal(true);

    let show_current = move || {
        let url = history.with_untracked(|history| history.current().to_string());
        address.set(url.clone());
        frame_src.set(url);
        loading.set(true);
    };

    let reload = move || {
        let url = history.with_untracked(|history| history.current().to_string());
        loading.set(true);
        frame_src.set(String::new());
        let restore = set_timeout_with_handle(
            move || {
                frame_src.try_set(url);
            },
            Duration::from_millis(10),
        );
        if restore.is_err() {
            show_current();
        }
    };

    let submit = move || {
        let Some(url) = normalize_url(&address.get_untracked()) else {
            return;
        };
        if history.try_update(|history| history.navigate(url)).unwrap_or(false) {
            show_current();
        } else {
            reload();
        }
    };

    let can_go_back = Signal::derive(move || history.with(BrowserHistory::can_go_back));
    let can_go_forward = Signal::derive(move || history.with(BrowserHistory::can_go_forward));

    view! {
        <AppShell layout_class="app-browser-shell">
            <ToolBar aria_label="Browser navigation">
                <IconButton
                    icon=IconName::ArrowLeft
                    aria_label=Signal::derive(move || preferences.language().pick("Back", "Zurück").to_string())
                    disabled=Signal::derive(move || !can_go_back.get())
                    on_click=Callback::new(move |_| {
                        if history.try_update(BrowserHistory::back).unwrap_or(false) {
                            show_current();
                        }
                    })
                />
                <IconButton
                    icon=IconName::ArrowRight
                    aria_label=Signal::derive(move || preferences.language().pick("Forward", "Vor").to_string())
                    disabled=Signal::derive(move || !can_go_forward.get())
                    on_click=Callback::new(move |_| {
                        if history.try_update(BrowserHistory::forward).unwrap_or(false) {
                            show_current();
                        }
                    })
                />
                <IconButton
                    icon=IconName::Refresh
                    aria_label=Signal::derive(move || preferences.language().pick("Reload", "Neu laden").to_string())
                    on_click=Callback::new(move |_| reload())
                />
                <form
                    class="browser-address"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <Icon icon=IconName::Lock size=IconSize::Xs />
                    <TextField
                        input_type="text"
                        aria_label="Address"
                        value=Signal::derive(move || address.get())
                        on_input=Callback::new(move |ev| address.set(event_target_value(&ev)))
                    />
                </form>
            </ToolBar>

            <div class="browser-content">
                <Show when=move || loading.get()>
                    <Spinner aria_label="Loading" />
                </Show>
                <Text role=TextRole::Caption tone=TextTone::Warning layout_class="browser-embed-warning">
                    {EMBED_WARNING}
                </Text>
                <iframe
                    class="browser-frame"
                    title="Browser content"
                    src=move || frame_src.get()
                    sandbox=FRAME_SANDBOX
                    on:load=move |_| loading.set(false)
                ></iframe>
            </div>
        </AppShell>
    }
}
