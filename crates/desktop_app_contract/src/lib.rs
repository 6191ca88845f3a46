//! Shared contract types between the desktop runtime and the apps it hosts.
//!
//! Apps never touch shell state directly. They receive an [`AppServices`] bundle whose service
//! handles read reactive snapshots of shell state and send [`AppCommand`] values back to the
//! runtime reducer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod preferences;
pub mod timer;

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, SignalWith, SignalWithUntracked, View};
use platform_host::{
    AssistantError, AssistantService, ChatRequest, HostServices, PrefsStore,
};
use serde::{Deserialize, Serialize};

pub use preferences::{
    GlassStyle, IconStyle, Language, PreferenceKey, Preferences, Theme, NOTES_STORAGE_KEY,
};
pub use timer::{format_countdown, TimerCommand, TimerState, DEFAULT_RESET_SECONDS, PRESET_MINUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Identifier of a desktop application. The set is closed.
pub enum AppId {
    /// Preferences editor.
    Settings,
    /// Sandboxed web-page viewer.
    Browser,
    /// Notes editor.
    Notes,
    /// Wall clock and countdown timer.
    Clock,
}

impl AppId {
    /// Every app, in taskbar order.
    pub const ALL: [Self; 4] = [Self::Settings, Self::Browser, Self::Notes, Self::Clock];

    /// Returns the stable slug used in manifests and assistant actions.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Browser => "browser",
            Self::Notes => "notes",
            Self::Clock => "clock",
        }
    }

    /// Resolves a slug, ignoring ASCII case and surrounding whitespace.
    pub fn from_slug(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|app| app.slug().eq_ignore_ascii_case(raw))
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Switch light/dark palette.
    SetTheme(Theme),
    /// Switch window material.
    SetGlassStyle(GlassStyle),
    /// Switch icon palette.
    SetIconStyle(IconStyle),
    /// Switch UI language.
    SetLanguage(Language),
    /// Replace the stored API key.
    SetApiKey(String),
    /// Drop a generated wallpaper and return to the theme background.
    ClearWallpaper,
    /// Operate the countdown timer.
    Timer(TimerCommand),
}

#[derive(Clone, Copy)]
/// Preference read/write service used by the settings app and for localization.
pub struct PreferencesService {
    sender: Callback<AppCommand>,
    /// Current preferences.
    pub current: Signal<Preferences>,
}

impl PreferencesService {
    /// Returns the current UI language and tracks it.
    pub fn language(&self) -> Language {
        self.current.with(|prefs| prefs.language)
    }

    /// Requests a theme change.
    pub fn set_theme(&self, theme: Theme) {
        self.sender.call(AppCommand::SetTheme(theme));
    }

    /// Requests a glass style change.
    pub fn set_glass_style(&self, style: GlassStyle) {
        self.sender.call(AppCommand::SetGlassStyle(style));
    }

    /// Requests an icon style change.
    pub fn set_icon_style(&self, style: IconStyle) {
        self.sender.call(AppCommand::SetIconStyle(style));
    }

    /// Requests a language change.
    pub fn set_language(&self, language: Language) {
        self.sender.call(AppCommand::SetLanguage(language));
    }

    /// Stores a new API key.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.sender.call(AppCommand::SetApiKey(api_key.into()));
    }

    /// Clears a generated wallpaper.
    pub fn clear_wallpaper(&self) {
        self.sender.call(AppCommand::ClearWallpaper);
    }
}

#[derive(Clone, Copy)]
/// Countdown service for the clock app.
pub struct TimerService {
    sender: Callback<AppCommand>,
    /// Current countdown state.
    pub state: Signal<TimerState>,
}

impl TimerService {
    /// Play/pause.
    pub fn toggle(&self) {
        self.sender.call(AppCommand::Timer(TimerCommand::Toggle));
    }

    /// Stop and restore the chosen duration.
    pub fn reset(&self) {
        self.sender.call(AppCommand::Timer(TimerCommand::Reset));
    }

    /// Load a preset without starting it.
    pub fn preset(&self, minutes: u32) {
        self.sender
            .call(AppCommand::Timer(TimerCommand::Preset { minutes }));
    }

    /// Advance one second.
    pub fn tick(&self) {
        self.sender.call(AppCommand::Timer(TimerCommand::Tick));
    }
}

#[derive(Clone)]
/// One-shot text completion for app-level AI helpers.
pub struct AssistantClient {
    service: Rc<dyn AssistantService>,
    api_key: Signal<String>,
}

impl AssistantClient {
    /// Returns whether an API key is configured, tracking changes.
    pub fn is_configured(&self) -> bool {
        self.api_key.with(|key| !key.trim().is_empty())
    }

    /// Sends `prompt` without conversation history and returns the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::MissingApiKey`] when no key is configured, or the service error.
    pub async fn complete(&self, prompt: impl Into<String>) -> Result<String, AssistantError> {
        let api_key = self.api_key.with_untracked(|key| key.trim().to_string());
        if api_key.is_empty() {
            return Err(AssistantError::MissingApiKey);
        }
        let request = ChatRequest::single(api_key, prompt);
        self.service.chat(&request).await
    }
}

#[derive(Clone)]
/// Durable key/value storage for app-owned data.
pub struct StorageService {
    prefs: Rc<dyn PrefsStore>,
}

impl StorageService {
    /// Returns the shared store handle.
    pub fn store(&self) -> Rc<dyn PrefsStore> {
        Rc::clone(&self.prefs)
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Preferences and localization.
    pub preferences: PreferencesService,
    /// Countdown timer.
    pub timer: TimerService,
    /// AI text completion.
    pub assistant: AssistantClient,
    /// Durable storage.
    pub storage: StorageService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and state snapshots.
    pub fn new(
        sender: Callback<AppCommand>,
        preferences: Signal<Preferences>,
        timer: Signal<TimerState>,
        host: &HostServices,
    ) -> Self {
        let api_key = Signal::derive(move || preferences.with(|prefs| prefs.api_key.clone()));
        Self {
            preferences: PreferencesService {
                sender,
                current: preferences,
            },
            timer: TimerService {
                sender,
                state: timer,
            },
            assistant: AssistantClient {
                service: Rc::clone(&host.assistant),
                api_key,
            },
            storage: StorageService {
                prefs: Rc::clone(&host.prefs),
            },
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window.
pub struct AppMountContext {
    /// App being mounted.
    pub app_id: AppId,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn service_handles_route_typed_commands_to_the_runtime() {
        let _ = leptos::create_runtime();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sent);
        let services = AppServices::new(
            Callback::new(move |command: AppCommand| sink.borrow_mut().push(command)),
            Signal::derive(Preferences::default),
            Signal::derive(TimerState::default),
            &HostServices::headless(),
        );

        services.preferences.set_theme(Theme::Light);
        services.preferences.clear_wallpaper();
        services.timer.preset(5);

        assert_eq!(
            *sent.borrow(),
            vec![
                AppCommand::SetTheme(Theme::Light),
                AppCommand::ClearWallpaper,
                AppCommand::Timer(TimerCommand::Preset { minutes: 5 }),
            ]
        );
    }

    #[test]
    fn app_slugs_round_trip_case_insensitively() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_slug(app.slug()), Some(app));
        }
        assert_eq!(AppId::from_slug(" Notes "), Some(AppId::Notes));
        assert_eq!(AppId::from_slug("terminal"), None);
        assert_eq!(AppId::Clock.to_string(), "clock");
    }
}
