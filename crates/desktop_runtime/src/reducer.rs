//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{
    AppCommand, AppId, GlassStyle, IconStyle, Language, PreferenceKey, Preferences, Theme,
    TimerCommand,
};
use thiserror::Error;

use crate::{
    model::{DesktopState, DragSession, InteractionState, PointerPosition, WindowRecord, WindowRect},
    window_manager::{
        cascade_rect, find_window_mut, focus_app_internal, normalize_window_stack,
        MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or unminimize and focus it when it is already open.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Close an app window. Closing an app that is not open does nothing.
    CloseApp {
        /// App to close.
        app_id: AppId,
    },
    /// Minimize an open app window.
    MinimizeApp {
        /// App to minimize.
        app_id: AppId,
    },
    /// Focus and raise an open app window.
    FocusApp {
        /// App to focus.
        app_id: AppId,
    },
    /// Switch a window between the viewport rect and its restore rect.
    ToggleMaximize {
        /// App whose window toggles.
        app_id: AppId,
        /// Viewport rectangle to maximize into.
        viewport: WindowRect,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// App whose window is dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Show or hide the assistant sidebar.
    ToggleAssistant,
    /// Hide the assistant sidebar.
    CloseAssistant,
    /// Leave the lock screen. The PIN is checked by the lock gate before dispatch.
    Unlock,
    /// Return to the lock screen.
    Lock,
    /// Set the light/dark palette.
    SetTheme {
        /// New palette.
        theme: Theme,
    },
    /// Set the window material.
    SetGlassStyle {
        /// New material.
        style: GlassStyle,
    },
    /// Set the icon palette.
    SetIconStyle {
        /// New icon palette.
        style: IconStyle,
    },
    /// Set the UI language.
    SetLanguage {
        /// New language.
        language: Language,
    },
    /// Replace the stored API key.
    SetApiKey {
        /// New key, stored as typed.
        api_key: String,
    },
    /// Use a generated image as the desktop background.
    SetWallpaper {
        /// Image URL.
        url: String,
    },
    /// Return to the theme background.
    ClearWallpaper,
    /// Replace preferences with values loaded at boot. Nothing is persisted.
    HydratePreferences {
        /// Loaded preferences.
        preferences: Preferences,
    },
    /// Overwrite and start the countdown, then open the clock app.
    SetTimer {
        /// Countdown length.
        seconds: u32,
    },
    /// Operate the countdown.
    Timer(TimerCommand),
    /// Apply a command sent by an app through its services.
    HandleAppCommand {
        /// App-originated command.
        command: AppCommand,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Write one preference slot to durable storage.
    PersistPreference(PreferenceKey),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for rejected actions. State is left unchanged when one is returned.
pub enum ReducerError {
    /// The action targets an app without an open window.
    #[error("app `{0}` is not open")]
    AppNotOpen(AppId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::AppNotOpen`] when focus, minimize, maximize, or a drag targets an app
/// that has no window.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => open_app(state, app_id),
        DesktopAction::CloseApp { app_id } => {
            state.windows.retain(|w| w.app_id != app_id);
            if state.active_app == Some(app_id) {
                state.active_app = None;
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|drag| drag.app_id == app_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::MinimizeApp { app_id } => {
            let window = find_window_mut(state, app_id).ok_or(ReducerError::AppNotOpen(app_id))?;
            window.minimized = true;
            if state.active_app == Some(app_id) {
                state.active_app = None;
            }
        }
        DesktopAction::FocusApp { app_id } => {
            if !focus_app_internal(state, app_id) {
                return Err(ReducerError::AppNotOpen(app_id));
            }
        }
        DesktopAction::ToggleMaximize { app_id, viewport } => {
            let window = find_window_mut(state, app_id).ok_or(ReducerError::AppNotOpen(app_id))?;
            if window.maximized {
                if let Some(restore_rect) = window.restore_rect.take() {
                    window.rect = restore_rect;
                }
                window.maximized = false;
            } else {
                window.restore_rect = Some(window.rect);
                window.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                window.maximized = true;
            }
            window.minimized = false;
            focus_app_internal(state, app_id);
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let window = state.window(app_id).ok_or(ReducerError::AppNotOpen(app_id))?;
            let maximized = window.maximized;
            let rect_start = window.rect;
            focus_app_internal(state, app_id);
            interaction.dragging = (!maximized).then_some(DragSession {
                app_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = find_window_mut(state, session.app_id) {
                    if !window.maximized {
                        let moved = session.rect_start.offset(dx, dy);
                        // Keep the titlebar reachable.
                        window.rect = WindowRect {
                            y: moved.y.max(0),
                            ..moved
                        };
                    }
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::ToggleAssistant => {
            state.assistant_open = !state.assistant_open;
        }
        DesktopAction::CloseAssistant => {
            state.assistant_open = false;
        }
        DesktopAction::Unlock => {
            state.locked = false;
        }
        DesktopAction::Lock => {
            state.locked = true;
            interaction.dragging = None;
        }
        DesktopAction::SetTheme { theme } => {
            if state.preferences.theme != theme {
                state.preferences.theme = theme;
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::Theme));
            }
        }
        DesktopAction::SetGlassStyle { style } => {
            if state.preferences.glass_style != style {
                state.preferences.glass_style = style;
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::GlassStyle));
            }
        }
        DesktopAction::SetIconStyle { style } => {
            if state.preferences.icon_style != style {
                state.preferences.icon_style = style;
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::IconStyle));
            }
        }
        DesktopAction::SetLanguage { language } => {
            if state.preferences.language != language {
                state.preferences.language = language;
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::Language));
            }
        }
        DesktopAction::SetApiKey { api_key } => {
            if state.preferences.api_key != api_key {
                state.preferences.api_key = api_key;
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::ApiKey));
            }
        }
        DesktopAction::SetWallpaper { url } => {
            if state.preferences.wallpaper_url.as_deref() != Some(url.as_str()) {
                state.preferences.wallpaper_url = Some(url);
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::Wallpaper));
            }
        }
        DesktopAction::ClearWallpaper => {
            if state.preferences.wallpaper_url.take().is_some() {
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::Wallpaper));
            }
        }
        DesktopAction::HydratePreferences { preferences } => {
            state.preferences = preferences;
        }
        DesktopAction::SetTimer { seconds } => {
            state.timer.start(seconds);
            open_app(state, AppId::Clock);
        }
        DesktopAction::Timer(command) => state.timer.apply(command),
        DesktopAction::HandleAppCommand { command } => {
            return reduce_desktop(state, interaction, app_command_action(command));
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

/// Maps an app-originated command onto the reducer action that implements it.
pub fn app_command_action(command: AppCommand) -> DesktopAction {
    match command {
        AppCommand::SetTheme(theme) => DesktopAction::SetTheme { theme },
        AppCommand::SetGlassStyle(style) => DesktopAction::SetGlassStyle { style },
        AppCommand::SetIconStyle(style) => DesktopAction::SetIconStyle { style },
        AppCommand::SetLanguage(language) => DesktopAction::SetLanguage { language },
        AppCommand::SetApiKey(api_key) => DesktopAction::SetApiKey { api_key },
        AppCommand::ClearWallpaper => DesktopAction::ClearWallpaper,
        AppCommand::Timer(command) => DesktopAction::Timer(command),
    }
}

fn open_app(state: &mut DesktopState, app_id: AppId) {
    if let Some(window) = find_window_mut(state, app_id) {
        window.minimized = false;
    } else {
        let rect = cascade_rect(state, app_id);
        state.windows.push(WindowRecord {
            app_id,
            rect,
            restore_rect: None,
            z_index: 0,
            minimized: false,
            maximized: false,
        });
    }
    focus_app_internal(state, app_id);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::{open_app_ids, taskbar_entries};

    fn apply(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        apply(state, interaction, DesktopAction::OpenApp { app_id });
    }

    fn open_ids(state: &DesktopState) -> Vec<AppId> {
        state.windows.iter().map(|w| w.app_id).collect()
    }

    fn minimized_ids(state: &DesktopState) -> Vec<AppId> {
        state
            .windows
            .iter()
            .filter(|w| w.minimized)
            .map(|w| w.app_id)
            .collect()
    }

    fn assert_active_is_open(state: &DesktopState) {
        if let Some(active) = state.active_app {
            assert!(state.is_open(active), "active {active} is not open");
        }
    }

    #[test]
    fn open_app_focuses_new_window_and_updates_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::Clock);

        assert_eq!(state.active_app, Some(AppId::Clock));
        assert_eq!(open_ids(&state), vec![AppId::Notes, AppId::Clock]);
        assert_eq!(state.windows[1].z_index, 2);
    }

    #[test]
    fn reopening_open_app_keeps_membership_and_moves_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::Browser);

        open(&mut state, &mut interaction, AppId::Notes);

        assert_eq!(open_app_ids(&state), vec![AppId::Browser, AppId::Notes]);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.active_app, Some(AppId::Notes));
        assert_eq!(state.windows.last().map(|w| w.app_id), Some(AppId::Notes));
    }

    #[test]
    fn opening_minimized_app_restores_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Settings);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeApp {
                app_id: AppId::Settings,
            },
        );
        assert_eq!(state.active_app, None);
        assert!(state.is_minimized(AppId::Settings));

        open(&mut state, &mut interaction, AppId::Settings);
        assert!(!state.is_minimized(AppId::Settings));
        assert_eq!(state.active_app, Some(AppId::Settings));
    }

    #[test]
    fn closing_active_app_clears_focus_without_refocus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::Clock);

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::Clock,
            },
        );

        assert_eq!(open_ids(&state), vec![AppId::Notes]);
        assert_eq!(state.active_app, None);
    }

    #[test]
    fn close_removes_minimized_app_and_ignores_unknown() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Browser);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeApp {
                app_id: AppId::Browser,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::Browser,
            },
        );
        assert!(open_ids(&state).is_empty());
        assert!(minimized_ids(&state).is_empty());

        let before = state.clone();
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::Clock,
            },
        );
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn focus_and_minimize_reject_apps_that_are_not_open() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Notes);
        let before = state.clone();

        for action in [
            DesktopAction::FocusApp {
                app_id: AppId::Clock,
            },
            DesktopAction::MinimizeApp {
                app_id: AppId::Clock,
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::AppNotOpen(AppId::Clock))
            );
            assert_eq!(state, before);
        }
    }

    #[test]
    fn focus_leaves_open_and_minimized_sets_alone() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::Clock);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeApp {
                app_id: AppId::Clock,
            },
        );

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::FocusApp {
                app_id: AppId::Notes,
            },
        );

        assert_eq!(state.active_app, Some(AppId::Notes));
        assert_eq!(open_app_ids(&state), vec![AppId::Notes, AppId::Clock]);
        assert_eq!(minimized_ids(&state), vec![AppId::Clock]);
    }

    #[test]
    fn minimizing_twice_is_a_no_op() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Notes);
        let minimize = DesktopAction::MinimizeApp {
            app_id: AppId::Notes,
        };
        apply(&mut state, &mut interaction, minimize.clone());
        let before = state.clone();
        apply(&mut state, &mut interaction, minimize);
        assert_eq!(state, before);
    }

    #[test]
    fn active_app_stays_open_across_mixed_sequences() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let script = [
            DesktopAction::OpenApp {
                app_id: AppId::Notes,
            },
            DesktopAction::OpenApp {
                app_id: AppId::Clock,
            },
            DesktopAction::MinimizeApp {
                app_id: AppId::Notes,
            },
            DesktopAction::CloseApp {
                app_id: AppId::Clock,
            },
            DesktopAction::OpenApp {
                app_id: AppId::Browser,
            },
            DesktopAction::FocusApp {
                app_id: AppId::Notes,
            },
            DesktopAction::CloseApp {
                app_id: AppId::Notes,
            },
            DesktopAction::MinimizeApp {
                app_id: AppId::Settings,
            },
            DesktopAction::OpenApp {
                app_id: AppId::Settings,
            },
            DesktopAction::CloseApp {
                app_id: AppId::Browser,
            },
        ];

        for action in script {
            let _ = reduce_desktop(&mut state, &mut interaction, action);
            assert_active_is_open(&state);
            let mut ids = open_ids(&state);
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), state.windows.len());
        }
        assert_eq!(open_ids(&state), vec![AppId::Settings]);
    }

    #[test]
    fn moving_window_updates_rect_during_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::Clock);
        let original = state.window(AppId::Notes).expect("notes").rect;

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Notes,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(state.active_app, Some(AppId::Notes));
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );

        let moved = state.window(AppId::Notes).expect("notes").rect;
        assert_eq!(moved.x, original.x + 25);
        assert_eq!(moved.y, original.y + 40);
        apply(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn maximized_windows_do_not_move() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 720,
        };
        open(&mut state, &mut interaction, AppId::Browser);
        let original = state.window(AppId::Browser).expect("browser").rect;

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Browser,
                viewport,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Browser,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 300, y: 300 },
            },
        );
        assert_eq!(state.window(AppId::Browser).expect("browser").rect, viewport);

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Browser,
                viewport,
            },
        );
        let window = state.window(AppId::Browser).expect("browser");
        assert_eq!(window.rect, original);
        assert!(!window.maximized);
        assert_eq!(window.restore_rect, None);
    }

    #[test]
    fn taskbar_projection_ignores_focus_moves_and_minimize() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::Clock);
        let before = taskbar_entries(&state);

        for action in [
            DesktopAction::FocusApp {
                app_id: AppId::Notes,
            },
            DesktopAction::BeginMove {
                app_id: AppId::Clock,
                pointer: PointerPosition { x: 0, y: 0 },
            },
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 40, y: 40 },
            },
            DesktopAction::EndMove,
            DesktopAction::MinimizeApp {
                app_id: AppId::Notes,
            },
        ] {
            apply(&mut state, &mut interaction, action);
            assert_eq!(taskbar_entries(&state), before);
        }

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::Clock,
            },
        );
        assert_ne!(taskbar_entries(&state), before);
    }

    #[test]
    fn preference_setters_persist_only_their_key_when_changed() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::SetTheme {
                theme: Theme::Light,
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistPreference(PreferenceKey::Theme)]
        );
        assert_eq!(state.preferences.theme, Theme::Light);

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::SetTheme {
                theme: Theme::Light,
            },
        );
        assert!(effects.is_empty());

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: AppCommand::SetApiKey("key".to_string()),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistPreference(PreferenceKey::ApiKey)]
        );
        assert!(state.preferences.has_api_key());
    }

    #[test]
    fn wallpaper_set_and_clear_persist_the_wallpaper_key() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                url: "https://img.test/a.png".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistPreference(PreferenceKey::Wallpaper)]
        );

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: AppCommand::ClearWallpaper,
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistPreference(PreferenceKey::Wallpaper)]
        );
        assert_eq!(state.preferences.wallpaper_url, None);
        assert!(apply(&mut state, &mut interaction, DesktopAction::ClearWallpaper).is_empty());
    }

    #[test]
    fn hydration_replaces_preferences_without_persisting() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let preferences = Preferences {
            language: Language::De,
            glass_style: GlassStyle::Frosted,
            ..Preferences::default()
        };
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::HydratePreferences {
                preferences: preferences.clone(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.preferences, preferences);
    }

    #[test]
    fn set_timer_starts_countdown_and_opens_clock() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::SetTimer { seconds: 120 },
        );

        assert_eq!(state.timer.remaining_seconds, 120);
        assert_eq!(state.timer.duration_seconds, 120);
        assert!(state.timer.running);
        assert!(state.is_open(AppId::Clock));
        assert_eq!(state.active_app, Some(AppId::Clock));
    }

    #[test]
    fn timer_ticks_to_zero_and_stops_then_reset_falls_back() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::SetTimer { seconds: 2 },
        );
        for _ in 0..3 {
            apply(
                &mut state,
                &mut interaction,
                DesktopAction::Timer(TimerCommand::Tick),
            );
        }
        assert_eq!(state.timer.remaining_seconds, 0);
        assert!(!state.timer.running);

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::Timer(TimerCommand::Toggle),
        );
        assert!(!state.timer.running);

        state.timer = Default::default();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: AppCommand::Timer(TimerCommand::Reset),
            },
        );
        assert_eq!(state.timer.remaining_seconds, 300);
    }

    #[test]
    fn desktop_boots_locked_and_lock_ends_drags() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert!(state.locked);
        apply(&mut state, &mut interaction, DesktopAction::Unlock);
        assert!(!state.locked);

        open(&mut state, &mut interaction, AppId::Notes);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Notes,
                pointer: PointerPosition { x: 1, y: 1 },
            },
        );
        apply(&mut state, &mut interaction, DesktopAction::Lock);
        assert!(state.locked);
        assert_eq!(interaction.dragging, None);
        assert!(state.is_open(AppId::Notes));
    }

    #[test]
    fn assistant_toggle_and_close() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        apply(&mut state, &mut interaction, DesktopAction::ToggleAssistant);
        assert!(state.assistant_open);
        apply(&mut state, &mut interaction, DesktopAction::CloseAssistant);
        assert!(!state.assistant_open);
    }
}
