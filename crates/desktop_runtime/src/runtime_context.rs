//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the assistant
//! session, and host bootstrap wiring. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices, Preferences, TimerState};
use leptos::*;
use platform_host::HostServices;

use crate::{
    assistant::AssistantSession,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Assistant transcript and in-flight requests. Lives here so it survives closing the sidebar.
    pub assistant: RwSignal<AssistantSession>,
    /// Preferences slice, notifying only when preferences change.
    pub preferences: Memo<Preferences>,
    /// Timer slice, notifying only when the countdown changes.
    pub timer: Memo<TimerState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Command transport handed to apps.
    pub app_commands: Callback<AppCommand>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Builds the service bundle mounted into an app window.
    pub fn app_services(&self) -> AppServices {
        let preferences = self.preferences;
        let timer = self.timer;
        self.host.with_value(|host| {
            AppServices::new(
                self.app_commands,
                Signal::derive(move || preferences.get()),
                Signal::derive(move || timer.get()),
                host.services(),
            )
        })
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted preferences.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let assistant = create_rw_signal(AssistantSession::new());
    let preferences = create_memo(move |_| state.with(|desktop| desktop.preferences.clone()));
    let timer = create_memo(move |_| state.with(|desktop| desktop.timer));

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });
    let app_commands = Callback::new(move |command: AppCommand| {
        dispatch.call(DesktopAction::HandleAppCommand { command });
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        assistant,
        preferences,
        timer,
        dispatch,
        app_commands,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
