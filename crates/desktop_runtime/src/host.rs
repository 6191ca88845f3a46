//! Host-side runtime helpers for executing reducer effects, running assistant jobs, and querying
//! browser environment state.

mod assistant_jobs;
mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use desktop_app_contract::PreferenceKey;
use leptos::Callback;
use platform_host::{AssistantService, HostServices, PrefsStore};

use crate::{model::WindowRect, reducer::DesktopAction, runtime_context::DesktopRuntimeContext};

pub use assistant_jobs::{generate_wallpaper, submit_chat};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the host bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the injected host bundle, as handed to app services.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns the configured preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        Rc::clone(&self.services.prefs)
    }

    /// Returns the configured chat/image service.
    pub fn assistant_service(&self) -> Rc<dyn AssistantService> {
        Rc::clone(&self.services.assistant)
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Loads persisted preferences once and hydrates the reducer with them.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Writes the current value of `key` to the preference store in the background.
    pub fn persist_preference(&self, runtime: DesktopRuntimeContext, key: PreferenceKey) {
        persistence_effects::persist_preference(self.clone(), runtime, key);
    }

    /// Returns the current desktop viewport rect available to the shell window manager.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        host_ui::desktop_viewport_rect(taskbar_height_px)
    }
}
