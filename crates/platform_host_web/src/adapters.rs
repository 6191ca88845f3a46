use std::rc::Rc;

use platform_host::{
    AssistantError, AssistantFuture, AssistantService, ChatRequest, HostServices, HostStrategy,
    ImageRequest, MemoryPrefsStore, NoopAssistantService, PrefsStore, PrefsStoreFuture,
};

use crate::{GeminiAssistantService, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage`.
    Browser(WebPrefsStore),
    /// Process-local map used by stubbed builds.
    Memory(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Memory(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Memory(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Memory(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete assistant backend behind [`AssistantService`].
#[derive(Debug, Clone)]
pub enum AssistantServiceAdapter {
    /// Gemini/Imagen over `fetch`.
    Browser(GeminiAssistantService),
    /// Offline stub; every call fails and wallpapers use the fallback source.
    Stub(NoopAssistantService),
}

impl AssistantService for AssistantServiceAdapter {
    fn chat<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        match self {
            Self::Browser(service) => service.chat(request),
            Self::Stub(service) => service.chat(request),
        }
    }

    fn generate_image<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        match self {
            Self::Browser(service) => service.generate_image(request),
            Self::Stub(service) => service.generate_image(request),
        }
    }
}

/// Builds the preference adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Memory(MemoryPrefsStore::default()),
    }
}

/// Builds the assistant adapter for the compile-time selected host strategy.
pub fn assistant_service() -> AssistantServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AssistantServiceAdapter::Browser(GeminiAssistantService::new()),
        HostStrategy::Headless => AssistantServiceAdapter::Stub(NoopAssistantService),
    }
}

/// Assembles the [`HostServices`] bundle handed to `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices::new(
        Rc::new(prefs_store()),
        Rc::new(assistant_service()),
        selected_host_strategy(),
    )
}
