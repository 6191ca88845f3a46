//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{AssistantService, MemoryPrefsStore, NoopAssistantService, PrefsStore};

/// Host strategy selected when the service bundle was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters (`localStorage`, `fetch`).
    Browser,
    /// In-memory adapters without network access, for native builds and tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific adapter selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates free of browser API details.
#[derive(Clone)]
pub struct HostServices {
    /// Durable preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Chat and image-generation backend.
    pub assistant: Rc<dyn AssistantService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle from explicit adapters.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        assistant: Rc<dyn AssistantService>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            prefs,
            assistant,
            host_strategy,
        }
    }

    /// Builds an in-memory bundle with no network access.
    pub fn headless() -> Self {
        Self::new(
            Rc::new(MemoryPrefsStore::default()),
            Rc::new(NoopAssistantService),
            HostStrategy::Headless,
        )
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn headless_bundle_uses_in_memory_prefs() {
        let host = HostServices::headless();
        block_on(host.prefs.save_pref("os_theme", "\"dark\"")).expect("save");
        assert_eq!(
            block_on(host.prefs.load_pref("os_theme")).expect("load"),
            Some("\"dark\"".to_string())
        );
        assert_eq!(host.host_strategy.as_str(), "headless");
    }
}
