//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for preference storage
//! (`localStorage`) and the generative-AI backend (Gemini chat plus Imagen wallpapers).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod assistant;
pub mod storage;

pub use adapters::{
    assistant_service, build_host_services, prefs_store, selected_host_strategy,
    AssistantServiceAdapter, PrefsStoreAdapter,
};
pub use assistant::GeminiAssistantService;
pub use storage::local_prefs::WebPrefsStore;
