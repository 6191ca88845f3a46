//! Typed host-domain contracts shared by the desktop runtime, the apps, and the browser adapters.
//!
//! The crate owns the preference-storage contract, the assistant chat/image service contract and
//! its reply protocol, the wallpaper fallback policy, and time helpers. Concrete browser adapters
//! live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assistant;
pub mod host;
pub mod storage;
pub mod time;
pub mod wallpaper;

pub use assistant::{
    parse_reply, AssistantAction, AssistantError, AssistantFuture, AssistantReply,
    AssistantService, ChatRequest, ChatRole, ChatTurn, ImageRequest, NoopAssistantService,
    ASSISTANT_SYSTEM_PROMPT,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
pub use wallpaper::{
    fallback_wallpaper_url, image_data_url, resolve_wallpaper_url, wallpaper_seed,
    ResolvedWallpaper, FALLBACK_IMAGE_BASE_URL,
};
