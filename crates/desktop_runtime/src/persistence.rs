//! Preference hydration and per-key persistence over the host [`PrefsStore`].
//!
//! Values are written as JSON text. Values written before that convention (bare tokens such as
//! `light` or a raw API key) are still accepted on read.

use desktop_app_contract::{GlassStyle, IconStyle, Language, PreferenceKey, Preferences, Theme};
use leptos::logging;
use platform_host::{save_pref_with, PrefsStore};
use serde::de::DeserializeOwned;

async fn load_raw(store: &dyn PrefsStore, key: PreferenceKey) -> Option<String> {
    match store.load_pref(key.storage_key()).await {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("load preference {} failed: {err}", key.storage_key());
            None
        }
    }
}

fn decode_token<T: DeserializeOwned>(
    key: PreferenceKey,
    raw: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let decoded = serde_json::from_str::<T>(raw).ok().or_else(|| parse(raw));
    if decoded.is_none() {
        logging::warn!(
            "ignoring unrecognized preference {}: {raw:?}",
            key.storage_key()
        );
    }
    decoded
}

fn decode_text(raw: &str) -> String {
    serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string())
}

/// Reads every preference slot, keeping defaults for missing or unreadable values.
pub async fn load_preferences(store: &dyn PrefsStore) -> Preferences {
    let mut prefs = Preferences::default();

    if let Some(raw) = load_raw(store, PreferenceKey::Theme).await {
        if let Some(theme) = decode_token(PreferenceKey::Theme, &raw, Theme::parse) {
            prefs.theme = theme;
        }
    }
    if let Some(raw) = load_raw(store, PreferenceKey::GlassStyle).await {
        if let Some(style) = decode_token(PreferenceKey::GlassStyle, &raw, GlassStyle::parse) {
            prefs.glass_style = style;
        }
    }
    if let Some(raw) = load_raw(store, PreferenceKey::IconStyle).await {
        if let Some(style) = decode_token(PreferenceKey::IconStyle, &raw, IconStyle::parse) {
            prefs.icon_style = style;
        }
    }
    if let Some(raw) = load_raw(store, PreferenceKey::Language).await {
        if let Some(language) = decode_token(PreferenceKey::Language, &raw, Language::parse) {
            prefs.language = language;
        }
    }
    if let Some(raw) = load_raw(store, PreferenceKey::ApiKey).await {
        prefs.api_key = decode_text(&raw);
    }
    if let Some(raw) = load_raw(store, PreferenceKey::Wallpaper).await {
        let url = decode_text(&raw);
        prefs.wallpaper_url = (!url.trim().is_empty()).then_some(url);
    }

    prefs
}

/// Writes the slot `key` of `prefs`. An unset wallpaper deletes its key.
///
/// # Errors
///
/// Returns the store or serialization error.
pub async fn persist_preference(
    store: &dyn PrefsStore,
    prefs: &Preferences,
    key: PreferenceKey,
) -> Result<(), String> {
    let storage_key = key.storage_key();
    match key {
        PreferenceKey::Theme => save_pref_with(store, storage_key, &prefs.theme).await,
        PreferenceKey::GlassStyle => save_pref_with(store, storage_key, &prefs.glass_style).await,
        PreferenceKey::IconStyle => save_pref_with(store, storage_key, &prefs.icon_style).await,
        PreferenceKey::Language => save_pref_with(store, storage_key, &prefs.language).await,
        PreferenceKey::ApiKey => save_pref_with(store, storage_key, &prefs.api_key).await,
        PreferenceKey::Wallpaper => match prefs.wallpaper_url.as_deref() {
            Some(url) => save_pref_with(store, storage_key, url).await,
            None => store.delete_pref(storage_key).await,
        },
    }
}
