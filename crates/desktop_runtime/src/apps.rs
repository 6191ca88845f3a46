//! App catalog compiled from per-app manifests, plus the registry that mounts app views.

use std::sync::OnceLock;

use desktop_app_browser::BrowserApp;
use desktop_app_clock::ClockApp;
use desktop_app_contract::{AppId, AppModule, AppMountContext, Language};
use desktop_app_notes::NotesApp;
use desktop_app_settings::SettingsApp;
use leptos::*;
use serde::Deserialize;
use system_ui::IconName;

use crate::model::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct ManifestWindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct ManifestEntry {
    app_id: String,
    display_name: String,
    display_name_de: String,
    show_in_taskbar: bool,
    window_defaults: ManifestWindowDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static app metadata. Never mutated after startup.
pub struct AppDescriptor {
    pub app_id: AppId,
    pub display_name: String,
    pub display_name_de: String,
    pub show_in_taskbar: bool,
    pub window_width: i32,
    pub window_height: i32,
}

impl AppDescriptor {
    fn fallback(app_id: AppId) -> Self {
        let name = match app_id {
            AppId::Settings => "Settings",
            AppId::Browser => "Browser",
            AppId::Notes => "Notes",
            AppId::Clock => "Clock",
        };
        Self {
            app_id,
            display_name: name.to_string(),
            display_name_de: name.to_string(),
            show_in_taskbar: true,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }

    /// Returns the name shown in titlebars and tooltips.
    pub fn name(&self, language: Language) -> &str {
        language.pick(&self.display_name, &self.display_name_de)
    }
}

fn parse_catalog(raw: &str) -> Result<Vec<AppDescriptor>, String> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    entries
        .into_iter()
        .map(|entry| {
            let app_id = AppId::from_slug(&entry.app_id)
                .ok_or_else(|| format!("unknown app id `{}`", entry.app_id))?;
            Ok(AppDescriptor {
                app_id,
                display_name: entry.display_name,
                display_name_de: entry.display_name_de,
                show_in_taskbar: entry.show_in_taskbar,
                window_width: entry.window_defaults.width,
                window_height: entry.window_defaults.height,
            })
        })
        .collect()
}

/// Returns the catalog in taskbar order.
pub fn app_catalog() -> &'static [AppDescriptor] {
    static CATALOG: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| match parse_catalog(APP_MANIFEST_CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("app catalog parse failed: {err}");
            AppId::ALL.into_iter().map(AppDescriptor::fallback).collect()
        }
    })
}

pub fn app_descriptor(app_id: AppId) -> AppDescriptor {
    app_catalog()
        .iter()
        .find(|entry| entry.app_id == app_id)
        .cloned()
        .unwrap_or_else(|| AppDescriptor::fallback(app_id))
}

pub fn app_title(app_id: AppId, language: Language) -> String {
    app_descriptor(app_id).name(language).to_string()
}

/// Default window `(width, height)` for `app_id`.
pub fn window_size(app_id: AppId) -> (i32, i32) {
    let descriptor = app_descriptor(app_id);
    (descriptor.window_width, descriptor.window_height)
}

pub fn taskbar_apps() -> Vec<AppId> {
    app_catalog()
        .iter()
        .filter(|entry| entry.show_in_taskbar)
        .map(|entry| entry.app_id)
        .collect()
}

pub fn app_icon_name(app_id: AppId) -> IconName {
    match app_id {
        AppId::Settings => IconName::Settings,
        AppId::Browser => IconName::Globe,
        AppId::Notes => IconName::Notes,
        AppId::Clock => IconName::Clock,
    }
}

fn mount_settings_app(context: AppMountContext) -> View {
    view! { <SettingsApp services=context.services /> }.into_view()
}

fn mount_browser_app(context: AppMountContext) -> View {
    view! { <BrowserApp services=context.services /> }.into_view()
}

fn mount_notes_app(context: AppMountContext) -> View {
    view! { <NotesApp services=context.services /> }.into_view()
}

fn mount_clock_app(context: AppMountContext) -> View {
    view! { <ClockApp services=context.services /> }.into_view()
}

/// Returns the mount module for `app_id`.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Settings => AppModule::new(mount_settings_app),
        AppId::Browser => AppModule::new(mount_browser_app),
        AppId::Notes => AppModule::new(mount_notes_app),
        AppId::Clock => AppModule::new(mount_clock_app),
    }
}
