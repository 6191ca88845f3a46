//! Built-in Settings desktop app for display, appearance, language, and AI key preferences.
//!
//! Every control sends an [`desktop_app_contract::AppCommand`] through the injected
//! [`AppServices`]; the desktop runtime applies and persists the change.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppServices, GlassStyle, IconStyle, Language, Theme};
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SettingsSection {
    Display,
    Appearance,
    System,
    Ai,
}

impl SettingsSection {
    const ALL: [Self; 4] = [Self::Display, Self::Appearance, Self::System, Self::Ai];

    fn label(self, language: Language) -> &'static str {
        match self {
            Self::Display => language.pick("Display", "Anzeige"),
            Self::Appearance => language.pick("Appearance", "Aussehen"),
            Self::System => "System",
            Self::Ai => "AI / API",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Display => IconName::Image,
            Self::Appearance => IconName::Sparkle,
            Self::System => IconName::Settings,
            Self::Ai => IconName::Wand,
        }
    }

    fn panel_id(self) -> &'static str {
        match self {
            Self::Display => "settings-panel-display",
            Self::Appearance => "settings-panel-appearance",
            Self::System => "settings-panel-system",
            Self::Ai => "settings-panel-ai",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    GlassStyle,
    ThemeMode,
    Wallpaper,
    WallpaperGenerated,
    WallpaperDefault,
    ResetWallpaper,
    IconStyle,
    Language,
    ApiDescription,
    ApiNotice,
}

impl Label {
    fn text(self, language: Language) -> &'static str {
        match self {
            Self::GlassStyle => language.pick("Glass Style", "Glas-Stil"),
            Self::ThemeMode => language.pick("Theme Mode", "Design Modus"),
            Self::Wallpaper => language.pick("Wallpaper", "Hintergrundbild"),
            Self::WallpaperGenerated => language.pick(
                "A generated wallpaper replaces the theme background.",
                "Ein generiertes Bild ersetzt den Design-Hintergrund.",
            ),
            Self::WallpaperDefault => language.pick(
                "The theme background is shown.",
                "Der Design-Hintergrund wird angezeigt.",
            ),
            Self::ResetWallpaper => language.pick("Reset wallpaper", "Hintergrund zurücksetzen"),
            Self::IconStyle => language.pick("Icon Style", "Icon Stil"),
            Self::Language => language.pick("Language", "Sprache"),
            Self::ApiDescription => language.pick(
                "Enter your API key to enable Gemini Assistant and Image Generation features.",
                "Geben Sie Ihren API-Schlüssel ein, um den Gemini Assistant und die Bildgenerierung zu aktivieren.",
            ),
            Self::ApiNotice => language.pick(
                "Keys are stored locally in your browser.",
                "Schlüssel werden lokal in Ihrem Browser gespeichert.",
            ),
        }
    }
}

fn glass_label(style: GlassStyle, language: Language) -> &'static str {
    match style {
        GlassStyle::Frosted => language.pick("Frosted (Matte)", "Frosted (Matt)"),
        GlassStyle::Liquid => language.pick("Liquid (Glossy)", "Liquid (Glänzend)"),
    }
}

fn theme_label(theme: Theme, language: Language) -> &'static str {
    match theme {
        Theme::Light => language.pick("Light", "Hell"),
        Theme::Dark => language.pick("Dark", "Dunkel"),
    }
}

fn icon_style_label(style: IconStyle, language: Language) -> &'static str {
    match style {
        IconStyle::Colorful => language.pick("Colorful", "Farbig"),
        IconStyle::Monochrome => language.pick("Monochrome", "Monochrom"),
    }
}

fn language_label(option: Language, _language: Language) -> &'static str {
    match option {
        Language::En => "English",
        Language::De => "Deutsch",
    }
}

fn choice_row<T>(
    aria_label: &'static str,
    options: &'static [T],
    current: Signal<T>,
    language: Signal<Language>,
    label: fn(T, Language) -> &'static str,
    choose: impl Fn(T) + Clone + 'static,
) -> impl IntoView
where
    T: Clone + PartialEq + 'static,
{
    view! {
        <SegmentedControl aria_label=aria_label>
            {options
                .iter()
                .cloned()
                .map(|option| {
                    let choose = choose.clone();
                    let selected_option = option.clone();
                    let label_option = option.clone();
                    view! {
                        <SegmentedControlOption
                            selected=Signal::derive(move || current.get() == selected_option)
                            on_click=Callback::new(move |_| choose(option.clone()))
                        >
                            {move || label(label_option.clone(), language.get())}
                        </SegmentedControlOption>
                    }
                })
                .collect_view()}
        </SegmentedControl>
    }
}

#[component]
/// Settings app window contents.
pub fn SettingsApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let preferences = services.preferences;
    let active_section = create_rw_signal(SettingsSection::Display);
    let language = Signal::derive(move || preferences.language());
    let text = move |label: Label| move || label.text(language.get()).to_string();

    let glass = Signal::derive(move || preferences.current.with(|prefs| prefs.glass_style));
    let theme = Signal::derive(move || preferences.current.with(|prefs| prefs.theme));
    let icon_style = Signal::derive(move || preferences.current.with(|prefs| prefs.icon_style));
    let api_key = Signal::derive(move || preferences.current.with(|prefs| prefs.api_key.clone()));
    let has_wallpaper =
        Signal::derive(move || preferences.current.with(|prefs| prefs.wallpaper_url.is_some()));

    view! {
        <AppShell layout_class="app-settings-shell">
            <div class="settings-layout">
                <TabList layout_class="settings-sections" aria_label="Settings sections">
                    {SettingsSection::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <Tab
                                    controls=section.panel_id()
                                    selected=Signal::derive(move || active_section.get() == section)
                                    leading_icon=section.icon()
                                    on_click=Callback::new(move |_| active_section.set(section))
                                >
                                    {move || section.label(language.get())}
                                </Tab>
                            }
                        })
                        .collect_view()}
                </TabList>

                <div class="settings-content">
                    <Show when=move || active_section.get() == SettingsSection::Display>
                        <div id=SettingsSection::Display.panel_id() role="tabpanel">
                            <FieldGroup title=Signal::derive(text(Label::GlassStyle))>
                                {choice_row(
                                    "Glass style",
                                    GlassStyle::ALL,
                                    glass,
                                    language,
                                    glass_label,
                                    move |style| preferences.set_glass_style(style),
                                )}
                            </FieldGroup>
                            <FieldGroup title=Signal::derive(text(Label::ThemeMode))>
                                {choice_row(
                                    "Theme mode",
                                    Theme::ALL,
                                    theme,
                                    language,
                                    theme_label,
                                    move |theme| preferences.set_theme(theme),
                                )}
                            </FieldGroup>
                            <FieldGroup
                                title=Signal::derive(text(Label::Wallpaper))
                                description=Signal::derive(move || {
                                    if has_wallpaper.get() {
                                        Label::WallpaperGenerated.text(language.get()).to_string()
                                    } else {
                                        Label::WallpaperDefault.text(language.get()).to_string()
                                    }
                                })
                            >
                                <Button
                                    variant=ButtonVariant::Standard
                                    leading_icon=IconName::Refresh
                                    disabled=Signal::derive(move || !has_wallpaper.get())
                                    on_click=Callback::new(move |_| preferences.clear_wallpaper())
                                >
                                    {text(Label::ResetWallpaper)}
                                </Button>
                            </FieldGroup>
                        </div>
                    </Show>

                    <Show when=move || active_section.get() == SettingsSection::Appearance>
                        <div id=SettingsSection::Appearance.panel_id() role="tabpanel">
                            <FieldGroup title=Signal::derive(text(Label::IconStyle))>
                                {choice_row(
                                    "Icon style",
                                    IconStyle::ALL,
                                    icon_style,
                                    language,
                                    icon_style_label,
                                    move |style| preferences.set_icon_style(style),
                                )}
                            </FieldGroup>
                        </div>
                    </Show>

                    <Show when=move || active_section.get() == SettingsSection::System>
                        <div id=SettingsSection::System.panel_id() role="tabpanel">
                            <FieldGroup title=Signal::derive(text(Label::Language))>
                                {choice_row(
                                    "Language",
                                    Language::ALL,
                                    language,
                                    language,
                                    language_label,
                                    move |language| preferences.set_language(language),
                                )}
                            </FieldGroup>
                        </div>
                    </Show>

                    <Show when=move || active_section.get() == SettingsSection::Ai>
                        <div id=SettingsSection::Ai.panel_id() role="tabpanel">
                            <FieldGroup
                                title="Google AI Studio API"
                                description=Signal::derive(move || {
                                    Label::ApiDescription.text(language.get()).to_string()
                                })
                            >
                                <TextField
                                    input_type="password"
                                    autocomplete="off"
                                    placeholder="AIzaSy..."
                                    aria_label="API key"
                                    value=api_key
                                    on_input=Callback::new(move |ev| {
                                        preferences.set_api_key(event_target_value(&ev));
                                    })
                                />
                            </FieldGroup>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {text(Label::ApiNotice)}
                            </Text>
                        </div>
                    </Show>
                </div>
            </div>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn section_labels_follow_language() {
        let en: Vec<_> = SettingsSection::ALL
            .iter()
            .map(|section| section.label(Language::En))
            .collect();
        let de: Vec<_> = SettingsSection::ALL
            .iter()
            .map(|section| section.label(Language::De))
            .collect();
        assert_eq!(en, vec!["Display", "Appearance", "System", "AI / API"]);
        assert_eq!(de, vec!["Anzeige", "Aussehen", "System", "AI / API"]);
    }

    #[test]
    fn key_notice_is_localized() {
        assert_eq!(
            Label::ApiNotice.text(Language::En),
            "Keys are stored locally in your browser."
        );
        assert_ne!(
            Label::ApiNotice.text(Language::De),
            Label::ApiNotice.text(Language::En)
        );
    }

    #[test]
    fn option_labels_cover_every_value() {
        for style in GlassStyle::ALL {
            assert!(!glass_label(*style, Language::De).is_empty());
        }
        assert_eq!(theme_label(Theme::Dark, Language::De), "Dunkel");
        assert_eq!(icon_style_label(IconStyle::Monochrome, Language::En), "Monochrome");
        assert_eq!(language_label(Language::De, Language::En), "Deutsch");
    }

    #[test]
    fn panel_ids_are_unique() {
        let mut ids: Vec<_> = SettingsSection::ALL.iter().map(|s| s.panel_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SettingsSection::ALL.len());
    }
}
