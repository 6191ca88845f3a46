//! Desktop preference values shared by the shell and the settings app.

use serde::{Deserialize, Serialize};

/// Storage key of the notes collection owned by the notes app.
pub const NOTES_STORAGE_KEY: &str = "os_notes";

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)? }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the persisted token.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            /// Parses a persisted token.
            pub fn parse(raw: &str) -> Option<Self> {
                match raw.trim() {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
}

token_enum! {
    /// Light or dark desktop palette.
    Theme {
        /// Light palette.
        Light => "light",
        /// Dark palette.
        Dark => "dark",
    }
    default Dark
}

token_enum! {
    /// Window glass material.
    GlassStyle {
        /// Opaque blur.
        Frosted => "frosted",
        /// Translucent, refractive glass.
        Liquid => "liquid",
    }
    default Liquid
}

token_enum! {
    /// Taskbar and launcher icon palette.
    IconStyle {
        /// Per-app accent colors.
        Colorful => "colorful",
        /// Single foreground color.
        Monochrome => "monochrome",
    }
    default Colorful
}

token_enum! {
    /// UI language.
    Language {
        /// English.
        En => "en",
        /// German.
        De => "de",
    }
    default En
}

impl Language {
    /// Picks the variant of a localized value for this language.
    pub fn pick<T>(self, en: T, de: T) -> T {
        match self {
            Self::En => en,
            Self::De => de,
        }
    }

    /// Returns the BCP 47 tag used for date formatting.
    pub const fn locale_tag(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::De => "de-DE",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Every user preference that survives a reload.
pub struct Preferences {
    /// Light/dark palette.
    pub theme: Theme,
    /// Window material.
    pub glass_style: GlassStyle,
    /// Icon palette.
    pub icon_style: IconStyle,
    /// UI language.
    pub language: Language,
    /// Generative-AI API key. Empty when unset.
    pub api_key: String,
    /// Generated wallpaper that replaces the theme background.
    pub wallpaper_url: Option<String>,
}

impl Preferences {
    /// Returns whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One persisted preference slot.
pub enum PreferenceKey {
    /// [`Preferences::theme`].
    Theme,
    /// [`Preferences::glass_style`].
    GlassStyle,
    /// [`Preferences::icon_style`].
    IconStyle,
    /// [`Preferences::language`].
    Language,
    /// [`Preferences::api_key`].
    ApiKey,
    /// [`Preferences::wallpaper_url`].
    Wallpaper,
}

impl PreferenceKey {
    /// Every preference slot.
    pub const ALL: [Self; 6] = [
        Self::Theme,
        Self::GlassStyle,
        Self::IconStyle,
        Self::Language,
        Self::ApiKey,
        Self::Wallpaper,
    ];

    /// Returns the durable storage key.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Theme => "os_theme",
            Self::GlassStyle => "os_glass_style",
            Self::IconStyle => "os_icon_style",
            Self::Language => "os_language",
            Self::ApiKey => "os_gemini_api_key",
            Self::Wallpaper => "os_wallpaper",
        }
    }
}
