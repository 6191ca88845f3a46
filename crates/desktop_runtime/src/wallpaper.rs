//! Desktop background resolution.

use desktop_app_contract::{Preferences, Theme};

/// Background used by the dark theme when no wallpaper was generated.
pub const DARK_THEME_WALLPAPER_URL: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2072&auto=format&fit=crop";
/// Background used by the light theme when no wallpaper was generated.
pub const LIGHT_THEME_WALLPAPER_URL: &str =
    "https://images.unsplash.com/photo-1493246507139-91e8fad9978e?q=80&w=2070&auto=format&fit=crop";

pub fn theme_wallpaper_url(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => DARK_THEME_WALLPAPER_URL,
        Theme::Light => LIGHT_THEME_WALLPAPER_URL,
    }
}

/// Returns the background URL: a generated wallpaper displaces the theme default.
pub fn active_wallpaper_url(prefs: &Preferences) -> &str {
    prefs
        .wallpaper_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| theme_wallpaper_url(prefs.theme))
}

/// Inline style for the desktop backdrop.
pub fn backdrop_style(prefs: &Preferences) -> String {
    let url = active_wallpaper_url(prefs).replace('"', "%22");
    format!("background-image:url(\"{url}\");")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_default_applies_without_generated_wallpaper() {
        let prefs = Preferences {
            theme: Theme::Light,
            ..Preferences::default()
        };
        assert_eq!(active_wallpaper_url(&prefs), LIGHT_THEME_WALLPAPER_URL);
    }

    #[test]
    fn generated_wallpaper_displaces_theme_default() {
        let prefs = Preferences {
            wallpaper_url: Some("data:image/png;base64,AAAA".to_string()),
            ..Preferences::default()
        };
        assert_eq!(active_wallpaper_url(&prefs), "data:image/png;base64,AAAA");
        assert_eq!(
            backdrop_style(&prefs),
            "background-image:url(\"data:image/png;base64,AAAA\");"
        );
    }

    #[test]
    fn quotes_cannot_break_out_of_the_style() {
        let prefs = Preferences {
            wallpaper_url: Some("https://x/a\"b".to_string()),
            ..Preferences::default()
        };
        assert_eq!(
            backdrop_style(&prefs),
            "background-image:url(\"https://x/a%22b\");"
        );
    }
}
