//! Centralized icon catalog rendered as inline SVG.
//!
//! Components reference icons by [`IconName`] only. Color is inherited through `currentColor`, so
//! the `data-ui-accent` token on the icon decides its tint in the shell stylesheet.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Settings app.
    Settings,
    /// Browser app.
    Globe,
    /// Notes app.
    Notes,
    /// Clock app.
    Clock,
    /// Assistant sidebar.
    Sparkle,
    /// Lock screen and re-lock control.
    Lock,
    /// Chat send.
    Send,
    /// Create item.
    Add,
    /// Delete item.
    Delete,
    /// History back.
    ArrowLeft,
    /// History forward.
    ArrowRight,
    /// Reload.
    Refresh,
    /// Start countdown.
    Play,
    /// Pause countdown.
    Pause,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Dismiss/close.
    Dismiss,
    /// AI text rewrite.
    Wand,
    /// Wallpaper/image.
    Image,
}

impl IconName {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Globe => "globe",
            Self::Notes => "notes",
            Self::Clock => "clock",
            Self::Sparkle => "sparkle",
            Self::Lock => "lock",
            Self::Send => "send",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::Refresh => "refresh",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::Wand => "wand",
            Self::Image => "image",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Settings => {
                r#"<circle cx="12" cy="12" r="3" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M12 2.75v2.5M12 18.75v2.5M2.75 12h2.5M18.75 12h2.5M5.46 5.46l1.77 1.77M16.77 16.77l1.77 1.77M5.46 18.54l1.77-1.77M16.77 7.23l1.77-1.77" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Globe => {
                r#"<circle cx="12" cy="12" r="9" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M3 12h18M12 3c2.5 2.6 3.75 5.6 3.75 9S14.5 18.4 12 21c-2.5-2.6-3.75-5.6-3.75-9S9.5 5.6 12 3Z" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::Notes => {
                r#"<rect x="5" y="3" width="14" height="18" rx="2" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M8.5 8h7M8.5 12h7M8.5 16h4" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Clock => {
                r#"<circle cx="12" cy="12" r="9" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M12 7v5l3 2" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Sparkle => {
                r#"<path d="M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9L12 3ZM18.5 15.5l.8 2.2 2.2.8-2.2.8-.8 2.2-.8-2.2-2.2-.8 2.2-.8.8-2.2Z"/>"#
            }
            Self::Lock => {
                r#"<rect x="5" y="10.5" width="14" height="10" rx="2" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M8.25 10.5V7.75a3.75 3.75 0 0 1 7.5 0v2.75" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::Send => r#"<path d="M3.5 20.5 21 12 3.5 3.5 6 12l-2.5 8.5ZM6 12h8"/>"#,
            Self::Add => {
                r#"<path d="M12 4.75v14.5M4.75 12h14.5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Delete => {
                r#"<path d="M4.75 6.5h14.5M9.5 6.5V4.75h5V6.5M6.5 6.5l1 13h9l1-13" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"/>"#
            }
            Self::ArrowLeft => {
                r#"<path d="M19.25 12H4.75M10.5 6.25 4.75 12l5.75 5.75" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::ArrowRight => {
                r#"<path d="M4.75 12h14.5M13.5 6.25 19.25 12l-5.75 5.75" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Refresh => {
                r#"<path d="M19.25 12a7.25 7.25 0 1 1-2.12-5.13M19.25 4.75v4.5h-4.5" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Play => r#"<path d="M7 4.5v15L19.5 12 7 4.5Z"/>"#,
            Self::Pause => {
                r#"<rect x="6.5" y="4.5" width="4" height="15" rx="1"/><rect x="13.5" y="4.5" width="4" height="15" rx="1"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<rect x="3.75" y="3.75" width="16.5" height="16.5" rx="2.5" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::WindowRestore => {
                r#"<rect x="3.75" y="7.75" width="12.5" height="12.5" rx="2" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M7.75 3.75h10.5a2 2 0 0 1 2 2v10.5" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::Dismiss => {
                r#"<path d="M5.5 5.5l13 13M18.5 5.5l-13 13" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Wand => {
                r#"<path d="M4 20 15 9M13 7l4 4M17 3v3M15.5 4.5h3M20 8v2M19 9h2" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>"#
            }
            Self::Image => {
                r#"<rect x="3.75" y="4.75" width="16.5" height="14.5" rx="2" fill="none" stroke="currentColor" stroke-width="1.5"/><circle cx="9" cy="10" r="1.75"/><path d="m4.5 17.5 5-4.5 3 2.5 3.5-3.5 3.5 3.5" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px, window chrome.
    Xs,
    /// 16px, buttons and menus.
    #[default]
    Sm,
    /// 20px, taskbar.
    Md,
    /// 32px, empty states and the lock screen.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Tint token consumed by the stylesheet (for example `blue` or `white`).
    #[prop(optional, into)]
    accent: MaybeSignal<String>,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            data-ui-accent=move || accent.get()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
