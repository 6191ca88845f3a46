//! Shared shell, control, navigation, and data-display primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navigation;
mod shell;

pub use controls::{
    Button, FieldGroup, IconButton, SegmentedControl, SegmentedControlOption, TextArea, TextField,
};
pub use data_display::{ChatBubble, EmptyState, ListSurface, Spinner, StatusBarItem, Text};
pub use navigation::{StatusBar, Tab, TabList, ToolBar};
pub use shell::{
    AppShell, DesktopBackdrop, DesktopRoot, DesktopWindowLayer, SidePanel, Taskbar, TaskbarButton,
    TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Accent/emphasized button.
    Accent,
    /// Danger/destructive button.
    Danger,
    /// Circular icon-only button.
    Icon,
    /// Segmented control option.
    Segmented,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Accent => "accent",
            Self::Danger => "danger",
            Self::Icon => "icon",
            Self::Segmented => "segmented",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button, used by the lock keypad.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared button shape tokens.
pub enum ButtonShape {
    /// Rounded rectangle.
    #[default]
    Standard,
    /// Fully rounded ends.
    Pill,
    /// Circle.
    Circle,
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pill => "pill",
            Self::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Inset/editor input.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Large numeric display (clock faces, PIN dots).
    Display,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Display => "display",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("lock-key")),
            "ui-button lock-key"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonShape::Circle.token(), "circle");
        assert_eq!(TextRole::Display.token(), "display");
    }
}
