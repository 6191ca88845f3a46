//! Shared UI primitive library for the desktop shell and its apps.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the shell stylesheet. Apps compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppShell, Button, ButtonShape, ButtonSize, ButtonVariant, ChatBubble, DesktopBackdrop,
    DesktopRoot, DesktopWindowLayer, EmptyState, FieldGroup, FieldVariant, IconButton, LayoutGap,
    LayoutPadding, ListSurface, SegmentedControl, SegmentedControlOption, SidePanel, Spinner,
    StatusBar, StatusBarItem, Tab, TabList, Taskbar, TaskbarButton, TaskbarSection, Text,
    TextArea, TextField, TextRole, TextTone, ToolBar, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Button, ButtonShape, ButtonSize, ButtonVariant, ChatBubble, EmptyState,
        FieldGroup, FieldVariant, Icon, IconButton, IconName, IconSize, LayoutGap, LayoutPadding,
        ListSurface, SegmentedControl, SegmentedControlOption, Spinner, StatusBar, StatusBarItem,
        Tab, TabList, Text, TextArea, TextField, TextRole, TextTone, ToolBar,
    };
}
