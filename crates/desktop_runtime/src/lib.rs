//! Desktop shell runtime: window lifecycle reducer, lock gate, assistant bridge, preference
//! persistence, and the Leptos components that render them.

pub mod apps;
pub mod assistant;
pub mod components;
mod effect_executor;
pub mod host;
pub mod lock;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod wallpaper;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use persistence::{load_preferences, persist_preference};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
