//! Shared window-manager transition helpers and the memo-friendly projections read by the shell.

use desktop_app_contract::{AppId, IconStyle};

use crate::{
    apps,
    model::{DesktopState, WindowRecord, WindowRect},
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 320;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 220;

const CASCADE_ORIGIN_X: i32 = 100;
const CASCADE_ORIGIN_Y: i32 = 60;
const CASCADE_STEP: i32 = 32;
const CASCADE_SLOTS: i32 = 6;

/// Returns the initial rect for a newly opened `app_id` window.
///
/// Windows cascade from the top-left so a new window never lands exactly on an older one.
pub fn cascade_rect(state: &DesktopState, app_id: AppId) -> WindowRect {
    let (w, h) = apps::window_size(app_id);
    let slot = i32::try_from(state.windows.len()).unwrap_or(0) % CASCADE_SLOTS;
    WindowRect {
        x: CASCADE_ORIGIN_X + slot * CASCADE_STEP,
        y: CASCADE_ORIGIN_Y + slot * CASCADE_STEP,
        w,
        h,
    }
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

/// Raises `app_id` to the top of the stack and marks it active.
///
/// Returns `false` when the app is not open.
pub fn focus_app_internal(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.app_id == app_id) else {
        return false;
    };

    if index + 1 != state.windows.len() {
        let window = state.windows.remove(index);
        state.windows.push(window);
    }
    state.active_app = Some(app_id);
    normalize_window_stack(state);
    true
}

/// Normalizes z-index ordering and drops an active id that no longer names an open window.
pub fn normalize_window_stack(state: &mut DesktopState) {
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = u32::try_from(idx + 1).unwrap_or(u32::MAX);
    }

    if let Some(active) = state.active_app {
        if !state.is_open(active) {
            state.active_app = None;
        }
    }
}

pub fn find_window_mut(state: &mut DesktopState, app_id: AppId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.app_id == app_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One taskbar launcher button.
pub struct TaskbarEntry {
    pub app_id: AppId,
    /// Whether the app has a window, minimized or not.
    pub open: bool,
}

/// Projects desktop state into taskbar launcher entries in catalog order.
///
/// Focus changes, window moves, and minimization leave the result equal, so a memo over this
/// projection does not notify the taskbar for them.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    apps::taskbar_apps()
        .into_iter()
        .map(|app_id| TaskbarEntry {
            app_id,
            open: state.is_open(app_id),
        })
        .collect()
}

/// Returns open app ids in catalog order, independent of stacking.
///
/// The window layer keys its rows on this list; a stable order keeps focus changes from
/// reordering window DOM nodes (which would reload the browser iframe).
pub fn open_app_ids(state: &DesktopState) -> Vec<AppId> {
    AppId::ALL
        .into_iter()
        .filter(|app_id| state.is_open(*app_id))
        .collect()
}

fn tint(style: IconStyle, colorful: &'static str) -> &'static str {
    match style {
        IconStyle::Colorful => colorful,
        IconStyle::Monochrome => "white",
    }
}

/// Icon tint token for an app launcher.
pub fn app_icon_accent(app_id: AppId, style: IconStyle) -> &'static str {
    tint(
        style,
        match app_id {
            AppId::Settings => "gray",
            AppId::Browser => "blue",
            AppId::Notes => "yellow",
            AppId::Clock => "red",
        },
    )
}

/// Icon tint token for the assistant launcher.
pub fn assistant_icon_accent(style: IconStyle) -> &'static str {
    tint(style, "purple")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(app_id: AppId) -> WindowRecord {
        WindowRecord {
            app_id,
            rect: WindowRect::default(),
            restore_rect: None,
            z_index: 0,
            minimized: false,
            maximized: false,
        }
    }

    #[test]
    fn focus_moves_window_to_top_and_renumbers_stack() {
        let mut state = DesktopState::default();
        state.windows = vec![record(AppId::Notes), record(AppId::Clock)];
        normalize_window_stack(&mut state);

        assert!(focus_app_internal(&mut state, AppId::Notes));
        let order: Vec<_> = state.windows.iter().map(|w| (w.app_id, w.z_index)).collect();
        assert_eq!(order, vec![(AppId::Clock, 1), (AppId::Notes, 2)]);
        assert_eq!(state.active_app, Some(AppId::Notes));
        assert!(!focus_app_internal(&mut state, AppId::Browser));
    }

    #[test]
    fn normalize_drops_dangling_active_app() {
        let mut state = DesktopState::default();
        state.active_app = Some(AppId::Settings);
        normalize_window_stack(&mut state);
        assert_eq!(state.active_app, None);
    }

    #[test]
    fn open_ids_ignore_stacking_order() {
        let mut state = DesktopState::default();
        state.windows = vec![record(AppId::Clock), record(AppId::Settings)];
        assert_eq!(open_app_ids(&state), vec![AppId::Settings, AppId::Clock]);
    }

    #[test]
    fn cascade_offsets_each_new_window() {
        let mut state = DesktopState::default();
        let first = cascade_rect(&state, AppId::Notes);
        state.windows.push(record(AppId::Clock));
        let second = cascade_rect(&state, AppId::Notes);
        assert_eq!(second.x - first.x, CASCADE_STEP);
        assert_eq!(second.y - first.y, CASCADE_STEP);
        assert_eq!((first.w, first.h), apps::window_size(AppId::Notes));
    }

    #[test]
    fn monochrome_icons_share_one_tint() {
        assert_eq!(app_icon_accent(AppId::Browser, IconStyle::Colorful), "blue");
        assert_eq!(assistant_icon_accent(IconStyle::Colorful), "purple");
        for app_id in AppId::ALL {
            assert_eq!(app_icon_accent(app_id, IconStyle::Monochrome), "white");
        }
    }
}
