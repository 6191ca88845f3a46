//! Desktop shell state and pointer interaction types.

use desktop_app_contract::{AppId, Preferences, TimerState};

/// Window size for apps missing from the generated catalog.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// See [`DEFAULT_WINDOW_WIDTH`].
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Window geometry in viewport pixels.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Moves the rect by a pointer delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Grows the rect to at least `min_w` by `min_h`.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// One open app window. Each app has at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub rect: WindowRect,
    /// Geometry to return to when a maximized window is restored.
    pub restore_rect: Option<WindowRect>,
    /// Stacking order; higher is on top.
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
}

/// Whole shell state owned by the runtime reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    /// Open windows in stacking order, topmost last.
    pub windows: Vec<WindowRecord>,
    /// Focused app. Always one of `windows` when set.
    pub active_app: Option<AppId>,
    /// Whether the assistant sidebar is shown.
    pub assistant_open: bool,
    /// Lock gate. The desktop boots locked.
    pub locked: bool,
    /// Hydrated user preferences.
    pub preferences: Preferences,
    /// Clock countdown, kept here so it survives closing the Clock window.
    pub timer: TimerState,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active_app: None,
            assistant_open: false,
            locked: true,
            preferences: Preferences::default(),
            timer: TimerState::default(),
        }
    }
}

impl DesktopState {
    /// Window record for `app_id`, if open.
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn is_open(&self, app_id: AppId) -> bool {
        self.window(app_id).is_some()
    }

    /// `false` for apps that are not open.
    pub fn is_minimized(&self, app_id: AppId) -> bool {
        self.window(app_id).map(|w| w.minimized).unwrap_or(false)
    }

    /// Whether `app_id` has focus.
    pub fn is_active(&self, app_id: AppId) -> bool {
        self.active_app == Some(app_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer location in client coordinates.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Title-bar drag in progress.
pub struct DragSession {
    pub app_id: AppId,
    /// Pointer position when the drag began.
    pub pointer_start: PointerPosition,
    /// Window geometry when the drag began; moves apply the pointer delta to it.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer state kept apart from [`DesktopState`] so drags do not touch it.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
