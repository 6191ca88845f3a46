use crate::{
    model::WindowRect,
    window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
};

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

#[cfg(target_arch = "wasm32")]
fn browser_inner_size() -> Option<(i32, i32)> {
    let window = web_sys::window()?;
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|value| value.as_f64()).map(|px| px as i32)
    };
    Some((
        read(window.inner_width()).unwrap_or(FALLBACK_VIEWPORT_WIDTH),
        read(window.inner_height()).unwrap_or(FALLBACK_VIEWPORT_HEIGHT),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_inner_size() -> Option<(i32, i32)> {
    None
}

/// Area above the taskbar that a maximized window fills.
pub(super) fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    let (width, height) =
        browser_inner_size().unwrap_or((FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT));
    WindowRect {
        x: 0,
        y: 0,
        w: width.max(MIN_WINDOW_WIDTH),
        h: (height - taskbar_height_px).max(MIN_WINDOW_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn viewport_leaves_room_for_the_taskbar() {
        assert_eq!(
            desktop_viewport_rect(48),
            WindowRect {
                x: 0,
                y: 0,
                w: 1024,
                h: 720,
            }
        );
    }
}
