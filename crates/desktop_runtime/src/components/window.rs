use desktop_app_contract::{AppId, AppMountContext};
use system_ui::{
    Icon, IconName, IconSize, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{apps, model::WindowRecord, window_manager::app_icon_accent};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_style(window: &WindowRecord) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        window.rect.x, window.rect.y, window.rect.w, window.rect.h, window.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let preferences = runtime.preferences;

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.window(app_id).cloned())
    });
    let focused = create_memo(move |_| runtime.state.with(|desktop| desktop.is_active(app_id)));
    let minimized = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.minimized)));
    let maximized = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized)));
    let style = Signal::derive(move || {
        window.with(|w| w.as_ref().map(window_style).unwrap_or_default())
    });
    let title =
        Signal::derive(move || apps::app_title(app_id, preferences.with(|prefs| prefs.language)));
    let accent = Signal::derive(move || {
        app_icon_accent(app_id, preferences.with(|prefs| prefs.icon_style)).to_string()
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusApp { app_id });
        }
    });
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            app_id,
            viewport: runtime
                .host
                .with_value(|host| host.desktop_viewport_rect(TASKBAR_HEIGHT_PX)),
        });
    };
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        toggle_maximize();
    });

    // Mounted once per open window; focus and geometry changes never remount the app.
    let contents = apps::app_module(app_id).mount(AppMountContext {
        app_id,
        services: runtime.app_services(),
    });

    view! {
        <WindowFrame
            style=style
            aria_label=title
            data_app=app_id.slug()
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=titlebar_double_click>
                <WindowTitle>
                    <Icon icon=apps::app_icon_name(app_id) size=IconSize::Sm accent=accent />
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeApp { app_id });
                        })
                    >
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() {
                                "Restore window"
                            } else {
                                "Maximize window"
                            };
                            label.to_string()
                        })
                        on_click=Callback::new(move |_| toggle_maximize())
                    >
                        {move || {
                            let icon = if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <Icon icon size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Close window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseApp { app_id });
                        })
                    >
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
        </WindowFrame>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    #[test]
    fn window_style_positions_and_stacks_the_frame() {
        let record = WindowRecord {
            app_id: AppId::Notes,
            rect: WindowRect {
                x: 132,
                y: 92,
                w: 760,
                h: 520,
            },
            restore_rect: None,
            z_index: 3,
            minimized: false,
            maximized: false,
        };
        assert_eq!(
            window_style(&record),
            "left:132px;top:92px;width:760px;height:520px;z-index:3;"
        );
    }
}
