//! Desktop shell UI composition and interaction surfaces.

mod assistant;
mod lock_screen;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

use self::{
    assistant::AssistantSidebar, lock_screen::LockScreen, taskbar::DesktopTaskbar,
    window::DesktopWindow,
};
use crate::{
    model::PointerPosition, reducer::DesktopAction, wallpaper, window_manager::open_app_ids,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const TASKBAR_HEIGHT_PX: i32 = 48;

#[component]
/// Top-level shell: the lock screen while locked, the desktop otherwise.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let preferences = runtime.preferences;
    let locked = create_memo(move |_| runtime.state.with(|desktop| desktop.locked));

    view! {
        <DesktopRoot
            theme=Signal::derive(move || preferences.with(|prefs| prefs.theme.as_str().to_string()))
            glass=Signal::derive(move || {
                preferences.with(|prefs| prefs.glass_style.as_str().to_string())
            })
            icon_style=Signal::derive(move || {
                preferences.with(|prefs| prefs.icon_style.as_str().to_string())
            })
            lang=Signal::derive(move || {
                preferences.with(|prefs| prefs.language.locale_tag().to_string())
            })
        >
            <Show when=move || locked.get() fallback=|| view! { <Desktop /> }>
                <LockScreen />
            </Show>
        </DesktopRoot>
    }
}

#[component]
fn Desktop() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open_apps = create_memo(move |_| runtime.state.with(open_app_ids));
    let backdrop_style =
        Signal::derive(move || runtime.preferences.with(wallpaper::backdrop_style));

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime
            .interaction
            .with_untracked(|interaction| interaction.dragging.is_some())
        {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| end_drag(runtime));
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| end_drag(runtime));
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });

    view! {
        <DesktopBackdrop style=backdrop_style>
            <DesktopWindowLayer>
                <For each=move || open_apps.get() key=|app_id| *app_id let:app_id>
                    <DesktopWindow app_id />
                </For>
            </DesktopWindowLayer>
        </DesktopBackdrop>
        <AssistantSidebar />
        <DesktopTaskbar />
    }
}

fn end_drag(runtime: DesktopRuntimeContext) {
    if runtime
        .interaction
        .with_untracked(|interaction| interaction.dragging.is_some())
    {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
