use std::time::Duration;

use desktop_app_contract::{IconStyle, Language};
use system_ui::{Icon, IconName, IconSize, Taskbar, TaskbarButton, TaskbarSection};

use super::*;
use crate::{
    apps,
    window_manager::{app_icon_accent, assistant_icon_accent, taskbar_entries, TaskbarEntry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_taskbar_clock(snapshot: TaskbarClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

fn taskbar_app_aria_label(title: &str, open: bool, language: Language) -> String {
    if open {
        format!("{title} ({})", language.pick("open", "geöffnet"))
    } else {
        title.to_string()
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = create_memo(move |_| runtime.state.with(taskbar_entries));
    let language = create_memo(move |_| runtime.preferences.with(|prefs| prefs.language));
    let icon_style = create_memo(move |_| runtime.preferences.with(|prefs| prefs.icon_style));
    let assistant_open = create_memo(move |_| runtime.state.with(|desktop| desktop.assistant_open));

    let clock = create_rw_signal(TaskbarClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="launchers" aria_label="Apps">
                <For each=move || entries.get() key=|entry| *entry let:entry>
                    <TaskbarAppButton entry language icon_style />
                </For>
                <TaskbarButton
                    ui_slot="assistant-toggle"
                    aria_label="Assistant"
                    title="Assistant"
                    selected=assistant_open
                    pressed=assistant_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleAssistant);
                    })
                >
                    <Icon
                        icon=IconName::Sparkle
                        size=IconSize::Md
                        accent=Signal::derive(move || {
                            assistant_icon_accent(icon_style.get()).to_string()
                        })
                    />
                </TaskbarButton>
            </TaskbarSection>
            <TaskbarSection ui_slot="system">
                <TaskbarButton
                    ui_slot="lock"
                    aria_label=Signal::derive(move || {
                        language.get().pick("Lock", "Sperren").to_string()
                    })
                    title=Signal::derive(move || {
                        language.get().pick("Lock", "Sperren").to_string()
                    })
                    on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::Lock))
                >
                    <Icon icon=IconName::Lock size=IconSize::Sm />
                </TaskbarButton>
                <time data-ui-slot="clock" aria-live="off">
                    {move || format_taskbar_clock(clock.get())}
                </time>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarAppButton(
    entry: TaskbarEntry,
    language: Memo<Language>,
    icon_style: Memo<IconStyle>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = entry.app_id;
    let active = create_memo(move |_| runtime.state.with(|desktop| desktop.is_active(app_id)));
    let title = Signal::derive(move || apps::app_title(app_id, language.get()));

    view! {
        <TaskbarButton
            aria_label=Signal::derive(move || {
                taskbar_app_aria_label(&title.get(), entry.open, language.get())
            })
            title=title
            data_app=app_id.slug()
            selected=entry.open
            pressed=active
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::OpenApp { app_id });
            })
        >
            <Icon
                icon=apps::app_icon_name(app_id)
                size=IconSize::Md
                accent=Signal::derive(move || app_icon_accent(app_id, icon_style.get()).to_string())
            />
            <span data-ui-slot="open-indicator" data-ui-open=entry.open.to_string()></span>
        </TaskbarButton>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_pads_hours_and_minutes() {
        assert_eq!(
            format_taskbar_clock(TaskbarClockSnapshot { hour: 7, minute: 5 }),
            "07:05"
        );
        assert_eq!(
            format_taskbar_clock(TaskbarClockSnapshot {
                hour: 23,
                minute: 59,
            }),
            "23:59"
        );
    }

    #[test]
    fn open_apps_announce_their_state() {
        assert_eq!(
            taskbar_app_aria_label("Notizen", true, Language::De),
            "Notizen (geöffnet)"
        );
        assert_eq!(taskbar_app_aria_label("Clock", false, Language::En), "Clock");
    }
}
