//! Clock desktop app: a wall clock plus the shell-owned countdown timer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod format;

use std::time::Duration;

use chrono::Local;
use desktop_app_contract::{format_countdown, AppServices, PRESET_MINUTES};
use leptos::{leptos_dom::helpers::IntervalHandle, *};
use system_ui::prelude::*;

fn preset_label(minutes: u32) -> String {
    format!("+{minutes}m")
}

#[component]
/// Clock app window contents.
///
/// The wall clock ticks locally. The countdown lives in shell state so it keeps its value when
/// the window is closed and reopened; it only advances while this component is mounted.
pub fn ClockApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let timer = services.timer;
    let preferences = services.preferences;
    let now = create_rw_signal(Local::now());

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(Local::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let ticking = create_memo(move |_| {
        timer
            .state
            .with(|state| state.running && state.remaining_seconds > 0)
    });
    let countdown = store_value::<Option<IntervalHandle>>(None);
    let stop_countdown = move || {
        if let Some(handle) = countdown.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };
    create_effect(move |_| {
        stop_countdown();
        if !ticking.get() {
            return;
        }
        match set_interval_with_handle(move || timer.tick(), Duration::from_secs(1)) {
            Ok(handle) => countdown.set_value(Some(handle)),
            Err(err) => logging::warn!("clock countdown interval failed: {err:?}"),
        }
    });
    on_cleanup(stop_countdown);

    let running = Signal::derive(move || timer.state.with(|state| state.running));

    view! {
        <AppShell layout_class="app-clock-shell">
            <section class="clock-face" aria-live="off">
                <Text role=TextRole::Display>{move || format::wall_time(&now.get())}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || format::date_line(&now.get(), preferences.language())}
                </Text>
            </section>

            <section class="clock-timer" aria-label="Timer">
                <Text role=TextRole::Title>
                    {move || timer.state.with(|state| format_countdown(state.remaining_seconds))}
                </Text>
                <ToolBar aria_label="Timer controls">
                    <Button
                        variant=ButtonVariant::Primary
                        shape=ButtonShape::Circle
                        aria_label=Signal::derive(move || {
                            let label = if running.get() { "Pause" } else { "Start" };
                            label.to_string()
                        })
                        pressed=running
                        on_click=Callback::new(move |_| timer.toggle())
                    >
                        {move || {
                            let icon = if running.get() { IconName::Pause } else { IconName::Play };
                            view! { <Icon icon /> }
                        }}
                    </Button>
                    <IconButton
                        icon=IconName::Refresh
                        aria_label="Reset"
                        title="Reset"
                        on_click=Callback::new(move |_| timer.reset())
                    />
                </ToolBar>
                <ToolBar aria_label="Timer presets">
                    {PRESET_MINUTES
                        .into_iter()
                        .map(|minutes| {
                            view! {
                                <Button
                                    size=ButtonSize::Sm
                                    shape=ButtonShape::Pill
                                    on_click=Callback::new(move |_| timer.preset(minutes))
                                >
                                    {preset_label(minutes)}
                                </Button>
                            }
                        })
                        .collect_view()}
                </ToolBar>
            </section>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preset_labels_match_quick_add_buttons() {
        let labels: Vec<_> = PRESET_MINUTES.into_iter().map(preset_label).collect();
        assert_eq!(labels, vec!["+1m", "+5m", "+15m"]);
    }
}
