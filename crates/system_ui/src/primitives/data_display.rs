use super::*;

#[component]
/// Typographic text run.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder content shown when a view has nothing to display.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            {children()}
        </div>
    }
}

#[component]
/// Vertical list container for selectable rows.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-surface", layout_class)
            role="listbox"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="list-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// One cell in a [`StatusBar`](super::StatusBar).
pub fn StatusBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-statusbar-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar-item"
        >
            {children()}
        </span>
    }
}

#[component]
/// One chat transcript bubble. `speaker` is `user` or `assistant`.
pub fn ChatBubble(
    speaker: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-chat-bubble", layout_class)
            data-ui-primitive="true"
            data-ui-kind="chat-bubble"
            data-ui-slot=speaker
        >
            {children()}
        </div>
    }
}

#[component]
/// Indeterminate activity indicator.
pub fn Spinner(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-spinner", layout_class)
            role="progressbar"
            aria-label=move || aria_label.get()
            aria-busy="true"
            data-ui-primitive="true"
            data-ui-kind="spinner"
        ></span>
    }
}
