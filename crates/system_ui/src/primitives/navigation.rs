use super::*;

#[component]
/// Horizontal toolbar row.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutPadding::Sm)] padding: LayoutPadding,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-variant="standard"
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
            role="toolbar"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Status strip pinned to the bottom of an app.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            data-ui-variant="standard"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab strip container.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=move || aria_label.get()
        >
            {children()}
        </div>
    }
}

#[component]
/// One tab in a [`TabList`].
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] controls: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="tab".to_string()
            aria_controls=controls
            selected=selected
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </Button>
    }
}
