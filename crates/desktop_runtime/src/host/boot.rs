use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let store = host.prefs_store();
            let preferences = persistence::load_preferences(store.as_ref()).await;
            logging::log!(
                "hydrated preferences via {} host",
                host.host_strategy_name()
            );
            dispatch.call(DesktopAction::HydratePreferences { preferences });
        });
    });
}
