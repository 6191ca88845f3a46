use desktop_app_contract::PreferenceKey;
use leptos::{logging, spawn_local, SignalWithUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_preference(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    key: PreferenceKey,
) {
    let preferences = runtime.state.with_untracked(|state| state.preferences.clone());
    spawn_local(async move {
        let store = host.prefs_store();
        if let Err(err) = persistence::persist_preference(store.as_ref(), &preferences, key).await
        {
            logging::warn!("persist preference {} failed: {err}", key.storage_key());
        }
    });
}
