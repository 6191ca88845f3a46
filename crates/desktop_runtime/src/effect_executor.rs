//! Drains reducer effects into preference writes.

use desktop_app_contract::PreferenceKey;
use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Keys touched by a batch, first-seen order, each once. Writes read the latest preferences, so
/// repeated changes to one key in a batch need a single write.
fn persisted_keys(effects: &[RuntimeEffect]) -> Vec<PreferenceKey> {
    let mut keys = Vec::new();
    for RuntimeEffect::PersistPreference(key) in effects {
        if !keys.contains(key) {
            keys.push(*key);
        }
    }
    keys
}

pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let keys = runtime.effects.with(|queue| persisted_keys(queue));
        if keys.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());
        runtime.host.with_value(|host| {
            for key in keys {
                host.persist_preference(runtime, key);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn batch_persists_each_key_once_in_order() {
        let batch = [
            RuntimeEffect::PersistPreference(PreferenceKey::Theme),
            RuntimeEffect::PersistPreference(PreferenceKey::Wallpaper),
            RuntimeEffect::PersistPreference(PreferenceKey::Theme),
        ];
        assert_eq!(
            persisted_keys(&batch),
            vec![PreferenceKey::Theme, PreferenceKey::Wallpaper]
        );
        assert_eq!(persisted_keys(&[]), Vec::<PreferenceKey>::new());
    }
}
