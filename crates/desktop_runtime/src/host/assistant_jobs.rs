use std::rc::Rc;

use leptos::{logging, spawn_local, SignalUpdate, SignalWithUntracked, StoredValue};
use platform_host::{
    resolve_wallpaper_url, wallpaper_seed, AssistantAction, AssistantService, ImageRequest,
};

use crate::{
    assistant::{plan_action, ActionPlan, SendStep},
    host::DesktopHostContext,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

fn api_key(runtime: DesktopRuntimeContext) -> String {
    runtime
        .state
        .with_untracked(|state| state.preferences.api_key.trim().to_string())
}

fn assistant_service(host: StoredValue<DesktopHostContext>) -> Rc<dyn AssistantService> {
    host.with_value(|host| host.assistant_service())
}

/// Records `text` in the transcript and, when a key is configured, sends it with the history.
///
/// The reply is appended when it arrives and its action is dispatched.
pub fn submit_chat(runtime: DesktopRuntimeContext, text: String) {
    let api_key = api_key(runtime);
    let language = runtime
        .state
        .with_untracked(|state| state.preferences.language);
    let step = runtime
        .assistant
        .try_update(|session| session.begin_send(&text, &api_key, language))
        .unwrap_or(SendStep::Ignored);
    let SendStep::Request(request) = step else {
        return;
    };

    let service = assistant_service(runtime.host);
    spawn_local(async move {
        let result = service.chat(&request).await;
        if let Err(err) = &result {
            logging::warn!("assistant chat failed: {err}");
        }
        if let Some(action) = runtime
            .assistant
            .try_update(|session| session.finish_chat(result))
        {
            apply_action(runtime, action);
        }
    });
}

fn apply_action(runtime: DesktopRuntimeContext, action: AssistantAction) {
    match plan_action(action) {
        ActionPlan::Dispatch(action) => runtime.dispatch_action(action),
        ActionPlan::GenerateWallpaper(prompt) => generate_wallpaper(runtime, prompt),
        ActionPlan::Nothing => {}
    }
}

/// Generates a wallpaper for `prompt` behind a pending transcript entry, then applies it.
pub fn generate_wallpaper(runtime: DesktopRuntimeContext, prompt: String) {
    let Some(entry_id) = runtime
        .assistant
        .try_update(|session| session.begin_wallpaper())
    else {
        return;
    };

    let request = ImageRequest {
        api_key: api_key(runtime),
        prompt,
    };
    let service = assistant_service(runtime.host);
    spawn_local(async move {
        let result = resolve_wallpaper_url(service.as_ref(), &request, wallpaper_seed())
            .await
            .map(|resolved| {
                if let Some(reason) = &resolved.fallback_reason {
                    logging::warn!("wallpaper generation fell back to prompt image: {reason}");
                }
                resolved.url
            });
        if let Err(err) = &result {
            logging::warn!("wallpaper generation failed: {err}");
        }

        let url = runtime
            .assistant
            .try_update(|session| session.finish_wallpaper(entry_id, result))
            .flatten();
        if let Some(url) = url {
            runtime.dispatch_action(DesktopAction::SetWallpaper { url });
        }
    });
}
