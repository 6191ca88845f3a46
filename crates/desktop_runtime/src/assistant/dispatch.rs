//! Maps parsed assistant actions onto shell operations.

use desktop_app_contract::{AppId, GlassStyle, Theme};
use platform_host::AssistantAction;

use crate::reducer::DesktopAction;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the shell does with one assistant action.
pub enum ActionPlan {
    /// Run a reducer action.
    Dispatch(DesktopAction),
    /// Start an async wallpaper job for this prompt.
    GenerateWallpaper(String),
    Nothing,
}

/// Plans exactly one side effect for `action`.
///
/// Payloads the shell does not recognize (unknown app ids, theme values outside the closed sets)
/// plan [`ActionPlan::Nothing`].
pub fn plan_action(action: AssistantAction) -> ActionPlan {
    match action {
        AssistantAction::OpenApp(slug) => AppId::from_slug(&slug)
            .map(|app_id| ActionPlan::Dispatch(DesktopAction::OpenApp { app_id }))
            .unwrap_or(ActionPlan::Nothing),
        AssistantAction::SetTimer(0) => ActionPlan::Nothing,
        AssistantAction::SetTimer(seconds) => {
            ActionPlan::Dispatch(DesktopAction::SetTimer { seconds })
        }
        AssistantAction::ChangeTheme(value) => {
            let value = value.trim().to_ascii_lowercase();
            if let Some(theme) = Theme::parse(&value) {
                ActionPlan::Dispatch(DesktopAction::SetTheme { theme })
            } else if let Some(style) = GlassStyle::parse(&value) {
                ActionPlan::Dispatch(DesktopAction::SetGlassStyle { style })
            } else {
                ActionPlan::Nothing
            }
        }
        AssistantAction::GenerateWallpaper(prompt) => ActionPlan::GenerateWallpaper(prompt),
        AssistantAction::None => ActionPlan::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_app_resolves_known_slugs_only() {
        assert_eq!(
            plan_action(AssistantAction::OpenApp("Notes".into())),
            ActionPlan::Dispatch(DesktopAction::OpenApp {
                app_id: AppId::Notes
            })
        );
        assert_eq!(
            plan_action(AssistantAction::OpenApp("terminal".into())),
            ActionPlan::Nothing
        );
    }

    #[test]
    fn change_theme_covers_palette_and_glass() {
        assert_eq!(
            plan_action(AssistantAction::ChangeTheme("light".into())),
            ActionPlan::Dispatch(DesktopAction::SetTheme {
                theme: Theme::Light
            })
        );
        assert_eq!(
            plan_action(AssistantAction::ChangeTheme(" Frosted ".into())),
            ActionPlan::Dispatch(DesktopAction::SetGlassStyle {
                style: GlassStyle::Frosted
            })
        );
        assert_eq!(
            plan_action(AssistantAction::ChangeTheme("sepia".into())),
            ActionPlan::Nothing
        );
    }

    #[test]
    fn timer_and_wallpaper_plans() {
        assert_eq!(
            plan_action(AssistantAction::SetTimer(90)),
            ActionPlan::Dispatch(DesktopAction::SetTimer { seconds: 90 })
        );
        assert_eq!(plan_action(AssistantAction::SetTimer(0)), ActionPlan::Nothing);
        assert_eq!(
            plan_action(AssistantAction::GenerateWallpaper("aurora".into())),
            ActionPlan::GenerateWallpaper("aurora".into())
        );
        assert_eq!(plan_action(AssistantAction::None), ActionPlan::Nothing);
    }
}
