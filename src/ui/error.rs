use sitepull::SyncError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// What the user can do about a failure, when there is something to say
fn fix_hint(err: &SyncError) -> Option<String> {
    match err {
        SyncError::SiteNotFound { .. } => {
            Some("Check the shortname and --branch; `drush sa` on the remote lists known aliases.".into())
        }
        SyncError::RemoteFilesDirUnresolved { .. } => {
            Some("The site alias exists but reports no files directory; check its settings.php.".into())
        }
        SyncError::CommandSpawn { program, .. } => Some(format!("Is '{}' installed and on PATH?", program)),
        SyncError::Config { path, .. } => Some(format!("Fix or remove {}", path.display())),
        SyncError::HomeDirUnavailable => Some("Set HOME, or pass --config and --dump-dir.".into()),
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let message = ColoredText::error(err.to_string()).bold().render(supports_color);
    let mut out = format!("{} {}\n", icon, message);

    if let Some(hint) = err.downcast_ref::<SyncError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let kind = err
            .downcast_ref::<SyncError>()
            .map(SyncError::kind)
            .unwrap_or("other");
        let output = serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error_with(err, ui.color, ui.unicode));
}
