use sitepull::domain::ports::{Pipeline, SyncEvent, SyncEventSink};
use sitepull::PullOutcome;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Progress lines on stdout, one per event
pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            color: ui.color,
            unicode: ui.unicode,
            verbose: ui.verbose > 0,
        }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        if let Some(line) = render_event(&event, self.verbose, self.color, self.unicode) {
            println!("{}", line);
        }
    }
}

fn pipeline_icon(pipeline: Pipeline) -> Icon {
    match pipeline {
        Pipeline::Database => Icon::Database,
        Pipeline::Files => Icon::Files,
    }
}

/// One progress line; bookkeeping events only show with `verbose`
pub fn render_event(
    event: &SyncEvent,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let step = |text: String| {
        format!(
            "  {} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            text
        )
    };
    let detail = |text: String| {
        verbose.then(|| step(ColoredText::dim(text).render(supports_color)))
    };
    let done = |text: String| {
        format!(
            "  {} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            text
        )
    };

    match event {
        SyncEvent::Connected {
            host,
            user,
            remote_cli,
        } => {
            let mut line = format!(
                "{} Pulling from {}",
                Icon::Remote.colored(supports_color, supports_unicode),
                ColoredText::info(format!("{}@{}", user, host))
                    .bold()
                    .render(supports_color)
            );
            if verbose {
                line.push_str(&format!(
                    " {}",
                    ColoredText::dim(format!("({})", remote_cli)).render(supports_color)
                ));
            }
            Some(line)
        }
        SyncEvent::PipelineStarted { pipeline, alias } => Some(format!(
            "{} {} {}",
            pipeline_icon(*pipeline).colored(supports_color, supports_unicode),
            ColoredText::info(pipeline.as_str()).bold().render(supports_color),
            alias
        )),
        SyncEvent::DumpDirReady { path } => detail(format!("dump directory {}", path.display())),
        SyncEvent::ExportGuardPassed { .. } => detail("no export in progress".to_string()),
        SyncEvent::ExportIssued { remote_path, .. } => {
            Some(step(format!("exported to {}", remote_path)))
        }
        SyncEvent::Settled { waited } => detail(format!("waited {:.1}s", waited.as_secs_f64())),
        SyncEvent::SizeReported { size, .. } => Some(step(format!(
            "size {}",
            ColoredText::warning(size.as_str()).render(supports_color)
        ))),
        SyncEvent::ArtifactFetched { local_path } => {
            Some(done(format!("fetched {}", local_path.display())))
        }
        SyncEvent::ArtifactRemoved { remote_path } => detail(format!("removed {}", remote_path)),
        SyncEvent::SiteVerified { alias } => detail(format!("{} found", alias)),
        SyncEvent::FilesDirResolved { remote_dir } => {
            Some(step(format!("remote files {}", remote_dir)))
        }
        SyncEvent::MultisiteResolved { key } => detail(format!("sites/{}", key)),
        SyncEvent::FilesTransferred { local_dir, limited } => {
            let scope = if *limited {
                "files up to 100K"
            } else {
                "all files"
            };
            Some(done(format!("synced {} into {}", scope, local_dir.display())))
        }
        SyncEvent::PermissionsNormalized { dirs, files, .. } => Some(done(format!(
            "permissions set on {} directories and {} files",
            dirs, files
        ))),
        SyncEvent::PipelineCompleted { .. } => None,
    }
}

pub fn render_pull_summary(
    outcome: &PullOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "\n{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!("Pull of '{}' complete", outcome.entry.shortname))
            .bold()
            .render(supports_color)
    );

    if let Some(db) = &outcome.database {
        out.push_str(&format!(
            "  database  {} ({})\n",
            db.local_path.display(),
            db.size
        ));
    }
    if let Some(files) = &outcome.files {
        out.push_str(&format!(
            "  files     {} ({})\n",
            files.local_dir.display(),
            files.size
        ));
    }
    out
}

/// Final NDJSON line for `--json`
pub fn pull_complete_json(outcome: &PullOutcome) -> serde_json::Value {
    let database = outcome.database.as_ref().map(|db| {
        serde_json::json!({
            "path": db.local_path.display().to_string(),
            "size": db.size,
        })
    });
    let files = outcome.files.as_ref().map(|files| {
        serde_json::json!({
            "remote_dir": files.remote_dir,
            "path": files.local_dir.display().to_string(),
            "multisite": files.multisite.as_str(),
            "size": files.size,
            "dirs": files.normalized.dirs,
            "files": files.normalized.files,
        })
    });

    serde_json::json!({
        "event": "complete",
        "command": "pull",
        "status": "success",
        "shortname": outcome.entry.shortname,
        "database": database,
        "files": files,
    })
}
