//! Sitepull CLI - pull a Drupal site's database and files from a remote host
//!
//! Usage: sitepull <SHORTNAME> <SYNCTYPE> [OPTIONS]
//!
//! Sync types:
//!   db      Export the database remotely and fetch the dump to ~/sql-dumps
//!   files   Mirror the site's files directory into the local checkout
//!   all     db, then files

mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use sitepull::domain::ports::SyncEventSink;
use sitepull::infrastructure::JsonEventSink;
use sitepull::presentation::{Cli, PullRuntime};

use crate::ui::context::UiContext;
use crate::ui::views::pull::{pull_complete_json, render_pull_summary, ConsoleEventSink};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match run(&cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "pull failed");
            ui::error::print_error(&err, &ui);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli, ui: &UiContext) -> Result<()> {
    let events: Box<dyn SyncEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };

    let runtime = PullRuntime::from_cli(cli, events)?;
    let outcome = runtime.use_case().execute(&cli.request())?;

    if ui.json {
        ui::json::emit(pull_complete_json(&outcome))?;
    } else {
        print!("{}", render_pull_summary(&outcome, ui.color, ui.unicode));
    }
    Ok(())
}
