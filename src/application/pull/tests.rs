//! Pull Use Case Tests

use std::path::Path;

use super::*;
use crate::application::config_store::{ConfigStore, SettingsSource};
use crate::application::database::{DatabaseOptions, DatabaseSync};
use crate::application::files::{FilesOptions, FilesSync};
use crate::application::test_support::{
    Journal, MockLocalFiles, MockShell, MockSleeper, MockTransfer, RecordingSink,
};
use crate::domain::entities::SyncRequest;
use crate::domain::ports::{CommandOutput, Prompter, SyncEvent};
use crate::domain::value_objects::SyncType;
use crate::error::{SyncError, SyncResult};
use crate::infrastructure::config::IniCredentials;
use crate::infrastructure::prompt::InteractiveCredentials;
use tempfile::tempdir;

struct NeverAsked;

impl Prompter for NeverAsked {
    fn ask(&self, question: &str, _default: &str) -> SyncResult<String> {
        panic!("unexpected prompt: {}", question);
    }
}

fn settings(dir: &Path) -> ConfigStore {
    let path = dir.join("builder.ini");
    std::fs::write(
        &path,
        "[acme]\nhostname = dev1.example.com\nusername = jenkins\n",
    )
    .unwrap();
    ConfigStore::new(
        Box::new(IniCredentials::new(path)),
        Box::new(InteractiveCredentials::new(NeverAsked)),
    )
}

fn shell(journal: &Journal) -> MockShell {
    MockShell::new(journal)
        .respond("ps aux", CommandOutput::failed(1))
        .respond("du -sh ~/acme.sql.gz", CommandOutput::ok("12M\t/home/jenkins/acme.sql.gz"))
        .respond("sa | grep", CommandOutput::ok("@acme_master"))
        .respond("dd files", CommandOutput::ok("/var/www/acme/sites/default/files"))
        .respond("du -sh", CommandOutput::ok("40M\t/var/www/acme/sites/default/files/"))
        .respond("stat ", CommandOutput::failed(1))
}

fn try_pull(
    dir: &Path,
    journal: &Journal,
    sink: &RecordingSink,
    request: &SyncRequest,
) -> SyncResult<PullOutcome> {
    let settings = settings(dir);
    let shell = shell(journal);
    let transfer = MockTransfer::new(journal);
    let local = MockLocalFiles::new(journal);
    let sleeper = MockSleeper::new(journal);
    let dump_dir = dir.join("home/sql-dumps");

    let database = DatabaseSync::new(
        &shell,
        &transfer,
        &local,
        &sleeper,
        sink,
        DatabaseOptions::new(&dump_dir),
    );
    let files = FilesSync::new(&shell, &transfer, &local, sink, FilesOptions::new(dir.join("vagrant")));
    PullUseCase::new(&settings, database, files, sink, "/usr/bin/drush").execute(request)
}

fn pull(dir: &Path, journal: &Journal, sink: &RecordingSink, request: &SyncRequest) -> PullOutcome {
    try_pull(dir, journal, sink, request).unwrap()
}

#[test]
fn db_pull_end_to_end_sequence() {
    let dir = tempdir().unwrap();
    let journal = Journal::default();
    let sink = RecordingSink::default();
    let request = SyncRequest::new("acme", "acmesite", SyncType::Db);

    let outcome = pull(dir.path(), &journal, &sink, &request);

    let dump_dir = dir.path().join("home/sql-dumps");
    let local = dump_dir.join("acme.sql.gz");
    assert_eq!(outcome.settings_source, SettingsSource::Stored);
    assert!(outcome.files.is_none());
    assert_eq!(outcome.database.unwrap().local_path, local);

    assert_eq!(
        journal.entries(),
        vec![
            format!("ensure_dir: {}", dump_dir.display()),
            r"shell: ps aux | grep -E '(^|[^A-Za-z0-9._-])acme\.sql\.gz([^A-Za-z0-9._-]|$)' | grep -v grep".to_string(),
            "shell: /usr/bin/drush @acme_master sql-dump | gzip > ~/acme.sql.gz".to_string(),
            "sleep: 5s".to_string(),
            "shell: du -sh ~/acme.sql.gz".to_string(),
            format!("fetch: ~/acme.sql.gz -> {}", local.display()),
            "shell: rm ~/acme.sql.gz".to_string(),
        ]
    );

    assert_eq!(
        sink.events.borrow().first(),
        Some(&SyncEvent::Connected {
            host: "dev1.example.com".to_string(),
            user: "jenkins".to_string(),
            remote_cli: "/usr/bin/drush".to_string(),
        })
    );
}

#[test]
fn files_pull_skips_database() {
    let dir = tempdir().unwrap();
    let journal = Journal::default();
    let sink = RecordingSink::default();
    let request = SyncRequest::new("acme", "acmesite", SyncType::Files);

    let outcome = pull(dir.path(), &journal, &sink, &request);

    assert!(outcome.database.is_none());
    assert!(outcome.files.is_some());
    assert!(!journal.contains("sql-dump"));
    assert!(!journal.contains("ps aux"));
}

#[test]
fn all_runs_database_before_files() {
    let dir = tempdir().unwrap();
    let journal = Journal::default();
    let sink = RecordingSink::default();
    let request = SyncRequest::new("acme", "acmesite", SyncType::All).with_branch("stage");

    let outcome = pull(dir.path(), &journal, &sink, &request);

    assert!(outcome.database.is_some());
    assert!(outcome.files.is_some());
    let rm = journal.position("shell: rm ~/acme.sql.gz").unwrap();
    let alias_check = journal.position("sa | grep -- '@acme_stage'").unwrap();
    assert!(rm < alias_check);
    assert!(journal.contains("@acme_stage sql-dump"));
}

#[test]
fn unsafe_shortname_is_rejected_before_any_remote_command() {
    let dir = tempdir().unwrap();
    let journal = Journal::default();
    let sink = RecordingSink::default();
    let request = SyncRequest::new("x;touch${IFS}/tmp/x;#", "acmesite", SyncType::All);

    let err = try_pull(dir.path(), &journal, &sink, &request).unwrap_err();

    assert!(matches!(err, SyncError::InvalidName { field: "shortname", .. }));
    assert!(journal.entries().is_empty());
    assert!(sink.events.borrow().is_empty());
}

#[test]
fn url_outside_base_dir_is_rejected() {
    let dir = tempdir().unwrap();
    let journal = Journal::default();
    let sink = RecordingSink::default();
    let request = SyncRequest::new("acme", "../..", SyncType::Files);

    let err = try_pull(dir.path(), &journal, &sink, &request).unwrap_err();

    assert!(matches!(err, SyncError::InvalidName { field: "url", .. }));
    assert!(journal.entries().is_empty());
}
