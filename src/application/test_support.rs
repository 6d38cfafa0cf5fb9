//! Mock ports shared by the use case tests
//!
//! Every mock writes into one `Journal` so tests can assert the exact order
//! of remote commands, transfers and local operations across ports.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::domain::entities::SyncContext;
use crate::domain::ports::{
    CommandOutput, LocalFiles, NormalizeSummary, RemoteShell, Sleeper, SyncEvent, SyncEventSink,
    Transfer,
};
use crate::domain::value_objects::{PermissionPolicy, SizeLimit};
use crate::error::{SyncError, SyncResult};

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.borrow().iter().any(|e| e.contains(needle))
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e.contains(needle))
    }
}

/// Shell answering by first matching substring; unmatched commands succeed with empty output
pub struct MockShell {
    journal: Journal,
    rules: Vec<(String, CommandOutput)>,
    sequences: RefCell<Vec<(String, Vec<CommandOutput>)>>,
}

impl MockShell {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            rules: Vec::new(),
            sequences: RefCell::new(Vec::new()),
        }
    }

    pub fn respond(mut self, pattern: &str, output: CommandOutput) -> Self {
        self.rules.push((pattern.to_string(), output));
        self
    }

    /// Answers successive matching calls from `outputs`; the last one repeats
    pub fn respond_seq(self, pattern: &str, outputs: Vec<CommandOutput>) -> Self {
        self.sequences
            .borrow_mut()
            .push((pattern.to_string(), outputs));
        self
    }
}

impl RemoteShell for MockShell {
    fn run(&self, _ctx: &SyncContext, command: &str) -> SyncResult<CommandOutput> {
        self.journal.push(format!("shell: {}", command));

        for (pattern, outputs) in self.sequences.borrow_mut().iter_mut() {
            if command.contains(pattern.as_str()) {
                let out = if outputs.len() > 1 {
                    outputs.remove(0)
                } else {
                    outputs[0].clone()
                };
                return Ok(out);
            }
        }

        Ok(self
            .rules
            .iter()
            .find(|(pattern, _)| command.contains(pattern.as_str()))
            .map(|(_, out)| out.clone())
            .unwrap_or_else(|| CommandOutput::ok("")))
    }
}

/// Transfer that copies from a local "remote" tree, honoring the size limit
pub struct MockTransfer {
    journal: Journal,
    remote_root: Option<PathBuf>,
    fail_fetch: bool,
}

impl MockTransfer {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            remote_root: None,
            fail_fetch: false,
        }
    }

    /// Serve `sync_dir` from this local directory
    pub fn serving(mut self, remote_root: &Path) -> Self {
        self.remote_root = Some(remote_root.to_path_buf());
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }
}

impl Transfer for MockTransfer {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn fetch_file(
        &self,
        _ctx: &SyncContext,
        remote_path: &str,
        local_path: &Path,
    ) -> SyncResult<()> {
        self.journal.push(format!(
            "fetch: {} -> {}",
            remote_path,
            local_path.display()
        ));
        if self.fail_fetch {
            return Err(SyncError::CommandFailed {
                command: "scp".to_string(),
                code: Some(1),
                stderr: "connection lost".to_string(),
            });
        }
        std::fs::write(local_path, b"dump")?;
        Ok(())
    }

    fn sync_dir(
        &self,
        _ctx: &SyncContext,
        remote_dir: &str,
        local_dir: &Path,
        limit: Option<SizeLimit>,
    ) -> SyncResult<()> {
        let label = limit.map(|l| l.rsync_arg()).unwrap_or_else(|| "full".into());
        self.journal.push(format!(
            "sync_dir: {} -> {} ({})",
            remote_dir,
            local_dir.display(),
            label
        ));
        if let Some(root) = &self.remote_root {
            copy_tree(root, local_dir, limit)?;
        }
        Ok(())
    }
}

fn copy_tree(from: &Path, to: &Path, limit: Option<SizeLimit>) -> SyncResult<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        let meta = entry.metadata()?;
        if meta.is_dir() {
            copy_tree(&entry.path(), &target, limit)?;
        } else if limit.map_or(true, |l| l.admits(meta.len())) {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Local files double: creates directories for real, records permission passes
pub struct MockLocalFiles {
    journal: Journal,
}

impl MockLocalFiles {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl LocalFiles for MockLocalFiles {
    fn ensure_dir(&self, path: &Path) -> SyncResult<()> {
        self.journal.push(format!("ensure_dir: {}", path.display()));
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    fn normalize_permissions(
        &self,
        root: &Path,
        policy: &PermissionPolicy,
    ) -> SyncResult<NormalizeSummary> {
        self.journal.push(format!(
            "normalize: {} {} {:o}/{:o}",
            root.display(),
            policy.chown_spec(),
            policy.dir_mode,
            policy.file_mode
        ));
        Ok(NormalizeSummary::default())
    }
}

pub struct MockSleeper {
    journal: Journal,
}

impl MockSleeper {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl Sleeper for MockSleeper {
    fn sleep(&self, duration: Duration) {
        self.journal.push(format!("sleep: {}s", duration.as_secs()));
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: RefCell<Vec<SyncEvent>>,
}

impl SyncEventSink for RecordingSink {
    fn on_event(&self, event: SyncEvent) {
        self.events.borrow_mut().push(event);
    }
}

pub fn ctx() -> SyncContext {
    SyncContext::new("dev1.example.com", "jenkins")
}
