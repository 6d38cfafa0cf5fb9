//! Waiting for a remote dump to finish flushing
//!
//! The export pipes through gzip into a file. When the remote command
//! returns the file is normally complete, but slow disks can still be
//! flushing. The default is a fixed pause; polling the size until it stops
//! changing is available as an opt-in. Neither is a real completion signal.

use std::time::Duration;

use crate::domain::entities::SyncContext;
use crate::domain::ports::{RemoteShell, Sleeper};
use crate::error::SyncResult;

/// Fixed pause used when nothing else is configured
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(5);

/// How to wait before measuring and fetching a remote artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStrategy {
    /// Sleep once for a fixed duration
    Fixed(Duration),
    /// Sample the remote size every `interval` until two consecutive
    /// non-zero samples match, giving up after `max_attempts` samples
    PollStableSize { interval: Duration, max_attempts: u32 },
}

impl Default for SettleStrategy {
    fn default() -> Self {
        SettleStrategy::Fixed(DEFAULT_SETTLE)
    }
}

impl SettleStrategy {
    pub fn poll() -> Self {
        SettleStrategy::PollStableSize {
            interval: Duration::from_secs(1),
            max_attempts: 60,
        }
    }

    /// Block until the artifact is considered settled; returns the time waited
    pub fn wait(
        &self,
        shell: &dyn RemoteShell,
        sleeper: &dyn Sleeper,
        ctx: &SyncContext,
        remote_path: &str,
    ) -> SyncResult<Duration> {
        match *self {
            SettleStrategy::Fixed(duration) => {
                sleeper.sleep(duration);
                Ok(duration)
            }
            SettleStrategy::PollStableSize {
                interval,
                max_attempts,
            } => {
                let command = format!("stat -c %s {}", remote_path);
                let mut waited = Duration::ZERO;
                let mut last: Option<u64> = None;

                for _ in 0..max_attempts {
                    sleeper.sleep(interval);
                    waited += interval;

                    let output = shell.run(ctx, &command)?;
                    let size = if output.success {
                        output.stdout.trim().parse::<u64>().ok()
                    } else {
                        None
                    };

                    if let (Some(current), Some(previous)) = (size, last) {
                        if current > 0 && current == previous {
                            return Ok(waited);
                        }
                    }
                    last = size;
                }

                tracing::warn!(
                    path = remote_path,
                    attempts = max_attempts,
                    "remote artifact size did not stabilise; continuing anyway"
                );
                Ok(waited)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{ctx, Journal, MockShell, MockSleeper};
    use crate::domain::ports::CommandOutput;

    #[test]
    fn fixed_strategy_sleeps_once_without_remote_calls() {
        let journal = Journal::default();
        let shell = MockShell::new(&journal);
        let sleeper = MockSleeper::new(&journal);

        let waited = SettleStrategy::default()
            .wait(&shell, &sleeper, &ctx(), "~/acme.sql.gz")
            .unwrap();

        assert_eq!(waited, Duration::from_secs(5));
        assert_eq!(journal.entries(), vec!["sleep: 5s".to_string()]);
    }

    #[test]
    fn poll_stops_when_size_repeats() {
        let journal = Journal::default();
        let shell = MockShell::new(&journal).respond_seq(
            "stat -c %s",
            vec![
                CommandOutput::ok("100"),
                CommandOutput::ok("250"),
                CommandOutput::ok("250"),
            ],
        );
        let sleeper = MockSleeper::new(&journal);
        let strategy = SettleStrategy::PollStableSize {
            interval: Duration::from_secs(1),
            max_attempts: 10,
        };

        let waited = strategy
            .wait(&shell, &sleeper, &ctx(), "~/acme.sql.gz")
            .unwrap();

        assert_eq!(waited, Duration::from_secs(3));
    }

    #[test]
    fn poll_ignores_empty_file_and_gives_up_after_budget() {
        let journal = Journal::default();
        let shell = MockShell::new(&journal).respond("stat -c %s", CommandOutput::ok("0"));
        let sleeper = MockSleeper::new(&journal);
        let strategy = SettleStrategy::PollStableSize {
            interval: Duration::from_secs(2),
            max_attempts: 4,
        };

        let waited = strategy
            .wait(&shell, &sleeper, &ctx(), "~/acme.sql.gz")
            .unwrap();

        assert_eq!(waited, Duration::from_secs(8));
        assert_eq!(
            journal
                .entries()
                .iter()
                .filter(|e| e.starts_with("shell: stat"))
                .count(),
            4
        );
    }
}
