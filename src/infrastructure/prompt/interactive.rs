//! Prompt-backed credentials provider
//!
//! Asks for the host and the user once each. An empty answer takes the
//! default shown in brackets.

use crate::domain::entities::ProjectEntry;
use crate::domain::ports::{CredentialsProvider, Prompter};
use crate::error::SyncResult;

pub const DEFAULT_HOST: &str = "dev1.example.com";
pub const DEFAULT_USER: &str = "jenkins";

/// Asks the user for connection settings through a `Prompter`
pub struct InteractiveCredentials<P: Prompter> {
    prompter: P,
}

impl<P: Prompter> InteractiveCredentials<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }
}

impl<P: Prompter> CredentialsProvider for InteractiveCredentials<P> {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn lookup(&self, shortname: &str) -> SyncResult<Option<ProjectEntry>> {
        tracing::info!(shortname, "no stored connection settings; asking");
        let hostname = self.prompter.ask(
            &format!("Remote host for '{}'", shortname),
            DEFAULT_HOST,
        )?;
        let username = self.prompter.ask(
            &format!("SSH user on {}", hostname),
            DEFAULT_USER,
        )?;
        Ok(Some(ProjectEntry::new(shortname, hostname, username)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Echo {
        asked: RefCell<Vec<String>>,
    }

    impl Prompter for Echo {
        fn ask(&self, question: &str, default: &str) -> SyncResult<String> {
            self.asked.borrow_mut().push(question.to_string());
            Ok(default.to_string())
        }
    }

    #[test]
    fn asks_host_then_user_with_defaults() {
        let provider = InteractiveCredentials::new(Echo {
            asked: RefCell::new(Vec::new()),
        });

        let entry = provider.lookup("acme").unwrap().unwrap();

        assert_eq!(entry, ProjectEntry::new("acme", DEFAULT_HOST, DEFAULT_USER));
        let asked = provider.prompter.asked.borrow();
        assert_eq!(asked.len(), 2);
        assert!(asked[0].contains("acme"));
        assert!(asked[1].contains(DEFAULT_HOST));
    }
}
