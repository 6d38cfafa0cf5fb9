//! Property tests for single-quote shell escaping.

use proptest::prelude::*;

use sitepull::domain::ports::{shell_quote, shell_word};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a quoted argument reaches the program byte-for-byte.
    #[cfg(unix)]
    #[test]
    fn property_quoted_argument_survives_sh(raw in "[^\\x00]{0,24}") {
        let script = format!("printf %s {}", shell_quote(&raw));
        let output = std::process::Command::new("sh")
            .arg("-c")
            .arg(&script)
            .output()
            .unwrap();

        prop_assert!(output.status.success());
        prop_assert_eq!(String::from_utf8(output.stdout).unwrap(), raw);
    }

    /// PROPERTY: bare or quoted, a shell word reaches the program unchanged.
    #[cfg(unix)]
    #[test]
    fn property_shell_word_survives_sh(raw in "[^\\x00]{1,24}") {
        let script = format!("printf %s {}", shell_word(&raw));
        let output = std::process::Command::new("sh")
            .arg("-c")
            .arg(&script)
            .output()
            .unwrap();

        prop_assert!(output.status.success());
        prop_assert_eq!(String::from_utf8(output.stdout).unwrap(), raw);
    }

    /// PROPERTY: the quoted form is always a single-quoted word.
    #[test]
    fn property_quoted_form_is_wrapped(raw in ".{0,32}") {
        let quoted = shell_quote(&raw);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
    }
}
