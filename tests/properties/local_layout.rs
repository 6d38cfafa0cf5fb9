//! Property tests for the local files directory layout.

use std::path::PathBuf;

use proptest::prelude::*;

use sitepull::application::FilesOptions;
use sitepull::domain::value_objects::MultisiteKey;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9._-]{0,15}").unwrap()
}

proptest! {
    /// PROPERTY: files land in `<base>/<url>/<www>/sites/<key>/files`, where
    /// the key is the url when the remote has `sites/<url>` and `default` otherwise.
    #[test]
    fn property_local_files_dir_layout(
        url in segment(),
        www in segment(),
        dedicated in any::<bool>(),
    ) {
        let options = FilesOptions::new("/vagrant");
        let key = MultisiteKey::from_probe(&url, dedicated);

        let dir = options.local_files_dir(&url, &www, &key);

        let expected_key = if dedicated { url.as_str() } else { "default" };
        let expected: PathBuf = ["/vagrant", url.as_str(), www.as_str(), "sites", expected_key, "files"]
            .iter()
            .collect();
        prop_assert_eq!(dir, expected);
    }
}
