//! Property tests for the transfer size filter.

use proptest::prelude::*;

use sitepull::domain::value_objects::SizeLimit;

proptest! {
    /// PROPERTY: the default filter admits exactly the files of at most 100 KiB.
    #[test]
    fn property_default_filter_boundary(len in 0u64..1_000_000) {
        let limit = SizeLimit::for_sync(false).unwrap();
        prop_assert_eq!(limit.admits(len), len <= 100 * 1024);
    }

    /// PROPERTY: a full sync has no filter at all.
    #[test]
    fn property_full_sync_is_unfiltered(_len in any::<u64>()) {
        prop_assert!(SizeLimit::for_sync(true).is_none());
    }

    /// PROPERTY: admission is monotone; a smaller file is never rejected
    /// when a larger one is admitted.
    #[test]
    fn property_admission_is_monotone(kib in 0u64..10_000, a in any::<u64>(), b in any::<u64>()) {
        let limit = SizeLimit::kib(kib);
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        if limit.admits(large) {
            prop_assert!(limit.admits(small));
        }
    }
}
