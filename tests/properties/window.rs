//! Property tests for deprecation window arithmetic.

use proptest::prelude::*;

use apiwarden::{DeprecationWindowTracker, ReleaseVersion};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a symbol is required exactly through `window` minor releases.
    #[test]
    fn property_window_boundary(
        major in 0u64..5,
        minor in 0u64..20,
        window in 0u64..6,
        offset in 0u64..10,
    ) {
        let since = ReleaseVersion::new(major, minor, 0);
        let current = ReleaseVersion::new(major, minor + offset, 0);

        let status = DeprecationWindowTracker::new(window).status(&since, &current);

        prop_assert_eq!(status.still_required, offset <= window);
        prop_assert_eq!(status.earliest_removal, ReleaseVersion::new(major, minor + window + 1, 0));
    }

    /// PROPERTY: any later major release permits removal.
    #[test]
    fn property_later_major_permits_removal(
        major in 0u64..5,
        minor in 0u64..20,
        window in 0u64..6,
        bump in 1u64..3,
    ) {
        let since = ReleaseVersion::new(major, minor, 0);
        let current = ReleaseVersion::new(major + bump, 0, 0);

        let status = DeprecationWindowTracker::new(window).status(&since, &current);

        prop_assert!(!status.still_required);
    }
}
