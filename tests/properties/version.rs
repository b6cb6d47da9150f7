//! Property tests for release label parsing.

use proptest::prelude::*;

use apiwarden::ReleaseVersion;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(raw in "\\PC{0,24}") {
        let _ = ReleaseVersion::parse(&raw);
    }

    /// PROPERTY: the rendered form of a parsed version parses back to itself.
    #[test]
    fn property_display_is_stable(
        major in 0u64..50,
        minor in 0u64..50,
        patch in prop::option::of(0u64..50),
        suffix in prop::option::of("(rc|dev|a|b)[0-9]{1,2}"),
    ) {
        let mut raw = format!("{major}.{minor}");
        if let Some(patch) = patch {
            raw.push_str(&format!(".{patch}"));
        }
        if let Some(suffix) = &suffix {
            raw.push_str(suffix);
        }

        let parsed = ReleaseVersion::parse(&raw).unwrap();
        prop_assert_eq!(parsed.major(), major);
        prop_assert_eq!(parsed.minor(), minor);
        prop_assert_eq!(parsed.patch(), patch.unwrap_or(0));
        prop_assert_eq!(parsed.pre(), suffix.as_deref());

        let reparsed = ReleaseVersion::parse(&parsed.to_string()).unwrap();
        prop_assert_eq!(reparsed, parsed);
    }

    /// PROPERTY: a prerelease sorts before its final release.
    #[test]
    fn property_prerelease_precedes_release(major in 0u64..20, minor in 0u64..20, n in 0u8..10) {
        let pre = ReleaseVersion::parse(&format!("{major}.{minor}.0rc{n}")).unwrap();
        let release = ReleaseVersion::new(major, minor, 0);
        prop_assert!(pre < release);
    }
}
