#![no_main]

use apiwarden::{DeprecationWindowTracker, ReleaseVersion};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(version) = ReleaseVersion::parse(content) {
            // Window arithmetic saturates instead of overflowing
            let _ = DeprecationWindowTracker::new(u64::MAX).status(&version, &version);
            let _ = ReleaseVersion::parse(&version.to_string());
        }
    }
});
