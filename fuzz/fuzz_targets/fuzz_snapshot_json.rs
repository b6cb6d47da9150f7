#![no_main]

use std::path::Path;

use apiwarden::infrastructure::FileSnapshotSource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(snapshot) = FileSnapshotSource::parse(content, Path::new("fuzz.json")) {
            let _ = snapshot.fingerprint();
        }
        let _ = FileSnapshotSource::parse(content, Path::new("fuzz.yaml"));
    }
});
