#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and unknown-key detection should never panic
        if let Ok((config, _warnings)) =
            apiwarden::config::parse_with_warnings(content, Path::new("apiwarden.toml"))
        {
            let _ = config.engine();
        }
    }
});
