#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any input must end in XML or a classified error, never a panic
        match sol25::compile(s) {
            Ok(xml) => assert!(xml.ends_with("</program>\n") || xml.ends_with("/>\n")),
            Err(err) => assert!((21..=35).contains(&err.exit_code())),
        }
    }
});
