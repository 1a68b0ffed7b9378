#![no_main]

use libfuzzer_sys::fuzz_target;
use truthy::literal;
use truthy::{is_falsy, is_truthy};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        match literal::parse(s) {
            Ok(value) => {
                assert_ne!(is_truthy(&value), is_falsy(&value));
                // Whatever parses must print back in a form that parses.
                let rendered = value.to_string();
                assert!(literal::parse(&rendered).is_ok(), "{rendered}");
            }
            Err(err) => {
                let _ = literal::render_error(s, err);
            }
        }
    }
});
