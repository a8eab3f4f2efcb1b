#![no_main]

use libfuzzer_sys::fuzz_target;
use rail_router::RoutePattern;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let Ok(pattern) = RoutePattern::parse(&raw) else {
        return;
    };
    let reparsed = RoutePattern::parse(&pattern.to_string()).expect("display output parses");
    assert_eq!(reparsed, pattern);
});
