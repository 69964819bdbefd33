// fuzz/fuzz_targets/fuzz_format_duration.rs
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use startwatch::format::decompose;
use startwatch::format_duration;
use std::time::Duration;

#[derive(Arbitrary, Debug)]
struct Input {
    secs: u64,
    nanos: u32,
}

fuzz_target!(|input: Input| {
    let d = Duration::new(input.secs, input.nanos % 1_000_000_000);
    let out = format_duration(d);

    assert!(!out.is_empty());
    assert!(
        out.ends_with('s') || out.ends_with('m') || out.ends_with('h'),
        "unexpected suffix: {out}"
    );

    let body = out.strip_prefix("exactly ").unwrap_or(&out);
    assert!(!body.contains(' '), "internal space in {out}");

    if d >= Duration::from_secs(1) {
        assert_eq!(out.starts_with("exactly "), decompose(d).seconds == 0, "{d:?} -> {out}");
    }
});
