//! Domain-specific assertions for blammo harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! line-format invariant was violated.

use blammo::{Codec, LineCodec};

/// Assert that an event renders to exactly `expected`.
///
/// ```rust
/// assert_renders!(event, "2020-01-13T12:26:47Z d [root] []");
/// ```
#[macro_export]
macro_rules! assert_renders {
    ($event:expr, $expected:expr) => {{
        let observed = $crate::common::render(&$event);
        pretty_assertions::assert_eq!(
            observed,
            $expected,
            "rendered line does not match expected line"
        );
    }};
}

/// Assert that captured output consists of `n` complete lines.
pub fn assert_whole_lines(output: &str, n: usize) {
    assert!(
        output.is_empty() || output.ends_with('\n'),
        "output ends mid-line: {:?}",
        output.lines().last()
    );
    assert_eq!(
        output.lines().count(),
        n,
        "expected {n} lines, got:\n{output}"
    );
}

/// Assert that every line of `output` decodes with the line codec.
pub fn assert_all_decode(output: &str) {
    let codec = LineCodec::new();
    for (i, line) in output.lines().enumerate() {
        if let Err(err) = codec.decode(line.as_bytes()) {
            panic!("line {} does not decode: {err}\n  line: {line:?}", i + 1);
        }
    }
}
