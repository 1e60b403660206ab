//! Static fixtures used across harnesses.

use chrono::{DateTime, TimeZone, Utc};

/// The reference instant, with sub-second noise that rendering drops.
pub fn ref_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 13, 12, 26, 47).unwrap() + chrono::Duration::nanoseconds(999_999)
}

/// `ref_time` as rendered.
pub const REF_STAMP: &str = "2020-01-13T12:26:47Z";

/// Canonical lines covering every segment shape the writer produces.
pub const CORPUS_LINES: &[&str] = &[
    "0001-01-01T00:00:00Z d [] []",
    "2020-01-13T12:26:47Z d [root] []",
    "2020-01-13T12:26:47Z i [root/kid] [] started",
    "2020-01-13T12:26:47Z w [root/kid/fart] [alert] disk at 91%",
    "2020-01-13T12:26:47Z e [root/kid/fart] [alert+zombo-dot-com] this is a message",
    "2020-01-13T12:26:47Z d [root/kid/fart] [request-id=b49d31c7-d3bb-4bd3-96fe-34e7c7d2b0a4+pi=3.14+num-users=15] this is a message",
    "2020-01-13T12:26:47Z i [api/http] [method=GET+status=200] first\\nsecond",
    "2020-01-13T12:26:47Z i [ünïcode/你好] [ключ=значение] héllo wörld",
];

/// Lines that must not decode.
pub const MALFORMED_LINES: &[&str] = &[
    "",
    "hello world",
    "2020-01-13T12:26:47Z [root] []",
    "2020-01-13T12:26:47Z x [root] []",
    "2020-01-13T12:26:47Z d root []",
    "2020-13-45T99:99:99Z d [] []",
    "2020-01-13T12:26:47Z d [] [+]",
];
