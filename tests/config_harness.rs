#![allow(unused)]
//! Config-driven setup harness.
//!
//! # What this covers
//!
//! - **Log::from_config**: the configured sink receives lines for enabled
//!   levels only, under the configured root name.
//! - **terminate_empty_lines**: empty-text events end their line when asked.
//!
//! # Running
//!
//! ```sh
//! cargo test --test config_harness
//! ```

mod common;
use common::*;

use std::fs;

use blammo::config::{Config, SinkKind};
use blammo::Log;

fn file_config(dir: &tempfile::TempDir) -> Config {
    let mut cfg = Config::defaults();
    cfg.log.name = "billing".to_string();
    cfg.sink.kind = SinkKind::File;
    cfg.sink.path = Some(dir.path().join("logs").join("billing.log"));
    cfg
}

#[test]
fn file_sink_receives_enabled_levels() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = file_config(&dir);

    let log = Log::from_config(&cfg).unwrap();
    log.debug("hidden");
    log.child("charge").info("accepted");
    log.error("declined");
    drop(log);

    let out = fs::read_to_string(dir.path().join("logs/billing.log")).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "{out}");
    assert!(lines[0].ends_with(" i [billing/charge] [] accepted"), "{}", lines[0]);
    assert!(lines[1].ends_with(" e [billing] [] declined"), "{}", lines[1]);
    assert_all_decode(&out);
}

#[test]
fn empty_lines_can_be_terminated() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = file_config(&dir);
    cfg.log.terminate_empty_lines = true;

    let log = Log::from_config(&cfg).unwrap();
    log.info("");
    log.info("");
    drop(log);

    let out = fs::read_to_string(dir.path().join("logs/billing.log")).unwrap();
    assert_whole_lines(&out, 2);
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("app.log");
    let cfg_path = dir.path().join("blammo.toml");
    fs::write(
        &cfg_path,
        format!(
            "[log]\nname = \"worker\"\n[levels]\ndebug = true\n[sink]\nkind = \"file\"\npath = {:?}\n",
            log_path.display().to_string()
        ),
    )
    .unwrap();

    let cfg = Config::load(Some(cfg_path.as_path())).unwrap();
    let log = Log::from_config(&cfg).unwrap();
    log.debug("visible");
    drop(log);

    let out = fs::read_to_string(&log_path).unwrap();
    assert!(out.ends_with(" d [worker] [] visible\n"), "{out}");
}
