use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use blammo::config::Config;
use blammo::{Level, LineCodec, Log, TagValue};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blammo", about = "Write and check blammo log lines")]
struct Cli {
    /// Logger config file (TOML). `BLAMMO__*` variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print blammo's own diagnostics to stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit a single event.
    Emit {
        #[command(flatten)]
        source: SourceArgs,
        /// Message text; words are joined with spaces.
        message: Vec<String>,
    },
    /// Emit one event per line read from stdin.
    Pipe {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Validate canonical lines read from stdin.
    Check,
}

#[derive(Args)]
struct SourceArgs {
    /// Root path name (defaults to `log.name` from config).
    #[arg(long)]
    name: Option<String>,

    /// Event severity: debug, info, warn, error.
    #[arg(long, default_value = "info", value_parser = parse_level)]
    level: Level,

    /// Child path segment; repeat to go deeper.
    #[arg(long = "child", value_name = "SEGMENT")]
    children: Vec<String>,

    /// Tag as KEY or KEY=VALUE; numeric values are typed.
    #[arg(long = "tag", value_name = "KEY[=VALUE]")]
    tags: Vec<String>,
}

fn parse_level(s: &str) -> Result<Level, String> {
    Level::from_name(s).ok_or_else(|| format!("unknown level {s:?}"))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("blammo debug output enabled");
    }

    let config = Config::load(cli.config.as_deref()).context("loading config")?;

    match cli.command {
        Command::Emit { source, message } => {
            let log = source_log(&config, &source)?;
            log.log(source.level, &message.join(" "));
            Ok(ExitCode::SUCCESS)
        }
        Command::Pipe { source } => {
            let log = source_log(&config, &source)?;
            pipe(&log, source.level, io::stdin().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let bad = check(io::stdin().lock())?;
            Ok(if bad == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

/// Builds the log for `emit`/`pipe`: the requested level always has a
/// writer, whatever the config enables, and every event ends its line so
/// the output stays readable by `check`.
fn source_log(config: &Config, source: &SourceArgs) -> anyhow::Result<Log> {
    let mut config = config.clone();
    if let Some(name) = &source.name {
        config.log.name = name.clone();
    }
    config.levels.set_minimum(source.level);
    config.log.terminate_empty_lines = true;

    let mut log = Log::from_config(&config)?;
    for child in &source.children {
        log = log.child(child);
    }
    for tag in &source.tags {
        log = match tag.split_once('=') {
            None => log.tag(tag),
            Some((key, value)) => match TagValue::infer(value) {
                TagValue::Int(v) => log.tag_int(key, v),
                TagValue::Float(v) => log.tag_float(key, v),
                TagValue::String(v) => log.tag_string(key, &v),
            },
        };
    }
    Ok(log)
}

/// Emits one event per input line; blank lines become empty events.
fn pipe(log: &Log, level: Level, input: impl BufRead) -> anyhow::Result<()> {
    for line in input.lines() {
        log.log(level, &line.context("reading stdin")?);
    }
    Ok(())
}

/// Decodes every line of `input`, reporting failures on stderr. Returns the
/// number of malformed lines.
fn check(input: impl BufRead) -> anyhow::Result<usize> {
    let codec = LineCodec::new();
    let (mut good, mut bad) = (0usize, 0usize);
    for (n, line) in input.lines().enumerate() {
        let line = line.context("reading stdin")?;
        match codec.decode_str(&line) {
            Ok(_) => good += 1,
            Err(err) => {
                bad += 1;
                eprintln!("line {}: {err}", n + 1);
            }
        }
    }
    tracing::debug!(good, bad, "check finished");
    println!("{good} valid, {bad} malformed");
    Ok(bad)
}
