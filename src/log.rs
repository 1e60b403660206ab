//! The [`Log`] facade.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use blammo_core::config::Config;
use blammo_core::{Clock, Event, EventWriter, Level, LineWriter, Path, SystemClock, TagValue, Tags};

/// One optional writer per level, indexed by `Level as usize`.
type Writers = [Option<Arc<dyn EventWriter>>; 4];

/// A handle for emitting events from one place in an application.
///
/// A `Log` binds a [`Path`], optional [`Tags`], a writer per severity and a
/// [`Clock`]. Levels without a writer are disabled and cost one branch.
///
/// Deriving a log with [`child`](Log::child) or one of the `tag` methods
/// returns a new handle that shares the writers and clock; the original is
/// unchanged and stays usable. Handles are cheap to clone and can be sent
/// to other threads.
///
/// ```
/// use std::sync::Arc;
/// use blammo::{Log, LineWriter, Level};
///
/// let writer = Arc::new(LineWriter::new(std::io::sink()));
/// let log = Log::builder("billing").writer_from(Level::Info, writer).build();
/// let req = log.child("http").tag_string("request-id", "abc123");
/// req.info("charge accepted");
/// blammo::info!(req, "{} cents", 1250);
/// ```
#[derive(Clone)]
pub struct Log {
    writers: Writers,
    path: Path,
    tags: Option<Tags>,
    clock: Arc<dyn Clock>,
}

impl Log {
    /// A log named `name` with no writers, using the system clock.
    pub fn new(name: &str) -> Self {
        Self::builder(name).build()
    }

    pub fn builder(name: &str) -> LogBuilder {
        LogBuilder {
            name: name.to_string(),
            writers: Default::default(),
            clock: None,
        }
    }

    /// Builds a log from configuration: one [`LineWriter`] on the configured
    /// sink, installed for every enabled level.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let sink = blammo_sinks::open(&config.sink)?;
        let writer: Arc<dyn EventWriter> = Arc::new(
            LineWriter::new(sink).terminate_empty_lines(config.log.terminate_empty_lines),
        );
        let mut builder = Self::builder(&config.log.name);
        for level in Level::ALL {
            if config.levels.enabled(level) {
                builder = builder.writer(level, writer.clone());
            }
        }
        tracing::debug!(
            name = %config.log.name,
            sink = ?config.sink.kind,
            "built log from config"
        );
        Ok(builder.build())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }

    /// Whether events at `level` go anywhere.
    pub fn enabled(&self, level: Level) -> bool {
        self.writers[level as usize].is_some()
    }

    pub fn debug(&self, text: &str) {
        self.log(Level::Debug, text)
    }

    pub fn info(&self, text: &str) {
        self.log(Level::Info, text)
    }

    pub fn warn(&self, text: &str) {
        self.log(Level::Warn, text)
    }

    pub fn error(&self, text: &str) {
        self.log(Level::Error, text)
    }

    /// Emits `text` verbatim at `level`.
    pub fn log(&self, level: Level, text: &str) {
        if let Some(writer) = &self.writers[level as usize] {
            writer.write_event(&self.event(level, Cow::Borrowed(text)));
        }
    }

    /// Emits a formatted message at `level`.
    ///
    /// Nothing is formatted when the level is disabled, and a template
    /// without arguments is used as-is without allocating.
    pub fn log_args(&self, level: Level, args: fmt::Arguments<'_>) {
        if let Some(writer) = &self.writers[level as usize] {
            let text = match args.as_str() {
                Some(s) => Cow::Borrowed(s),
                None => Cow::Owned(args.to_string()),
            };
            writer.write_event(&self.event(level, text));
        }
    }

    fn event<'a>(&self, level: Level, text: Cow<'a, str>) -> Event<'a> {
        Event {
            time: self.clock.now(),
            level,
            path: Some(self.path.clone()),
            tags: self.tags.clone(),
            text,
        }
    }

    /// A log one path segment deeper. Tags carry over.
    pub fn child(&self, name: &str) -> Self {
        Self {
            path: self.path.child(name),
            ..self.clone()
        }
    }

    fn with_tag(&self, key: &str, value: Option<TagValue>) -> Self {
        Self {
            tags: Some(Tags::append(self.tags.as_ref(), key, value)),
            ..self.clone()
        }
    }

    /// Adds a tag with no value. Existing tags are kept.
    pub fn tag(&self, key: &str) -> Self {
        self.with_tag(key, None)
    }

    pub fn tag_int(&self, key: &str, v: i64) -> Self {
        self.with_tag(key, Some(TagValue::Int(v)))
    }

    pub fn tag_string(&self, key: &str, v: &str) -> Self {
        self.with_tag(key, Some(TagValue::String(v.to_string())))
    }

    pub fn tag_float(&self, key: &str, v: f64) -> Self {
        self.with_tag(key, Some(TagValue::Float(v)))
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled: Vec<Level> = Level::ALL.into_iter().filter(|l| self.enabled(*l)).collect();
        f.debug_struct("Log")
            .field("path", &self.path)
            .field("tags", &self.tags)
            .field("enabled", &enabled)
            .finish_non_exhaustive()
    }
}

/// Configures a [`Log`].
pub struct LogBuilder {
    name: String,
    writers: Writers,
    clock: Option<Arc<dyn Clock>>,
}

impl LogBuilder {
    /// Sets the writer for exactly `level`.
    pub fn writer(mut self, level: Level, writer: Arc<dyn EventWriter>) -> Self {
        self.writers[level as usize] = Some(writer);
        self
    }

    /// Sets the writer for `level` and every level above it.
    pub fn writer_from(mut self, level: Level, writer: Arc<dyn EventWriter>) -> Self {
        for l in Level::ALL.into_iter().filter(|l| *l >= level) {
            self.writers[l as usize] = Some(writer.clone());
        }
        self
    }

    pub fn debug(self, writer: Arc<dyn EventWriter>) -> Self {
        self.writer(Level::Debug, writer)
    }

    pub fn info(self, writer: Arc<dyn EventWriter>) -> Self {
        self.writer(Level::Info, writer)
    }

    pub fn warn(self, writer: Arc<dyn EventWriter>) -> Self {
        self.writer(Level::Warn, writer)
    }

    pub fn error(self, writer: Arc<dyn EventWriter>) -> Self {
        self.writer(Level::Error, writer)
    }

    /// Replaces the system clock, typically with a
    /// [`FixedClock`](blammo_core::FixedClock) in tests.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Log {
        Log {
            writers: self.writers,
            path: Path::new(&self.name),
            tags: None,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}
