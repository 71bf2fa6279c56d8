//! Logging setup: env filter, console output and an optional JSONL file.
//!
//! ## Usage
//!
//! ```ignore
//! use shoreline_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("shoreline=debug")
//!     .with_json_file("./shoreline.jsonl")
//!     .init()?;
//! ```
//!
//! Each line of the JSONL file is one event:
//!
//! ```json
//! {"ts":"2026-01-21T14:13:48.123Z","level":"info","target":"shoreline_core::runtime","message":"View mounted","fields":{"period_ms":2000}}
//! ```

use std::fmt::Write as FmtWrite;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{Result, ViewError};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "shoreline=info,shoreline_core=info";

/// A tracing Layer that appends one JSON object per event to a file.
pub struct JsonlLayer {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlLayer {
    /// Open (or create) `path` for appending.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<S: Subscriber> Layer<S> for JsonlLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = Map::new();
        entry.insert("ts".into(), Value::String(chrono::Utc::now().to_rfc3339()));
        entry.insert("level".into(), Value::String(metadata.level().as_str().to_lowercase()));
        entry.insert("target".into(), Value::String(metadata.target().to_string()));
        entry.insert("message".into(), Value::String(visitor.message.unwrap_or_default()));
        if !visitor.fields.is_empty() {
            entry.insert("fields".into(), Value::Object(visitor.fields));
        }

        let Ok(line) = serde_json::to_string(&Value::Object(entry)) else {
            return;
        };
        // Never panic inside logging.
        let mut file = self.file.lock();
        let _ = writeln!(file, "{}", line);
    }
}

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields.insert(field.name().to_string(), Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), Value::Bool(value));
    }
}

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    filter: Option<String>,
    json_file: Option<PathBuf>,
    console_output: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            filter: None,
            json_file: None,
            console_output: true,
        }
    }

    /// Set the filter directive (e.g. "shoreline=debug"). Overrides `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Also write events to a JSONL file.
    pub fn with_json_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_file = Some(path.into());
        self
    }

    /// Disable console output.
    pub fn no_console(mut self) -> Self {
        self.console_output = false;
        self
    }

    pub fn console_enabled(&self) -> bool {
        self.console_output
    }

    pub fn json_file(&self) -> Option<&Path> {
        self.json_file.as_deref()
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match &self.filter {
            Some(directive) => {
                EnvFilter::try_new(directive).map_err(|e| ViewError::Logging(e.to_string()))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Install the subscriber globally.
    pub fn init(self) -> Result<()> {
        let filter = self.env_filter()?;
        let console = self.console_output.then(tracing_subscriber::fmt::layer);
        let json = self.json_file.as_ref().map(JsonlLayer::new).transpose()?;

        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(json)
            .try_init()
            .map_err(|e| ViewError::Logging(e.to_string()))
    }
}
