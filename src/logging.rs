//! Log setup
//!
//! The binary installs one global subscriber. A training run additionally
//! installs a scoped subscriber that copies every event into the run's log
//! file, so each controller writes to its own directory.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Error, Result};

const CRATE_TARGET: &str = "keyphrase_trainer";
const DEFAULT_DIRECTIVE: &str = "keyphrase_trainer=info";

/// `[YYYY-mm-dd HH:MM:SS]` in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketTime;

impl FormatTime for BracketTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "[{}]", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Filter for a run log given the `RUST_LOG` value, if any
///
/// This crate's events stay at `info` or above unless the setting names the
/// crate itself, so failures always reach the run's log file.
fn run_log_filter(env: Option<&str>) -> Result<EnvFilter> {
    let directives = env.unwrap_or("info");
    let filter = EnvFilter::try_new(directives)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| Error::Config(format!("log filter: {e}")))?;
    if directives.contains(CRATE_TARGET) {
        return Ok(filter);
    }
    let directive = DEFAULT_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| Error::Config(format!("log directive {DEFAULT_DIRECTIVE}: {e}")))?;
    Ok(filter.add_directive(directive))
}

/// Install the global subscriber for the command-line tool
///
/// `RUST_LOG` wins over the flags when set.
pub fn init_cli_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "keyphrase_trainer=debug"
    } else if quiet {
        "keyphrase_trainer=warn"
    } else {
        DEFAULT_DIRECTIVE
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_timer(BracketTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Scoped run log appending to a file and echoing to stderr
///
/// Events on the creating thread go to this log until it is dropped.
pub struct RunLog {
    path: PathBuf,
    _guard: DefaultGuard,
}

impl RunLog {
    /// Open (append) `path` and make it the current thread's log destination
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        Self::with_filter(path, run_log_filter(env.as_deref())?)
    }

    fn with_filter<P: AsRef<Path>>(path: P, filter: EnvFilter) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::io(format!("opening run log {}", path.display()), e))?;

        let file_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_timer(BracketTime)
            .with_target(false);
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(BracketTime)
            .with_target(false);

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer);

        Ok(Self { path, _guard: tracing::subscriber::set_default(subscriber) })
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }
}
