//! Tracing subscriber setup.
//!
//! Logs go to stderr, or to a file when one is configured. While the
//! dashboard owns the terminal, stderr output is dropped so it cannot tear
//! the alternate screen.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, Registry};

use crate::errors::DepmapError;

/// Environment variable holding a filter directive.
pub const LOG_ENV_VAR: &str = "DEPMAP_LOG";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Serializes tests that flip the process-wide dashboard flag.
#[cfg(test)]
pub(crate) static TUI_FLAG_LOCK: Mutex<()> = Mutex::new(());

/// Mark whether the dashboard currently owns the terminal.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Stderr, or a sink while the dashboard is drawing.
pub enum GatedWriter {
    Stderr(io::Stderr),
    Sink(io::Sink),
}

impl Write for GatedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stderr(w) => w.write(buf),
            Self::Sink(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stderr(w) => w.flush(),
            Self::Sink(w) => w.flush(),
        }
    }
}

/// Writer factory that goes quiet while the dashboard is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrUnlessTui;

impl<'a> MakeWriter<'a> for StderrUnlessTui {
    type Writer = GatedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        if is_tui_active() {
            GatedWriter::Sink(io::sink())
        } else {
            GatedWriter::Stderr(io::stderr())
        }
    }
}

/// Default filter directive for a `-v` count.
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `DEPMAP_LOG` wins, then the configured level, then `-v`.
pub fn env_filter(configured: Option<&str>, verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        let directive = if verbose > 0 {
            verbosity_directive(verbose)
        } else {
            configured.unwrap_or(verbosity_directive(0))
        };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(verbosity_directive(0)))
    })
}

/// Install the global subscriber. Calling it twice keeps the first one.
pub fn init_tracing(
    configured: Option<&str>,
    verbose: u8,
    log_file: Option<&Path>,
) -> Result<(), DepmapError> {
    let writer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| DepmapError::io(path, e))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(StderrUnlessTui),
    };

    let subscriber = Registry::default().with(env_filter(configured, verbose)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(log_file.is_none())
            .with_target(false),
    );
    tracing::subscriber::set_global_default(subscriber).ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "info");
        assert_eq!(verbosity_directive(2), "debug");
        assert_eq!(verbosity_directive(9), "trace");
    }

    #[test]
    fn test_writer_gated_by_tui_flag() {
        let _guard = TUI_FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_tui_active(true);
        assert!(matches!(StderrUnlessTui.make_writer(), GatedWriter::Sink(_)));
        set_tui_active(false);
        assert!(matches!(
            StderrUnlessTui.make_writer(),
            GatedWriter::Stderr(_)
        ));
    }

    #[test]
    fn test_init_with_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depmap.log");
        init_tracing(Some("info"), 0, Some(&path)).unwrap();
        assert!(path.exists());
    }
}
