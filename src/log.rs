// src/log.rs
//! Logging setup: `tracing` events into `.store/debug.log`, stamped with
//! time since start. Falls back to stderr when the file can't be opened.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::config::consts::{LOG_FILE, STORE_DIR};

const DEFAULT_FILTER: &str = "info,livedex_scrape=debug";

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// `[hh:mm:ss.mmm]` since the first log call.
struct Elapsed;

impl FormatTime for Elapsed {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", fmt_elapsed(start().elapsed().as_millis()))
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn log_path() -> PathBuf {
    Path::new(STORE_DIR).join(LOG_FILE)
}

/// File logging for the app. Safe to call more than once.
pub fn init() {
    start();
    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_timer(Elapsed)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok();
            if installed {
                tracing::info!("logging to {}", path.display());
            }
        }
        Err(e) => {
            init_stderr();
            tracing::warn!("cannot open {}: {e}; logging to stderr", path.display());
        }
    }
}

/// Log to stderr instead of the file.
pub fn init_stderr() {
    start();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_timer(Elapsed)
        .with_writer(std::io::stderr)
        .try_init();
}
