// src/cli.rs
//! Headless pipeline runner (`--features cli`).

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{CACHE_SUBDIR, DATA_FILE, IMAGE_DIR, REQUEST_DELAY_MS, STORE_DIR};
use crate::config::options::{PipelineOptions, RunMode};
use crate::core::net;
use crate::overrides::OverrideTable;
use crate::progress::Progress;
use crate::scrape::{self, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    /// Scrape species pages into the dataset
    Data,
    /// Download images for every model in the dataset
    Images,
    /// Both, data first
    All,
}

impl From<Stage> for RunMode {
    fn from(s: Stage) -> Self {
        match s {
            Stage::Data => RunMode::Data,
            Stage::Images => RunMode::Images,
            Stage::All => RunMode::All,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "livedex", version, about = "Scrape the living dex dataset and images")]
pub struct Args {
    #[arg(value_enum, default_value_t = Stage::All)]
    pub stage: Stage,

    /// Dataset file
    #[arg(long, default_value = DATA_FILE)]
    pub data: PathBuf,

    /// Image root (normal/, shiny/, sprite/ live under it)
    #[arg(long, default_value = IMAGE_DIR)]
    pub images: PathBuf,

    /// Response cache directory
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Disable the response cache
    #[arg(long, conflicts_with = "cache")]
    pub no_cache: bool,

    /// Pause before every network request
    #[arg(long, default_value_t = REQUEST_DELAY_MS)]
    pub delay_ms: u64,

    /// Skip this many species links from the index
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Visit at most this many species links
    #[arg(long)]
    pub limit: Option<usize>,

    /// Log to stderr instead of the log file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> PipelineOptions {
        let cache_dir = if self.no_cache {
            None
        } else {
            Some(
                self.cache
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(STORE_DIR).join(CACHE_SUBDIR)),
            )
        };
        PipelineOptions {
            mode: self.stage.into(),
            data_file: self.data.clone(),
            image_dir: self.images.clone(),
            cache_dir,
            request_delay: Duration::from_millis(self.delay_ms),
            start: self.start,
            limit: self.limit,
        }
    }
}

/// Prints one line per finished unit.
struct CliProgress {
    total: usize,
    seen: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.seen = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, what: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {what}", self.seen, self.total);
    }
    fn item_failed(&mut self, what: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] FAILED {what}", self.seen, self.total);
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    if args.verbose {
        crate::log::init_stderr();
    } else {
        crate::log::init();
    }

    let summary = run_with(&args)?;
    println!("{summary}");
    Ok(())
}

pub fn run_with(args: &Args) -> Result<RunSummary> {
    let opts = args.options();
    let mut fetcher = net::gateway(opts.request_delay, opts.cache_dir.as_deref())
        .wrap_err("building HTTP client")?;
    let mut progress = CliProgress { total: 0, seen: 0 };
    let summary = scrape::run(&mut *fetcher, &opts, &OverrideTable::builtin(), Some(&mut progress))
        .wrap_err_with(|| format!("{:?} run failed", opts.mode))?;
    Ok(summary)
}
