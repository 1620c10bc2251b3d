// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// What a pipeline run should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunMode {
    Data,
    Images,
    #[default]
    All,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    pub mode: RunMode,
    pub data_file: PathBuf,
    pub image_dir: PathBuf,
    /// `None` disables the on-disk response cache.
    pub cache_dir: Option<PathBuf>,
    pub request_delay: Duration,
    /// Index into the species URL list to start from.
    pub start: usize,
    /// Max number of species URLs to visit.
    pub limit: Option<usize>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            mode: RunMode::All,
            data_file: PathBuf::from(DATA_FILE),
            image_dir: PathBuf::from(IMAGE_DIR),
            cache_dir: Some(PathBuf::from(STORE_DIR).join(CACHE_SUBDIR)),
            request_delay: Duration::from_millis(REQUEST_DELAY_MS),
            start: 0,
            limit: None,
        }
    }
}

impl PipelineOptions {
    pub fn wants_data(&self) -> bool {
        matches!(self.mode, RunMode::Data | RunMode::All)
    }

    pub fn wants_images(&self) -> bool {
        matches!(self.mode, RunMode::Images | RunMode::All)
    }

    /// Apply `start`/`limit` to the discovered species URLs.
    pub fn slice<'a>(&self, urls: &'a [String]) -> &'a [String] {
        let from = self.start.min(urls.len());
        let to = match self.limit {
            Some(n) => from.saturating_add(n).min(urls.len()),
            None => urls.len(),
        };
        &urls[from..to]
    }

    pub fn category_dir(&self, subdir: &str) -> PathBuf {
        self.image_dir.join(subdir)
    }

    pub fn data_path(&self) -> &Path {
        &self.data_file
    }
}
