// src/scrape.rs
//! Pipeline orchestration.
//!
//! Data run: index → (fetch → parse → forms → images → merge) per species
//! URL, then forced adds. Strictly sequential; the dataset file is rewritten
//! after every species. Image run: every FormImage × every category.
//!
//! A failed fetch of one page or image is counted and skipped. Only a
//! missing dex index or a failed dataset write ends a run early.

use std::fmt;

use scraper::Html;
use tracing::{error, info, warn};

use crate::config::consts::DEX_INDEX_URL;
use crate::config::options::PipelineOptions;
use crate::core::net::Fetch;
use crate::error::{Result, ScrapeError};
use crate::forms::unique_models;
use crate::images::{Category, ImageOutcome, fetch_image, resolve_all};
use crate::model::{BuildError, SpeciesRecord};
use crate::overrides::OverrideTable;
use crate::progress::Progress;
use crate::specs::{pokedex, species};
use crate::store::{self, Dataset, MergeOutcome};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataSummary {
    pub visited: usize,
    pub added: usize,
    pub existing: usize,
    pub filtered: usize,
    /// Unreachable or non-200 pages and pages without a name block.
    pub failed: usize,
    pub forced: usize,
}

impl fmt::Display for DataSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages: {} added, {} existing, {} filtered, {} failed, {} forced",
            self.visited, self.added, self.existing, self.filtered, self.failed, self.forced
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSummary {
    pub written: usize,
    pub existing: usize,
    pub failed: usize,
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "images: {} written, {} existing, {} failed", self.written, self.existing, self.failed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub data: Option<DataSummary>,
    pub images: Option<ImageSummary>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.data, &self.images) {
            (Some(d), Some(i)) => write!(f, "{d}; {i}"),
            (Some(d), None) => write!(f, "{d}"),
            (None, Some(i)) => write!(f, "{i}"),
            (None, None) => write!(f, "nothing to do"),
        }
    }
}

/// Species page URLs from the regional dex index, after the options' slice.
pub fn species_urls(fetcher: &mut dyn Fetch, opts: &PipelineOptions) -> Result<Vec<String>> {
    let index = fetcher
        .fetch(DEX_INDEX_URL)?
        .ok_or_else(|| ScrapeError::schema_miss("dex index page not served"))?;
    let values = pokedex::parse_index(&index.text())?;
    let urls = pokedex::species_urls(opts.slice(&values));
    info!("Found {} Pokemon urls", urls.len());
    Ok(urls)
}

/// One species page → record. `Ok(None)` when nothing renderable is left.
pub fn species_from_page(html: &str, overrides: &OverrideTable) -> Result<Option<SpeciesRecord>> {
    let doc = Html::parse_document(html);
    species_from_doc(&doc, overrides)
}

pub fn species_from_doc(doc: &Html, overrides: &OverrideTable) -> Result<Option<SpeciesRecord>> {
    let mut builder = species::read_page(doc)?;
    let name = builder.name().to_string();
    let keys = unique_models(&name, builder.gender_models(), builder.form_models(), overrides);
    if keys.is_empty() {
        info!(species = %name, "every form is unavailable, dropping species");
        return Ok(None);
    }
    let images = resolve_all(doc, &name, builder.national_dex(), &keys, overrides);
    builder.set_images(images);
    match builder.build() {
        Ok(record) => Ok(Some(record)),
        Err(BuildError::NoModels) => {
            info!(species = %name, "no model has an image, dropping species");
            Ok(None)
        }
        Err(e) => Err(ScrapeError::schema_miss(e.to_string())),
    }
}

pub fn generate_data(
    fetcher: &mut dyn Fetch,
    opts: &PipelineOptions,
    overrides: &OverrideTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<DataSummary> {
    let urls = species_urls(fetcher, opts)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
        p.log("Scraping species pages…");
    }

    let mut sum = DataSummary::default();
    for url in &urls {
        sum.visited += 1;
        let page = match fetcher.fetch(url) {
            Ok(Some(page)) => page,
            Ok(None) => {
                warn!(url, "page not served, skipping");
                sum.failed += 1;
                if let Some(p) = progress.as_deref_mut() { p.item_failed(url); }
                continue;
            }
            Err(e) => {
                warn!(url, "fetch failed, skipping: {e}");
                sum.failed += 1;
                if let Some(p) = progress.as_deref_mut() { p.item_failed(url); }
                continue;
            }
        };
        let parsed = match species_from_page(&page.text(), overrides) {
            Ok(parsed) => parsed,
            Err(e) if e.is_schema_miss() => {
                warn!(url, "skipping page: {e}");
                sum.failed += 1;
                if let Some(p) = progress.as_deref_mut() { p.item_failed(url); }
                continue;
            }
            Err(e) => return Err(e),
        };
        let label = parsed.as_ref().map(|r| r.name.clone()).unwrap_or_else(|| url.clone());
        match store::merge_species(opts.data_path(), parsed)? {
            MergeOutcome::Added => sum.added += 1,
            MergeOutcome::Existing => sum.existing += 1,
            MergeOutcome::Filtered => sum.filtered += 1,
        }
        if let Some(p) = progress.as_deref_mut() { p.item_done(&label); }
    }

    sum.forced = store::apply_forced_adds(opts.data_path(), overrides)?;
    info!("{sum}");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&sum.to_string());
        p.finish();
    }
    Ok(sum)
}

pub fn generate_images(
    fetcher: &mut dyn Fetch,
    opts: &PipelineOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ImageSummary> {
    let dex = Dataset::load(opts.data_path())?;
    info!("Starting image checking and downloading.");
    let total: usize = dex.records().iter().map(|r| r.unique_model_images.len()).sum();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
        p.log("Fetching images…");
    }

    let mut sum = ImageSummary::default();
    for record in dex.records() {
        for form in &record.unique_model_images {
            let mut any_failed = false;
            for cat in Category::ALL {
                let dir = opts.category_dir(cat.subdir());
                match fetch_image(fetcher, cat, &form.image, &dir) {
                    Ok(ImageOutcome::Existing) => sum.existing += 1,
                    Ok(ImageOutcome::Written { .. }) => sum.written += 1,
                    Ok(ImageOutcome::Failed { .. }) => {
                        sum.failed += 1;
                        any_failed = true;
                    }
                    // no marker: the next run tries again
                    Err(e) => {
                        warn!(?cat, image = %form.image, "image fetch failed: {e}");
                        sum.failed += 1;
                        any_failed = true;
                    }
                }
            }
            if let Some(p) = progress.as_deref_mut() {
                let what = format!("{} {}", record.name, form.display_form());
                if any_failed { p.item_failed(&what) } else { p.item_done(&what) }
            }
        }
    }

    info!("{sum}");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&sum.to_string());
        p.finish();
    }
    Ok(sum)
}

/// Run whichever stages the options' mode selects.
pub fn run(
    fetcher: &mut dyn Fetch,
    opts: &PipelineOptions,
    overrides: &OverrideTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let mut out = RunSummary::default();
    if opts.wants_data() {
        out.data = Some(generate_data(fetcher, opts, overrides, progress.as_deref_mut()).inspect_err(|e| {
            error!("data run failed: {e}");
        })?);
    }
    if opts.wants_images() {
        out.images = Some(generate_images(fetcher, opts, progress.as_deref_mut()).inspect_err(|e| {
            error!("image run failed: {e}");
        })?);
    }
    Ok(out)
}
