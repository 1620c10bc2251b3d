// src/images/resolve.rs
//! Model key → sprite filename.
//!
//! - `gender|form`: the page's `<img>` whose alt text is the form label; the
//!   filename is the last segment of its `src`.
//! - `Uniform` / `Male`: `{ndex}.png`
//! - `Female`: `{ndex}-f.png`
//! - anything else: no image.
//!
//! Every filename is dex-padded on the way out (`FormImage::new`).

use scraper::Html;
use tracing::debug;

use crate::config::consts::{FEMALE, MALE, UNIFORM};
use crate::core::html::IMG;
use crate::core::sanitize::{last_path_segment, same_label};
use crate::model::{FormImage, split_model};
use crate::overrides::OverrideTable;

pub fn resolve_image(
    doc: &Html,
    species: &str,
    ndex: u32,
    key: &str,
    overrides: &OverrideTable,
) -> Option<String> {
    match split_model(key) {
        (_, Some(form)) => {
            let src = doc
                .select(&IMG)
                .find(|img| img.value().attr("alt").is_some_and(|alt| same_label(alt, form)))
                .and_then(|img| img.value().attr("src"));
            let Some(src) = src else {
                debug!(species, form, "no image with matching alt text");
                return None;
            };
            if overrides.is_excluded(species, form) {
                return None;
            }
            let file = last_path_segment(src);
            (!file.is_empty()).then(|| file.to_string())
        }
        (g, None) if g == UNIFORM || g == MALE => Some(format!("{ndex}.png")),
        (g, None) if g == FEMALE => Some(format!("{ndex}-f.png")),
        (other, None) => {
            debug!(species, model = other, "model key matches no image rule");
            None
        }
    }
}

/// Resolve every key in order, dropping the ones without an image.
pub fn resolve_all(
    doc: &Html,
    species: &str,
    ndex: u32,
    keys: &[String],
    overrides: &OverrideTable,
) -> Vec<FormImage> {
    keys.iter()
        .filter_map(|key| {
            resolve_image(doc, species, ndex, key, overrides)
                .map(|file| FormImage::new(key.as_str(), &file))
        })
        .collect()
}
