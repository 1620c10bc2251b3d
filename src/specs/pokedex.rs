// src/specs/pokedex.rs
//! Regional dex index: the `<option>` list that links every species page.

use scraper::Html;
use tracing::debug;

use crate::config::consts::{DEX_INDEX_OPTION, SITE_ROOT};
use crate::core::html::{OPTION, parent_element, text_of};
use crate::error::{Result, ScrapeError};

/// Option values (relative species links) of the dex `<select>`, in page order.
pub fn parse_index(html: &str) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let marker = doc
        .select(&OPTION)
        .find(|o| text_of(*o) == DEX_INDEX_OPTION)
        .ok_or_else(|| ScrapeError::schema_miss(format!("option {DEX_INDEX_OPTION:?}")))?;
    let select = parent_element(marker)
        .ok_or_else(|| ScrapeError::schema_miss("dex option has no parent list"))?;

    let values: Vec<String> = select
        .select(&OPTION)
        .filter(|o| text_of(*o) != DEX_INDEX_OPTION)
        .filter_map(|o| o.value().attr("value"))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    debug!("Found {} species links", values.len());
    Ok(values)
}

/// Absolute URL for an option value.
pub fn species_url(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        return value.to_string();
    }
    format!("{}{}", SITE_ROOT, value.trim_start_matches('/'))
}

pub fn species_urls(values: &[String]) -> Vec<String> {
    values.iter().map(|v| species_url(v)).collect()
}
