// src/forms.rs
//! Canonical model keys for one species: gender variants × alternate forms.

use crate::model::model_key;
use crate::overrides::OverrideTable;

/// Ordered unique model keys.
///
/// With alternate forms the result is the gender-major cross product
/// (`"{gender}|{form}"`), minus every form the override table excludes for
/// `species` (regardless of the gender it is paired with). Without forms the
/// gender list is returned as-is. An empty result means the species is
/// unavailable and must be dropped.
pub fn unique_models(
    species: &str,
    genders: &[String],
    forms: &[String],
    overrides: &OverrideTable,
) -> Vec<String> {
    if forms.is_empty() {
        return genders.to_vec();
    }
    let allowed: Vec<&String> = forms
        .iter()
        .filter(|form| !overrides.is_excluded(species, form))
        .collect();

    genders
        .iter()
        .flat_map(|g| allowed.iter().map(move |f| model_key(g, f)))
        .collect()
}
