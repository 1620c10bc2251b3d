// src/store.rs
//! Persisted living-dex dataset.
//!
//! A JSON array of species records, unique by national dex number, stored as
//! windows-1252. Every mutation is written through in full before the next
//! species is processed, so an interrupted run loses at most one species.

use std::path::Path;

use tracing::{info, warn};

use crate::core::encoding::{escape_non_ascii, read_legacy, write_legacy};
use crate::error::Result;
use crate::model::SpeciesRecord;
use crate::overrides::OverrideTable;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SpeciesRecord>,
}

/// What happened to one parsed species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    Added,
    /// National dex number already present; nothing written.
    Existing,
    /// Species was dropped upstream (no models left).
    Filtered,
}

impl Dataset {
    pub fn new(records: Vec<SpeciesRecord>) -> Self {
        let mut ds = Self::default();
        for r in records {
            if !ds.insert(r) {
                warn!("duplicate national dex number dropped");
            }
        }
        ds
    }

    /// Missing file → empty dataset.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = read_legacy(path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let records: Vec<SpeciesRecord> = serde_json::from_str(&text)?;
        Ok(Self::new(records))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        write_legacy(path, &escape_non_ascii(&json))
    }

    pub fn contains(&self, ndex: u32) -> bool {
        self.records.iter().any(|r| r.national_dex == ndex)
    }

    pub fn get(&self, ndex: u32) -> Option<&SpeciesRecord> {
        self.records.iter().find(|r| r.national_dex == ndex)
    }

    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    /// In-place edits only; the set of national dex numbers can't change here.
    pub fn records_mut(&mut self) -> &mut [SpeciesRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append unless the national dex number is taken. Returns whether it was added.
    pub fn insert(&mut self, record: SpeciesRecord) -> bool {
        if self.contains(record.national_dex) {
            return false;
        }
        self.records.push(record);
        true
    }
}

/// Fold one parsed species into the dataset file (load, check, append, save).
pub fn merge_species(path: &Path, species: Option<SpeciesRecord>) -> Result<MergeOutcome> {
    let Some(species) = species else {
        info!("Pokemon is filtered out.");
        return Ok(MergeOutcome::Filtered);
    };
    let mut dex = Dataset::load(path)?;
    let (name, pdex, ndex) = (species.name.clone(), species.regional_dex, species.national_dex);
    if dex.insert(species) {
        dex.save(path)?;
        info!(ndex, "Found new pokemon {name} #{pdex}");
        Ok(MergeOutcome::Added)
    } else {
        info!(ndex, "Pokemon already exists in dex {name} #{pdex}");
        Ok(MergeOutcome::Existing)
    }
}

/// Append every forced record whose national dex number is absent.
/// Saves once, only if something was added. Returns the number added.
pub fn apply_forced_adds(path: &Path, overrides: &OverrideTable) -> Result<usize> {
    let mut dex = Dataset::load(path)?;
    let mut added = 0;
    for forced in overrides.forced() {
        if dex.insert(forced.clone()) {
            info!(ndex = forced.national_dex, "Loading manual pokemon {} #{}", forced.name, forced.regional_dex);
            added += 1;
        }
    }
    if added > 0 {
        dex.save(path)?;
    }
    Ok(added)
}
