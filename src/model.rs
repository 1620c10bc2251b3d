// src/model.rs
//! Canonical living-dex records.
//!
//! A species page is read into a [`SpeciesBuilder`] stage by stage (name block,
//! forms, images) and only becomes a [`SpeciesRecord`] once every stage has run.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::consts::UNIFORM;
use crate::core::sanitize::{pad_dex_filename, strip_markers};

/// One renderable model and its sprite filename.
/// Stored on disk as a `[key, filename]` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct FormImage {
    /// `"{gender}"` or `"{gender}|{form}"`
    pub form: String,
    /// Always has an (at least) 3-digit dex number head.
    pub image: String,
}

impl FormImage {
    pub fn new(form: impl Into<String>, image: &str) -> Self {
        Self { form: form.into(), image: pad_dex_filename(image) }
    }

    pub fn gender(&self) -> &str {
        split_model(&self.form).0
    }

    pub fn alt_form(&self) -> Option<&str> {
        split_model(&self.form).1
    }

    /// Model key with the separator shown as a space.
    pub fn display_form(&self) -> String {
        self.form.replace('|', " ")
    }
}

impl From<(String, String)> for FormImage {
    fn from((form, image): (String, String)) -> Self {
        Self::new(form, &image)
    }
}

impl From<FormImage> for (String, String) {
    fn from(f: FormImage) -> Self {
        (f.form, f.image)
    }
}

impl fmt::Display for FormImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} image file {}", self.form, self.image)
    }
}

/// Join a gender variant and an alternate form into a model key.
pub fn model_key(gender: &str, form: &str) -> String {
    format!("{gender}|{form}")
}

/// `"Male|Alola Form"` → `("Male", Some("Alola Form"))`, `"Female"` → `("Female", None)`.
pub fn split_model(key: &str) -> (&str, Option<&str>) {
    match key.split_once('|') {
        Some((g, f)) => (g, Some(f)),
        None => (key, None),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    #[serde(rename = "pdex")]
    pub regional_dex: u32,
    #[serde(rename = "ndex")]
    pub national_dex: u32,
    pub male: f64,
    pub female: f64,
    pub japanese: String,
    pub french: String,
    pub german: String,
    pub korean: String,
    pub complete: bool,
    pub gender_models: Vec<String>,
    pub form_models: Vec<String>,
    pub unique_model_images: Vec<FormImage>,
    /// Model keys marked caught in the viewer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caught: Vec<String>,
}

impl SpeciesRecord {
    pub fn is_caught(&self, form: &str) -> bool {
        self.caught.iter().any(|k| k == form)
    }

    /// Mark one model caught/uncaught; keeps `complete` in step.
    pub fn set_caught(&mut self, form: &str, caught: bool) {
        let present = self.is_caught(form);
        if caught && !present {
            self.caught.push(form.to_string());
        } else if !caught && present {
            self.caught.retain(|k| k != form);
        }
        self.refresh_complete();
    }

    pub fn refresh_complete(&mut self) {
        self.complete = !self.unique_model_images.is_empty()
            && self.unique_model_images.iter().all(|m| self.is_caught(&m.form));
    }
}

impl fmt::Display for SpeciesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / Japan: {} / French: {} / German: {} / Korean: {} | N #{} | P #{} | Male: {}% Female: {}% | Models: Gender {:?} Form {:?} Unique {}",
            self.name, self.japanese, self.french, self.german, self.korean,
            self.national_dex, self.regional_dex, self.male, self.female,
            self.gender_models, self.form_models, self.unique_model_images.len(),
        )
    }
}

/// Name-block fields a labeled cell can feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Regional,
    National,
    Male,
    Female,
    Japanese,
    French,
    German,
    Korean,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    MissingName,
    MissingForms,
    MissingImages,
    /// Every model was excluded or had no image.
    NoModels,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingName => write!(f, "species name not set"),
            BuildError::MissingForms => write!(f, "form stage not run"),
            BuildError::MissingImages => write!(f, "image stage not run"),
            BuildError::NoModels => write!(f, "no models left after filtering"),
        }
    }
}

impl std::error::Error for BuildError {}

/// A species under construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpeciesBuilder {
    name: Option<String>,
    regional_dex: u32,
    national_dex: u32,
    male: f64,
    female: f64,
    japanese: String,
    french: String,
    german: String,
    korean: String,
    gender_models: Option<Vec<String>>,
    form_models: Vec<String>,
    images: Option<Vec<FormImage>>,
}

impl SpeciesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn national_dex(&self) -> u32 {
        self.national_dex
    }

    pub fn regional_dex(&self) -> u32 {
        self.regional_dex
    }

    pub fn ratios(&self) -> (f64, f64) {
        (self.male, self.female)
    }

    pub fn localized(&self) -> [&str; 4] {
        [&self.japanese, &self.french, &self.german, &self.korean]
    }

    /// Store a raw value cell under `field`. Dex numbers drop `#`, ratios drop
    /// `%` and footnote `*`. Unparsable numbers keep the previous value.
    pub fn assign(&mut self, field: Field, raw: &str) {
        match field {
            Field::Regional | Field::National => {
                let v = strip_markers(raw, &['#']);
                match v.parse::<u32>() {
                    Ok(n) if field == Field::Regional => self.regional_dex = n,
                    Ok(n) => self.national_dex = n,
                    Err(_) => warn!(?field, raw, "unparsable dex number"),
                }
            }
            Field::Male | Field::Female => {
                let v = strip_markers(raw, &['%', '*']);
                match v.parse::<f64>() {
                    Ok(p) if field == Field::Male => self.male = p,
                    Ok(p) => self.female = p,
                    Err(_) => warn!(?field, raw, "unparsable gender ratio"),
                }
            }
            Field::Japanese => self.japanese = raw.to_string(),
            Field::French => self.french = raw.to_string(),
            Field::German => self.german = raw.to_string(),
            Field::Korean => self.korean = raw.to_string(),
        }
    }

    /// Gender variants default to `["Uniform"]` when the page has none.
    pub fn set_forms(&mut self, gender_models: Option<Vec<String>>, form_models: Option<Vec<String>>) {
        let genders = gender_models
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| vec![s!(UNIFORM)]);
        self.gender_models = Some(genders);
        self.form_models = form_models.unwrap_or_default();
    }

    pub fn gender_models(&self) -> &[String] {
        self.gender_models.as_deref().unwrap_or(&[])
    }

    pub fn form_models(&self) -> &[String] {
        &self.form_models
    }

    pub fn set_images(&mut self, images: Vec<FormImage>) {
        self.images = Some(images);
    }

    pub fn build(self) -> Result<SpeciesRecord, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let gender_models = self.gender_models.ok_or(BuildError::MissingForms)?;
        let images = self.images.ok_or(BuildError::MissingImages)?;
        if images.is_empty() {
            return Err(BuildError::NoModels);
        }
        Ok(SpeciesRecord {
            name,
            regional_dex: self.regional_dex,
            national_dex: self.national_dex,
            male: self.male,
            female: self.female,
            japanese: self.japanese,
            french: self.french,
            german: self.german,
            korean: self.korean,
            complete: false,
            gender_models,
            form_models: self.form_models,
            unique_model_images: images,
            caught: Vec::new(),
        })
    }
}
