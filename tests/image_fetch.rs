// tests/image_fetch.rs
mod common;

use std::time::Duration;

use common::{FakeFetcher, png_bytes};
use livedex_scrape::config::options::{PipelineOptions, RunMode};
use livedex_scrape::images::{Category, ImageOutcome, err_marker, fetch_image};
use livedex_scrape::model::{FormImage, SpeciesRecord};
use livedex_scrape::scrape::{self, ImageSummary};
use livedex_scrape::store::Dataset;

const NORMAL: &str = "https://serebii.net/scarletviolet/pokemon/new/";
const SHINY: &str = "https://www.serebii.net/Shiny/SV/new/";
const SPRITE: &str = "https://serebii.net/pokedex-sv/icon/new/";

#[test]
fn exact_file_is_saved_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut site = FakeFetcher::new().with(&format!("{NORMAL}025.png"), png_bytes(10));

    let out = fetch_image(&mut site, Category::Normal, "025.png", dir.path()).unwrap();
    assert_eq!(out, ImageOutcome::Written { from: "025.png".into() });

    let saved = image::open(dir.path().join("025.png")).unwrap();
    assert_eq!((saved.width(), saved.height()), (2, 2));
}

#[test]
fn form_falls_back_to_base_species() {
    let dir = tempfile::tempdir().unwrap();
    let mut site = FakeFetcher::new().with(&format!("{SHINY}669.png"), png_bytes(20));

    let out = fetch_image(&mut site, Category::Shiny, "669-b.png", dir.path()).unwrap();
    assert_eq!(out, ImageOutcome::Written { from: "669.png".into() });
    // saved under the requested name
    assert!(dir.path().join("669-b.png").exists());
    assert_eq!(site.calls, vec![format!("{SHINY}669-b.png"), format!("{SHINY}669.png")]);
}

#[test]
fn sprite_tries_defeminized_name_last() {
    let dir = tempfile::tempdir().unwrap();
    let mut site = FakeFetcher::new().with(&format!("{SPRITE}902-x.png"), png_bytes(30));

    let out = fetch_image(&mut site, Category::Sprite, "902-f-x.png", dir.path()).unwrap();
    assert_eq!(out, ImageOutcome::Written { from: "902-x.png".into() });
    assert_eq!(
        site.calls,
        vec![
            format!("{SPRITE}902-f-x.png"),
            format!("{SPRITE}902.png"),
            format!("{SPRITE}902-x.png"),
        ]
    );
}

#[test]
fn failure_writes_marker_and_is_never_retried() {
    let dir = tempfile::tempdir().unwrap();
    let mut site = FakeFetcher::new();

    let out = fetch_image(&mut site, Category::Normal, "025-f.png", dir.path()).unwrap();
    let marker = err_marker(&dir.path().join("025-f.png"));
    assert_eq!(out, ImageOutcome::Failed { marker: marker.clone() });
    assert!(marker.exists());
    assert!(!dir.path().join("025-f.png").exists());
    assert_eq!(site.calls.len(), 2);

    let again = fetch_image(&mut site, Category::Normal, "025-f.png", dir.path()).unwrap();
    assert_eq!(again, ImageOutcome::Existing);
    assert_eq!(site.calls.len(), 2);
}

#[test]
fn existing_file_skips_fetch() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("906.png"), png_bytes(1)).unwrap();
    let mut site = FakeFetcher::new();

    let out = fetch_image(&mut site, Category::Sprite, "906.png", dir.path()).unwrap();
    assert_eq!(out, ImageOutcome::Existing);
    assert!(site.calls.is_empty());
}

#[test]
fn undecodable_payload_counts_as_miss() {
    let dir = tempfile::tempdir().unwrap();
    let mut site = FakeFetcher::new()
        .with(&format!("{NORMAL}128-p.png"), b"<html>404</html>".to_vec())
        .with(&format!("{NORMAL}128.png"), png_bytes(5));

    let out = fetch_image(&mut site, Category::Normal, "128-p.png", dir.path()).unwrap();
    assert_eq!(out, ImageOutcome::Written { from: "128.png".into() });
}

#[test]
fn transport_error_leaves_no_marker() {
    let dir = tempfile::tempdir().unwrap();
    let mut site = FakeFetcher::new().broken(&format!("{NORMAL}025.png"));

    assert!(fetch_image(&mut site, Category::Normal, "025.png", dir.path()).is_err());
    assert!(!err_marker(&dir.path().join("025.png")).exists());
}

fn pikachu() -> SpeciesRecord {
    SpeciesRecord {
        name: "Pikachu".into(),
        regional_dex: 74,
        national_dex: 25,
        male: 50.0,
        female: 50.0,
        japanese: String::new(),
        french: String::new(),
        german: String::new(),
        korean: String::new(),
        complete: false,
        gender_models: vec!["Male".into(), "Female".into()],
        form_models: Vec::new(),
        unique_model_images: vec![FormImage::new("Male", "025.png"), FormImage::new("Female", "025-f.png")],
        caught: Vec::new(),
    }
}

#[test]
fn image_run_fills_each_category_dir() {
    let dir = tempfile::tempdir().unwrap();
    let opts = PipelineOptions {
        mode: RunMode::Images,
        data_file: dir.path().join("dex.json"),
        image_dir: dir.path().join("images"),
        cache_dir: None,
        request_delay: Duration::ZERO,
        ..Default::default()
    };
    Dataset::new(vec![pikachu()]).save(&opts.data_file).unwrap();

    let mut site = FakeFetcher::new()
        .with(&format!("{NORMAL}025.png"), png_bytes(1))
        .with(&format!("{NORMAL}025-f.png"), png_bytes(2))
        .with(&format!("{SHINY}025.png"), png_bytes(3))
        .with(&format!("{SPRITE}025.png"), png_bytes(4));

    let sum = scrape::generate_images(&mut site, &opts, None).unwrap();
    // shiny 025-f and sprite 025-f fall back to 025.png
    assert_eq!(sum, ImageSummary { written: 6, existing: 0, failed: 0 });
    for sub in ["normal", "shiny", "sprite"] {
        assert!(opts.image_dir.join(sub).join("025.png").exists(), "{sub}/025.png");
        assert!(opts.image_dir.join(sub).join("025-f.png").exists(), "{sub}/025-f.png");
    }

    let mut quiet = FakeFetcher::new();
    let again = scrape::run(&mut quiet, &opts, &Default::default(), None).unwrap();
    assert_eq!(again.images, Some(ImageSummary { written: 0, existing: 6, failed: 0 }));
    assert!(again.data.is_none());
    assert!(quiet.calls.is_empty());
}

#[test]
fn image_run_continues_past_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = PipelineOptions {
        mode: RunMode::Images,
        data_file: dir.path().join("dex.json"),
        image_dir: dir.path().join("images"),
        cache_dir: None,
        request_delay: Duration::ZERO,
        ..Default::default()
    };
    Dataset::new(vec![pikachu()]).save(&opts.data_file).unwrap();

    let site = || {
        FakeFetcher::new()
            .with(&format!("{NORMAL}025.png"), png_bytes(1))
            .with(&format!("{NORMAL}025-f.png"), png_bytes(2))
            .with(&format!("{SHINY}025.png"), png_bytes(3))
            .with(&format!("{SPRITE}025.png"), png_bytes(4))
    };
    let mut flaky = site().broken(&format!("{NORMAL}025.png"));

    let sum = scrape::generate_images(&mut flaky, &opts, None).unwrap();
    assert_eq!(sum, ImageSummary { written: 5, existing: 0, failed: 1 });
    let normal = opts.image_dir.join("normal").join("025.png");
    assert!(!normal.exists());
    assert!(!err_marker(&normal).exists());

    let again = scrape::generate_images(&mut site(), &opts, None).unwrap();
    assert_eq!(again, ImageSummary { written: 1, existing: 5, failed: 0 });
    assert!(normal.exists());
}
