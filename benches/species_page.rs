// benches/species_page.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use livedex_scrape::{overrides::OverrideTable, scrape, specs::species};

fn load_sample(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

fn bench_species_page(c: &mut Criterion) {
    let plain = load_sample("sprigatito.html");
    let forms = load_sample("flabebe.html");
    let overrides = OverrideTable::builtin();

    c.bench_function("parse_page_plain", |b| {
        b.iter(|| {
            let (_, builder) = species::parse_page(black_box(&plain)).expect("parse");
            black_box(builder.national_dex())
        })
    });

    c.bench_function("parse_page_forms", |b| {
        b.iter(|| {
            let (_, builder) = species::parse_page(black_box(&forms)).expect("parse");
            black_box(builder.form_models().len())
        })
    });

    c.bench_function("species_from_page_forms", |b| {
        b.iter(|| {
            let rec = scrape::species_from_page(black_box(&forms), &overrides).expect("parse");
            black_box(rec.map(|r| r.unique_model_images.len()))
        })
    });
}

criterion_group!(benches, bench_species_page);
criterion_main!(benches);
