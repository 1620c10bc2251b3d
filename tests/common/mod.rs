// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use livedex_scrape::core::net::{Fetch, Response};
use livedex_scrape::error::{Result, ScrapeError};

pub const SITE: &str = "https://serebii.net/";
pub const INDEX: &str = "https://www.serebii.net/pokedex-sv/";

/// In-memory site: URL → body. Unknown URLs answer "not 200".
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Vec<u8>>,
    broken: HashSet<String>,
    pub calls: Vec<String>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    /// Fail the request at the transport level.
    pub fn broken(mut self, url: &str) -> Self {
        self.broken.insert(url.to_string());
        self
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.iter().filter(|c| *c == url).count()
    }
}

impl Fetch for FakeFetcher {
    fn fetch(&mut self, url: &str) -> Result<Option<Response>> {
        self.calls.push(url.to_string());
        if self.broken.contains(url) {
            return Err(ScrapeError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            )));
        }
        Ok(self.pages.get(url).map(|b| Response::ok(b.clone())))
    }
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {e}", path.display()))
}

/// The fixture site: index + species pages (`gone` is not served).
pub fn fake_site() -> FakeFetcher {
    FakeFetcher::new()
        .with(INDEX, fixture("index.html"))
        .with(&format!("{SITE}pokedex-sv/sprigatito/"), fixture("sprigatito.html"))
        .with(&format!("{SITE}pokedex-sv/flabebe/"), fixture("flabebe.html"))
        .with(&format!("{SITE}pokedex-sv/pikachu/"), fixture("pikachu.html"))
        .with(&format!("{SITE}pokedex-sv/tauros/"), fixture("tauros.html"))
        .with(&format!("{SITE}pokedex-sv/missingno/"), fixture("missingno.html"))
}

/// A tiny valid PNG.
pub fn png_bytes(shade: u8) -> Vec<u8> {
    let img = RgbaImage::from_pixel(2, 2, Rgba([shade, shade, shade, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
    buf.into_inner()
}
