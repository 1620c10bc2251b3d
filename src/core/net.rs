// src/core/net.rs
//! Fetch gateway: fetch-by-URL with self-throttling and an on-disk cache.
//!
//! `HttpFetcher` sleeps before every network request. `CachedFetcher` answers
//! repeat URLs from disk without touching the wrapped fetcher, so cache hits
//! skip the delay entirely. Only 200 responses are ever cached.

use std::{
    fs,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use encoding_rs::{Encoding, WINDOWS_1252};
use reqwest::{StatusCode, blocking::Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::config::consts::USER_AGENT;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, content_type: None, body: body.into() }
    }

    /// Decode the body: declared charset, else UTF-8 if valid, else windows-1252.
    pub fn text(&self) -> String {
        if let Some(enc) = self.charset() {
            let (text, _, _) = enc.decode(&self.body);
            return text.into_owned();
        }
        match std::str::from_utf8(&self.body) {
            Ok(s) => s.to_string(),
            Err(_) => WINDOWS_1252.decode(&self.body).0.into_owned(),
        }
    }

    fn charset(&self) -> Option<&'static Encoding> {
        let ct = self.content_type.as_deref()?;
        let label = ct
            .split(';')
            .map(str::trim)
            .filter_map(|p| p.split_once('='))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case("charset"))
            .map(|(_, v)| v.trim())?;
        Encoding::for_label(label.trim_matches('"').as_bytes())
    }
}

/// Fetch-by-URL capability.
/// `Ok(None)` means the server answered with something other than 200.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<Option<Response>>;
}

impl<F: Fetch + ?Sized> Fetch for &mut F {
    fn fetch(&mut self, url: &str) -> Result<Option<Response>> {
        (**self).fetch(url)
    }
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn fetch(&mut self, url: &str) -> Result<Option<Response>> {
        (**self).fetch(url)
    }
}

/* ---------- network ---------- */

pub struct HttpFetcher {
    client: Client,
    delay: Duration,
}

impl HttpFetcher {
    pub fn new(delay: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, delay })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&mut self, url: &str) -> Result<Option<Response>> {
        if !self.delay.is_zero() {
            info!("Resting for {} ms to self-throttle", self.delay.as_millis());
            thread::sleep(self.delay);
        }
        info!(url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        info!(url, status = status.as_u16(), "response");
        if status != StatusCode::OK {
            return Ok(None);
        }
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes()?.to_vec();
        Ok(Some(Response { status: status.as_u16(), content_type, body }))
    }
}

/* ---------- disk cache ---------- */

#[derive(Serialize, Deserialize)]
struct CacheMeta {
    url: String,
    content_type: Option<String>,
}

pub struct CachedFetcher<F> {
    inner: F,
    dir: PathBuf,
}

impl<F: Fetch> CachedFetcher<F> {
    pub fn new(inner: F, dir: impl Into<PathBuf>) -> Self {
        Self { inner, dir: dir.into() }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    fn paths(&self, url: &str) -> (PathBuf, PathBuf) {
        let key = cache_key(url);
        (self.dir.join(format!("{key}.json")), self.dir.join(format!("{key}.body")))
    }

    fn lookup(&self, url: &str) -> Option<Response> {
        let (meta_path, body_path) = self.paths(url);
        let meta: CacheMeta = serde_json::from_slice(&fs::read(&meta_path).ok()?).ok()?;
        if meta.url != url {
            warn!(url, cached = %meta.url, "cache key collision, ignoring entry");
            return None;
        }
        let body = fs::read(&body_path).ok()?;
        Some(Response { status: 200, content_type: meta.content_type, body })
    }

    fn store(&self, url: &str, resp: &Response) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let (meta_path, body_path) = self.paths(url);
        // body first: an entry only counts once its metadata exists
        fs::write(&body_path, &resp.body)?;
        let meta = CacheMeta { url: url.to_string(), content_type: resp.content_type.clone() };
        fs::write(&meta_path, serde_json::to_vec(&meta)?)?;
        Ok(())
    }
}

impl<F: Fetch> Fetch for CachedFetcher<F> {
    fn fetch(&mut self, url: &str) -> Result<Option<Response>> {
        if let Some(hit) = self.lookup(url) {
            debug!(url, "Found in cache");
            return Ok(Some(hit));
        }
        let resp = self.inner.fetch(url)?;
        if let Some(r) = &resp {
            if r.status == 200 {
                match self.store(url, r) {
                    Ok(()) => debug!(url, "Added to cache"),
                    Err(e) => warn!(url, "cache write failed: {e}"),
                }
            }
        }
        Ok(resp)
    }
}

pub fn cache_key(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}

/// Build the gateway for a run: throttled HTTP, wrapped in the disk cache when configured.
pub fn gateway(delay: Duration, cache_dir: Option<&Path>) -> Result<Box<dyn Fetch + Send>> {
    let http = HttpFetcher::new(delay)?;
    Ok(match cache_dir {
        Some(dir) => Box::new(CachedFetcher::new(http, dir)),
        None => Box::new(http),
    })
}
