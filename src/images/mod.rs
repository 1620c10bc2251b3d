// src/images/mod.rs
//! Sprite filenames and the on-disk image set.
//!
//! `resolve` maps a model key to the filename the site serves it under;
//! `fetch` downloads one filename per category with the fallback chain.

pub mod fetch;
pub mod resolve;

pub use fetch::{Category, ImageOutcome, err_marker, fetch_image};
pub use resolve::{resolve_all, resolve_image};
