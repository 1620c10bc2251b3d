// src/core/encoding.rs
//! The dataset file is stored as windows-1252 text.
//!
//! JSON written here escapes every non-ASCII character as `\uXXXX`, so the
//! bytes are plain ASCII and localized names survive the 8-bit encoding.
//! Reading decodes windows-1252, which also accepts older files that carry
//! raw accented bytes.

use std::{fmt::Write as _, fs, path::Path};

use encoding_rs::WINDOWS_1252;

use crate::error::{Result, ScrapeError};

pub fn read_legacy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let (text, _, _) = WINDOWS_1252.decode(&bytes);
    Ok(text.into_owned())
}

/// Encode and write in full via a sibling temp file, so an interrupted
/// write leaves the previous file intact.
pub fn write_legacy(path: &Path, text: &str) -> Result<()> {
    let (bytes, _, unmappable) = WINDOWS_1252.encode(text);
    if unmappable {
        return Err(ScrapeError::Encoding { path: path.to_path_buf() });
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, &bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Escape non-ASCII characters of serialized JSON as `\uXXXX`
/// (UTF-16 surrogate pairs above the BMP).
pub fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units).iter() {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}
