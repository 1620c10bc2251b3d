// src/images/fetch.rs
//! Download one sprite per category, with the fallback chain and `.err` memo.
//!
//! A target is skipped when either the image or its `<path>.err` sibling is
//! already on disk, so a failed filename is never retried across runs.
//! Candidates, in order (duplicates dropped):
//! 1. the exact filename
//! 2. the base-species file `{head}.png`, when the name has a `-` suffix
//! 3. Sprite only: the name with its `-f` segment removed

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{error, info, warn};

use crate::config::consts::*;
use crate::core::net::Fetch;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Normal,
    Shiny,
    Sprite,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Normal, Category::Shiny, Category::Sprite];

    pub fn url_base(self) -> &'static str {
        match self {
            Category::Normal => NORMAL_URL_BASE,
            Category::Shiny => SHINY_URL_BASE,
            Category::Sprite => SPRITE_URL_BASE,
        }
    }

    pub fn subdir(self) -> &'static str {
        match self {
            Category::Normal => NORMAL_SUBDIR,
            Category::Shiny => SHINY_SUBDIR,
            Category::Sprite => SPRITE_SUBDIR,
        }
    }

    pub fn url_for(self, filename: &str) -> String {
        format!("{}{filename}", self.url_base())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Image or `.err` marker already present; nothing fetched.
    Existing,
    /// Saved to the target path from this candidate filename.
    Written { from: String },
    /// Every candidate failed; the marker now exists.
    Failed { marker: PathBuf },
}

/// `images/sprite/025.png` → `images/sprite/025.png.err`
pub fn err_marker(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(ERR_SUFFIX);
    PathBuf::from(s)
}

/// Filenames to try for `filename`, in order.
pub fn candidates(category: Category, filename: &str) -> Vec<String> {
    let mut out = vec![filename.to_string()];
    let mut push = |name: String| {
        if !out.contains(&name) {
            out.push(name);
        }
    };

    if let Some((head, _)) = filename.split_once('-') {
        push(format!("{head}.png"));
    }
    if category == Category::Sprite {
        if let Some(plain) = defeminize(filename) {
            push(plain);
        }
    }
    out
}

/// `"678-f.png"` → `"678.png"`, `"902-f-x.png"` → `"902-x.png"`.
fn defeminize(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.').unwrap_or((filename, ""));
    let parts: Vec<&str> = stem.split('-').collect();
    if !parts.iter().skip(1).any(|p| *p == "f") {
        return None;
    }
    let kept: Vec<&str> = parts
        .iter()
        .enumerate()
        .filter(|(i, p)| *i == 0 || **p != "f")
        .map(|(_, p)| *p)
        .collect();
    let stem = kept.join("-");
    Some(if ext.is_empty() { stem } else { format!("{stem}.{ext}") })
}

/// Fetch `filename` for `category` into `dir/filename`.
/// Transport errors propagate and leave no marker behind.
pub fn fetch_image(
    fetcher: &mut dyn Fetch,
    category: Category,
    filename: &str,
    dir: &Path,
) -> Result<ImageOutcome> {
    let path = dir.join(filename);
    let marker = err_marker(&path);
    if path.exists() || marker.exists() {
        info!(path = %path.display(), "File exists already");
        return Ok(ImageOutcome::Existing);
    }
    fs::create_dir_all(dir)?;

    for (attempt, name) in candidates(category, filename).into_iter().enumerate() {
        if attempt > 0 {
            warn!(?category, filename, fallback = %name, "trying fallback image");
        }
        let url = category.url_for(&name);
        let Some(resp) = fetcher.fetch(&url)? else {
            warn!(url, "image not found");
            continue;
        };
        match image::load_from_memory(&resp.body) {
            Ok(img) => {
                img.save_with_format(&path, ImageFormat::Png)?;
                info!(path = %path.display(), from = %name, "Found image");
                return Ok(ImageOutcome::Written { from: name });
            }
            Err(e) => warn!(url, "undecodable image payload: {e}"),
        }
    }

    fs::write(&marker, b"")?;
    error!(?category, filename, marker = %marker.display(), "Unable to fetch image, created error file");
    Ok(ImageOutcome::Failed { marker })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_chain() {
        assert_eq!(candidates(Category::Normal, "025.png"), vec!["025.png"]);
        assert_eq!(candidates(Category::Normal, "670-b.png"), vec!["670-b.png", "670.png"]);
        assert_eq!(candidates(Category::Shiny, "025-f.png"), vec!["025-f.png", "025.png"]);
        assert_eq!(candidates(Category::Sprite, "025-f.png"), vec!["025-f.png", "025.png"]);
        assert_eq!(
            candidates(Category::Sprite, "902-f-x.png"),
            vec!["902-f-x.png", "902.png", "902-x.png"]
        );
        assert_eq!(candidates(Category::Normal, "902-f-x.png"), vec!["902-f-x.png", "902.png"]);
    }

    #[test]
    fn marker_appends_suffix() {
        assert_eq!(
            err_marker(Path::new("images/sprite/025.png")),
            PathBuf::from("images/sprite/025.png.err")
        );
    }

    #[test]
    fn category_urls_and_dirs() {
        assert_eq!(
            Category::Shiny.url_for("025.png"),
            "https://www.serebii.net/Shiny/SV/new/025.png"
        );
        let dirs: Vec<_> = Category::ALL.iter().map(|c| c.subdir()).collect();
        assert_eq!(dirs, ["normal", "shiny", "sprite"]);
    }
}
