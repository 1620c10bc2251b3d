// src/gui/textures.rs
//! Sprite files → egui textures, decoded once per path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use tracing::debug;

#[derive(Default)]
pub struct TextureCache {
    /// `None` remembers a missing or undecodable file.
    entries: HashMap<PathBuf, Option<TextureHandle>>,
}

impl TextureCache {
    pub fn get(&mut self, ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
        self.entries
            .entry(path.to_path_buf())
            .or_insert_with(|| load(ctx, path))
            .clone()
    }

    /// Forget everything, e.g. after a refresh wrote new files.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn load(ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            debug!(path = %path.display(), "no texture: {e}");
            return None;
        }
    };
    let size = [img.width() as usize, img.height() as usize];
    let color = ColorImage::from_rgba_unmultiplied(size, img.as_flat_samples().as_slice());
    Some(ctx.load_texture(path.to_string_lossy(), color, TextureOptions::default()))
}
