// src/gui/components/detail.rs
//
// Floating window with the normal and shiny art for one sprite filename.

use eframe::egui::{self, load::SizedTexture};

use crate::config::consts::{NORMAL_SUBDIR, SHINY_SUBDIR};
use crate::gui::app::App;

const ART_MAX: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(image) = app.state.gui.detail_image.clone() else { return };
    let mut open = true;

    egui::Window::new("Pokemon Image")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            for (subdir, caption) in [(NORMAL_SUBDIR, "Normal image"), (SHINY_SUBDIR, "Shiny image")] {
                let path = app.state.options.category_dir(subdir).join(&image);
                ui.vertical_centered(|ui| {
                    match app.textures.get(ctx, &path) {
                        Some(tex) => {
                            let size = tex.size_vec2();
                            let scale = (ART_MAX / size.x.max(size.y)).min(1.0);
                            ui.image(SizedTexture::new(tex.id(), size * scale));
                        }
                        None => {
                            ui.label(format!("{} not available", path.display()));
                        }
                    }
                    ui.label(caption);
                });
                ui.add_space(6.0);
            }
        });

    if !open {
        app.state.gui.detail_image = None;
    }
}
