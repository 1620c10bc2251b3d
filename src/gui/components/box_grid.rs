// src/gui/components/box_grid.rs
//
// Box tabs plus a 5×6 sprite grid for the selected box.
// Caught models get a thick border; clicking a sprite opens the detail window.

use eframe::egui::{self, Stroke, load::SizedTexture};

use crate::config::consts::{BOX_COLS, BOX_ROWS, SPRITE_SUBDIR};
use crate::gui::app::App;
use crate::pc_box;

const SPRITE: egui::Vec2 = egui::vec2(68.0, 56.0);
const CELL_W: f32 = 110.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(range) = pc_box::box_range(&app.slots) else {
        ui.label("No boxes yet.");
        return;
    };

    ui.horizontal_wrapped(|ui| {
        for b in range {
            ui.selectable_value(&mut app.state.gui.current_box, b, format!("Box {b:02}"));
        }
    });
    ui.separator();

    let box_no = app.state.gui.current_box;
    let sprite_dir = app.state.options.category_dir(SPRITE_SUBDIR);
    let ctx = ui.ctx().clone();
    let border = ui.visuals().selection.bg_fill;
    let mut clicked: Option<String> = None;

    egui::Grid::new(("box_grid", box_no))
        .num_columns(BOX_COLS)
        .spacing([8.0, 12.0])
        .show(ui, |ui| {
            for row in 1..=BOX_ROWS as u32 {
                for pos in 1..=BOX_COLS as u32 {
                    ui.vertical_centered(|ui| {
                        ui.set_width(CELL_W);
                        let Some(slot) = pc_box::find(&app.slots, box_no, row, pos) else {
                            ui.allocate_space(SPRITE + egui::vec2(0.0, 36.0));
                            return;
                        };
                        let stroke = if slot.caught { Stroke::new(4.0, border) } else { Stroke::NONE };
                        let button = match app.textures.get(&ctx, &sprite_dir.join(&slot.image)) {
                            Some(tex) => egui::Button::image(egui::Image::from_texture(
                                SizedTexture::new(tex.id(), SPRITE),
                            )),
                            None => egui::Button::new("").min_size(SPRITE),
                        };
                        if ui.add(button.stroke(stroke)).clicked() {
                            clicked = Some(slot.image.clone());
                        }
                        ui.label(&slot.name);
                        ui.small(slot.form_text());
                    });
                }
                ui.end_row();
            }
        });

    if let Some(image) = clicked {
        app.state.gui.detail_image = Some(image);
    }
}
