// src/gui/components/status_bar.rs
//
// Bottom bar: Save, collection progress, box offset, Refresh + status line.

use eframe::egui;

use crate::config::consts::{BOX_OFFSET_MAX, BOX_OFFSET_MIN};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Save")).clicked() {
            actions::save(app);
        }

        ui.separator();

        let (caught, total) = app.progress();
        let frac = if total == 0 { 0.0 } else { caught as f32 / total as f32 };
        ui.label("Progress:");
        ui.add(
            egui::ProgressBar::new(frac)
                .desired_width(260.0)
                .text(format!("{caught} / {total}")),
        );

        ui.separator();

        ui.label("Box Offset");
        let mut offset = app.state.settings.box_offset;
        let resp = ui.add(egui::DragValue::new(&mut offset).range(BOX_OFFSET_MIN..=BOX_OFFSET_MAX));
        if resp.changed() {
            actions::set_box_offset(app, offset);
        }

        ui.separator();

        let ctx = ui.ctx().clone();
        if ui.add_enabled(!app.running, egui::Button::new("Refresh")).clicked() {
            actions::refresh(app, &ctx);
        }
        if app.running {
            ui.spinner();
        }
        ui.label(app.status_text());
    });
}
