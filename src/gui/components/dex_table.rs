// src/gui/components/dex_table.rs
//
// One striped row per model: caught checkbox, dex label, box location.
// Toggles are collected during drawing and applied after the table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};

const ROW_H: f32 = 22.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.slots.is_empty() {
        ui.label("Nothing to show yet.");
        return;
    }

    let mut toggled: Option<(usize, bool)> = None;
    let editable = !app.running;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::remainder().at_least(240.0).clip(true))
        .column(Column::auto())
        .header(ROW_H, |mut header| {
            header.col(|ui| { ui.strong("Caught?"); });
            header.col(|ui| { ui.strong("Pokémon"); });
            header.col(|ui| { ui.strong("Location"); });
        })
        .body(|body| {
            body.rows(ROW_H, app.slots.len(), |mut row| {
                let i = row.index();
                let slot = &app.slots[i];
                row.col(|ui| {
                    let mut caught = slot.caught;
                    let resp = ui.add_enabled(editable, egui::Checkbox::without_text(&mut caught));
                    if resp.changed() {
                        toggled = Some((i, caught));
                    }
                });
                row.col(|ui| {
                    let label = app
                        .dataset
                        .records()
                        .get(slot.record)
                        .map(|r| slot.label(r))
                        .unwrap_or_else(|| slot.name.clone());
                    ui.label(label);
                });
                row.col(|ui| {
                    ui.label(slot.location_text());
                });
            });
        });

    if let Some((i, caught)) = toggled {
        actions::toggle_caught(app, i, caught);
    }
}
