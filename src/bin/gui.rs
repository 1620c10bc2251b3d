// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use livedex_scrape::{config::state::GuiState, gui, log};

fn main() {
    log::init();

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(gui::app::TITLE)
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
