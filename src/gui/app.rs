// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc::Receiver},
    time::Duration,
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::state::AppState,
    pc_box::{self, DexSlot},
    store::Dataset,
};

use super::{actions, components, textures::TextureCache};

pub const TITLE: &str = "Perfect Living Dex";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::load())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub dataset: Dataset,

    // one entry per model, in dataset order
    pub slots: Vec<DexSlot>,
    pub textures: TextureCache,

    // status/progress (the refresh worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub refresh_done: Option<Receiver<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            dataset: Dataset::default(),
            slots: Vec::new(),
            textures: TextureCache::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            refresh_done: None,
        };
        app.reload_dataset();
        app
    }

    /// Re-read the dataset file and rebuild every slot.
    pub fn reload_dataset(&mut self) {
        let path = self.state.options.data_path().to_path_buf();
        match Dataset::load(&path) {
            Ok(ds) => {
                info!(path = %path.display(), species = ds.len(), "dataset loaded");
                self.dataset = ds;
                if self.dataset.is_empty() {
                    self.status("No data yet: press Refresh to scrape");
                } else {
                    self.status("Loaded local data");
                }
            }
            Err(e) => {
                error!(path = %path.display(), "dataset load failed: {e}");
                self.dataset = Dataset::default();
                self.status(format!("Error loading {}: {e}", path.display()));
            }
        }
        self.slots = pc_box::layout(&self.dataset, self.state.settings.box_offset);
        self.clamp_current_box();
    }

    /// Keep the shown box inside the range in use.
    pub fn clamp_current_box(&mut self) {
        if let Some(range) = pc_box::box_range(&self.slots) {
            let b = self.state.gui.current_box;
            self.state.gui.current_box = b.clamp(*range.start(), *range.end());
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn progress(&self) -> (usize, usize) {
        pc_box::progress(&self.slots)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_refresh(self);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::SidePanel::left("dex_list")
            .resizable(true)
            .default_width(620.0)
            .show(ctx, |ui| {
                ui.heading("Gotta Catch them all!");
                ui.separator();
                components::dex_table::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::box_grid::draw(ui, self);
        });

        components::detail::show(ctx, self);

        if self.running {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
