// src/gui/actions/refresh.rs
use std::{sync::mpsc, thread};

use eframe::egui;
use tracing::{error, info};

use crate::{
    core::net, gui::app::App, gui::progress::GuiProgress, overrides::OverrideTable, scrape,
};

/// Run the scrape pipeline on a worker thread; the dataset is reloaded when it ends.
pub fn refresh(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let opts = app.state.options.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel::<String>();

    info!(mode = ?opts.mode, "Refresh: Begin");
    app.running = true;
    app.refresh_done = Some(rx);
    app.status("Starting refresh…");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let overrides = OverrideTable::builtin();

        // → This is where the scrape happens ←
        let result = net::gateway(opts.request_delay, opts.cache_dir.as_deref())
            .and_then(|mut fetcher| scrape::run(&mut *fetcher, &opts, &overrides, Some(&mut prog)));

        let msg = match result {
            Ok(summary) => {
                info!("Refresh: OK {summary}");
                format!("Refresh complete: {summary}")
            }
            Err(e) => {
                error!("Refresh: Error {e}");
                format!("Error: {e}")
            }
        };
        let _ = tx.send(msg);
        ctx.request_repaint();
    });
}

/// Pick up a finished refresh, if any.
pub fn poll_refresh(app: &mut App) {
    let Some(rx) = &app.refresh_done else { return };
    let msg = match rx.try_recv() {
        Ok(msg) => msg,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => s!("Refresh worker stopped unexpectedly"),
    };
    app.refresh_done = None;
    app.running = false;
    app.textures.clear();
    app.reload_dataset();
    app.status(msg);
}
