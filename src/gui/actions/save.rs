// src/gui/actions/save.rs
use tracing::{error, info, warn};

use crate::{gui::app::App, pc_box};

/// Persist the dataset (with fresh `complete` flags) and the settings file.
/// Refused while a refresh is running: the worker owns the dataset file then.
pub fn save(app: &mut App) {
    if app.running {
        warn!("Save: refused, refresh in progress");
        app.status("Save unavailable while a refresh is running");
        return;
    }
    for record in app.dataset.records_mut() {
        record.refresh_complete();
    }
    let data_path = app.state.options.data_path().to_path_buf();
    let result = app
        .dataset
        .save(&data_path)
        .and_then(|_| app.state.settings.save(&app.state.settings_file));

    match result {
        Ok(()) => {
            info!(path = %data_path.display(), "Save: OK");
            let (caught, total) = app.progress();
            app.status(format!("Saved ({caught} / {total})"));
        }
        Err(e) => {
            error!("Save: failed: {e}");
            app.status(format!("Save failed: {e}"));
        }
    }
}

/// Mark one slot caught/uncaught and save right away.
pub fn toggle_caught(app: &mut App, slot_ix: usize, caught: bool) {
    let Some(slot) = app.slots.get_mut(slot_ix) else { return };
    slot.caught = caught;
    let (record_ix, form) = (slot.record, slot.form_key.clone());
    if let Some(record) = app.dataset.records_mut().get_mut(record_ix) {
        record.set_caught(&form, caught);
        info!(species = %record.name, form, caught, "UI: caught toggled");
    }
    save(app);
}

/// Change the first box number and move every slot with it.
pub fn set_box_offset(app: &mut App, offset: u32) {
    let before = app.state.settings.box_offset;
    app.state.settings.set_box_offset(offset);
    let after = app.state.settings.box_offset;
    if after == before {
        return;
    }
    info!(before, after, "UI: box offset changed");
    pc_box::relayout(&mut app.slots, after);
    let shift = app.state.gui.current_box as i64 + after as i64 - before as i64;
    app.state.gui.current_box = shift.max(1) as u32;
    app.clamp_current_box();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::state::AppState;
    use crate::model::{FormImage, SpeciesRecord};
    use crate::store::{self, Dataset};

    fn app_in(dir: &std::path::Path) -> App {
        let mut state = AppState::default();
        state.options.data_file = dir.join("dex.json");
        state.settings_file = dir.join("settings.json");
        App::new(state)
    }

    fn record(name: &str, ndex: u32) -> SpeciesRecord {
        SpeciesRecord {
            name: s!(name),
            regional_dex: 1,
            national_dex: ndex,
            male: 50.0,
            female: 50.0,
            japanese: s!(),
            french: s!(),
            german: s!(),
            korean: s!(),
            complete: false,
            gender_models: vec![s!("Uniform")],
            form_models: Vec::new(),
            unique_model_images: vec![FormImage::new("Uniform", &format!("{ndex}.png"))],
            caught: Vec::new(),
        }
    }

    #[test]
    fn save_during_refresh_keeps_worker_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        assert!(app.dataset.is_empty());

        app.running = true;
        let path = app.state.options.data_path().to_path_buf();
        store::merge_species(&path, Some(record("Sprigatito", 906))).unwrap();
        save(&mut app);
        store::merge_species(&path, Some(record("Pikachu", 25))).unwrap();

        let ds = Dataset::load(&path).unwrap();
        assert!(ds.contains(906) && ds.contains(25));
        assert!(!app.state.settings_file.exists());
    }

    #[test]
    fn toggle_saves_when_idle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dex.json");
        store::merge_species(&path, Some(record("Sprigatito", 906))).unwrap();

        let mut app = app_in(dir.path());
        assert_eq!(app.slots.len(), 1);
        toggle_caught(&mut app, 0, true);

        let ds = Dataset::load(&path).unwrap();
        let r = &ds.records()[0];
        assert!(r.is_caught("Uniform") && r.complete);
        assert!(app.state.settings_file.exists());
    }
}
