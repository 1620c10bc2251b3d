// src/config/state.rs
use std::path::PathBuf;

use super::consts::{DATA_FILE, SETTINGS_FILE};
use super::options::PipelineOptions;
use super::settings::Settings;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Box tab currently shown in the grid
    pub current_box: u32,

    /// Sprite filename shown in the detail window, if open
    pub detail_image: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1400,
            window_h: 800,
            current_box: 1,
            detail_image: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: PipelineOptions,
    pub settings: Settings,
    pub settings_file: PathBuf,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: PipelineOptions {
                data_file: PathBuf::from(DATA_FILE),
                ..PipelineOptions::default()
            },
            settings: Settings::default(),
            settings_file: PathBuf::from(SETTINGS_FILE),
            gui: GuiState::default(),
        }
    }
}

impl AppState {
    /// Defaults plus the persisted settings file.
    pub fn load() -> Self {
        let mut state = Self::default();
        state.settings = Settings::load(&state.settings_file);
        state.gui.current_box = state.settings.box_offset;
        state
    }
}
