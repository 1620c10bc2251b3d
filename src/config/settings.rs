// src/config/settings.rs
//! Viewer settings persisted as a small JSON object.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use super::consts::{BOX_OFFSET_MAX, BOX_OFFSET_MIN};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of the PC box the living dex starts in.
    #[serde(rename = "-BOXOFFSET-", default = "default_box_offset")]
    pub box_offset: u32,
}

fn default_box_offset() -> u32 {
    BOX_OFFSET_MIN
}

impl Default for Settings {
    fn default() -> Self {
        Self { box_offset: default_box_offset() }
    }
}

impl Settings {
    /// Missing or unreadable file → defaults.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(_) => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<Settings>(&text) {
            Ok(mut s) => {
                s.box_offset = clamp_offset(s.box_offset);
                s
            }
            Err(e) => {
                warn!(path = %path.display(), "unreadable settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn set_box_offset(&mut self, v: u32) {
        self.box_offset = clamp_offset(v);
    }
}

fn clamp_offset(v: u32) -> u32 {
    v.clamp(BOX_OFFSET_MIN, BOX_OFFSET_MAX)
}
