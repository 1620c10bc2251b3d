// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{refresh,save,...}.

mod refresh; // src/gui/actions/refresh.rs
mod save;    // src/gui/actions/save.rs

pub use refresh::{poll_refresh, refresh};
pub use save::{save, set_box_offset, toggle_caught};
