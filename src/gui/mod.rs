// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod progress;
pub mod textures;

pub use app::run;
