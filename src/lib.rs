// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod model;

pub mod forms;
pub mod images;
pub mod overrides;
pub mod specs;

pub mod pc_box;
pub mod progress;
pub mod scrape;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
