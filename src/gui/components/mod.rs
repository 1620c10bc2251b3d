// src/gui/components/mod.rs
pub mod box_grid;
pub mod detail;
pub mod dex_table;
pub mod status_bar;
