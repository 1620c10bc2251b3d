// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the ground truth lives in one kind of remote page
//! and how to read it tolerantly. Specs only extract: fetching, caching,
//! merging and persistence live in `scrape` and `store`.
//!
//! - `pokedex`: the regional dex index (`<select>` of species links).
//! - `species`: one species detail page (name block, gender/alternate forms).
//!
//! Specs are tested offline against captured markup.
pub mod pokedex;
pub mod species;
