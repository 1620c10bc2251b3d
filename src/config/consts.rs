// src/config/consts.rs

// Site
pub const SITE_ROOT: &str = "https://serebii.net/";
pub const DEX_INDEX_URL: &str = "https://www.serebii.net/pokedex-sv/";
pub const DEX_INDEX_OPTION: &str = "Paldea Pokédex";

// Image categories
pub const NORMAL_URL_BASE: &str = "https://serebii.net/scarletviolet/pokemon/new/";
pub const SHINY_URL_BASE: &str = "https://www.serebii.net/Shiny/SV/new/";
pub const SPRITE_URL_BASE: &str = "https://serebii.net/pokedex-sv/icon/new/";
pub const NORMAL_SUBDIR: &str = "normal";
pub const SHINY_SUBDIR: &str = "shiny";
pub const SPRITE_SUBDIR: &str = "sprite";

// Local files
pub const DATA_FILE: &str = "data/dex_v3.1.json";
pub const SETTINGS_FILE: &str = "data/settings.json";
pub const IMAGE_DIR: &str = "images";
pub const STORE_DIR: &str = ".store";
pub const CACHE_SUBDIR: &str = "cache";
pub const LOG_FILE: &str = "debug.log";
pub const ERR_SUFFIX: &str = ".err";

// Net
pub const REQUEST_DELAY_MS: u64 = 1000; // be polite
pub const USER_AGENT: &str = concat!("livedex_scrape/", env!("CARGO_PKG_VERSION"));

// Canonical gender labels
pub const UNIFORM: &str = "Uniform";
pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";

// PC box geometry
pub const BOX_SLOTS: usize = 30;
pub const BOX_COLS: usize = 6;
pub const BOX_ROWS: usize = 5;
pub const BOX_OFFSET_MIN: u32 = 1;
pub const BOX_OFFSET_MAX: u32 = 30;
