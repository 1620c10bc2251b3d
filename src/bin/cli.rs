// src/bin/cli.rs
use livedex_scrape::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
