//! visitsheet library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (data sources, document tree, page replication and binding).

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod errors;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Central dispatcher: a single rendering command for now.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cli::commands::render::handle(cli, cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let cfg = Config::load()?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
