mod app;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use config::Config;

/// Warnings only unless `RUST_LOG` says otherwise; `debug = true` in the
/// config lifts the cap to debug once the config has been read.
fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .format_target(false)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(LevelFilter::Warn);
    }
}

fn main() {
    // Usage errors exit here, before any file is touched
    let cli = Cli::parse();

    init_logging();
    let config = Config::load();
    if config.debug {
        log::set_max_level(LevelFilter::Debug);
    }

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
