use config::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod args;
mod config;
mod file;
mod generators;
mod header;
mod layout;

use crate::{args::get_command, generators::generate_vol};

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cmd = get_command();
    let args = cmd.get_matches();

    let cfg = match Config::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    info!(?cfg, "Generating volume");

    if let Err(e) = generate_vol(&cfg) {
        error!("Generating failed: {e}");
        std::process::exit(1);
    }

    info!("Generating finished, result in {:?}", cfg.file_name);
}
