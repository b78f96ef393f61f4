mod cli;
mod handlers;

use anyhow::Result;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "seqhasher";
    pub const BIN_NAME: &str = "seqhasher";
}

fn main() -> Result<()> {
    let app = cli::create_seqhasher_cli();
    let matches = app.get_matches();

    let level = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    handlers::run_seqhasher(&matches)
}
