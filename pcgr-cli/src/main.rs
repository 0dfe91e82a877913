mod cli;
mod handlers;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "pcgr-check-input";
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = cli::create_check_input_cli(consts::BIN_NAME, consts::VERSION);
    let matches = app.get_matches();

    init_logging(matches.get_flag(cli::VERBOSE_ARG));

    let code = handlers::run_check_input(&matches)?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
