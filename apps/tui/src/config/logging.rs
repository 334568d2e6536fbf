use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILE: &str = "cs_catalog.log";

/// Install the global subscriber.
///
/// Interactive runs own the terminal, so logs go to a file; headless runs log
/// to stderr next to the printed results. `RUST_LOG` wins over `--debug`.
pub fn init_logging(debug: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if interactive {
        let path = log_file.map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), Path::to_path_buf);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    installed.map_err(|e| eyre!("Failed to initialise logging: {e}"))
}
