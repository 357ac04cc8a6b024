//! Diagnostics go to a file: stdout belongs to the game screen while the
//! terminal is in raw mode.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "space_shooter.log";
const FILTER: &str = "space_shooter=info";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Install the global subscriber.  Returns the log path on success; if the
/// file cannot be created the game runs without logging.
pub fn init() -> Option<PathBuf> {
    let path = log_path();
    let file = File::create(&path).ok()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(path)
}
