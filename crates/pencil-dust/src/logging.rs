//! File-backed logging.
//!
//! The terminal is in raw mode on the alternate screen while running, so log
//! records go to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use env_logger::{Builder, Env, Target};

/// Route `log` records to `path`, filtered by `RUST_LOG` (default `info`).
pub fn init(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
