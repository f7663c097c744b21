//! File-backed logging setup.
//!
//! Log output must never reach stdout while the alternate screen is active,
//! so the subscriber writes to a file instead. Filtering follows the
//! `RUST_LOG` environment variable with an `info` default, e.g.
//! `RUST_LOG=gridlet::grid=debug` for grid internals only.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Resolve the log file path, creating parent directories as needed.
///
/// On Linux this is `~/.local/share/gridlet/gridlet.log`.
pub fn log_file_path() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("gridlet");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("gridlet.log"))
}

/// Initialize the global tracing subscriber writing to the log file.
///
/// Returns the log path on success. When no data directory can be resolved,
/// logging stays disabled and the TUI runs without it.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };

    let file = File::options().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_targets_app_dir() {
        // Environments without a resolvable data dir skip the check.
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("gridlet/gridlet.log"));
        }
    }
}
