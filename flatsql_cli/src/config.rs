use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "FLATSQL_DATA";

/// Resolves the data root once at startup: the environment override wins,
/// otherwise a `data` directory beside the executable.
pub fn resolve_data_root() -> anyhow::Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe().context("failed to resolve the executable path")?;
    let dir = exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(dir.join("data"))
}
