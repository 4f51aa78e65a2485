//! Configuration loading for the Tessera CLI.
//!
//! Layout parameters come from a TOML file mapping directly onto
//! [`GridConfig`]. An explicit `--config` path wins; otherwise the
//! platform configuration directory is consulted, and absent both the
//! built-in defaults apply.

use std::fs;

use directories::ProjectDirs;
use log::debug;

use tessera::config::GridConfig;

use crate::error::CliError;

/// Loads the layout configuration.
///
/// # Errors
///
/// Returns `CliError` when an explicitly requested file cannot be read or
/// parsed. A missing default-location file is not an error.
pub fn load_config(path: Option<&String>) -> Result<GridConfig, CliError> {
    if let Some(path) = path {
        debug!(config_path = path; "Loading configuration file");
        let content = fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(project_dirs) = ProjectDirs::from("", "", "tessera") {
        let default_path = project_dirs.config_dir().join("tessera.toml");
        if default_path.exists() {
            debug!(config_path:? = default_path; "Loading default configuration file");
            let content = fs::read_to_string(&default_path)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(GridConfig::default())
}
