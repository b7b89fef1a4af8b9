//! Configuration for relation: layered environment loading plus typed settings.
//!
//! [`load_and_apply`] fills the process environment from two optional sources,
//! never overriding a variable that is already set:
//!
//! 1. project `.env` (current directory, or an explicit directory)
//! 2. `$XDG_CONFIG_HOME/<app>/config.toml`, table `[env]`
//!
//! [`ServeSettings`] and [`ClientSettings`] are then read from the environment.

mod dotenv_file;
mod settings;
#[cfg(feature = "tracing-init")]
mod tracing_init;
mod xdg_toml;

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub use settings::{ClientSettings, ServeSettings, DEFAULT_PORT, DEFAULT_SERVICE_URL};
#[cfg(feature = "tracing-init")]
pub use tracing_init::{init_tracing, LogTarget, TracingGuard};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    Dotenv(#[from] dotenv::Error),
}

/// Merges the two sources: `.env` wins over XDG. Keys already in `present` are skipped.
fn merge_missing(
    dotenv_map: HashMap<String, String>,
    xdg_map: HashMap<String, String>,
    present: impl Fn(&str) -> bool,
) -> HashMap<String, String> {
    let mut out: HashMap<String, String> = xdg_map;
    out.extend(dotenv_map);
    out.retain(|k, _| !present(k));
    out
}

/// Applies `.env` and XDG `[env]` values for variables not already set.
///
/// * `app_name`: XDG directory name, e.g. `"relation"` → `~/.config/relation/config.toml`.
/// * `override_dir`: directory holding `.env`; `None` means the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv_file::load_env_map(override_dir)?;
    let missing = merge_missing(dotenv_map, xdg_map, |k| std::env::var_os(k).is_some());
    for (key, value) in missing {
        std::env::set_var(key, value);
    }
    Ok(())
}
