//! # todo-config
//!
//! Layered configuration loading for todoscan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TODOSCAN_*` prefix, `__` as separator)
//! 2. An explicit `--config` file (TOML, or JSON when the extension is `.json`)
//! 3. Project-level `.todoscan.toml`
//! 4. User-level `~/.config/todoscan/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TODOSCAN_FILTER__ASSIGNEE` -> `filter.assignee`,
//! `TODOSCAN_SCAN__PATTERNS='["TODO", "HACK"]'` -> `scan.patterns`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use todo_config::TodoConfig;
//!
//! let config = TodoConfig::load_with_dotenv(None).expect("config");
//! println!("scanning for {:?}", config.scan.patterns);
//! ```

mod error;
mod filter;
mod output;
mod scan;

pub use error::ConfigError;
pub use filter::FilterConfig;
pub use output::{OutputConfig, OutputFormat};
pub use scan::ScanConfig;

use figment::{
    Figment, Provider,
    providers::{Env, Format, Json, Serialized, Toml},
    value::Dict,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project-local config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".todoscan.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl TodoConfig {
    /// Load configuration from all sources and expand paths.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    /// Does NOT validate either: command-line overrides may still fix an
    /// invalid file value, so callers run [`Self::validate`] once every
    /// layer has been applied.
    ///
    /// # Errors
    /// Returns `ConfigError` when `explicit` does not exist, a source cannot
    /// be parsed, a file holds an unknown top-level section, or a path names
    /// an undefined environment variable.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment(explicit)?.extract()?;
        config.expand_paths()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the working directory.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingFile` when `explicit` does not exist and
    /// `ConfigError::UnknownSection` when a config file has a top-level key
    /// other than `scan`, `filter` or `output`.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                check_sections(Toml::file(&global_path), &global_path)?;
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            check_sections(Toml::file(&local_path), &local_path)?;
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit config file
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            figment = if is_json {
                check_sections(Json::file(path), path)?;
                figment.merge(Json::file(path))
            } else {
                check_sections(Toml::file(path), path)?;
                figment.merge(Toml::file(path))
            };
        }

        // Layer 4: Environment variables (highest priority). Only keys under a
        // known section are read, so TODOSCAN_LOG stays a logging concern.
        figment = figment.merge(
            Env::prefixed("TODOSCAN_")
                .split("__")
                .filter(|key| is_section_key(key.as_str())),
        );

        Ok(figment)
    }

    /// Reject configurations that cannot drive a scan.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an empty pattern list or an
    /// empty pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.patterns.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan.patterns".to_string(),
                reason: "at least one tag pattern is required".to_string(),
            });
        }
        if let Some(index) = self.scan.patterns.iter().position(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: format!("scan.patterns[{index}]"),
                reason: "tag patterns must not be empty".to_string(),
            });
        }
        if self.scan.include.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan.include".to_string(),
                reason: "at least one path to scan is required".to_string(),
            });
        }
        Ok(())
    }

    /// Expand `~` and `$VAR` / `${VAR}` in `scan.include` and `scan.rel_root`.
    fn expand_paths(&mut self) -> Result<(), ConfigError> {
        for path in &mut self.scan.include {
            *path = expand_path(path)?;
        }
        if let Some(root) = self.scan.rel_root.take() {
            self.scan.rel_root = Some(expand_path(&root)?);
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("todoscan").join("config.toml"))
    }
}

/// Top-level keys a config file may carry.
const SECTIONS: [&str; 3] = ["scan", "filter", "output"];

fn is_section_key(key: &str) -> bool {
    key.split('.').next().is_some_and(|section| {
        SECTIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(section))
    })
}

/// Reject a config file whose top level is not made of known sections.
///
/// Catches typos like `[outptu]` and flat files in the old schema
/// (`{"patterns": [...], "includeUnassigned": true}`).
fn check_sections(file: impl Provider, path: &Path) -> Result<(), ConfigError> {
    let top: Dict = Figment::from(file).extract()?;
    match top.into_keys().find(|key| !SECTIONS.contains(&key.as_str())) {
        Some(key) => Err(ConfigError::UnknownSection {
            path: path.to_path_buf(),
            key,
        }),
        None => Ok(()),
    }
}

/// Expand a leading `~` and any `$VAR` / `${VAR}` reference in `path`.
///
/// Non UTF-8 paths are returned unchanged.
///
/// # Errors
/// Returns `ConfigError::InvalidValue` when the path references an undefined
/// environment variable, or needs a home directory and none can be found.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let Some(raw) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    let expanded = shellexpand::full_with_context(
        raw,
        || dirs::home_dir().map(|home| home.to_string_lossy().into_owned()),
        |name| std::env::var(name).map(Some),
    )
    .map_err(|e| ConfigError::InvalidValue {
        field: raw.to_string(),
        reason: e.to_string(),
    })?;
    let wants_home = raw == "~" || raw.starts_with("~/");
    if wants_home && expanded.starts_with('~') {
        return Err(ConfigError::InvalidValue {
            field: raw.to_string(),
            reason: "unable to determine home directory".to_string(),
        });
    }
    Ok(PathBuf::from(expanded.into_owned()))
}
