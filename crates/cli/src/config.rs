// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Settings live in a TOML file found by precedence:
//! - `--config <path>`
//! - `LONGBOX_CONFIG`
//! - `./longbox.toml`
//! - `<config dir>/longbox/config.toml`
//!
//! With none of these present the built-in defaults apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use lb_core::RowWidth;

use crate::error::{Error, Result};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "longbox.toml";
const USER_CONFIG_DIR: &str = "longbox";
const USER_CONFIG_FILE: &str = "config.toml";

/// Settings read from `longbox.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Grid width in slots.
    pub row_width: usize,
    /// Reject a whole range description when any token is bad.
    pub strict: bool,
    /// Force grid colors on or off. Unset follows `NO_COLOR`, `COLOR` and
    /// whether stdout is a terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            row_width: RowWidth::DEFAULT,
            strict: false,
            color: None,
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Default,
}

impl ConfigSource {
    /// The file backing this source, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Flag(p)
            | ConfigSource::Env(p)
            | ConfigSource::Project(p)
            | ConfigSource::User(p) => Some(p),
            ConfigSource::Default => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag(p) => write!(f, "{} (--config)", p.display()),
            ConfigSource::Env(p) => write!(f, "{} (LONGBOX_CONFIG)", p.display()),
            ConfigSource::Project(p) => write!(f, "{} (project)", p.display()),
            ConfigSource::User(p) => write!(f, "{} (user)", p.display()),
            ConfigSource::Default => write!(f, "built-in defaults"),
        }
    }
}

impl Config {
    /// Load the effective configuration for this process.
    pub fn load(flag: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let cwd = std::env::current_dir()?;
        let source = locate(
            flag,
            crate::env::config_path(),
            &cwd,
            dirs::config_dir().as_deref(),
        );
        let config = match source.path() {
            Some(path) => Self::from_file(path, &source)?,
            None => Config::default(),
        };
        tracing::debug!(source = %source, "loaded config");
        Ok((config, source))
    }

    /// Read and validate one config file.
    pub fn from_file(path: &Path, source: &ConfigSource) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(match source {
                    ConfigSource::Flag(_) | ConfigSource::Env(_) => {
                        Error::ConfigNotFound(path.display().to_string())
                    }
                    _ => Error::Io(e),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&content, path)
    }

    /// Parse TOML text; `path` is used in error messages only.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.row_width == 0 {
            return Err(Error::Config("row_width must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Configured grid width.
    pub fn row_width(&self) -> Result<RowWidth> {
        Ok(RowWidth::new(self.row_width)?)
    }

    /// Render as TOML, the same shape the file takes.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

/// Pick the config file by precedence. Explicit paths are returned even when
/// the file does not exist.
pub(crate) fn locate(
    flag: Option<&Path>,
    env: Option<PathBuf>,
    cwd: &Path,
    user_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(path) = flag {
        return ConfigSource::Flag(path.to_path_buf());
    }
    if let Some(path) = env {
        return ConfigSource::Env(path);
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return ConfigSource::Project(project);
    }

    if let Some(dir) = user_dir {
        let user = dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
        if user.is_file() {
            return ConfigSource::User(user);
        }
    }

    ConfigSource::Default
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
