//! Command line and environment configuration.
//!
//! The tool takes no flags. Positional arguments are the files to rewrite;
//! without any, every `demo*.html` in the working directory is processed.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;

use crate::error::{ExpandError, Result};

/// File name prefix of the targets picked up when no paths are given.
pub const DEFAULT_TARGET_PREFIX: &str = "demo";
/// File name suffix of the targets picked up when no paths are given.
pub const DEFAULT_TARGET_SUFFIX: &str = ".html";
/// Environment variable overriding the log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub const LOG_LEVEL_ENV: &str = "EXPAND_CSS_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Files to rewrite, in processing order.
    pub targets: Vec<PathBuf>,
    pub log_level: LevelFilter,
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::from_args(std::env::args_os().skip(1), Path::new("."))?;
        if let Some(level) = std::env::var_os(LOG_LEVEL_ENV) {
            config.log_level = parse_log_level(&level.to_string_lossy())?;
        }
        Ok(config)
    }

    /// Explicit paths win; otherwise targets are discovered in `dir`.
    pub fn from_args<I>(args: I, dir: &Path) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let explicit: Vec<PathBuf> = args
            .into_iter()
            .map(|arg| PathBuf::from(arg.into()))
            .collect();

        let targets = if explicit.is_empty() {
            discover_targets(dir)?
        } else {
            explicit
        };

        Ok(Self {
            targets,
            log_level: LevelFilter::Info,
        })
    }
}

/// Lists the entries of `dir` named `demo*.html`, sorted by name.
///
/// Paths are returned relative to `dir` when it is `.`, and joined onto it otherwise.
pub fn discover_targets(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| ExpandError::DiscoverTargets {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ExpandError::DiscoverTargets {
            dir: dir.to_path_buf(),
            source,
        })?;
        // Non-UTF-8 names cannot match the pattern.
        if let Ok(name) = entry.file_name().into_string() {
            if is_default_target(&name) {
                names.push(name);
            }
        }
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| {
            if dir == Path::new(".") {
                PathBuf::from(name)
            } else {
                dir.join(name)
            }
        })
        .collect())
}

fn is_default_target(name: &str) -> bool {
    name.len() >= DEFAULT_TARGET_PREFIX.len() + DEFAULT_TARGET_SUFFIX.len()
        && name.starts_with(DEFAULT_TARGET_PREFIX)
        && name.ends_with(DEFAULT_TARGET_SUFFIX)
}

pub fn parse_log_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse()
        .map_err(|_| ExpandError::InvalidLogLevel(value.to_string()))
}
