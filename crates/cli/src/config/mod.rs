// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration model and hierarchical loading.
//!
//! A root's effective config is the built-in defaults overlaid by every
//! `groom.toml` found between the repository boundary and the root, nearest
//! file last so it wins. Loading is all-or-nothing: a file in the chain
//! that cannot be read or parsed fails the whole invocation.

pub mod defaults;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::discovery;

/// Fatal configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Merged configuration applicable to one root's files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub files: FilesConfig,
}

/// Formatting engine knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Trim trailing whitespace from every line.
    pub trim_trailing: bool,

    /// Longest run of blank lines left in place.
    pub max_blank_lines: usize,

    /// End non-empty files with exactly one newline.
    pub final_newline: bool,

    /// Expand tab characters to spaces.
    pub expand_tabs: bool,

    /// Spaces per tab when expanding.
    pub tab_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            trim_trailing: defaults::format::TRIM_TRAILING,
            max_blank_lines: defaults::format::MAX_BLANK_LINES,
            final_newline: defaults::format::FINAL_NEWLINE,
            expand_tabs: defaults::format::EXPAND_TABS,
            tab_width: defaults::format::TAB_WIDTH,
        }
    }
}

/// File selection policy for directory traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Extensions eligible during traversal.
    #[serde(default = "defaults::files::extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from traversal.
    pub exclude: Vec<String>,

    /// Respect .gitignore files.
    pub git_ignore: bool,

    /// Descend into hidden directories.
    pub hidden: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: defaults::files::extensions(),
            exclude: Vec::new(),
            git_ignore: defaults::files::GIT_IGNORE,
            hidden: defaults::files::HIDDEN,
        }
    }
}

/// Partial config as parsed from one `groom.toml`. Absent keys leave the
/// merged value untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Overlay {
    format: FormatOverlay,
    files: FilesOverlay,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FormatOverlay {
    trim_trailing: Option<bool>,
    max_blank_lines: Option<usize>,
    final_newline: Option<bool>,
    expand_tabs: Option<bool>,
    tab_width: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilesOverlay {
    extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    git_ignore: Option<bool>,
    hidden: Option<bool>,
}

impl Config {
    fn apply(&mut self, overlay: Overlay) {
        let Overlay { format, files } = overlay;
        if let Some(v) = format.trim_trailing {
            self.format.trim_trailing = v;
        }
        if let Some(v) = format.max_blank_lines {
            self.format.max_blank_lines = v;
        }
        if let Some(v) = format.final_newline {
            self.format.final_newline = v;
        }
        if let Some(v) = format.expand_tabs {
            self.format.expand_tabs = v;
        }
        if let Some(v) = format.tab_width {
            self.format.tab_width = v;
        }
        if let Some(v) = files.extensions {
            self.files.extensions = v;
        }
        if let Some(v) = files.exclude {
            self.files.exclude = v;
        }
        if let Some(v) = files.git_ignore {
            self.files.git_ignore = v;
        }
        if let Some(v) = files.hidden {
            self.files.hidden = v;
        }
    }
}

/// Load the merged config for `start` (a file or directory).
///
/// For a file, discovery starts from its parent directory. Deterministic
/// for a given filesystem state; does not touch the filesystem otherwise.
pub fn load(start: &Path) -> Result<Config, ConfigError> {
    let dir = if start.is_file() {
        start.parent().unwrap_or(start)
    } else {
        start
    };

    let mut config = Config::default();
    for path in discovery::config_chain(dir) {
        let display = path.display().to_string();
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let overlay: Overlay = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;
        config.apply(overlay);
    }
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
