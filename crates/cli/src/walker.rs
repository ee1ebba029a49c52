// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File discovery under a root.
//!
//! A directory root is traversed in parallel honoring gitignore, hidden and
//! exclude policy; eligibility is decided by extension. A root naming a file
//! yields exactly that file, bypassing eligibility: an explicit argument is
//! an explicit request. Traversal order is unspecified.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{WalkBuilder, WalkState};

use crate::config::Config;

/// Traversal policy, usually derived from a root's [`Config`].
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Eligible extensions; empty means every file is eligible.
    pub extensions: Vec<String>,

    /// Glob patterns excluded from traversal, relative to the root.
    pub exclude: Vec<String>,

    /// Respect .gitignore files.
    pub git_ignore: bool,

    /// Descend into hidden directories.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            exclude: Vec::new(),
            git_ignore: true,
            hidden: false,
        }
    }
}

impl WalkerConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extensions: config.files.extensions.clone(),
            exclude: config.files.exclude.clone(),
            git_ignore: config.files.git_ignore,
            hidden: config.files.hidden,
        }
    }
}

/// One discovered file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Counters describing one traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkStats {
    pub files_found: usize,
    pub excluded: usize,
    pub errors: usize,
}

/// Parallel file walker.
pub struct FileWalker {
    config: WalkerConfig,
    exclude: GlobSet,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => tracing::warn!("invalid exclude pattern {}: {}", pattern, err),
            }
        }
        let exclude = builder.build().unwrap_or_else(|_| GlobSet::empty());
        Self { config, exclude }
    }

    /// Walk `root` and collect every eligible file plus traversal counters.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        if root.is_file() {
            let size = std::fs::metadata(root).map(|m| m.len()).unwrap_or(0);
            let file = WalkedFile {
                path: root.to_path_buf(),
                size,
            };
            let stats = WalkStats {
                files_found: 1,
                ..WalkStats::default()
            };
            return (vec![file], stats);
        }

        let (tx, rx) = crossbeam_channel::unbounded();
        let walker = WalkBuilder::new(root)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(false)
            .hidden(!self.config.hidden)
            .build_parallel();

        walker.run(|| {
            let tx = tx.clone();
            Box::new(move |entry| {
                let message = match entry {
                    Ok(entry) => {
                        if !entry.file_type().is_some_and(|t| t.is_file()) {
                            return WalkState::Continue;
                        }
                        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                        Ok((entry.into_path(), size))
                    }
                    Err(err) => Err(err),
                };
                // A closed receiver just means collection stopped early.
                let _ = tx.send(message);
                WalkState::Continue
            })
        });
        drop(tx);

        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for message in rx {
            match message {
                Ok((path, size)) => {
                    if self.eligible(root, &path) {
                        stats.files_found += 1;
                        files.push(WalkedFile { path, size });
                    } else {
                        stats.excluded += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!("walk error under {}: {}", root.display(), err);
                    stats.errors += 1;
                }
            }
        }
        (files, stats)
    }

    fn eligible(&self, root: &Path, path: &Path) -> bool {
        if !self.config.extensions.is_empty() {
            let matched = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| self.config.extensions.iter().any(|e| e == ext));
            if !matched {
                return false;
            }
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        !self.exclude.is_match(relative)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
