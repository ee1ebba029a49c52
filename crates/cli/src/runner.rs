// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel batch runner with per-file error recovery.
//!
//! Expands roots into work items (config load plus file discovery, in
//! parallel across roots), applies the injected operation to every item on
//! a bounded worker pool, and aggregates outcomes into a [`RunReport`].
//! One bad file never aborts the batch: operation errors and panics are
//! captured as [`RunError`]s tied to that file. The runner returns data;
//! printing and exit policy belong to the command layer.

use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use thiserror::Error;

use crate::config::{self, Config, ConfigError};
use crate::op::{Operation, OutcomeKind};
use crate::roots::Root;
use crate::walker::{FileWalker, WalkerConfig};

/// Failure that aborts the whole batch before any item is processed.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// One file's worth of work: the config applying to it, its on-disk
/// location, and the logical path used for reporting.
pub struct WorkItem {
    pub config: Arc<Config>,
    pub path: PathBuf,
    pub display: String,
}

/// A work item whose processing failed.
#[derive(Debug)]
pub struct RunError {
    pub path: String,
    pub message: String,
}

/// Aggregate result of one batch run.
///
/// Invariant: the sum of `counts` plus `errors.len()` equals the number of
/// work items submitted.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Count per outcome kind; keys present only for kinds observed.
    pub counts: BTreeMap<OutcomeKind, usize>,

    /// Per-file failures, sorted by path.
    pub errors: Vec<RunError>,

    /// Wall-clock time for discovery plus processing.
    pub elapsed: Duration,
}

impl RunReport {
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total work items submitted, successful or not.
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.errors.len()
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Executes a batch of work items on a bounded rayon pool.
pub struct BatchRunner {
    jobs: usize,
    display_base: Option<PathBuf>,
}

impl BatchRunner {
    /// `jobs` bounds the worker pool; 0 means one worker per core.
    pub fn new(jobs: usize) -> Self {
        Self {
            jobs,
            display_base: None,
        }
    }

    /// Report paths under `base` relative to it.
    pub fn display_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.display_base = Some(base.into());
        self
    }

    /// Run `operation` over every file under `roots` and aggregate.
    ///
    /// Config loading failures are fatal (invalid configuration is misuse,
    /// not a data error); everything after item creation is isolated
    /// per file. Aggregation waits for every dispatched item to settle.
    pub fn run(&self, roots: &[Root], operation: &dyn Operation) -> Result<RunReport, BatchError> {
        let started = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()?;

        let mut report = pool.install(|| -> Result<RunReport, BatchError> {
            let expanded: Vec<Vec<WorkItem>> = roots
                .par_iter()
                .map(|root| self.expand_root(root))
                .collect::<Result<_, _>>()?;
            let items: Vec<WorkItem> = expanded.into_iter().flatten().collect();

            let results: Vec<Result<OutcomeKind, RunError>> = items
                .par_iter()
                .map(|item| Self::apply_one(operation, item))
                .collect();

            let mut counts = BTreeMap::new();
            let mut errors = Vec::new();
            for result in results {
                match result {
                    Ok(kind) => *counts.entry(kind).or_insert(0) += 1,
                    Err(error) => errors.push(error),
                }
            }
            // Scheduling order varies run to run; sorted errors keep
            // diagnostics reproducible.
            errors.sort_by(|a, b| a.path.cmp(&b.path));

            Ok(RunReport {
                counts,
                errors,
                elapsed: Duration::ZERO,
            })
        })?;

        report.elapsed = started.elapsed();
        Ok(report)
    }

    /// Load one root's config and expand it into work items sharing that
    /// config. Configuration is root-granular: loaded once, shared by
    /// every file discovered underneath.
    fn expand_root(&self, root: &Root) -> Result<Vec<WorkItem>, BatchError> {
        let config = Arc::new(config::load(root.path())?);
        let walker = FileWalker::new(WalkerConfig::from_config(&config));
        let (files, stats) = walker.walk_collect(root.path());
        let bytes: u64 = files.iter().map(|f| f.size).sum();
        tracing::debug!(
            root = %root.path().display(),
            files = files.len(),
            bytes,
            excluded = stats.excluded,
            errors = stats.errors,
            "expanded root"
        );

        Ok(files
            .into_iter()
            .map(|file| WorkItem {
                display: self.display(&file.path),
                config: Arc::clone(&config),
                path: file.path,
            })
            .collect())
    }

    fn display(&self, path: &Path) -> String {
        match &self.display_base {
            Some(base) => path.strip_prefix(base).unwrap_or(path).display().to_string(),
            None => path.display().to_string(),
        }
    }

    fn apply_one(operation: &dyn Operation, item: &WorkItem) -> Result<OutcomeKind, RunError> {
        let applied = catch_unwind(AssertUnwindSafe(|| {
            operation.apply(&item.config, &item.path, &item.display)
        }));
        match applied {
            Ok(Ok(outcome)) => Ok(outcome.kind),
            Ok(Err(error)) => Err(RunError {
                path: item.display.clone(),
                message: error.to_string(),
            }),
            // A panic in the operation must not take down its siblings.
            Err(_) => Err(RunError {
                path: item.display.clone(),
                message: "operation panicked".to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
