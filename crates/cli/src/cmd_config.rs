// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `groom config` command: print the merged configuration for a path.

use std::path::PathBuf;
use std::process::ExitCode;

use groom::cli::ConfigArgs;
use groom::config;
use groom::report::exit;

pub fn run(args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let target = match std::fs::canonicalize(&path) {
        Ok(target) => target,
        Err(err) => {
            eprintln!("groom: cannot resolve {}: {err}", path.display());
            return Ok(ExitCode::from(exit::USAGE));
        }
    };

    match config::load(&target) {
        Ok(config) => {
            let rendered = toml::to_string_pretty(&config)?;
            print!("{rendered}");
            Ok(ExitCode::from(exit::SUCCESS))
        }
        Err(err) => {
            eprintln!("groom: {err}");
            Ok(ExitCode::from(exit::USAGE))
        }
    }
}
