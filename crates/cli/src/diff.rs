// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unified diff rendering for check violations.
//!
//! Produces a classic `--- a/… / +++ b/…` diff with three context lines.
//! Colorization is baked into the returned payload so it can be written
//! atomically later without re-resolving the color mode.

use std::io::{self, Write};

use similar::{ChangeTag, TextDiff};
use termcolor::{Buffer, ColorChoice, WriteColor};

use crate::color::{self, scheme};

/// Number of unchanged lines shown around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Render the difference between `original` and `revised` as a unified
/// diff for `path`, with ANSI color when `choice` resolves on.
pub fn render(path: &str, original: &str, revised: &str, choice: ColorChoice) -> String {
    let diff = TextDiff::from_lines(original, revised);
    let mut buf = if color::is_colored(choice) {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };

    match write_diff(&mut buf, path, &diff) {
        Ok(()) => String::from_utf8_lossy(buf.as_slice()).into_owned(),
        // In-memory writes don't fail, but stay total: fall back to the
        // plain renderer.
        Err(_) => diff
            .unified_diff()
            .context_radius(CONTEXT_RADIUS)
            .header(&format!("a/{path}"), &format!("b/{path}"))
            .to_string(),
    }
}

fn write_diff<'a>(buf: &mut Buffer, path: &str, diff: &TextDiff<'a, 'a, 'a, str>) -> io::Result<()> {
    buf.set_color(&scheme::header())?;
    writeln!(buf, "--- a/{path}")?;
    writeln!(buf, "+++ b/{path}")?;
    buf.reset()?;

    for hunk in diff.unified_diff().context_radius(CONTEXT_RADIUS).iter_hunks() {
        buf.set_color(&scheme::hunk())?;
        writeln!(buf, "{}", hunk.header())?;
        buf.reset()?;

        for change in hunk.iter_changes() {
            let (sign, spec) = match change.tag() {
                ChangeTag::Delete => ("-", Some(scheme::removed())),
                ChangeTag::Insert => ("+", Some(scheme::added())),
                ChangeTag::Equal => (" ", None),
            };
            if let Some(spec) = &spec {
                buf.set_color(spec)?;
            }
            write!(buf, "{}{}", sign, change.value())?;
            if change.missing_newline() {
                writeln!(buf)?;
            }
            if spec.is_some() {
                buf.reset()?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
