// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The whitespace normalization engine.
//!
//! [`reformat`] is a pure function from source text and config to
//! normalized text: CRLF endings fold to LF, tabs optionally expand to tab
//! stops, trailing whitespace is trimmed, blank-line runs are capped, and
//! non-empty output ends with exactly one newline. Idempotent for every
//! input and config.

use crate::config::FormatConfig;

/// Reformat `source` according to `config`. The empty string stays empty;
/// a file of nothing but blank lines normalizes to empty.
pub fn reformat(source: &str, config: &FormatConfig) -> String {
    if source.is_empty() {
        return String::new();
    }

    let had_final_newline = source.ends_with('\n');
    let mut raw_lines: Vec<&str> = source.split('\n').collect();
    if had_final_newline {
        raw_lines.pop();
    }

    let mut lines: Vec<String> = Vec::with_capacity(raw_lines.len());
    let mut blanks = 0usize;
    for raw in raw_lines {
        let stripped = raw.strip_suffix('\r').unwrap_or(raw);
        let mut line = if config.expand_tabs {
            expand_tabs(stripped, config.tab_width)
        } else {
            stripped.to_string()
        };
        if config.trim_trailing {
            line.truncate(line.trim_end().len());
        }

        if line.is_empty() {
            blanks += 1;
            if blanks > config.max_blank_lines {
                continue;
            }
        } else {
            blanks = 0;
        }
        lines.push(line);
    }

    // Blank lines never end a file.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let mut out = lines.join("\n");
    if out.is_empty() {
        return String::new();
    }
    if config.final_newline || had_final_newline {
        out.push('\n');
    }
    out
}

/// Expand tabs to spaces, advancing to the next tab stop.
fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let width = tab_width.max(1);
    let mut out = String::with_capacity(line.len() + width);
    let mut column = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = width - (column % width);
            for _ in 0..pad {
                out.push(' ');
            }
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
