// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output: a single document on stdout.

use serde_json::json;

use crate::runner::RunReport;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport, mode: &str) -> anyhow::Result<String> {
        let counts: serde_json::Map<String, serde_json::Value> = report
            .counts
            .iter()
            .map(|(kind, count)| (kind.as_str().to_string(), json!(count)))
            .collect();
        let errors: Vec<serde_json::Value> = report
            .errors
            .iter()
            .map(|e| json!({ "path": e.path, "message": e.message }))
            .collect();

        let doc = json!({
            "mode": mode,
            "files": report.total(),
            "elapsed_ms": report.elapsed_millis() as u64,
            "counts": counts,
            "errors": errors,
        });
        let mut rendered = serde_json::to_string_pretty(&doc)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
