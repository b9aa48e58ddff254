//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine-readable report: aggregate stats followed by every suite result.
//!
//! 机器可读的报告：汇总统计以及每个套件的结果。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

use crate::core::config::ReporterConfig;
use crate::core::models::{CaseOutcome, RunSummary, SuiteResult};
use crate::infra::fs::write_artifact;
use crate::reporting::Reporter;

#[derive(Debug, Serialize)]
pub struct JsonStats {
    pub start: DateTime<Local>,
    pub duration_ms: u128,
    pub suites: usize,
    pub tests: usize,
    pub passes: usize,
    pub failures: u64,
    pub skipped: usize,
    pub todo: usize,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub stats: JsonStats,
    pub results: &'a [SuiteResult],
}

impl<'a> JsonReport<'a> {
    pub fn from_summary(summary: &'a RunSummary) -> Self {
        Self {
            stats: JsonStats {
                start: summary.started_at,
                duration_ms: summary.duration.as_millis(),
                suites: summary.suites.len(),
                tests: summary.total_cases(),
                passes: summary.count(CaseOutcome::Passed),
                failures: summary.failures,
                skipped: summary.count(CaseOutcome::Skipped),
                todo: summary.count(CaseOutcome::Todo),
            },
            results: &summary.suites,
        }
    }
}

/// Writes `<report_dir>/<report_filename>.json`.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn report(
        &self,
        summary: &RunSummary,
        options: &ReporterConfig,
        _locale: &str,
    ) -> Result<Option<PathBuf>> {
        let json = serde_json::to_string_pretty(&JsonReport::from_summary(summary))
            .context("Failed to serialize JSON report")?;
        let file_name = format!("{}.json", options.report_filename);
        write_artifact(&options.report_dir, &file_name, &json).map(Some)
    }
}
