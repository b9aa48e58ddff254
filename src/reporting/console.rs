//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints run results to the console: a per-suite summary table
//! that every run shows, the captured output of failing suites, and the `spec`
//! reporter which lists each case.
//!
//! 此模块把运行结果打印到控制台：每次运行都会显示的套件摘要表、
//! 失败套件的捕获输出，以及逐条列出用例的 `spec` 报告器。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::core::config::ReporterConfig;
use crate::core::models::{CaseOutcome, RunSummary};
use crate::infra::t;
use crate::reporting::Reporter;

/// Prints a formatted summary of suite results to the console.
///
/// 在控制台打印格式化的套件结果摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Suite Summary ---
///   - Status     | Suite                                    |  Cases | Failures   Duration
///   - Passed     | login.js                                 |      4 |        0      0.31s
///   - Failed     | checkout.js                              |      6 |        1      1.02s
/// ```
pub fn print_summary(summary: &RunSummary, locale: &str) {
    println!("\n{}", t!("summary.banner", locale = locale).bold());

    for result in &summary.suites {
        let status_str = result.get_status_str(locale);
        let status_colored = if result.is_failure() {
            status_str.red()
        } else {
            status_str.green()
        };

        println!(
            "  - {:<10} | {:<40} | {:>6} | {:>8} {:>9.2}s",
            status_colored,
            result.suite.name,
            result.cases.len(),
            result.failures,
            result.duration.as_secs_f64()
        );
    }

    println!(
        "\n{}",
        t!(
            "summary.totals",
            locale = locale,
            suites = summary.suites.len(),
            passed = summary.count(CaseOutcome::Passed),
            failed = summary.failures,
            skipped = summary.count(CaseOutcome::Skipped),
            duration = format!("{:.2}", summary.duration.as_secs_f64())
        )
    );
}

/// Prints the captured interpreter output of every failing suite.
///
/// 打印每个失败套件的解释器输出。
pub fn print_failure_details(summary: &RunSummary, locale: &str) {
    let failed: Vec<_> = summary.failed_suites().collect();
    if failed.is_empty() {
        return;
    }

    println!("\n{}", t!("summary.failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, result) in failed.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failed.len(),
            t!("summary.failure_header", locale = locale).red(),
            result.suite.path.display().to_string().cyan()
        );
        if let Some(code) = result.exit_code {
            println!("{}", t!("summary.exit_code", locale = locale, code = code));
        }
        println!("\n--- {} ---\n", t!("summary.suite_log", locale = locale).yellow());
        println!("{}", result.output.trim_end());
        println!("\n{}", "-".repeat(80));
    }
}

/// Lists every case of every suite, mocha `spec` style.
pub struct SpecReporter;

impl Reporter for SpecReporter {
    fn name(&self) -> &'static str {
        "spec"
    }

    fn report(
        &self,
        summary: &RunSummary,
        _options: &ReporterConfig,
        _locale: &str,
    ) -> Result<Option<PathBuf>> {
        println!();
        for result in &summary.suites {
            println!("  {}", result.suite.name.bold());
            for case in &result.cases {
                let line = match case.outcome {
                    CaseOutcome::Passed => format!("✔ {}", case.name).green(),
                    CaseOutcome::Failed => format!("✘ {}", case.name).red(),
                    CaseOutcome::Skipped => format!("- {}", case.name).cyan(),
                    CaseOutcome::Todo => format!("~ {}", case.name).yellow(),
                };
                println!("    {line}");
            }
        }
        Ok(None)
    }
}
