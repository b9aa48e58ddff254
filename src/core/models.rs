//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures that flow through a run: the
//! discovered suite files, per-suite and per-case results, the aggregate run
//! summary and the process exit status derived from it.
//!
//! 此模块定义了一次运行中流转的数据结构：发现的套件文件、
//! 套件和用例级别的结果、汇总的运行摘要以及由其得出的进程退出状态。

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crate::infra::t;

/// Exit code for failures that abort the run before any suite executes.
/// 在任何套件执行之前中止运行的失败所使用的退出码。
pub const SETUP_FAILURE_EXIT_CODE: u8 = 2;

/// A reference to one discovered suite file.
/// 对一个已发现套件文件的引用。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SuiteFile {
    /// Path as handed to the interpreter (the suites directory joined with the file name).
    /// 传给解释器的路径（套件目录与文件名拼接而成）。
    pub path: PathBuf,
    /// The bare file name, used as the suite title in reports.
    /// 纯文件名，在报告中作为套件标题。
    pub name: String,
}

impl SuiteFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

/// Outcome of a single test case inside a suite.
/// 套件内单个测试用例的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    Failed,
    Skipped,
    /// A failing case marked `# TODO`; it does not count as a failure.
    /// 标记为 `# TODO` 的失败用例，不计为失败。
    Todo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub outcome: CaseOutcome,
}

/// The result of executing one suite file.
/// 执行一个套件文件的结果。
#[derive(Debug, Clone, Serialize)]
pub struct SuiteResult {
    pub suite: SuiteFile,
    /// Leaf test cases parsed from the interpreter's TAP output.
    /// 从解释器 TAP 输出中解析出的叶子测试用例。
    pub cases: Vec<CaseResult>,
    /// Failures this suite contributes to the run's failure count.
    /// 此套件贡献给整次运行失败计数的失败数。
    pub failures: u64,
    /// The interpreter's exit code, `None` if it was killed by a signal.
    /// 解释器的退出码；若被信号终止则为 `None`。
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr of the interpreter.
    /// 解释器合并后的 stdout 和 stderr。
    pub output: String,
    pub duration: Duration,
}

impl SuiteResult {
    pub fn is_failure(&self) -> bool {
        self.failures > 0
    }

    pub fn count(&self, outcome: CaseOutcome) -> usize {
        self.cases.iter().filter(|c| c.outcome == outcome).count()
    }

    /// Gets the CSS class for the suite status in the HTML report.
    pub fn get_status_class(&self) -> &str {
        if self.is_failure() {
            "status-Failed"
        } else if !self.cases.is_empty() && self.count(CaseOutcome::Skipped) == self.cases.len() {
            "status-Skipped"
        } else {
            "status-Passed"
        }
    }

    /// Gets the status of the suite as a localized string for display.
    /// 以本地化字符串形式获取套件状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        match self.get_status_class() {
            "status-Failed" => t!("report.status_failed", locale = locale).to_string(),
            "status-Skipped" => t!("report.status_skipped", locale = locale).to_string(),
            _ => t!("report.status_passed", locale = locale).to_string(),
        }
    }
}

/// The aggregate result of one run, produced exactly once by the execution engine.
/// 一次运行的汇总结果，由执行引擎恰好产生一次。
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Local>,
    pub duration: Duration,
    /// Suite results in registration order.
    /// 按注册顺序排列的套件结果。
    pub suites: Vec<SuiteResult>,
    /// The failure count: the sum of every suite's failures.
    /// 失败计数：所有套件失败数之和。
    pub failures: u64,
}

impl RunSummary {
    pub fn new(started_at: DateTime<Local>, duration: Duration, suites: Vec<SuiteResult>) -> Self {
        let failures = suites.iter().map(|s| s.failures).sum();
        Self {
            started_at,
            duration,
            suites,
            failures,
        }
    }

    /// The summary of a run with no registered suites.
    pub fn empty(started_at: DateTime<Local>) -> Self {
        Self::new(started_at, Duration::ZERO, Vec::new())
    }

    pub fn total_cases(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    pub fn count(&self, outcome: CaseOutcome) -> usize {
        self.suites.iter().map(|s| s.count(outcome)).sum()
    }

    pub fn failed_suites(&self) -> impl Iterator<Item = &SuiteResult> {
        self.suites.iter().filter(|s| s.is_failure())
    }

    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

/// The process exit status derived from a run.
/// 由一次运行得出的进程退出状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No test failed.
    Success,
    /// At least one test failed; carries the configured non-zero code.
    TestsFailed(u8),
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::TestsFailed(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ExitStatus::Success)
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
