//! # Runner Pipeline Integration Tests / 运行流水线集成测试
//!
//! Drives `SuiteRunner` with a recording engine to check the ordering
//! guarantees of the pipeline: every discovered file is registered before the
//! run starts, the run completes exactly once, and setup errors stop the
//! pipeline before anything is registered.
//!
//! 使用记录型引擎驱动 `SuiteRunner`，检查流水线的顺序保证：
//! 所有发现的文件在运行开始前完成注册、运行恰好完成一次、准备阶段错误在注册前终止流水线。

mod common;

use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use suite_runner::config::RunnerConfig;
use suite_runner::core::engine::ExecutionEngine;
use suite_runner::core::models::{ExitStatus, RunSummary};
use suite_runner::error::SetupError;
use suite_runner::reporting::SpecReporter;
use suite_runner::runner::SuiteRunner;

#[derive(Debug, Default)]
struct Journal {
    registered: Vec<PathBuf>,
    registered_at_run: Option<usize>,
    completions: usize,
}

/// An engine that records what happens to it and reports a fixed failure count.
struct RecordingEngine {
    journal: Arc<Mutex<Journal>>,
    failures: u64,
}

impl RecordingEngine {
    fn new(failures: u64) -> (Self, Arc<Mutex<Journal>>) {
        let journal = Arc::new(Mutex::new(Journal::default()));
        (
            Self {
                journal: Arc::clone(&journal),
                failures,
            },
            journal,
        )
    }
}

impl ExecutionEngine for RecordingEngine {
    fn add_file(&mut self, path: PathBuf) -> suite_runner::error::Result<()> {
        self.journal.lock().unwrap().registered.push(path);
        Ok(())
    }

    fn run(self) -> impl Future<Output = suite_runner::error::Result<RunSummary>> + Send {
        async move {
            let mut journal = self.journal.lock().unwrap();
            let registered = journal.registered.len();
            journal.registered_at_run = Some(registered);
            journal.completions += 1;
            let mut summary = RunSummary::empty(Local::now());
            summary.failures = self.failures;
            Ok(summary)
        }
    }
}

fn runner_for(dir: PathBuf) -> SuiteRunner {
    let config = RunnerConfig {
        suites_dir: dir,
        ..RunnerConfig::default()
    };
    SuiteRunner::new(config, "en")
}

#[tokio::test]
async fn test_all_files_registered_before_run() {
    let workspace = common::setup_workspace();
    let dir = common::suites_dir(&workspace);
    for name in ["a.js", "b.js", "c.js", "readme.md"] {
        fs::write(dir.join(name), "").unwrap();
    }

    let (engine, journal) = RecordingEngine::new(0);
    let (_, status) = runner_for(dir.clone()).run(engine, &SpecReporter).await.unwrap();

    let journal = journal.lock().unwrap();
    let registered: HashSet<_> = journal.registered.iter().cloned().collect();
    let expected: HashSet<_> = ["a.js", "b.js", "c.js"].iter().map(|n| dir.join(n)).collect();

    assert_eq!(registered, expected);
    assert_eq!(journal.registered.len(), 3, "each file registered exactly once");
    assert_eq!(journal.registered_at_run, Some(3));
    assert_eq!(journal.completions, 1);
    assert_eq!(status, ExitStatus::Success);
}

#[tokio::test]
async fn test_failure_count_maps_to_failure_status() {
    let workspace = common::setup_workspace();
    let dir = common::suites_dir(&workspace);
    fs::write(dir.join("a.js"), "").unwrap();

    let (engine, _) = RecordingEngine::new(2);
    let (summary, status) = runner_for(dir).run(engine, &SpecReporter).await.unwrap();

    assert_eq!(summary.failures, 2);
    assert_eq!(status, ExitStatus::TestsFailed(1));
}

#[tokio::test]
async fn test_empty_directory_runs_zero_suites() {
    let workspace = common::setup_workspace();

    let (engine, journal) = RecordingEngine::new(0);
    let (summary, status) = runner_for(common::suites_dir(&workspace))
        .run(engine, &SpecReporter)
        .await
        .unwrap();

    assert_eq!(summary.failures, 0);
    assert_eq!(status.code(), 0);
    assert_eq!(journal.lock().unwrap().completions, 1);
}

#[tokio::test]
async fn test_missing_directory_aborts_before_registration() {
    let workspace = common::setup_workspace();
    let missing = workspace.path().join("nope");

    let (engine, journal) = RecordingEngine::new(0);
    let result = runner_for(missing).run(engine, &SpecReporter).await;

    assert!(matches!(result, Err(SetupError::DirectoryAccess { .. })));
    let journal = journal.lock().unwrap();
    assert!(journal.registered.is_empty());
    assert_eq!(journal.completions, 0);
}

#[tokio::test]
async fn test_step_by_step_contract() {
    let workspace = common::setup_workspace();
    let dir = common::suites_dir(&workspace);
    fs::write(dir.join("only.js"), "").unwrap();

    let runner = runner_for(dir);
    let (mut engine, journal) = RecordingEngine::new(0);

    let suites = runner.discover().unwrap();
    assert_eq!(runner.register(&mut engine, suites).unwrap(), 1);
    let summary = runner.execute(engine).await.unwrap();

    assert_eq!(runner.map_exit_status(summary.failures), ExitStatus::Success);
    assert_eq!(journal.lock().unwrap().completions, 1);
}
