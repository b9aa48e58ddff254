//! # Command Engine Module / 命令引擎模块
//!
//! The shipped [`ExecutionEngine`]: every registered suite is handed to an
//! interpreter process (by default `node --test --test-reporter=tap <suite>`)
//! and the TAP it prints is turned into case results.
//!
//! 内置的执行引擎：每个已注册的套件交给一个解释器进程运行
//! （默认 `node --test --test-reporter=tap <suite>`），并将其输出的 TAP 转换为用例结果。

use chrono::Local;
use colored::*;
use futures::{StreamExt, stream};
use std::future::Future;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::{
    core::{
        config::RunnerConfig,
        engine::{ExecutionEngine, SuiteRegistry},
        models::{RunSummary, SuiteFile, SuiteResult},
        tap,
    },
    error::{Result, SetupError},
    infra::{command, t},
};

#[derive(Debug)]
pub struct CommandEngine {
    command: String,
    jobs: usize,
    registry: SuiteRegistry,
}

impl CommandEngine {
    pub fn new(command: impl Into<String>, jobs: usize) -> Self {
        Self {
            command: command.into(),
            jobs: jobs.max(1),
            registry: SuiteRegistry::new(),
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(config.command.clone(), config.jobs)
    }

    pub fn registry(&self) -> &SuiteRegistry {
        &self.registry
    }
}

impl ExecutionEngine for CommandEngine {
    fn add_file(&mut self, path: PathBuf) -> Result<()> {
        self.registry.register(path)
    }

    fn run(self) -> impl Future<Output = Result<RunSummary>> + Send {
        async move {
            let started_at = Local::now();
            let start = Instant::now();

            // Parse the command before the first suite starts so a bad command
            // fails the whole run instead of every suite.
            let (program, args) = command::parse_command_line(&self.command)?;
            let suites = self.registry.into_suites();
            info!(suites = suites.len(), jobs = self.jobs, %program, "starting run");

            let outcomes: Vec<Result<(usize, SuiteResult)>> =
                stream::iter(suites.into_iter().enumerate().map(|(index, suite)| {
                    let program = program.clone();
                    let args = args.clone();
                    async move {
                        run_suite(&program, &args, suite)
                            .await
                            .map(|result| (index, result))
                    }
                }))
                .buffer_unordered(self.jobs)
                .collect()
                .await;

            let mut results = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
            results.sort_by_key(|(index, _)| *index);

            Ok(RunSummary::new(
                started_at,
                start.elapsed(),
                results.into_iter().map(|(_, result)| result).collect(),
            ))
        }
    }
}

/// Runs one suite through the interpreter and folds its TAP output into a result.
async fn run_suite(program: &str, args: &[String], suite: SuiteFile) -> Result<SuiteResult> {
    println!("{}", t!("run.running_suite", name = &suite.name).blue());

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args).arg(&suite.path).kill_on_drop(true);

    let start = Instant::now();
    let (status_res, output) = command::spawn_and_capture(cmd).await;
    let duration = start.elapsed();

    let status = status_res.map_err(|e| {
        SetupError::Engine(format!(
            "failed to launch '{program}' for {}: {e}",
            suite.path.display()
        ))
    })?;

    let report = tap::parse(&output);
    let mut failures = report.failed_count() as u64;
    if failures == 0 && report.bailed_out {
        failures = 1;
    }
    // A crash or syntax error leaves no failing test point behind.
    if failures == 0 && !status.success() {
        failures = 1;
    }
    debug!(
        suite = %suite.path.display(),
        points = report.points.len(),
        failures,
        exit = ?status.code(),
        "suite finished"
    );

    let result = SuiteResult {
        cases: report.cases(),
        failures,
        exit_code: status.code(),
        output,
        duration,
        suite,
    };

    let seconds = format!("{:.2}", duration.as_secs_f64());
    if result.is_failure() {
        println!(
            "{}",
            t!(
                "run.suite_failed",
                name = &result.suite.name,
                failures = failures,
                duration = &seconds
            )
            .red()
        );
    } else {
        println!(
            "{}",
            t!("run.suite_passed", name = &result.suite.name, duration = &seconds).green()
        );
    }

    Ok(result)
}
