//! # Suite Runner Module / 套件运行器模块
//!
//! The runner pipeline: discover suite files, register all of them with an
//! engine, execute once, report, and map the failure count to an exit status.
//! The steps are strictly sequential and nothing is retried.
//!
//! 运行流水线：发现套件文件、全部注册到引擎、执行一次、生成报告，
//! 并把失败计数映射为退出状态。各步骤严格顺序执行，不做任何重试。

use colored::*;
use tracing::{error, info};

use crate::{
    core::{
        config::RunnerConfig,
        discovery,
        engine::ExecutionEngine,
        models::{ExitStatus, RunSummary, SuiteFile},
    },
    error::Result,
    infra::t,
    reporting::{self, Reporter},
};

/// Maps a failure count to an exit status.
///
/// `0` maps to [`ExitStatus::Success`]; any other count maps to
/// [`ExitStatus::TestsFailed`] carrying `failure_code`.
///
/// 将失败计数映射为退出状态：`0` 为成功，其余为携带 `failure_code` 的失败。
pub fn map_exit_status(failures: u64, failure_code: u8) -> ExitStatus {
    if failures == 0 {
        ExitStatus::Success
    } else {
        ExitStatus::TestsFailed(failure_code)
    }
}

#[derive(Debug)]
pub struct SuiteRunner {
    config: RunnerConfig,
    locale: String,
}

impl SuiteRunner {
    pub fn new(config: RunnerConfig, locale: impl Into<String>) -> Self {
        Self {
            config,
            locale: locale.into(),
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Lists the suite files in the configured directory.
    pub fn discover(&self) -> Result<Vec<SuiteFile>> {
        discovery::discover(&self.config.suites_dir, &self.config.suffix)
    }

    /// Registers every suite with `engine`, in order.
    ///
    /// # Returns
    /// The number of suites registered.
    pub fn register<E: ExecutionEngine>(
        &self,
        engine: &mut E,
        suites: Vec<SuiteFile>,
    ) -> Result<usize> {
        let count = suites.len();
        for suite in suites {
            engine.add_file(suite.path)?;
        }
        Ok(count)
    }

    /// Runs all registered suites. Resolves once the engine reports completion.
    pub async fn execute<E: ExecutionEngine>(&self, engine: E) -> Result<RunSummary> {
        engine.run().await
    }

    pub fn map_exit_status(&self, failures: u64) -> ExitStatus {
        map_exit_status(failures, self.config.failure_exit_code)
    }

    /// Runs the whole pipeline with `engine` and hands the summary to `reporter`.
    ///
    /// Discovery and registration errors abort before the engine starts.
    /// A reporter that fails to write its artifact is logged and does not
    /// change the exit status.
    ///
    /// 使用 `engine` 运行完整流水线，并把摘要交给 `reporter`。
    /// 发现与注册阶段的错误会在引擎启动前中止运行；
    /// 报告器写出失败只会被记录，不会改变退出状态。
    pub async fn run<E: ExecutionEngine>(
        &self,
        mut engine: E,
        reporter: &dyn Reporter,
    ) -> Result<(RunSummary, ExitStatus)> {
        let locale = self.locale.as_str();

        println!(
            "{}",
            t!(
                "run.discovering",
                locale = locale,
                path = self.config.suites_dir.display()
            )
            .cyan()
        );
        let suites = self.discover()?;
        if suites.is_empty() {
            println!(
                "{}",
                t!("run.no_suites", locale = locale, suffix = &self.config.suffix).yellow()
            );
        } else {
            println!(
                "{}",
                t!("run.suites_found", locale = locale, count = suites.len()).cyan()
            );
        }

        let registered = self.register(&mut engine, suites)?;
        info!(registered, "all suites registered");

        let summary = self.execute(engine).await?;

        reporting::print_summary(&summary, locale);
        match reporter.report(&summary, &self.config.reporter, locale) {
            Ok(Some(path)) => println!(
                "\n{}",
                t!("report.written", locale = locale, path = path.display())
            ),
            Ok(None) => {}
            Err(e) => {
                error!("reporter '{}' failed: {e:#}", reporter.name());
                eprintln!("{} {:#}", t!("report.write_failed", locale = locale).red(), e);
            }
        }

        let status = self.map_exit_status(summary.failures);
        if status.is_success() {
            println!("\n{}", t!("run.all_passed", locale = locale).green().bold());
        } else {
            reporting::print_failure_details(&summary, locale);
            println!(
                "\n{}",
                t!("run.failures_detected", locale = locale, count = summary.failures)
                    .red()
                    .bold()
            );
        }

        Ok((summary, status))
    }
}
