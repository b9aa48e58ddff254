//! # Execution Engine Module / 执行引擎模块
//!
//! The seam between the runner and whatever actually executes suites.
//! An engine collects suite files through [`ExecutionEngine::add_file`] and runs
//! all of them once through [`ExecutionEngine::run`], which consumes the engine so
//! the run can only complete a single time.
//!
//! 运行器与实际执行套件的组件之间的接口。引擎通过 `add_file` 收集套件文件，
//! 并通过 `run` 一次性运行全部套件；`run` 会消耗引擎，因此一次运行只能完成一次。

use std::collections::HashSet;
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

use crate::core::models::{RunSummary, SuiteFile};
use crate::error::{Result, SetupError};

pub trait ExecutionEngine: Send {
    /// Includes one suite file in the next run.
    /// 将一个套件文件加入下一次运行。
    fn add_file(&mut self, path: PathBuf) -> Result<()>;

    /// Runs every registered suite to completion and resolves exactly once with
    /// the aggregate result. Failing tests are part of the summary, never an `Err`.
    ///
    /// 运行所有已注册的套件直至完成，并恰好一次地返回汇总结果。
    /// 失败的测试计入摘要，而不会作为 `Err` 返回。
    fn run(self) -> impl Future<Output = Result<RunSummary>> + Send;
}

/// Ordered set of registered suites.
/// 已注册套件的有序集合。
#[derive(Debug, Default)]
pub struct SuiteRegistry {
    suites: Vec<SuiteFile>,
    seen: HashSet<PathBuf>,
}

impl SuiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a suite, rejecting a path that was already registered.
    pub fn register(&mut self, path: PathBuf) -> Result<()> {
        if !self.seen.insert(path.clone()) {
            return Err(SetupError::DuplicateSuite(path));
        }
        debug!(suite = %path.display(), "registered suite");
        self.suites.push(SuiteFile::new(path));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuiteFile> {
        self.suites.iter()
    }

    pub fn into_suites(self) -> Vec<SuiteFile> {
        self.suites
    }
}
