//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Runner,
//! including configuration, suite discovery, the execution engine and
//! the runner pipeline that ties them together.
//!
//! 此模块包含 Suite Runner 的核心功能，
//! 包括配置、套件发现、执行引擎以及把它们串联起来的运行流水线。

pub mod command_engine;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod models;
pub mod runner;
pub mod tap;

// Re-exports
pub use command_engine::CommandEngine;
pub use config::RunnerConfig;
pub use engine::ExecutionEngine;
pub use models::{ExitStatus, RunSummary};
pub use runner::SuiteRunner;
