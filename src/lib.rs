//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the Suite Runner tool,
//! a directory-driven executor for interpreter-based test suites.
//!
//! 此库为 Suite Runner 工具提供核心功能，
//! 这是一个由目录驱动、基于解释器的测试套件执行器。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, suite discovery, the execution engine and the runner pipeline
//! - `infra` - Infrastructure services like process spawning and file system helpers
//! - `reporting` - Reporter plugins (console, HTML, JSON)
//! - `cli` / `commands` - Command-line interface and its subcommands
//! - `error` - Typed setup errors
//!
//! - `core` - 配置、套件发现、执行引擎和运行流水线
//! - `infra` - 基础设施服务，如进程派生和文件系统辅助函数
//! - `reporting` - 报告插件（控制台、HTML、JSON）
//! - `cli` / `commands` - 命令行接口及其子命令
//! - `error` - 类型化的准备阶段错误

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::models;
pub use core::runner;

/// Picks the best available UI language for a requested locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en" from "en-US"), and finally falls back to "en".
///
/// 为请求的语言区域选择最合适的界面语言。
pub fn resolve_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return requested.to_string();
    }

    requested
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
