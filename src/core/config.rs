//! # Configuration Module / 配置模块
//!
//! Runner settings with documented defaults. Values come from three layers,
//! later layers winning: built-in defaults, an optional `SuiteRunner.toml`,
//! and command-line overrides.
//!
//! 运行器设置及其默认值。取值分三层，后者覆盖前者：
//! 内置默认值、可选的 `SuiteRunner.toml` 以及命令行参数。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SetupError};

/// Default configuration file looked up in the working directory.
/// 在工作目录中查找的默认配置文件。
pub const DEFAULT_CONFIG_FILE: &str = "SuiteRunner.toml";

/// Settings handed to the reporter plugin.
/// 传递给报告插件的设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReporterConfig {
    /// Reporter name: `spec`, `html` or `json`.
    /// 报告器名称：`spec`、`html` 或 `json`。
    #[serde(default = "default_reporter")]
    pub name: String,
    /// Directory the report artifact is written to.
    /// 报告文件的输出目录。
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
    /// File stem of the report artifact; the reporter adds the extension.
    /// 报告文件名（不含扩展名），扩展名由报告器添加。
    #[serde(default = "default_report_filename")]
    pub report_filename: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            name: default_reporter(),
            report_dir: default_report_dir(),
            report_filename: default_report_filename(),
        }
    }
}

/// The complete runner configuration.
/// 完整的运行器配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// When absent, the system locale is used.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 未指定时使用系统语言。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Directory scanned (non-recursively) for suite files.
    /// 非递归扫描套件文件的目录。
    #[serde(default = "default_suites_dir")]
    pub suites_dir: PathBuf,

    /// File-name suffix a suite file must end with.
    /// 套件文件名必须具有的后缀。
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Interpreter command line; the suite path is appended as the last argument.
    /// The interpreter must print TAP to stdout.
    ///
    /// 解释器命令行；套件路径作为最后一个参数追加。解释器必须向 stdout 输出 TAP。
    #[serde(default = "default_command")]
    pub command: String,

    /// Maximum number of suites the engine runs at the same time.
    /// 引擎同时运行的最大套件数量。
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Exit code used when at least one test failed. Must not be zero.
    /// 至少一个测试失败时使用的退出码，不能为零。
    #[serde(default = "default_failure_exit_code")]
    pub failure_exit_code: u8,

    #[serde(default)]
    pub reporter: ReporterConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            language: None,
            suites_dir: default_suites_dir(),
            suffix: default_suffix(),
            command: default_command(),
            jobs: default_jobs(),
            failure_exit_code: default_failure_exit_code(),
            reporter: ReporterConfig::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the underlying value untouched.
/// 命令行给出的值。`None` 表示保留原值。
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub suites_dir: Option<PathBuf>,
    pub suffix: Option<String>,
    pub command: Option<String>,
    pub jobs: Option<usize>,
    pub reporter: Option<String>,
    pub report_dir: Option<PathBuf>,
}

impl RunnerConfig {
    /// Parses a configuration from TOML text. `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let config: RunnerConfig = toml::from_str(content).map_err(|e| SetupError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Loads the configuration file at `path`.
    ///
    /// A missing file yields the defaults unless `required` is set, which is the
    /// case when the user named the file explicitly.
    ///
    /// 加载 `path` 处的配置文件。文件不存在时返回默认值，
    /// 除非 `required` 为真（即用户显式指定了该文件）。
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() {
            if required {
                return Err(SetupError::Config {
                    path: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SetupError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content, path)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.suites_dir {
            self.suites_dir = dir;
        }
        if let Some(suffix) = overrides.suffix {
            self.suffix = suffix;
        }
        if let Some(command) = overrides.command {
            self.command = command;
        }
        if let Some(jobs) = overrides.jobs {
            self.jobs = jobs;
        }
        if let Some(reporter) = overrides.reporter {
            self.reporter.name = reporter;
        }
        if let Some(report_dir) = overrides.report_dir {
            self.reporter.report_dir = report_dir;
        }
        self
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self, origin: &Path) -> Result<()> {
        let invalid = |message: &str| SetupError::Config {
            path: origin.to_path_buf(),
            message: message.to_string(),
        };

        if self.suffix.is_empty() {
            return Err(invalid("`suffix` must not be empty"));
        }
        if self.command.trim().is_empty() {
            return Err(invalid("`command` must not be empty"));
        }
        if self.jobs == 0 {
            return Err(invalid("`jobs` must be at least 1"));
        }
        if self.failure_exit_code == 0 {
            return Err(invalid("`failure_exit_code` must be non-zero"));
        }
        Ok(())
    }
}

fn default_suites_dir() -> PathBuf {
    PathBuf::from("suites")
}

fn default_suffix() -> String {
    ".js".to_string()
}

fn default_command() -> String {
    "node --test --test-reporter=tap".to_string()
}

fn default_jobs() -> usize {
    1
}

fn default_failure_exit_code() -> u8 {
    1
}

fn default_reporter() -> String {
    "html".to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("/report")
}

fn default_report_filename() -> String {
    "suite-report".to_string()
}
