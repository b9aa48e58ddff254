//! # Configuration Initialization Module / 配置初始化模块
//!
//! This module writes a starter `SuiteRunner.toml`, either from the built-in
//! defaults (`--non-interactive`) or through a short interactive wizard.
//!
//! 此模块生成初始的 `SuiteRunner.toml`：
//! 使用内置默认值（`--non-interactive`）或通过简短的交互式向导。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Prompts for the suites directory, interpreter command and reporter
//! - **Overwrite Protection**: Confirmation prompt before overwriting an existing file
//!
//! - **交互式向导**: 依次询问套件目录、解释器命令和报告器
//! - **覆盖保护**: 覆盖已有文件前进行确认

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::RunnerConfig;
use crate::infra::{fs::is_directory, t};
use crate::reporting::AVAILABLE_REPORTERS;

/// Runs the wizard and writes the configuration to `config_path`.
///
/// In non-interactive mode the defaults are written without any prompt, and an
/// existing file is overwritten.
///
/// 运行向导并把配置写入 `config_path`。非交互模式下不提示，直接写入默认值并覆盖已有文件。
pub fn run_init_wizard(config_path: &Path, language: &str, non_interactive: bool) -> Result<()> {
    if non_interactive {
        return write_config(config_path, &RunnerConfig::default(), language);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init.welcome", locale = language).cyan().bold());
    println!("{}", t!("init.description", locale = language));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init.overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(t!("init.confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let defaults = RunnerConfig::default();

    let suites_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init.suites_dir_prompt", locale = language))
        .default(defaults.suites_dir.display().to_string())
        .interact_text()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;
    if !is_directory(Path::new(&suites_dir)) {
        println!(
            "{}",
            t!("init.suites_dir_missing", locale = language, path = &suites_dir).yellow()
        );
    }

    let command: String = Input::with_theme(&theme)
        .with_prompt(t!("init.command_prompt", locale = language))
        .default(defaults.command.clone())
        .interact_text()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;

    let default_reporter = AVAILABLE_REPORTERS
        .iter()
        .position(|name| *name == defaults.reporter.name)
        .unwrap_or(0);
    let reporter = Select::with_theme(&theme)
        .with_prompt(t!("init.reporter_prompt", locale = language))
        .items(&AVAILABLE_REPORTERS)
        .default(default_reporter)
        .interact()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;

    let report_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init.report_dir_prompt", locale = language))
        .default(defaults.reporter.report_dir.display().to_string())
        .interact_text()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;

    let mut config = defaults;
    config.language = Some(language.to_string());
    config.suites_dir = PathBuf::from(suites_dir);
    config.command = command;
    config.reporter.name = AVAILABLE_REPORTERS[reporter].to_string();
    config.reporter.report_dir = PathBuf::from(report_dir);

    write_config(config_path, &config, language)
}

fn write_config(path: &Path, config: &RunnerConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init.serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| {
            t!("init.write_failed", locale = language, path = path.display()).to_string()
        })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init.usage_hint", locale = language));

    Ok(())
}
