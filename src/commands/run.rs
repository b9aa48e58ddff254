// src/commands/run.rs

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use tracing::debug;

use crate::{
    core::{
        command_engine::CommandEngine,
        config::{ConfigOverrides, DEFAULT_CONFIG_FILE, RunnerConfig},
        models::ExitStatus,
        runner::SuiteRunner,
    },
    infra::t,
    reporting, resolve_locale,
};

/// Arguments of the `run` subcommand.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub config: PathBuf,
    /// Whether the config path came from the command line; an explicit path must exist.
    pub config_explicit: bool,
    pub overrides: ConfigOverrides,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            config_explicit: false,
            overrides: ConfigOverrides::default(),
        }
    }
}

/// Loads the configuration, resolves the reporter and runs every suite once.
///
/// Setup problems (bad config, unknown reporter, missing suites directory,
/// interpreter that cannot be launched) are returned as `Err`. Failing tests
/// are not errors; they come back as [`ExitStatus::TestsFailed`].
pub async fn execute(args: RunArgs, language: &str, language_forced: bool) -> Result<ExitStatus> {
    let config = RunnerConfig::load(&args.config, args.config_explicit)?.apply(args.overrides);
    config.validate(&args.config)?;

    // `--lang` beats the config file.
    let locale = match (&config.language, language_forced) {
        (Some(configured), false) => {
            let locale = resolve_locale(configured);
            rust_i18n::set_locale(&locale);
            locale
        }
        _ => language.to_string(),
    };
    debug!(?config, %locale, "effective configuration");

    // Resolved up front so an unknown name fails before any suite runs.
    let reporter = reporting::reporter_for(&config.reporter.name)?;

    println!(
        "{}",
        t!("run.using_reporter", locale = &locale, name = reporter.name().yellow())
    );

    let engine = CommandEngine::from_config(&config);
    let runner = SuiteRunner::new(config, locale);
    let (_, status) = runner.run(engine, reporter.as_ref()).await?;

    Ok(status)
}
