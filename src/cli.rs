// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, parser::ValueSource};
use std::{env, path::PathBuf};

use crate::{
    commands::{self, run::RunArgs},
    core::{config::ConfigOverrides, config::DEFAULT_CONFIG_FILE, models::ExitStatus},
    infra::t,
    resolve_locale,
};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
fn pre_parse_language() -> Option<String> {
    find_language_arg(env::args())
}

/// Finds the value of `--lang`, given either as `--lang <VALUE>` or `--lang=<VALUE>`.
/// The last occurrence wins.
///
/// 查找 `--lang` 的值，支持 `--lang <VALUE>` 与 `--lang=<VALUE>` 两种形式。
pub fn find_language_arg<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut found = None;
    while let Some(arg) = args.next() {
        if arg == "--lang" {
            if let Some(value) = args.next() {
                found = Some(value);
            }
        } else if let Some(value) = arg.strip_prefix("--lang=") {
            found = Some(value.to_string());
        }
    }
    found
}

fn config_arg(locale: &str) -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("cli.arg_config", locale = locale).to_string())
        .value_name("CONFIG")
        .default_value(DEFAULT_CONFIG_FILE)
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("suite-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cli.cmd_run_about", locale = locale).to_string())
                .arg(config_arg(locale))
                .arg(
                    Arg::new("suites-dir")
                        .short('d')
                        .long("suites-dir")
                        .help(t!("cli.arg_suites_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .help(t!("cli.arg_suffix", locale = locale).to_string())
                        .value_name("SUFFIX")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("command")
                        .long("command")
                        .help(t!("cli.arg_command", locale = locale).to_string())
                        .value_name("COMMAND")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("jobs")
                        .short('j')
                        .long("jobs")
                        .help(t!("cli.arg_jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("reporter")
                        .short('r')
                        .long("reporter")
                        .help(t!("cli.arg_reporter", locale = locale).to_string())
                        .value_name("REPORTER")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("report-dir")
                        .long("report-dir")
                        .help(t!("cli.arg_report_dir", locale = locale).to_string())
                        .value_name("REPORT_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about", locale = locale).to_string())
                .arg(config_arg(locale))
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn run_args(matches: &ArgMatches) -> RunArgs {
    let config = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config_explicit = matches.value_source("config") == Some(ValueSource::CommandLine);

    RunArgs {
        config,
        config_explicit,
        overrides: ConfigOverrides {
            suites_dir: matches.get_one::<PathBuf>("suites-dir").cloned(),
            suffix: matches.get_one::<String>("suffix").cloned(),
            command: matches.get_one::<String>("command").cloned(),
            jobs: matches.get_one::<usize>("jobs").copied(),
            reporter: matches.get_one::<String>("reporter").cloned(),
            report_dir: matches.get_one::<PathBuf>("report-dir").cloned(),
        },
    }
}

/// Parses the command line and dispatches to a subcommand.
/// Running without a subcommand is the same as `run` with every default.
pub async fn run() -> Result<ExitStatus> {
    // Pre-parse language and initialize i18n first.
    let requested_language = pre_parse_language();
    let language = match &requested_language {
        Some(lang) => resolve_locale(lang),
        None => resolve_locale(&sys_locale::get_locale().unwrap_or_else(|| "en".to_string())),
    };
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let language_forced = requested_language.is_some();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(run_args(run_matches), &language, language_forced).await
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let config = init_matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            commands::init::run_init_wizard(&config, &language, non_interactive)?;
            Ok(ExitStatus::Success)
        }
        _ => commands::run::execute(RunArgs::default(), &language, language_forced).await,
    }
}
