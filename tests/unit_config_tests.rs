//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for `RunnerConfig` defaults, TOML parsing, overrides and validation.
//!
//! `RunnerConfig` 默认值、TOML 解析、覆盖与校验的测试。

mod common;

use std::path::{Path, PathBuf};
use suite_runner::config::{ConfigOverrides, RunnerConfig};
use suite_runner::error::SetupError;

#[cfg(test)]
mod defaults_tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = RunnerConfig::default();

        assert_eq!(config.language, None);
        assert_eq!(config.suites_dir, PathBuf::from("suites"));
        assert_eq!(config.suffix, ".js");
        assert_eq!(config.command, "node --test --test-reporter=tap");
        assert_eq!(config.jobs, 1);
        assert_eq!(config.failure_exit_code, 1);
        assert_eq!(config.reporter.name, "html");
        assert_eq!(config.reporter.report_dir, PathBuf::from("/report"));
        assert_eq!(config.reporter.report_filename, "suite-report");
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = RunnerConfig::from_toml_str("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&RunnerConfig::default()).unwrap();
        assert!(!text.contains("language"));

        let parsed = RunnerConfig::from_toml_str(&text, Path::new("default.toml")).unwrap();
        assert_eq!(parsed, RunnerConfig::default());
    }
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_str = r#"
            language = "zh-CN"
            suites_dir = "e2e/suites"
            suffix = ".spec.js"
            command = "deno test --reporter=tap"
            jobs = 4
            failure_exit_code = 255

            [reporter]
            name = "json"
            report_dir = "out"
            report_filename = "results"
        "#;

        let config = RunnerConfig::from_toml_str(toml_str, Path::new("full.toml")).unwrap();

        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.suites_dir, PathBuf::from("e2e/suites"));
        assert_eq!(config.suffix, ".spec.js");
        assert_eq!(config.jobs, 4);
        assert_eq!(config.failure_exit_code, 255);
        assert_eq!(config.reporter.name, "json");
        assert_eq!(config.reporter.report_dir, PathBuf::from("out"));
        assert_eq!(config.reporter.report_filename, "results");
    }

    #[test]
    fn test_partial_reporter_table_keeps_other_defaults() {
        let config = RunnerConfig::from_toml_str(
            "[reporter]\nname = \"spec\"\n",
            Path::new("partial.toml"),
        )
        .unwrap();

        assert_eq!(config.reporter.name, "spec");
        assert_eq!(config.reporter.report_dir, PathBuf::from("/report"));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = RunnerConfig::from_toml_str("suites_dir = [", Path::new("broken.toml"))
            .unwrap_err();
        match err {
            SetupError::Config { path, .. } => assert_eq!(path, PathBuf::from("broken.toml")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        for bad in [
            "failure_exit_code = 0",
            "jobs = 0",
            "suffix = \"\"",
            "command = \"   \"",
        ] {
            let result = RunnerConfig::from_toml_str(bad, Path::new("bad.toml"));
            assert!(
                matches!(result, Err(SetupError::Config { .. })),
                "`{bad}` should be rejected"
            );
        }
    }
}

#[cfg(test)]
mod loading_tests {
    use super::*;

    #[test]
    fn test_missing_default_file_yields_defaults() {
        let workspace = common::setup_workspace();
        let config = RunnerConfig::load(&workspace.path().join("SuiteRunner.toml"), false).unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let workspace = common::setup_workspace();
        let result = RunnerConfig::load(&workspace.path().join("custom.toml"), true);
        assert!(matches!(result, Err(SetupError::Config { .. })));
    }

    #[test]
    fn test_load_reads_file() {
        let workspace = common::setup_workspace();
        let path = common::write_config(&workspace, "SuiteRunner.toml", "suffix = \".sh\"\n");

        let config = RunnerConfig::load(&path, false).unwrap();
        assert_eq!(config.suffix, ".sh");
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = RunnerConfig::from_toml_str(
            "suites_dir = \"e2e\"\njobs = 2\n[reporter]\nname = \"json\"\n",
            Path::new("x.toml"),
        )
        .unwrap()
        .apply(ConfigOverrides {
            reporter: Some("spec".to_string()),
            report_dir: Some(PathBuf::from("reports")),
            ..Default::default()
        });

        assert_eq!(config.suites_dir, PathBuf::from("e2e"));
        assert_eq!(config.jobs, 2);
        assert_eq!(config.reporter.name, "spec");
        assert_eq!(config.reporter.report_dir, PathBuf::from("reports"));
    }
}
