//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for the run data structures, the suite registry and the exit status
//! mapping.
//!
//! 运行数据结构、套件注册表以及退出状态映射的测试。

use chrono::Local;
use std::path::PathBuf;
use std::time::Duration;
use suite_runner::core::engine::SuiteRegistry;
use suite_runner::core::models::{
    CaseOutcome, CaseResult, ExitStatus, RunSummary, SuiteFile, SuiteResult,
};
use suite_runner::error::SetupError;
use suite_runner::runner::map_exit_status;

/// Helper function to create a suite result / 创建套件结果的辅助函数
fn suite_result(name: &str, outcomes: &[CaseOutcome], failures: u64) -> SuiteResult {
    SuiteResult {
        suite: SuiteFile::new(PathBuf::from("suites").join(name)),
        cases: outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| CaseResult {
                name: format!("case {}", i + 1),
                outcome: *outcome,
            })
            .collect(),
        failures,
        exit_code: Some(if failures > 0 { 1 } else { 0 }),
        output: String::new(),
        duration: Duration::from_millis(10),
    }
}

#[cfg(test)]
mod exit_status_tests {
    use super::*;

    #[test]
    fn test_zero_failures_is_success() {
        assert_eq!(map_exit_status(0, 1), ExitStatus::Success);
        assert_eq!(map_exit_status(0, 1).code(), 0);
    }

    #[test]
    fn test_any_failure_is_non_zero() {
        for failures in [1, 2, 17, u64::MAX] {
            let status = map_exit_status(failures, 1);
            assert_eq!(status, ExitStatus::TestsFailed(1));
            assert_ne!(status.code(), 0);
        }
    }

    #[test]
    fn test_mapping_is_idempotent() {
        assert_eq!(map_exit_status(3, 1), map_exit_status(3, 1));
        assert_eq!(map_exit_status(0, 1), map_exit_status(0, 1));
    }

    #[test]
    fn test_configured_failure_code_is_used() {
        assert_eq!(map_exit_status(1, 255).code(), 255);
    }
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn test_failures_are_summed_across_suites() {
        let summary = RunSummary::new(
            Local::now(),
            Duration::from_secs(1),
            vec![
                suite_result("a.js", &[CaseOutcome::Passed, CaseOutcome::Failed], 1),
                suite_result("b.js", &[CaseOutcome::Failed, CaseOutcome::Failed], 2),
                suite_result("c.js", &[CaseOutcome::Passed, CaseOutcome::Skipped], 0),
            ],
        );

        assert_eq!(summary.failures, 3);
        assert_eq!(summary.total_cases(), 6);
        assert_eq!(summary.count(CaseOutcome::Passed), 2);
        assert_eq!(summary.count(CaseOutcome::Skipped), 1);
        assert_eq!(summary.failed_suites().count(), 2);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_empty_summary_is_success() {
        let summary = RunSummary::empty(Local::now());
        assert_eq!(summary.failures, 0);
        assert!(summary.suites.is_empty());
        assert!(summary.is_success());
    }

    #[test]
    fn test_suite_status_class() {
        assert_eq!(
            suite_result("a.js", &[CaseOutcome::Passed], 0).get_status_class(),
            "status-Passed"
        );
        assert_eq!(
            suite_result("b.js", &[CaseOutcome::Failed], 1).get_status_class(),
            "status-Failed"
        );
        assert_eq!(
            suite_result("c.js", &[CaseOutcome::Skipped], 0).get_status_class(),
            "status-Skipped"
        );
        assert_eq!(suite_result("d.js", &[], 1).get_status_class(), "status-Failed");
    }

    #[test]
    fn test_suite_file_name() {
        let suite = SuiteFile::new(PathBuf::from("suites/login.js"));
        assert_eq!(suite.name, "login.js");
        assert_eq!(suite.path, PathBuf::from("suites/login.js"));
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_registration_keeps_order() {
        let mut registry = SuiteRegistry::new();
        registry.register(PathBuf::from("suites/b.js")).unwrap();
        registry.register(PathBuf::from("suites/a.js")).unwrap();

        let names: Vec<_> = registry.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b.js", "a.js"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = SuiteRegistry::new();
        registry.register(PathBuf::from("suites/a.js")).unwrap();

        let err = registry.register(PathBuf::from("suites/a.js")).unwrap_err();
        assert!(matches!(err, SetupError::DuplicateSuite(_)));
        assert_eq!(registry.len(), 1);
    }
}
