//! # Reporting Module / 报告模块
//!
//! Reporters render a finished [`RunSummary`] into a human or CI readable
//! artifact. They are selected by name from the configuration; the console
//! summary is printed for every run regardless of the reporter chosen.
//!
//! 报告器把完成的运行摘要渲染为人或 CI 可读的产物，按配置中的名称选择。
//! 无论选择哪个报告器，每次运行都会打印控制台摘要。

pub mod console;
pub mod html;
pub mod json;

use anyhow::Result;
use std::path::PathBuf;

use crate::core::{config::ReporterConfig, models::RunSummary};
use crate::error::SetupError;

// Re-export common reporting functions
pub use console::{SpecReporter, print_failure_details, print_summary};
pub use html::{HtmlReporter, render_html_report};
pub use json::JsonReporter;

/// Names accepted by [`reporter_for`].
pub const AVAILABLE_REPORTERS: [&str; 3] = ["spec", "html", "json"];

pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Renders `summary`.
    ///
    /// # Returns
    /// The path of the written artifact, or `None` for console-only reporters.
    fn report(
        &self,
        summary: &RunSummary,
        options: &ReporterConfig,
        locale: &str,
    ) -> Result<Option<PathBuf>>;
}

/// Looks up a reporter by name.
///
/// # Errors
/// [`SetupError::UnknownReporter`] for a name outside [`AVAILABLE_REPORTERS`].
pub fn reporter_for(name: &str) -> Result<Box<dyn Reporter>, SetupError> {
    match name {
        "spec" => Ok(Box::new(SpecReporter)),
        "html" => Ok(Box::new(HtmlReporter)),
        "json" => Ok(Box::new(JsonReporter)),
        other => Err(SetupError::UnknownReporter {
            name: other.to_string(),
            available: AVAILABLE_REPORTERS.join(", "),
        }),
    }
}
