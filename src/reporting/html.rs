//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML run reports.
//! It creates a self-contained styled HTML file with run statistics, a table of
//! suites, and expandable per-suite case lists and interpreter output.
//!
//! 此模块处理 HTML 运行报告的生成。
//! 它创建一个自包含的样式化 HTML 文件，包含运行统计、套件表格，
//! 以及可展开的用例列表和解释器输出。

use anyhow::Result;
use std::path::PathBuf;

use crate::core::config::ReporterConfig;
use crate::core::models::{CaseOutcome, RunSummary, SuiteResult};
use crate::infra::{fs::write_artifact, t};
use crate::reporting::Reporter;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Writes `<report_dir>/<report_filename>.html`.
pub struct HtmlReporter;

impl Reporter for HtmlReporter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn report(
        &self,
        summary: &RunSummary,
        options: &ReporterConfig,
        locale: &str,
    ) -> Result<Option<PathBuf>> {
        let file_name = format!("{}.html", options.report_filename);
        let html = render_html_report(summary, locale);
        write_artifact(&options.report_dir, &file_name, &html).map(Some)
    }
}

/// Renders the complete HTML document for `summary`.
pub fn render_html_report(summary: &RunSummary, locale: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));
    html.push_str(&format!(
        "<p class='run-meta'>{}</p>",
        t!(
            "html_report.started_at",
            locale = locale,
            time = summary.started_at.format("%Y-%m-%d %H:%M:%S"),
            duration = format!("{:.2}", summary.duration.as_secs_f64())
        )
    ));

    // Add summary statistics
    let stats = [
        (
            summary.suites.len(),
            "",
            t!("html_report.summary.suites", locale = locale),
        ),
        (
            summary.total_cases(),
            "",
            t!("html_report.summary.tests", locale = locale),
        ),
        (
            summary.count(CaseOutcome::Passed),
            "passed-text",
            t!("html_report.summary.passed", locale = locale),
        ),
        (
            summary.failures as usize,
            "failed-text",
            t!("html_report.summary.failed", locale = locale),
        ),
        (
            summary.count(CaseOutcome::Skipped),
            "skipped-text",
            t!("html_report.summary.skipped", locale = locale),
        ),
    ];
    html.push_str("<div class='summary-container'>");
    for (count, class, label) in stats {
        html.push_str(&format!(
            "<div class='summary-item'><span class='count {}'>{}</span><span class='label'>{}</span></div>",
            class, count, label
        ));
    }
    html.push_str("</div>");

    // Add results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.suite", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='count-cell'>{}</th>",
        t!("html_report.table.header.cases", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='count-cell'>{}</th>",
        t!("html_report.table.header.failures", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='duration-cell'>{}</th>",
        t!("html_report.table.header.duration", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for (i, result) in summary.suites.iter().enumerate() {
        let details_id = format!("details-{}", i);
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", escape_html(&result.suite.name)));
        html.push_str(&format!(
            "<td class='status-col'><div class='status-cell {}'>{}</div><div class='output-toggle' onclick=\"toggleOutput('{}')\">{}</div></td>",
            result.get_status_class(),
            result.get_status_str(locale),
            details_id,
            t!("html_report.toggle_details", locale = locale)
        ));
        html.push_str(&format!("<td class='count-cell'>{}</td>", result.cases.len()));
        html.push_str(&format!("<td class='count-cell'>{}</td>", result.failures));
        html.push_str(&format!(
            "<td class='duration-cell'>{:.2}s</td>",
            result.duration.as_secs_f64()
        ));
        html.push_str("</tr>");
        html.push_str(&render_details_row(result, &details_id));
    }

    html.push_str("</tbody></table>");
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");
    html
}

/// The hidden row holding a suite's case list and raw interpreter output.
fn render_details_row(result: &SuiteResult, details_id: &str) -> String {
    let mut cases = String::from("<ul class='case-list'>");
    for case in &result.cases {
        let class = match case.outcome {
            CaseOutcome::Passed => "case-passed",
            CaseOutcome::Failed => "case-failed",
            CaseOutcome::Skipped => "case-skipped",
            CaseOutcome::Todo => "case-todo",
        };
        cases.push_str(&format!("<li class='{}'>{}</li>", class, escape_html(&case.name)));
    }
    cases.push_str("</ul>");

    format!(
        "<tr id='{}' style='display:none;'><td colspan='5'>{}<pre class='output-content'>{}</pre></td></tr>",
        details_id,
        cases,
        escape_html(&result.output)
    )
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
