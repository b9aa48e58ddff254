//! # TAP Parser Module / TAP 解析模块
//!
//! Parses the Test Anything Protocol stream an interpreter prints for one suite.
//! Only the parts needed to count cases are understood: test points, plans,
//! `Bail out!` and the `# SKIP` / `# TODO` directives. Everything else (YAML
//! diagnostics, comments, `TAP version` headers) is ignored.
//!
//! 解析解释器为一个套件输出的 TAP 流。仅识别统计用例所需的部分：
//! 测试点、计划行、`Bail out!` 以及 `# SKIP` / `# TODO` 指令，其余内容一律忽略。

use crate::core::models::{CaseOutcome, CaseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Skip,
    Todo,
}

/// One `ok` / `not ok` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPoint {
    pub ok: bool,
    pub number: Option<u64>,
    pub description: String,
    pub directive: Option<Directive>,
    /// Leading whitespace width; subtests are indented deeper than their parent.
    pub depth: usize,
}

impl TestPoint {
    pub fn outcome(&self) -> CaseOutcome {
        match (self.directive, self.ok) {
            (Some(Directive::Skip), _) => CaseOutcome::Skipped,
            (Some(Directive::Todo), _) => CaseOutcome::Todo,
            (None, true) => CaseOutcome::Passed,
            (None, false) => CaseOutcome::Failed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TapReport {
    pub points: Vec<TestPoint>,
    /// The top-level plan `1..N`, if one was printed.
    pub plan: Option<u64>,
    pub bailed_out: bool,
}

impl TapReport {
    /// Test points that have no subtests of their own.
    ///
    /// In TAP 13 subtests are printed before the line that summarizes them, so a
    /// point is a parent exactly when the point right before it is indented deeper.
    pub fn leaf_points(&self) -> impl Iterator<Item = &TestPoint> {
        self.points.iter().enumerate().filter_map(|(i, point)| {
            let is_parent = i > 0 && self.points[i - 1].depth > point.depth;
            (!is_parent).then_some(point)
        })
    }

    pub fn failed_count(&self) -> usize {
        self.leaf_points()
            .filter(|p| p.outcome() == CaseOutcome::Failed)
            .count()
    }

    pub fn cases(&self) -> Vec<CaseResult> {
        self.leaf_points()
            .map(|p| CaseResult {
                name: if p.description.is_empty() {
                    format!("#{}", p.number.unwrap_or_default())
                } else {
                    p.description.clone()
                },
                outcome: p.outcome(),
            })
            .collect()
    }
}

/// Parses the full output of one interpreter process.
///
/// A YAML diagnostic block (an indented `---` right after a test point, closed
/// by `...` at the same indentation) is skipped as a whole, so error messages
/// quoted inside it are never read as test points.
///
/// 紧随测试点之后的 YAML 诊断块会被整体跳过，其中引用的错误信息不会被当作测试点。
pub fn parse(output: &str) -> TapReport {
    let mut report = TapReport::default();
    // Indentation of the open YAML block's `---` marker.
    let mut yaml_depth: Option<usize> = None;
    let mut after_point: Option<usize> = None;

    for line in output.lines() {
        let trimmed = line.trim_start();
        let depth = line.len() - trimmed.len();
        let trimmed = trimmed.trim_end();

        if let Some(open) = yaml_depth {
            if trimmed == "..." && depth == open {
                yaml_depth = None;
                continue;
            }
            // An unterminated block ends at the first line indented less than its marker.
            if trimmed.is_empty() || depth >= open {
                continue;
            }
            yaml_depth = None;
        }

        if trimmed == "---" && after_point.is_some_and(|point_depth| depth > point_depth) {
            yaml_depth = Some(depth);
            after_point = None;
            continue;
        }

        if let Some(point) = parse_test_point(trimmed, depth) {
            after_point = Some(depth);
            report.points.push(point);
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }
        after_point = None;

        if trimmed.starts_with("Bail out!") {
            report.bailed_out = true;
        } else if depth == 0 {
            if let Some(count) = parse_plan(trimmed) {
                report.plan = Some(count);
            }
        }
    }

    report
}

fn parse_test_point(line: &str, depth: usize) -> Option<TestPoint> {
    let (ok, rest) = if let Some(rest) = line.strip_prefix("not ok") {
        (false, rest)
    } else if let Some(rest) = line.strip_prefix("ok") {
        (true, rest)
    } else {
        return None;
    };

    // "okay" or "nothing" are not test points.
    if !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
        return None;
    }

    let rest = rest.trim_start();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let number = rest[..digits_end].parse().ok();
    let rest = rest[digits_end..].trim_start();
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    let (description, directive) = match find_directive_start(rest) {
        Some(idx) => (&rest[..idx], parse_directive(&rest[idx + 1..])),
        None => (rest, None),
    };

    Some(TestPoint {
        ok,
        number,
        description: description.trim().replace("\\#", "#"),
        directive,
        depth,
    })
}

/// Position of the first `#` that is not escaped with a backslash.
fn find_directive_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&i| bytes[i] == b'#' && (i == 0 || bytes[i - 1] != b'\\'))
}

fn parse_directive(text: &str) -> Option<Directive> {
    let word = text.trim_start().get(..4)?.to_ascii_uppercase();
    match word.as_str() {
        "SKIP" => Some(Directive::Skip),
        "TODO" => Some(Directive::Todo),
        _ => None,
    }
}

fn parse_plan(line: &str) -> Option<u64> {
    let rest = line.strip_prefix("1..")?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse().ok()
}
