//! Console rendering. Deterministic, unit-testable formatting functions;
//! printing is separated out so CI tooling can capture the text.

use crate::model::{AssetReport, Verdict};

fn verdict_tag(verdict: &Verdict) -> &'static str {
    if !verdict.passed {
        "FAIL"
    } else if verdict.is_warning {
        "WARN"
    } else {
        "PASS"
    }
}

/// Format one asset report as indented per-rule lines plus a summary line.
#[must_use]
pub fn render_report(report: &AssetReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} ({})\n",
        if report.passed { "PASS" } else { "FAIL" },
        report.name,
        report.preview_url
    ));
    for outcome in &report.results {
        out.push_str(&format!(
            "  [{}] {}: {}\n",
            verdict_tag(&outcome.verdict),
            outcome.rule_name,
            outcome.verdict.message
        ));
    }
    out.push_str(&format!(
        "  {} rule(s), {} failed, {} warning(s)\n",
        report.results.len(),
        report.failed_count,
        report.warning_count
    ));
    out
}

/// Format a whole batch: every report followed by a one-line footer.
#[must_use]
pub fn render_batch(reports: &[AssetReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&render_report(report));
    }
    let passed = reports.iter().filter(|r| r.passed).count();
    out.push_str(&format!(
        "{} asset(s): {} passed, {} failed\n",
        reports.len(),
        passed,
        reports.len() - passed
    ));
    out
}

/// Write the rendered batch to stdout.
pub fn print_batch(reports: &[AssetReport]) {
    print!("{}", render_batch(reports));
}
