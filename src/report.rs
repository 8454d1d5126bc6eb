//! Rendering of audit reports

use crate::error::Result;
use crate::types::AuditReport;

/// Output format for a rendered report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render a report in the requested format
pub fn render(report: &AuditReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
        ReportFormat::Markdown => Ok(render_markdown(report)),
    }
}

/// Console report: header line, score bar, then one line per check
pub fn render_text(report: &AuditReport) -> String {
    let summary = &report.summary;
    let mut out = String::from("\n");

    out.push_str(&format!(
        "Audit of {} - {}/{} OK - Score: {}/100\n",
        report.target, summary.passed_count, summary.total_count, summary.score
    ));
    out.push_str(&format!("{}\n\n", summary.bar));
    for verdict in &report.verdicts {
        out.push_str(&format!("{}\n", verdict));
    }
    out.push('\n');

    out
}

pub fn render_json(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_markdown(report: &AuditReport) -> String {
    let summary = &report.summary;
    let mut md = String::new();

    md.push_str(&format!("# SEO Audit Report: {}\n\n", report.target));
    md.push_str(&format!("**Generated:** {}\n\n", report.timestamp));

    md.push_str("## Summary\n\n");
    md.push_str(&format!(
        "- Checks passed: {}/{}\n",
        summary.passed_count, summary.total_count
    ));
    md.push_str(&format!("- Score: {}/100\n", summary.score));
    md.push_str(&format!("- Response time: {:.2}s\n\n", report.elapsed_seconds));

    md.push_str("## Checks\n\n");
    md.push_str("| Check | Result | Details |\n");
    md.push_str("|-------|--------|---------|\n");

    for verdict in &report.verdicts {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            verdict.check,
            if verdict.passed { "pass" } else { "fail" },
            escape_cell(&verdict.message)
        ));
    }

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
