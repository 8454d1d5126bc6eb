//! Core data types for page audit reporting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Glyph printed in front of a passing check
pub const PASS_GLYPH: char = '✔';
/// Glyph printed in front of a failing check
pub const FAIL_GLYPH: char = '✖';

/// Markup and timing captured by a single fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    /// Response body, decoded lossily as UTF-8
    pub body: String,
    /// Wall-clock seconds from request start to full body read
    pub elapsed_seconds: f64,
}

/// The checks of the pipeline, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Https,
    Performance,
    Title,
    MetaDescription,
    Headings,
    ImageAlt,
    Viewport,
}

impl CheckKind {
    /// Every check, in the order the pipeline runs them
    pub const ALL: [CheckKind; 7] = [
        CheckKind::Https,
        CheckKind::Performance,
        CheckKind::Title,
        CheckKind::MetaDescription,
        CheckKind::Headings,
        CheckKind::ImageAlt,
        CheckKind::Viewport,
    ];
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Https => write!(f, "HTTPS"),
            Self::Performance => write!(f, "Performance"),
            Self::Title => write!(f, "Title"),
            Self::MetaDescription => write!(f, "Meta description"),
            Self::Headings => write!(f, "Headings"),
            Self::ImageAlt => write!(f, "Image alt"),
            Self::Viewport => write!(f, "Viewport"),
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckVerdict {
    /// Which check produced this verdict
    pub check: CheckKind,
    /// Whether the pass condition held
    pub passed: bool,
    /// Human-readable detail, without the status glyph
    pub message: String,
}

impl CheckVerdict {
    pub fn new(check: CheckKind, passed: bool, message: impl Into<String>) -> Self {
        Self {
            check,
            passed,
            message: message.into(),
        }
    }

    pub fn glyph(&self) -> char {
        if self.passed {
            PASS_GLYPH
        } else {
            FAIL_GLYPH
        }
    }
}

impl std::fmt::Display for CheckVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.message)
    }
}

/// Pass count, percentage and bar derived from a list of verdicts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub passed_count: usize,
    pub total_count: usize,
    /// Truncated percentage of passing checks (0-100)
    pub score: u8,
    /// 20-glyph progress bar
    pub bar: String,
}

/// Complete audit report for one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Audited URL, as given
    pub target: String,
    /// Timestamp when the audit was performed
    pub timestamp: DateTime<Utc>,
    /// Seconds spent fetching the page
    pub elapsed_seconds: f64,
    /// Verdicts in pipeline order
    pub verdicts: Vec<CheckVerdict>,
    /// Score derived from `verdicts`
    pub summary: ScoreSummary,
}

impl AuditReport {
    /// Verdicts that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &CheckVerdict> {
        self.verdicts.iter().filter(|v| !v.passed)
    }

    pub fn verdict(&self, check: CheckKind) -> Option<&CheckVerdict> {
        self.verdicts.iter().find(|v| v.check == check)
    }
}
