//! # seo_page_audit
//!
//! A single-page SEO and technical audit. One URL is fetched and its raw
//! markup is run through a fixed pipeline of heuristic checks:
//! - **HTTPS**: the URL uses the `https` scheme
//! - **Performance**: the full page is read in under 2.5 seconds
//! - **Title**: the first `<title>` is 10 to 70 characters long
//! - **Meta description**: the first description is 50 to 160 characters long
//! - **Headings**: the page has exactly one `<h1>`
//! - **Image alt**: every `<img>` carries alt text
//! - **Viewport**: a `<meta name="viewport">` tag is present
//!
//! ## Quick Start
//!
//! ```no_run
//! use seo_page_audit::{audit_url, render_text, AuditConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = AuditConfig::default();
//! let report = audit_url("https://example.com", &config).await?;
//!
//! print!("{}", render_text(&report));
//! # Ok(())
//! # }
//! ```
//!
//! Checks work on text, so they can also be run against markup obtained
//! some other way:
//!
//! ```
//! use seo_page_audit::{audit_fetched, FetchResult};
//!
//! let fetched = FetchResult {
//!     body: "<title>Example Domain</title><h1>Hi</h1>".to_string(),
//!     elapsed_seconds: 0.3,
//! };
//! let report = audit_fetched("https://example.com", &fetched);
//! assert_eq!(report.summary.score, 71);
//! ```

mod audit;
mod checks;
mod config;
mod error;
mod fetch;
mod report;
mod scoring;
mod types;

// Re-export public API
pub use audit::{audit_fetched, audit_url, parse_target};
pub use checks::{
    check_headings, check_https, check_images_alt, check_meta_description, check_performance,
    check_title, check_viewport, run_check, run_checks, MAX_RESPONSE_SECS,
    META_DESCRIPTION_LENGTH, TITLE_LENGTH,
};
pub use config::{
    AuditConfig, AuditConfigBuilder, NetworkConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use error::{AuditError, Result};
pub use fetch::fetch_page;
pub use report::{render, render_json, render_markdown, render_text, ReportFormat};
pub use scoring::{calculate_score, render_bar, score_verdicts, BAR_WIDTH};
pub use types::{
    AuditReport, CheckKind, CheckVerdict, FetchResult, ScoreSummary, FAIL_GLYPH, PASS_GLYPH,
};
