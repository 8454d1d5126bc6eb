//! Main audit orchestration logic

use crate::checks::run_checks;
use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::fetch::fetch_page;
use crate::scoring::score_verdicts;
use crate::types::{AuditReport, FetchResult};
use chrono::Utc;
use tracing::{debug, info};
use url::Url;

/// Trim a user-supplied URL and make sure it can be fetched at all
pub fn parse_target(input: &str) -> Result<String> {
    let target = input.trim();
    if target.is_empty() {
        return Err(AuditError::invalid_input("URL is empty"));
    }

    Url::parse(target).map_err(|e| AuditError::invalid_input(format!("{}: {}", target, e)))?;

    Ok(target.to_string())
}

/// Fetch a page, run every check and score the result
pub async fn audit_url(url: &str, config: &AuditConfig) -> Result<AuditReport> {
    let target = parse_target(url)?;
    config.validate()?;

    info!("Starting audit of {}", target);

    let fetched = fetch_page(&target, &config.network).await?;
    let report = audit_fetched(&target, &fetched);

    info!(
        "Audit complete: {}/{} checks passed, score {}/100",
        report.summary.passed_count, report.summary.total_count, report.summary.score
    );

    Ok(report)
}

/// Build a report from an already fetched page.
///
/// Verdicts and score depend only on `target` and `fetched`.
pub fn audit_fetched(target: &str, fetched: &FetchResult) -> AuditReport {
    let verdicts = run_checks(target, fetched);
    for verdict in &verdicts {
        debug!("{}: {}", verdict.check, verdict);
    }

    let summary = score_verdicts(&verdicts);

    AuditReport {
        target: target.to_string(),
        timestamp: Utc::now(),
        elapsed_seconds: fetched.elapsed_seconds,
        verdicts,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckKind;

    const EXAMPLE_HTML: &str =
        "<html><head><title>Example Domain</title></head><body><h1>Hi</h1></body></html>";

    #[test]
    fn test_parse_target_trims() {
        assert_eq!(
            parse_target("  https://example.com \n").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_parse_target_rejects_blank_and_relative() {
        assert!(matches!(parse_target(""), Err(AuditError::InvalidInput(_))));
        assert!(matches!(parse_target("   \t"), Err(AuditError::InvalidInput(_))));
        assert!(matches!(
            parse_target("example.com"),
            Err(AuditError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_audit_url_empty_input_never_fetches() {
        let result = tokio_test::block_on(audit_url("  ", &AuditConfig::default()));
        assert!(matches!(result, Err(AuditError::InvalidInput(_))));
    }

    #[test]
    fn test_audit_fetched_example_scenario() {
        let fetched = FetchResult {
            body: EXAMPLE_HTML.to_string(),
            elapsed_seconds: 0.3,
        };
        let report = audit_fetched("https://example.com", &fetched);

        assert_eq!(report.summary.passed_count, 5);
        assert_eq!(report.summary.total_count, 7);
        assert_eq!(report.summary.score, 71);
        assert!(!report.verdict(CheckKind::MetaDescription).unwrap().passed);
        assert!(!report.verdict(CheckKind::Viewport).unwrap().passed);
        assert_eq!(report.failures().count(), 2);
    }

    #[test]
    fn test_audit_fetched_is_idempotent() {
        let fetched = FetchResult {
            body: EXAMPLE_HTML.to_string(),
            elapsed_seconds: 2.7,
        };
        let first = audit_fetched("http://example.com", &fetched);
        let second = audit_fetched("http://example.com", &fetched);

        assert_eq!(first.verdicts, second.verdicts);
        assert_eq!(first.summary, second.summary);
    }

    #[tokio::test]
    async fn test_audit_url_against_local_server() {
        let mut server = mockito::Server::new_async().await;
        let description = "A".repeat(80);
        let body = format!(
            concat!(
                "<html><head><title>A well sized page title</title>",
                "<meta name=\"description\" content=\"{}\">",
                "<meta name=\"viewport\" content=\"width=device-width\">",
                "</head><body><h1>Welcome</h1><img src=\"a.png\" alt=\"logo\"></body></html>"
            ),
            description
        );
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let report = audit_url(&server.url(), &AuditConfig::default())
            .await
            .unwrap();

        // Everything but HTTPS passes against a plain-http local server.
        assert_eq!(report.summary.passed_count, 6);
        assert_eq!(report.summary.score, 85);
        assert!(!report.verdict(CheckKind::Https).unwrap().passed);
    }

    #[tokio::test]
    async fn test_audit_url_propagates_fetch_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let result = audit_url(&server.url(), &AuditConfig::default()).await;
        assert!(matches!(result, Err(AuditError::FetchFailure { .. })));
    }
}
