//! Fetch the audited page

use crate::config::NetworkConfig;
use crate::error::{AuditError, Result};
use crate::types::FetchResult;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info};

/// Fetch `url` once and measure how long it took to read the whole body.
///
/// Non-success statuses are treated as failures. The body is decoded as
/// UTF-8 with invalid sequences replaced, so an oddly encoded page is still
/// audited. There are no retries.
pub async fn fetch_page(url: &str, config: &NetworkConfig) -> Result<FetchResult> {
    debug!("Fetching {} (timeout {:?})", url, config.timeout());

    let client = build_client(config)?;
    let start = Instant::now();

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| AuditError::fetch(url, e))?;

    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AuditError::fetch(url, e))?;
    let elapsed_seconds = start.elapsed().as_secs_f64();

    let body = String::from_utf8_lossy(&bytes).into_owned();

    info!(
        "Fetched {} ({}, {} bytes) in {:.3}s",
        url,
        status,
        bytes.len(),
        elapsed_seconds
    );

    Ok(FetchResult {
        body,
        elapsed_seconds,
    })
}

/// Build HTTP client with proper configuration
fn build_client(config: &NetworkConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .build()
        .map_err(|e| AuditError::config(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "Mozilla/5.0")
            .with_status(200)
            .with_body("<title>Hello</title>")
            .create_async()
            .await;

        let fetched = fetch_page(&server.url(), &NetworkConfig::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(fetched.body, "<title>Hello</title>");
        assert!(fetched.elapsed_seconds >= 0.0);
        assert!(fetched.elapsed_seconds < 10.0);
    }

    #[tokio::test]
    async fn test_fetch_decodes_invalid_utf8_lossily() {
        let mut server = mockito::Server::new_async().await;
        let mut body = b"<h1>caf".to_vec();
        body.extend_from_slice(&[0xff, 0xfe]);
        body.extend_from_slice(b"</h1>");
        let _mock = server
            .mock("GET", "/broken")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let url = format!("{}/broken", server.url());
        let fetched = fetch_page(&url, &NetworkConfig::default()).await.unwrap();

        assert!(fetched.body.starts_with("<h1>caf"));
        assert!(fetched.body.contains('\u{FFFD}'));
        assert!(fetched.body.ends_with("</h1>"));
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/missing", server.url());
        let err = fetch_page(&url, &NetworkConfig::default())
            .await
            .unwrap_err();

        assert!(err.is_fatal_fetch());
        assert!(err.to_string().contains(&url));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/", port);

        let err = fetch_page(&url, &NetworkConfig::default())
            .await
            .unwrap_err();

        match err {
            AuditError::FetchFailure { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("expected fetch failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/slow")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(2500));
                w.write_all(b"<title>too late</title>")
            })
            .create_async()
            .await;

        let config = NetworkConfig {
            timeout_secs: 1,
            ..NetworkConfig::default()
        };
        let url = format!("{}/slow", server.url());
        let err = fetch_page(&url, &config).await.unwrap_err();

        assert!(err.is_fatal_fetch());
        assert!(err.to_string().contains(&url));
    }

    #[tokio::test]
    async fn test_fetch_elapsed_includes_body_read() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/trickle")
            .with_status(200)
            .with_chunked_body(|w| {
                w.write_all(b"<html><head>")?;
                w.flush()?;
                std::thread::sleep(Duration::from_millis(1200));
                w.write_all(b"<title>late body</title></head></html>")
            })
            .create_async()
            .await;

        let url = format!("{}/trickle", server.url());
        let fetched = fetch_page(&url, &NetworkConfig::default()).await.unwrap();

        assert!(fetched.elapsed_seconds >= 1.2);
        assert!(fetched.body.ends_with("</html>"));
    }
}
