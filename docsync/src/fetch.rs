//! Retrieval of the raw documentation page.

use docsync_core::{DocsyncError, Result, SourceConfig};
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Request timeout for the documentation page.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the page from `input` when given, otherwise downloads it from the
/// configured URL.
pub fn load_document(input: Option<&Path>, source: &SourceConfig) -> Result<String> {
    match input {
        Some(path) => {
            info!("Reading documentation from {:?}", path);
            Ok(std::fs::read_to_string(path)?)
        }
        None => fetch_document(&source.url),
    }
}

/// One blocking GET. Non-success statuses count as failures.
pub fn fetch_document(raw_url: &str) -> Result<String> {
    let url = parse_url(raw_url)?;
    info!("Fetching documentation from {}", url);

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(format!("docsync@{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DocsyncError::fetch(url.as_str(), e.to_string()))?;

    let response = client
        .get(url.clone())
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|e| DocsyncError::fetch(url.as_str(), e.to_string()))?;

    let body = response
        .text()
        .map_err(|e| DocsyncError::fetch(url.as_str(), e.to_string()))?;
    debug!(bytes = body.len(), "Downloaded documentation page");
    Ok(body)
}

fn parse_url(raw_url: &str) -> Result<Url> {
    let url = Url::parse(raw_url).map_err(|e| DocsyncError::fetch(raw_url, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(DocsyncError::fetch(
            raw_url,
            format!("unsupported scheme `{}`", scheme),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_url_accepts_http_and_https() {
        assert!(parse_url("https://core.telegram.org/bots/api").is_ok());
        assert!(parse_url("http://localhost:8080/api.html").is_ok());
    }

    #[test]
    fn test_parse_url_rejects_other_schemes() {
        let err = parse_url("file:///tmp/api.html").unwrap_err();
        assert!(matches!(err, DocsyncError::Fetch { ref message, .. } if message.contains("file")));
    }

    #[test]
    fn test_malformed_url_is_fetch_error() {
        let err = fetch_document("not a url").unwrap_err();
        assert!(matches!(err, DocsyncError::Fetch { ref url, .. } if url == "not a url"));
    }

    #[test]
    fn test_local_input_skips_network() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<div id=\"dev_page_content\"></div>").unwrap();

        let source = SourceConfig {
            url: "https://invalid.example/never-fetched".to_string(),
            ..SourceConfig::default()
        };
        let html = load_document(Some(file.path()), &source).unwrap();
        assert_eq!(html, "<div id=\"dev_page_content\"></div>");
    }

    #[test]
    fn test_missing_local_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(Some(&dir.path().join("absent.html")), &SourceConfig::default()).unwrap_err();
        assert!(matches!(err, DocsyncError::Io(_)));
    }
}
