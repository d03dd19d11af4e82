//! Target URL normalization and sanitization.
//!
//! Ensures consistent URL representation by normalizing hostnames, removing
//! fragments, and handling default ports.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a target URL to a canonical form.
///
/// Rules: only http/https schemes, lowercase host, default ports removed,
/// fragment stripped, query and path preserved as-is. Rejects dangerous
/// schemes such as `javascript:`, `data:`, and `file:`.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed or empty
/// input and [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S)
/// schemes.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple_https() {
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_normalize_uppercase_host() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_normalize_remove_default_https_port() {
        assert_eq!(
            normalize_url("https://example.com:443/path").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_normalize_keep_custom_port() {
        assert_eq!(
            normalize_url("http://example.com:8080/path").unwrap(),
            "http://example.com:8080/path"
        );
    }

    #[test]
    fn test_normalize_remove_fragment() {
        assert_eq!(
            normalize_url("https://example.com/page#section").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_normalize_preserve_query_params() {
        assert_eq!(
            normalize_url("https://example.com/search?q=rust&lang=en").unwrap(),
            "https://example.com/search?q=rust&lang=en"
        );
    }

    #[test]
    fn test_normalize_empty_string() {
        assert!(matches!(
            normalize_url("").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_normalize_no_protocol() {
        assert!(matches!(
            normalize_url("example.com").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_normalize_javascript_protocol() {
        assert!(matches!(
            normalize_url("javascript:alert('xss')").unwrap_err(),
            UrlNormalizationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_normalize_file_protocol() {
        assert!(matches!(
            normalize_url("file:///etc/passwd").unwrap_err(),
            UrlNormalizationError::UnsupportedProtocol
        ));
    }
}
