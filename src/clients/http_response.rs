//! HTTP response types for the marketplace SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

/// Pagination information parsed from the `Content-Range` header.
///
/// The marketplace API paginates collections with an offset/limit scheme
/// and reports the window in a `Content-Range` header of the form
/// `items first-last/count`.
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::clients::ContentRange;
///
/// let range = ContentRange::parse("items 0-9/100").unwrap();
/// assert_eq!(range.first, 0);
/// assert_eq!(range.last, 9);
/// assert_eq!(range.count, 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentRange {
    /// Zero-based index of the first item in this page.
    pub first: u64,
    /// Zero-based index of the last item in this page.
    pub last: u64,
    /// Total number of items matching the request.
    pub count: u64,
}

impl ContentRange {
    /// Parses a `Content-Range` header value.
    ///
    /// Returns `None` for anything that does not match
    /// `items first-last/count`.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let spec = header_value.trim().strip_prefix("items")?.trim_start();
        let (range, count) = spec.split_once('/')?;
        let (first, last) = range.split_once('-')?;

        Some(Self {
            first: first.trim().parse().ok()?,
            last: last.trim().parse().ok()?,
            count: count.trim().parse().ok()?,
        })
    }

    /// Offset of the page following this one.
    ///
    /// Returns `None` when this page already reaches the end of the
    /// collection.
    #[must_use]
    pub const fn next_offset(&self) -> Option<u64> {
        let next = self.last + 1;
        if next >= self.count {
            None
        } else {
            Some(next)
        }
    }
}

/// An HTTP response from the marketplace API.
///
/// Contains the response status code, headers, body, and the parsed
/// `Content-Range` pagination window when the API sent one.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Pagination window (from the `Content-Range` header).
    pub content_range: Option<ContentRange>,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// This constructor parses well-known headers automatically:
    /// - `Content-Range` -> `content_range`
    /// - `Retry-After` -> `retry_request_after`
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let content_range = headers
            .get("content-range")
            .and_then(|values| values.first())
            .and_then(|value| ContentRange::parse(value));

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            content_range,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok(), "Expected is_ok() to be false for {code}");
        }
    }

    #[test]
    fn test_content_range_parsing() {
        let range = ContentRange::parse("items 0-9/100").unwrap();
        assert_eq!(range.first, 0);
        assert_eq!(range.last, 9);
        assert_eq!(range.count, 100);

        let range = ContentRange::parse("items 90-99/100").unwrap();
        assert_eq!(range.first, 90);
        assert_eq!(range.last, 99);

        // Invalid formats
        assert!(ContentRange::parse("bytes 0-9/100").is_none());
        assert!(ContentRange::parse("items 0-9").is_none());
        assert!(ContentRange::parse("items abc-def/ghi").is_none());
        assert!(ContentRange::parse("").is_none());
    }

    #[test]
    fn test_content_range_next_offset() {
        let range = ContentRange::parse("items 0-9/100").unwrap();
        assert_eq!(range.next_offset(), Some(10));

        let range = ContentRange::parse("items 90-99/100").unwrap();
        assert_eq!(range.next_offset(), None);

        let range = ContentRange::parse("items 0-0/1").unwrap();
        assert_eq!(range.next_offset(), None);
    }

    #[test]
    fn test_content_range_header_parsed_into_response() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-range".to_string(),
            vec!["items 0-24/321".to_string()],
        );

        let response = HttpResponse::new(200, headers, json!([]));
        let range = response.content_range.unwrap();
        assert_eq!(range.first, 0);
        assert_eq!(range.last, 24);
        assert_eq!(range.count, 321);
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_body_returns_empty_json() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.body, json!({}));
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }
}
