//! Common types shared across GLPI API operations.
//!
//! This module defines the response envelope returned by every operation,
//! the pagination range parsed from the `Content-Range` header, and the
//! item reference used by the multi-get endpoint.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by every API operation.
///
/// `data` is the parsed JSON body when the server returned JSON, or the raw
/// body wrapped in a JSON string otherwise (the download endpoint returns
/// plain bytes). `range` is present only for paginated collection responses
/// that carried a parseable `Content-Range` header.
#[derive(Debug, Clone)]
pub struct Response {
    /// Upstream HTTP status code.
    pub code: u16,

    /// Response body.
    pub data: Value,

    /// Pagination bounds, when the response carried them.
    pub range: Option<ContentRange>,
}

impl Response {
    /// Replaces `data` with one of its fields.
    ///
    /// Several session endpoints wrap their payload in a named field
    /// (`myprofiles`, `active_profile`, ...); this unwraps it, leaving
    /// `Value::Null` when the field is absent.
    pub(crate) fn take_field(mut self, field: &str) -> Self {
        self.data = match self.data.get_mut(field) {
            Some(value) => value.take(),
            None => Value::Null,
        };
        self
    }
}

/// Pagination bounds from a `Content-Range: min-max/total` response header.
///
/// Absence of this value is semantically distinct from a zero range: it
/// means the endpoint did not return ranged collection data at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    /// First index of the returned window.
    pub min: u64,

    /// Last index of the returned window.
    pub max: u64,

    /// Total number of matching records.
    pub total: u64,
}

impl ContentRange {
    /// Extracts the range from response headers.
    ///
    /// Returns `None` for absent or malformed headers; this is an expected
    /// case for endpoints that don't return ranged collections, never an
    /// error.
    pub fn from_headers(headers: &HeaderMap) -> Option<ContentRange> {
        let raw = headers.get("content-range")?.to_str().ok()?;
        Self::parse(raw)
    }

    /// Parses a `min-max/total` string.
    fn parse(raw: &str) -> Option<ContentRange> {
        let (window, total) = raw.rsplit_once('/')?;
        let (min, max) = window.split_once('-')?;
        Some(ContentRange {
            min: min.trim().parse().ok()?,
            max: max.trim().parse().ok()?,
            total: total.trim().parse().ok()?,
        })
    }
}

/// Reference to a single item for the multi-get endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReference {
    /// Item type name (validated against the registry at call time).
    pub itemtype: String,

    /// Identifier of the item.
    pub items_id: u64,
}

impl ItemReference {
    /// Creates a reference to `itemtype`/`items_id`.
    pub fn new(itemtype: impl Into<String>, items_id: u64) -> Self {
        ItemReference {
            itemtype: itemtype.into(),
            items_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    fn headers_with_range(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Range", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_parse_range() {
        let range = ContentRange::from_headers(&headers_with_range("10-20/100")).unwrap();
        assert_eq!(
            range,
            ContentRange {
                min: 10,
                max: 20,
                total: 100
            }
        );
    }

    #[test]
    fn test_absent_header_yields_none() {
        assert!(ContentRange::from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_malformed_header_yields_none() {
        for raw in ["garbage", "10-20", "10/100", "-/", "a-b/c", ""] {
            assert!(
                ContentRange::from_headers(&headers_with_range(raw)).is_none(),
                "expected no range for {raw:?}"
            );
        }
    }

    #[test]
    fn test_zero_range_is_still_a_range() {
        let range = ContentRange::from_headers(&headers_with_range("0-0/0")).unwrap();
        assert_eq!(
            range,
            ContentRange {
                min: 0,
                max: 0,
                total: 0
            }
        );
    }

    #[test]
    fn test_take_field() {
        let response = Response {
            code: 200,
            data: json!({"session": {"glpiID": 7}}),
            range: None,
        };
        let unwrapped = response.take_field("session");
        assert_eq!(unwrapped.data, json!({"glpiID": 7}));
        assert_eq!(unwrapped.code, 200);
    }

    #[test]
    fn test_take_field_absent_is_null() {
        let response = Response {
            code: 200,
            data: json!({}),
            range: None,
        };
        assert_eq!(response.take_field("session").data, Value::Null);
    }

    #[test]
    fn test_item_reference_serializes() {
        let item = ItemReference::new("Ticket", 123456);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"itemtype": "Ticket", "items_id": 123456})
        );
    }
}
