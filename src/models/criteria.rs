//! Search criteria for the `/search/{type}` endpoint.
//!
//! Criteria are caller-supplied and passed through to the server opaquely:
//! `field` is a search-option number (or `"view"`/`"all"`), `value` is
//! whatever the search type expects. The client serializes them into the
//! query without interpreting their contents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single search criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    /// Logical link with the previous criterion: `"AND"`, `"OR"`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Item type the field belongs to, when not the searched type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemtype: Option<String>,

    /// Search-option number, or `"view"`/`"all"`.
    pub field: Value,

    /// Comparison operator: `"contains"`, `"equals"`, `"morethan"`, ...
    pub searchtype: String,

    /// Value to compare against.
    pub value: Value,
}

impl Criterion {
    /// Creates a criterion with the given field, search type, and value.
    pub fn new(
        field: impl Into<Value>,
        searchtype: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Criterion {
            link: None,
            itemtype: None,
            field: field.into(),
            searchtype: searchtype.into(),
            value: value.into(),
        }
    }

    /// Sets the logical link with the previous criterion.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Sets the item type the field belongs to.
    #[must_use]
    pub fn with_itemtype(mut self, itemtype: impl Into<String>) -> Self {
        self.itemtype = Some(itemtype.into());
        self
    }
}

/// A criterion against another item type, for cross-type searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCriterion {
    /// Logical link with the previous criterion: `"AND"`, `"OR"`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Item type to join against.
    pub itemtype: String,

    /// Search-option number on the joined type.
    pub field: Value,

    /// Comparison operator.
    pub searchtype: String,

    /// Value to compare against.
    pub value: Value,
}

impl MetaCriterion {
    /// Creates a meta criterion against `itemtype`.
    pub fn new(
        itemtype: impl Into<String>,
        field: impl Into<Value>,
        searchtype: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        MetaCriterion {
            link: None,
            itemtype: itemtype.into(),
            field: field.into(),
            searchtype: searchtype.into(),
            value: value.into(),
        }
    }

    /// Sets the logical link with the previous criterion.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}
