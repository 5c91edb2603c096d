//! Per-operation option structs.
//!
//! Each resource operation takes a dedicated options struct whose `Default`
//! impl carries the documented server defaults. The full struct is
//! serialized into the query string on every call — GLPI expects the
//! boolean flags to be transmitted explicitly (`is_deleted=false` means
//! "not-deleted only", omission does not), so none of these fields are
//! skipped for being falsy.

use serde::{Deserialize, Serialize};

use crate::models::criteria::{Criterion, MetaCriterion};

/// Sort direction for collection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending.
    #[serde(rename = "ASC")]
    Asc,

    /// Descending.
    #[serde(rename = "DESC")]
    Desc,
}

/// Options for [`get_item`](crate::client::Client::get_item).
///
/// Defaults disable every `with_*` expansion and SHA1 mode, and enable
/// HATEOAS links on the returned object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetItemOptions {
    /// Replace dropdown ids with their labels.
    pub expand_dropdowns: bool,

    /// Include the `links` array on the returned object.
    pub get_hateoas: bool,

    /// Return the SHA1 of the response instead of the data.
    pub get_sha1: bool,

    /// Include component devices.
    pub with_devices: bool,

    /// Include disk partitions.
    pub with_disks: bool,

    /// Include installed software.
    pub with_softwares: bool,

    /// Include direct connections.
    pub with_connections: bool,

    /// Include network ports.
    pub with_networkports: bool,

    /// Include financial information.
    pub with_infocoms: bool,

    /// Include associated contracts.
    pub with_contracts: bool,

    /// Include associated documents.
    pub with_documents: bool,

    /// Include associated tickets.
    pub with_tickets: bool,

    /// Include associated problems.
    pub with_problems: bool,

    /// Include associated changes.
    pub with_changes: bool,

    /// Include notes.
    pub with_notes: bool,

    /// Include history log entries.
    pub with_logs: bool,
}

impl Default for GetItemOptions {
    fn default() -> Self {
        GetItemOptions {
            expand_dropdowns: false,
            get_hateoas: true,
            get_sha1: false,
            with_devices: false,
            with_disks: false,
            with_softwares: false,
            with_connections: false,
            with_networkports: false,
            with_infocoms: false,
            with_contracts: false,
            with_documents: false,
            with_tickets: false,
            with_problems: false,
            with_changes: false,
            with_notes: false,
            with_logs: false,
        }
    }
}

/// Options for [`get_items`](crate::client::Client::get_items).
///
/// Defaults request the first 51 records (`0-50`), sorted by id descending,
/// excluding deleted items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetItemsOptions {
    /// Replace dropdown ids with their labels.
    pub expand_dropdowns: bool,

    /// Include the `links` array on returned objects.
    pub get_hateoas: bool,

    /// Return only ids.
    pub only_id: bool,

    /// Pagination window, `"min-max"`.
    pub range: String,

    /// Field to sort by.
    pub sort: String,

    /// Sort direction.
    pub order: SortOrder,

    /// Free-text filter; the empty string matches everything.
    #[serde(rename = "searchText")]
    pub search_text: String,

    /// Restrict to items in the trash bin.
    pub is_deleted: bool,
}

impl Default for GetItemsOptions {
    fn default() -> Self {
        GetItemsOptions {
            expand_dropdowns: false,
            get_hateoas: true,
            only_id: false,
            range: "0-50".to_string(),
            sort: "id".to_string(),
            order: SortOrder::Desc,
            search_text: String::new(),
            is_deleted: false,
        }
    }
}

impl GetItemsOptions {
    /// Sets the pagination window.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>, order: SortOrder) -> Self {
        self.sort = sort.into();
        self.order = order;
        self
    }
}

/// Options for [`get_sub_items`](crate::client::Client::get_sub_items).
///
/// Same pagination and sorting defaults as [`GetItemsOptions`], without the
/// search/deleted filters the sub-resource endpoints don't accept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSubItemsOptions {
    /// Replace dropdown ids with their labels.
    pub expand_dropdowns: bool,

    /// Include the `links` array on returned objects.
    pub get_hateoas: bool,

    /// Return only ids.
    pub only_id: bool,

    /// Pagination window, `"min-max"`.
    pub range: String,

    /// Field to sort by.
    pub sort: String,

    /// Sort direction.
    pub order: SortOrder,
}

impl Default for GetSubItemsOptions {
    fn default() -> Self {
        GetSubItemsOptions {
            expand_dropdowns: false,
            get_hateoas: true,
            only_id: false,
            range: "0-50".to_string(),
            sort: "id".to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl GetSubItemsOptions {
    /// Sets the pagination window.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>, order: SortOrder) -> Self {
        self.sort = sort.into();
        self.order = order;
        self
    }
}

/// Expansion flags for
/// [`get_multiple_items`](crate::client::Client::get_multiple_items).
///
/// The item list itself is a separate required argument; these flags mirror
/// [`GetItemOptions`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMultipleItemsOptions {
    /// Replace dropdown ids with their labels.
    pub expand_dropdowns: bool,

    /// Include the `links` array on returned objects.
    pub get_hateoas: bool,

    /// Return the SHA1 of the response instead of the data.
    pub get_sha1: bool,

    /// Include component devices.
    pub with_devices: bool,

    /// Include disk partitions.
    pub with_disks: bool,

    /// Include installed software.
    pub with_softwares: bool,

    /// Include direct connections.
    pub with_connections: bool,

    /// Include network ports.
    pub with_networkports: bool,

    /// Include financial information.
    pub with_infocoms: bool,

    /// Include associated contracts.
    pub with_contracts: bool,

    /// Include associated documents.
    pub with_documents: bool,

    /// Include associated tickets.
    pub with_tickets: bool,

    /// Include associated problems.
    pub with_problems: bool,

    /// Include associated changes.
    pub with_changes: bool,

    /// Include notes.
    pub with_notes: bool,

    /// Include history log entries.
    pub with_logs: bool,
}

impl Default for GetMultipleItemsOptions {
    fn default() -> Self {
        GetMultipleItemsOptions {
            expand_dropdowns: false,
            get_hateoas: true,
            get_sha1: false,
            with_devices: false,
            with_disks: false,
            with_softwares: false,
            with_connections: false,
            with_networkports: false,
            with_infocoms: false,
            with_contracts: false,
            with_documents: false,
            with_tickets: false,
            with_problems: false,
            with_changes: false,
            with_notes: false,
            with_logs: false,
        }
    }
}

/// Options for [`search`](crate::client::Client::search).
///
/// Criteria are passed through to the server opaquely; the client does not
/// interpret field numbers or search types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Search criteria, combined by their `link` operators.
    pub criteria: Vec<Criterion>,

    /// Cross-itemtype criteria.
    pub metacriteria: Vec<MetaCriterion>,

    /// Field to sort by.
    pub sort: String,

    /// Sort direction.
    pub order: SortOrder,

    /// Pagination window; the server default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Search-option ids of columns to return.
    pub forcedisplay: Vec<u32>,

    /// Return raw search-engine data.
    pub rawdata: bool,

    /// Key rows by id instead of returning a plain array.
    pub withindexes: bool,

    /// Use unique field keys (`Ticket.name`) instead of option numbers.
    pub uid_cols: bool,

    /// Return the matching items themselves alongside the rows.
    #[serde(rename = "giveItems")]
    pub give_items: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            criteria: Vec::new(),
            metacriteria: Vec::new(),
            sort: "id".to_string(),
            order: SortOrder::Desc,
            range: None,
            forcedisplay: Vec::new(),
            rawdata: false,
            withindexes: false,
            uid_cols: false,
            give_items: false,
        }
    }
}

impl SearchOptions {
    /// Adds a search criterion.
    #[must_use]
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Adds a cross-itemtype criterion.
    #[must_use]
    pub fn with_metacriterion(mut self, criterion: MetaCriterion) -> Self {
        self.metacriteria.push(criterion);
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>, order: SortOrder) -> Self {
        self.sort = sort.into();
        self.order = order;
        self
    }
}

/// Options for [`delete_items`](crate::client::Client::delete_items).
///
/// Defaults move items to the trash bin and keep their history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteItemsOptions {
    /// Permanently purge instead of moving to the trash bin.
    pub force_purge: bool,

    /// Keep history entries for the deletion.
    pub history: bool,
}

impl Default for DeleteItemsOptions {
    fn default() -> Self {
        DeleteItemsOptions {
            force_purge: false,
            history: true,
        }
    }
}
