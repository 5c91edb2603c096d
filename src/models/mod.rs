//! Data models for the GLPI API.
//!
//! This module contains the response envelope and pagination types, the
//! per-operation option structs with their documented defaults, and the
//! search criteria passed through to the search engine.

mod common;
mod criteria;
mod options;

pub use common::*;
pub use criteria::*;
pub use options::*;
