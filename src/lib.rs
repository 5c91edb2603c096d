//! # glpi-api
//!
//! Client library for the [GLPI](https://glpi-project.org/) REST API.
//!
//! The crate wraps the `apirest.php` endpoint of a GLPI instance: session
//! management, item CRUD, the generic search engine, and document
//! upload/download. Every call returns a [`models::Response`] envelope with
//! the upstream status code, the JSON body, and the pagination range when
//! the server sent one.
//!
//! ## Features
//!
//! - **Sessions**: `initSession`/`killSession` with user-token or Basic
//!   authentication; the session token is threaded into every call.
//! - **Items**: get one/many, sub-resources (directly or via HATEOAS
//!   links), multi-get, create, update, delete.
//! - **Search**: the `/search/{type}` engine with opaque criteria
//!   passthrough and indices-style query serialization.
//! - **Documents**: multipart upload and binary download.
//! - **Typed errors**: validation failures are raised before any network
//!   I/O; server failures carry the upstream status and the
//!   `[message, comment]` error body verbatim.
//!
//! ## Architecture
//!
//! - [`config`] - Constructor settings and credential resolution
//! - [`error`] - The crate-wide error type
//! - [`client`] - The HTTP client and all API operations
//! - [`models`] - Response envelope, option structs, search criteria
//! - [`item_types`] - The item-type allow-list
//!
//! ## Example
//!
//! ```no_run
//! use glpi_api::client::Client;
//! use glpi_api::config::Config;
//! use glpi_api::models::{GetItemsOptions, SortOrder};
//!
//! async fn example() -> Result<(), glpi_api::error::GlpiError> {
//!     let client = Client::new(
//!         Config::new("http://glpi.example.com/apirest.php", "app-token")
//!             .with_auth("glpi", "glpi"),
//!     )?;
//!
//!     client.init_session().await?;
//!
//!     let options = GetItemsOptions::default()
//!         .with_range("0-10")
//!         .with_sort("date_mod", SortOrder::Desc);
//!     let tickets = client.get_items("Ticket", options).await?;
//!
//!     for ticket in tickets.data.as_array().into_iter().flatten() {
//!         println!("#{}: {}", ticket["id"], ticket["name"]);
//!     }
//!
//!     client.kill_session().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! A client holds one logical session. Operations take `&self` and may run
//! concurrently; they read the session token at dispatch time. Killing the
//! session does not cancel requests already in flight.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod item_types;
pub mod models;
mod query;
