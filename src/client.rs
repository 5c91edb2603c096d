//! HTTP client for the GLPI REST API.
//!
//! This module provides the [`Client`] struct through which every API call
//! passes. All operations funnel into [`Client::request`], which assembles
//! headers from the configuration and the current session state, serializes
//! the query and body, dispatches the request, and normalizes the response
//! into a [`Response`] envelope or a typed [`GlpiError`].
//!
//! # Sessions
//!
//! The session token is shared mutable state behind an `RwLock`: every
//! operation reads it at its own dispatch time, and only
//! [`init_session`](Client::init_session) / [`kill_session`](Client::kill_session)
//! write it. Concurrent in-flight calls observe whichever token was current
//! when they were dispatched; a `kill_session` does not retroactively
//! invalidate requests already on the wire.
//!
//! # What this client does not do
//!
//! No caching, no retry, no timeouts. A single failed round-trip yields a
//! single error. Timeout and pooling policy belong to the `reqwest::Client`,
//! which can be injected through [`Client::with_http_client`].

use std::path::Path;
use std::sync::{PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{multipart, Method};
use serde_json::{json, Value};

use crate::config::{ClientConfig, Config};
use crate::error::GlpiError;
use crate::item_types::ItemTypeRegistry;
use crate::models::{
    ContentRange, DeleteItemsOptions, GetItemOptions, GetItemsOptions, GetMultipleItemsOptions,
    GetSubItemsOptions, ItemReference, Response, SearchOptions,
};
use crate::query;

const APP_TOKEN_HEADER: &str = "app-token";
const SESSION_TOKEN_HEADER: &str = "session-token";

/// Low-level request options for [`Client::request`].
///
/// Resource operations build these from their validated inputs; the struct
/// is public so callers can reach endpoints this crate has no wrapper for.
#[derive(Default)]
pub struct RequestOptions {
    /// Extra headers, applied last (caller wins key-by-key).
    pub headers: Option<HeaderMap>,

    /// Query parameters, serialized with explicit indices.
    pub query: Option<Value>,

    /// JSON body. Top-level falsy values are stripped before serialization.
    pub body: Option<Value>,

    /// Multipart body, for the document upload endpoint. Mutually exclusive
    /// with `body` in practice; when both are set the multipart form wins.
    pub multipart: Option<multipart::Form>,
}

/// Parent designator for [`Client::get_sub_items`].
///
/// The sub-resource endpoint can be reached two ways: by composing the path
/// from a known parent type and id, or by following the HATEOAS link GLPI
/// embeds on previously fetched objects.
#[derive(Debug, Clone, Copy)]
pub enum SubItemParent<'a> {
    /// Compose `/{item_type}/{id}/{sub_type}` directly.
    ByPath {
        /// Parent item type name.
        item_type: &'a str,
        /// Parent item id.
        id: u64,
    },

    /// Follow the link whose `rel` matches the sub type on a fetched object.
    ByLink(&'a Value),
}

/// Client for a GLPI instance.
///
/// # Example
///
/// ```no_run
/// use glpi_api::client::Client;
/// use glpi_api::config::Config;
/// use glpi_api::models::GetItemsOptions;
///
/// # async fn example() -> Result<(), glpi_api::error::GlpiError> {
/// let client = Client::new(
///     Config::new("http://glpi.example.com/apirest.php", "app-token")
///         .with_user_token("user-token"),
/// )?;
///
/// client.init_session().await?;
/// let tickets = client.get_items("Ticket", GetItemsOptions::default()).await?;
/// println!("total tickets: {:?}", tickets.range.map(|r| r.total));
/// client.kill_session().await?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    /// The underlying HTTP client (connection pooling, TLS, timeouts).
    http: reqwest::Client,

    /// Validated, immutable configuration.
    config: ClientConfig,

    /// Current session token; empty until `init_session` succeeds.
    session: RwLock<String>,

    /// Allowed item types, extendable at runtime.
    item_types: RwLock<ItemTypeRegistry>,
}

impl Client {
    /// Creates a client from settings, with a default `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns the configuration errors documented on
    /// [`Config::validate`].
    pub fn new(config: Config) -> Result<Self, GlpiError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Creates a client with a caller-configured `reqwest` client.
    ///
    /// Use this to set timeouts, proxies, or TLS options; this crate adds no
    /// transport policy of its own.
    pub fn with_http_client(config: Config, http: reqwest::Client) -> Result<Self, GlpiError> {
        let config = config.validate()?;
        Ok(Client {
            http,
            config,
            session: RwLock::new(String::new()),
            item_types: RwLock::new(ItemTypeRegistry::new()),
        })
    }

    /// Returns the current session token, if a session is active.
    pub fn session_token(&self) -> Option<String> {
        let session = self.session.read().unwrap_or_else(PoisonError::into_inner);
        if session.is_empty() {
            None
        } else {
            Some(session.clone())
        }
    }

    /// Registers one or more custom item types (e.g. plugin types) with this
    /// client's allow-list.
    pub fn add_custom_item_types<I, S>(&self, types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_types
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add(types);
    }

    /// Validates an item type name against the registry.
    ///
    /// # Errors
    ///
    /// `MissingItemType` when empty, `InvalidItemType` when unregistered.
    pub fn validate_item_type(&self, name: &str) -> Result<(), GlpiError> {
        if name.is_empty() {
            return Err(GlpiError::MissingItemType);
        }
        let registry = self.item_types.read().unwrap_or_else(PoisonError::into_inner);
        if !registry.contains(name) {
            return Err(GlpiError::InvalidItemType {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Request translation
    // ========================================================================

    /// Dispatches a request and normalizes the response.
    ///
    /// Headers are assembled base-first (`User-Agent`, `Cache-Control`,
    /// `App-Token`, then `Session-Token` when a session is active), with
    /// caller-supplied headers applied last so they win key-by-key. Top-level
    /// falsy body values are stripped; query values are transmitted verbatim.
    ///
    /// # Errors
    ///
    /// - `InvalidHttpMethod` for any method outside GET/POST/PUT/DELETE,
    ///   raised before any network I/O.
    /// - `Server` for non-2xx responses (carrying the upstream status and the
    ///   `[message, comment]` body) and for transport failures (code 500).
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response, GlpiError> {
        let allowed = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
        if !allowed.contains(&method) {
            return Err(GlpiError::InvalidHttpMethod {
                method: method.to_string(),
            });
        }

        let url = self.endpoint_url(endpoint);

        tracing::debug!(method = %method, endpoint = %endpoint, "GLPI API request");

        let mut headers = self.base_headers()?;
        if let Some(extra) = options.headers {
            for (name, value) in extra.iter() {
                headers.insert(name, value.clone());
            }
        }

        let mut req = self.http.request(method, url).headers(headers);

        if let Some(query) = &options.query {
            let pairs = query::to_pairs(query);
            req = req.query(&pairs);
        }

        if let Some(form) = options.multipart {
            req = req.multipart(form);
        } else if let Some(body) = options.body {
            req = req.json(&strip_falsy_fields(body));
        }

        let response = req.send().await.map_err(|e| GlpiError::transport(&e))?;

        let code = response.status().as_u16();
        let success = response.status().is_success();
        let range = ContentRange::from_headers(response.headers());
        let text = response.text().await.map_err(|e| GlpiError::transport(&e))?;
        let data = serde_json::from_str(&text).unwrap_or(Value::String(text));

        tracing::trace!(%code, "GLPI API response");

        if success {
            Ok(Response { code, data, range })
        } else {
            Err(GlpiError::server_from_body(code, &data))
        }
    }

    /// Joins the configured API URL and an endpoint path.
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}{}",
            self.config.api_url.as_str().trim_end_matches('/'),
            endpoint
        )
    }

    /// Builds the fixed base headers plus the session token when active.
    fn base_headers(&self) -> Result<HeaderMap, GlpiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static(concat!("glpi-api-rs/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            reqwest::header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        );
        headers.insert(APP_TOKEN_HEADER, header_value(&self.config.app_token)?);

        let session = self.session.read().unwrap_or_else(PoisonError::into_inner);
        if !session.is_empty() {
            headers.insert(SESSION_TOKEN_HEADER, header_value(&session)?);
        }

        Ok(headers)
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    /// Opens a session and stores the returned session token.
    ///
    /// This is the only call that sends an `Authorization` header
    /// (`user_token <token>` or `Basic <credential>` depending on the
    /// configuration); every subsequent call authenticates with the session
    /// token instead. Calling this while a session is already active
    /// replaces the stored token (last call wins).
    pub async fn init_session(&self) -> Result<Response, GlpiError> {
        tracing::debug!("calling initSession");

        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            header_value(&self.config.credential.authorization_header())?,
        );

        let response = self
            .request(
                Method::GET,
                "/initSession",
                RequestOptions {
                    headers: Some(headers),
                    ..Default::default()
                },
            )
            .await?;

        let token = response
            .data
            .get("session_token")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        tracing::debug!("session opened");
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = token;

        Ok(response)
    }

    /// Closes the current session and clears the stored token.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` when no session is active; this catches client
    /// misuse instead of silently hitting the server without a token.
    pub async fn kill_session(&self) -> Result<Response, GlpiError> {
        tracing::debug!("calling killSession");

        if self.session_token().is_none() {
            return Err(GlpiError::SessionNotFound);
        }

        let response = self
            .request(Method::GET, "/killSession", RequestOptions::default())
            .await?;

        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();

        Ok(response)
    }

    /// Requests a password-reset email for `email`.
    ///
    /// This endpoint is unauthenticated; no session is required.
    pub async fn lost_password(&self, email: &str) -> Result<Response, GlpiError> {
        self.request(
            Method::PUT,
            "/lostPassword",
            RequestOptions {
                body: Some(json!({ "email": email })),
                ..Default::default()
            },
        )
        .await
    }

    /// Completes a password reset with the token from the reset email.
    pub async fn reset_password(
        &self,
        email: &str,
        password_forget_token: &str,
        password: &str,
    ) -> Result<Response, GlpiError> {
        self.request(
            Method::PUT,
            "/lostPassword",
            RequestOptions {
                body: Some(json!({
                    "email": email,
                    "password_forget_token": password_forget_token,
                    "password": password,
                })),
                ..Default::default()
            },
        )
        .await
    }

    /// Returns the profiles of the logged-in user.
    pub async fn get_my_profiles(&self) -> Result<Response, GlpiError> {
        self.request(Method::GET, "/getMyProfiles", RequestOptions::default())
            .await
            .map(|r| r.take_field("myprofiles"))
    }

    /// Returns the currently active profile.
    pub async fn get_active_profile(&self) -> Result<Response, GlpiError> {
        self.request(Method::GET, "/getActiveProfile", RequestOptions::default())
            .await
            .map(|r| r.take_field("active_profile"))
    }

    /// Switches the active profile. See
    /// [`get_my_profiles`](Client::get_my_profiles) for candidates.
    pub async fn change_active_profile(&self, profiles_id: u64) -> Result<Response, GlpiError> {
        self.request(
            Method::POST,
            "/changeActiveProfile",
            RequestOptions {
                body: Some(json!({ "profiles_id": profiles_id })),
                ..Default::default()
            },
        )
        .await
    }

    /// Returns the entities the logged-in user can access.
    pub async fn get_my_entities(&self) -> Result<Response, GlpiError> {
        self.request(Method::GET, "/getMyEntities", RequestOptions::default())
            .await
            .map(|r| r.take_field("myentities"))
    }

    /// Returns the currently active entities.
    pub async fn get_active_entities(&self) -> Result<Response, GlpiError> {
        self.request(Method::GET, "/getActiveEntities", RequestOptions::default())
            .await
            .map(|r| r.take_field("active_entity"))
    }

    /// Switches the active entity scope.
    pub async fn change_active_entities(
        &self,
        entities_id: u64,
        is_recursive: bool,
    ) -> Result<Response, GlpiError> {
        // is_recursive is transmitted as a string so a false value survives
        // body stripping; the server accepts both forms.
        self.request(
            Method::POST,
            "/changeActiveEntities",
            RequestOptions {
                body: Some(json!({
                    "entities_id": entities_id,
                    "is_recursive": is_recursive.to_string(),
                })),
                ..Default::default()
            },
        )
        .await
    }

    /// Returns the full session state (`glpi_*` session variables).
    pub async fn get_full_session(&self) -> Result<Response, GlpiError> {
        self.request(Method::GET, "/getFullSession", RequestOptions::default())
            .await
            .map(|r| r.take_field("session"))
    }

    // ========================================================================
    // Item access
    // ========================================================================

    /// Fetches a single item by type and id.
    pub async fn get_item(
        &self,
        item_type: &str,
        id: u64,
        options: GetItemOptions,
    ) -> Result<Response, GlpiError> {
        self.validate_item_type(item_type)?;

        self.request(
            Method::GET,
            &format!("/{item_type}/{id}"),
            RequestOptions {
                query: Some(serde_json::to_value(options)?),
                ..Default::default()
            },
        )
        .await
    }

    /// Fetches a collection of items.
    ///
    /// The returned envelope's `range` reflects the `Content-Range` header
    /// when the server paginated the result.
    pub async fn get_items(
        &self,
        item_type: &str,
        options: GetItemsOptions,
    ) -> Result<Response, GlpiError> {
        self.validate_item_type(item_type)?;

        self.request(
            Method::GET,
            &format!("/{item_type}"),
            RequestOptions {
                query: Some(serde_json::to_value(options)?),
                ..Default::default()
            },
        )
        .await
    }

    /// Fetches a sub-resource collection of a parent item.
    ///
    /// The parent can be designated directly by type and id, or by a
    /// previously fetched object carrying HATEOAS links — see
    /// [`SubItemParent`]. Both modes share the same defaults and envelope
    /// behavior.
    ///
    /// # Errors
    ///
    /// `MissingItemType` when `sub_type` is empty; `MissingHateoas` in link
    /// mode when the object has no `links` array or no link whose `rel`
    /// matches `sub_type`; the usual type-validation errors otherwise.
    pub async fn get_sub_items(
        &self,
        parent: SubItemParent<'_>,
        sub_type: &str,
        options: GetSubItemsOptions,
    ) -> Result<Response, GlpiError> {
        let endpoint = self.sub_items_endpoint(parent, sub_type)?;

        self.request(
            Method::GET,
            &endpoint,
            RequestOptions {
                query: Some(serde_json::to_value(options)?),
                ..Default::default()
            },
        )
        .await
    }

    /// Resolves the endpoint for a sub-resource fetch.
    fn sub_items_endpoint(
        &self,
        parent: SubItemParent<'_>,
        sub_type: &str,
    ) -> Result<String, GlpiError> {
        // An empty sub type must fail as such even when the parent object is
        // also missing its links, so check it before any link-shape checks.
        if sub_type.is_empty() {
            return Err(GlpiError::MissingItemType);
        }

        match parent {
            SubItemParent::ByPath { item_type, id } => {
                self.validate_item_type(item_type)?;
                self.validate_item_type(sub_type)?;
                Ok(format!("/{item_type}/{id}/{sub_type}"))
            }
            SubItemParent::ByLink(item) => {
                let links = item
                    .get("links")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        GlpiError::missing_hateoas("no links array on provided object")
                    })?;

                self.validate_item_type(sub_type)?;

                let link = links
                    .iter()
                    .find(|l| l.get("rel").and_then(Value::as_str) == Some(sub_type))
                    .ok_or_else(|| {
                        GlpiError::missing_hateoas(format!(
                            "no link for '{sub_type}' on provided object"
                        ))
                    })?;

                let href = link.get("href").and_then(Value::as_str).ok_or_else(|| {
                    GlpiError::missing_hateoas(format!("link for '{sub_type}' has no href"))
                })?;

                let endpoint = href
                    .strip_prefix(self.config.api_url.as_str().trim_end_matches('/'))
                    .unwrap_or(href)
                    .trim_end_matches('/')
                    .to_string();

                Ok(endpoint)
            }
        }
    }

    /// Fetches several items of heterogeneous types in one call.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `items` is empty.
    pub async fn get_multiple_items(
        &self,
        items: &[ItemReference],
        options: GetMultipleItemsOptions,
    ) -> Result<Response, GlpiError> {
        if items.is_empty() {
            return Err(GlpiError::invalid_parameter("items must not be empty"));
        }

        let mut query = serde_json::to_value(options)?;
        query["items"] = serde_json::to_value(items)?;

        self.request(
            Method::GET,
            "/getMultipleItems",
            RequestOptions {
                query: Some(query),
                ..Default::default()
            },
        )
        .await
    }

    /// Lists the search options available for an item type.
    ///
    /// With `raw`, the server returns the uncooked option table.
    pub async fn list_search_options(
        &self,
        item_type: &str,
        raw: bool,
    ) -> Result<Response, GlpiError> {
        self.validate_item_type(item_type)?;

        let query = raw.then(|| json!({ "raw": true }));

        self.request(
            Method::GET,
            &format!("/listSearchOptions/{item_type}"),
            RequestOptions {
                query,
                ..Default::default()
            },
        )
        .await
    }

    /// Runs the search engine against an item type.
    ///
    /// Criteria are serialized with explicit indices
    /// (`criteria[0][field]=...`) and passed through opaquely.
    pub async fn search(
        &self,
        item_type: &str,
        options: SearchOptions,
    ) -> Result<Response, GlpiError> {
        self.validate_item_type(item_type)?;

        self.request(
            Method::GET,
            &format!("/search/{item_type}"),
            RequestOptions {
                query: Some(serde_json::to_value(options)?),
                ..Default::default()
            },
        )
        .await
    }

    // ========================================================================
    // Write operations
    // ========================================================================

    /// Creates one item (object input) or several (array input).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the input is empty or not an object/array.
    pub async fn add_items(&self, item_type: &str, input: Value) -> Result<Response, GlpiError> {
        self.validate_item_type(item_type)?;

        if is_empty_input(&input) {
            return Err(GlpiError::invalid_parameter("input must not be empty"));
        }

        self.request(
            Method::POST,
            &format!("/{item_type}"),
            RequestOptions {
                body: Some(json!({ "input": input })),
                ..Default::default()
            },
        )
        .await
    }

    /// Updates one or several items.
    ///
    /// The target id comes from exactly one of two sources: the explicit
    /// `id` argument, or `id` fields embedded in the input (each element of
    /// an array input must carry one). Supplying both sources, or neither,
    /// is an error.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` on empty input or any id-source violation, before
    /// any request is sent.
    pub async fn update_items(
        &self,
        item_type: &str,
        id: Option<u64>,
        input: Value,
    ) -> Result<Response, GlpiError> {
        self.validate_item_type(item_type)?;

        if is_empty_input(&input) {
            return Err(GlpiError::invalid_parameter("input must not be empty"));
        }
        validate_id_sources(id, &input)?;

        self.request(
            Method::PUT,
            &write_endpoint(item_type, id),
            RequestOptions {
                body: Some(json!({ "input": input })),
                ..Default::default()
            },
        )
        .await
    }

    /// Deletes one or several items.
    ///
    /// Same id-source exclusivity as [`update_items`](Client::update_items),
    /// except the input may be empty when an explicit id is given. Defaults
    /// move items to the trash bin (`force_purge=false`) and keep history.
    pub async fn delete_items(
        &self,
        item_type: &str,
        id: Option<u64>,
        input: Value,
        options: DeleteItemsOptions,
    ) -> Result<Response, GlpiError> {
        self.validate_item_type(item_type)?;

        if id.is_none() && is_empty_input(&input) {
            return Err(GlpiError::invalid_parameter(
                "an id or a non-empty input is required",
            ));
        }
        validate_id_sources(id, &input)?;

        let body = if input.is_null() {
            json!({ "input": {} })
        } else {
            json!({ "input": input })
        };

        self.request(
            Method::DELETE,
            &write_endpoint(item_type, id),
            RequestOptions {
                query: Some(serde_json::to_value(options)?),
                body: Some(body),
                ..Default::default()
            },
        )
        .await
    }

    // ========================================================================
    // Documents
    // ========================================================================

    /// Uploads a file as a `Document`.
    ///
    /// The multipart body carries a JSON `uploadManifest` part (document
    /// name and declared file name) and the file content itself. When no
    /// `name` is given, the file name is used.
    ///
    /// # Errors
    ///
    /// `FileNotReadable` when the file cannot be read; server errors
    /// otherwise.
    pub async fn upload_document(
        &self,
        path: impl AsRef<Path>,
        name: Option<&str>,
    ) -> Result<Response, GlpiError> {
        let path = path.as_ref();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| GlpiError::FileNotReadable {
                path: path.display().to_string(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let manifest = json!({
            "input": {
                "name": name.unwrap_or(&file_name),
                "_filename": [file_name],
            }
        });

        let form = multipart::Form::new()
            .part("uploadManifest", multipart::Part::text(manifest.to_string()))
            .part(
                "filename[0]",
                multipart::Part::bytes(bytes).file_name(file_name.clone()),
            );

        self.request(
            Method::POST,
            "/Document",
            RequestOptions {
                multipart: Some(form),
                ..Default::default()
            },
        )
        .await
    }

    /// Downloads a document's file content.
    ///
    /// The envelope's `data` is the raw body (a JSON string value) rather
    /// than a parsed object.
    pub async fn download_document(&self, document_id: u64) -> Result<Response, GlpiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/octet-stream"),
        );

        self.request(
            Method::GET,
            &format!("/Document/{document_id}"),
            RequestOptions {
                headers: Some(headers),
                ..Default::default()
            },
        )
        .await
    }
}

/// Builds `/{item_type}` or `/{item_type}/{id}` for write operations.
fn write_endpoint(item_type: &str, id: Option<u64>) -> String {
    match id {
        Some(id) => format!("/{item_type}/{id}"),
        None => format!("/{item_type}"),
    }
}

/// Converts a string into a header value.
fn header_value(value: &str) -> Result<HeaderValue, GlpiError> {
    HeaderValue::from_str(value)
        .map_err(|_| GlpiError::invalid_parameter("value is not a valid header value"))
}

/// Returns true for values the API treats as "field omitted".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Strips top-level falsy fields from a JSON body.
///
/// The upstream API prefers omitted fields over explicit falsy ones in
/// request bodies. Query parameters are never stripped — only bodies.
fn strip_falsy_fields(body: Value) -> Value {
    match body {
        Value::Object(map) => {
            Value::Object(map.into_iter().filter(|(_, v)| !is_falsy(v)).collect())
        }
        other => other,
    }
}

/// Returns true when a write input carries nothing to send.
fn is_empty_input(input: &Value) -> bool {
    match input {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}

/// Enforces the id-source exclusivity rule for update/delete.
///
/// The target id must come from exactly one place: the explicit argument,
/// or the input itself. Array inputs carry ids per element; an element with
/// a missing or falsy id invalidates the whole call before any I/O.
fn validate_id_sources(id: Option<u64>, input: &Value) -> Result<(), GlpiError> {
    match input {
        Value::Array(items) => {
            if id.is_some() {
                return Err(GlpiError::invalid_parameter(
                    "cannot combine an explicit id with an input array",
                ));
            }
            if items.iter().any(|item| {
                item.get("id").map_or(true, is_falsy)
            }) {
                return Err(GlpiError::invalid_parameter(
                    "every element of an input array must carry an id",
                ));
            }
            Ok(())
        }
        Value::Object(map) => {
            let embedded = map.get("id").is_some_and(|v| !is_falsy(v));
            match (id.is_some(), embedded) {
                (true, true) => Err(GlpiError::invalid_parameter(
                    "id supplied both as argument and in the input",
                )),
                (false, false) if !map.is_empty() => Err(GlpiError::invalid_parameter(
                    "no id supplied as argument or in the input",
                )),
                _ => Ok(()),
            }
        }
        _ => Ok(()),
    }
}
