//! Configuration for the GLPI API client.
//!
//! This module handles validation and normalization of constructor settings:
//! the API base URL, the app token, and one of the two supported credential
//! forms (static user token, or username/password resolved to a Basic-auth
//! credential). The raw password is encoded once at validation time and not
//! retained afterwards.

use base64::{engine::general_purpose, Engine as _};
use url::Url;

use crate::error::GlpiError;

/// Settings for connecting to a GLPI instance.
///
/// Exactly one of `user_token` or `auth` must be set. The app token and API
/// URL are always required.
///
/// # Example
///
/// ```no_run
/// use glpi_api::config::Config;
///
/// let config = Config::new("http://glpi.example.com/apirest.php", "app-token")
///     .with_user_token("user-token");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// URL of the `apirest.php` endpoint.
    pub api_url: String,

    /// Authorization string provided by the GLPI API configuration.
    pub app_token: String,

    /// Token used for user-token authentication.
    pub user_token: Option<String>,

    /// Username/password pair for Basic authentication.
    pub auth: Option<BasicAuth>,
}

/// Username/password pair for Basic authentication.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    /// GLPI account username.
    pub username: String,

    /// GLPI account password.
    /// This value is only used to compute the encoded credential.
    pub password: String,
}

/// Credential used for the `/initSession` call.
///
/// All other calls authenticate with the session token obtained from
/// `initSession`, so this is only consulted once per session.
#[derive(Debug, Clone)]
pub enum SessionCredential {
    /// `Authorization: user_token <token>`
    UserToken(String),

    /// `Authorization: Basic <encoded>` — the payload is the Base64 encoding
    /// of `username:password`, computed once at validation time.
    Basic(String),
}

/// Validated, immutable client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Parsed API base URL.
    pub api_url: Url,

    /// App token sent on every request.
    pub app_token: String,

    /// Credential for session bootstrap.
    pub credential: SessionCredential,
}

impl Config {
    /// Creates a config with the required URL and app token.
    ///
    /// Chain [`with_user_token`](Self::with_user_token) or
    /// [`with_auth`](Self::with_auth) to supply the credential.
    pub fn new(api_url: impl Into<String>, app_token: impl Into<String>) -> Self {
        Config {
            api_url: api_url.into(),
            app_token: app_token.into(),
            user_token: None,
            auth: None,
        }
    }

    /// Sets a static user token credential.
    #[must_use]
    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    /// Sets a username/password credential.
    #[must_use]
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Validates the settings and resolves them into a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// - [`GlpiError::MissingAuthorization`] when neither a user token nor a
    ///   complete username/password pair is present.
    /// - [`GlpiError::MissingAppToken`] when the app token is empty.
    /// - [`GlpiError::MissingApiUrl`] when the API URL is empty.
    /// - [`GlpiError::InvalidApiUrl`] when the API URL does not parse.
    pub fn validate(self) -> Result<ClientConfig, GlpiError> {
        let credential = self.resolve_credential()?;

        if self.app_token.is_empty() {
            return Err(GlpiError::MissingAppToken);
        }

        if self.api_url.is_empty() {
            return Err(GlpiError::MissingApiUrl);
        }

        let api_url = Url::parse(&self.api_url).map_err(|_| GlpiError::InvalidApiUrl {
            url: self.api_url.clone(),
        })?;

        Ok(ClientConfig {
            api_url,
            app_token: self.app_token,
            credential,
        })
    }

    /// Picks the credential, preferring the user token when both are set.
    fn resolve_credential(&self) -> Result<SessionCredential, GlpiError> {
        if let Some(token) = self.user_token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(SessionCredential::UserToken(token.to_string()));
        }

        match &self.auth {
            Some(auth) if !auth.username.is_empty() && !auth.password.is_empty() => {
                let encoded = general_purpose::STANDARD
                    .encode(format!("{}:{}", auth.username, auth.password));
                Ok(SessionCredential::Basic(encoded))
            }
            _ => Err(GlpiError::MissingAuthorization),
        }
    }
}

impl SessionCredential {
    /// Renders the `Authorization` header value for `/initSession`.
    pub(crate) fn authorization_header(&self) -> String {
        match self {
            SessionCredential::UserToken(token) => format!("user_token {token}"),
            SessionCredential::Basic(encoded) => format!("Basic {encoded}"),
        }
    }
}
