//! Authentication schemes for the gateway families
//!
//! The Merchant API authenticates with HTTP Basic, the Subscribe API with an
//! `X-Auth` header, and the Telegram notifier with a bot token embedded in
//! the URL path.

use paycom_core::params::truthy_str;
use paycom_core::{Error, Result};
use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;
use std::fmt;

/// Name of the Subscribe API auth header
pub const X_AUTH_HEADER: &str = "X-Auth";

/// Credentials attached to every request of a client
#[derive(Clone, Default)]
pub enum Auth {
    /// No credentials
    #[default]
    None,
    /// HTTP Basic, used by the Merchant API
    Basic { login: String, password: String },
    /// Pre-rendered `X-Auth` header value, used by the Subscribe API
    XAuth(String),
    /// Telegram bot token, placed in the request path
    BotToken(String),
}

impl Auth {
    /// Basic credentials
    pub fn basic(login: impl Into<String>, password: impl Into<String>) -> Self {
        Auth::Basic {
            login: login.into(),
            password: password.into(),
        }
    }

    /// `X-Auth` header from a merchant id and optional key
    ///
    /// Renders `id:key` when the key is non-empty and not `"0"`, otherwise
    /// just `id`. A missing id renders as the empty string.
    pub fn x_auth(id: Option<&str>, key: Option<&str>) -> Self {
        let id = id.unwrap_or_default();
        let value = match key {
            Some(key) if truthy_str(key) => format!("{}:{}", id, key),
            _ => id.to_string(),
        };
        Auth::XAuth(value)
    }

    /// Telegram bot token
    pub fn bot_token(token: impl Into<String>) -> Self {
        Auth::BotToken(token.into())
    }

    /// Check that the credentials can be put on the wire
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when an `X-Auth` value is not a legal header
    /// value or a bot token would break the URL path.
    pub fn validate(&self) -> Result<()> {
        match self {
            Auth::XAuth(value) => HeaderValue::from_str(value)
                .map(|_| ())
                .map_err(|_| Error::InvalidConfig("X-Auth value contains invalid characters".to_string())),
            Auth::BotToken(token) if token.is_empty() || token.contains(['/', '?', '#']) => {
                Err(Error::InvalidConfig("bot token is empty or malformed".to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Attach header-based credentials to a request
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Auth::Basic { login, password } => request.basic_auth(login, Some(password)),
            Auth::XAuth(value) => request.header(X_AUTH_HEADER, value.as_str()),
            Auth::None | Auth::BotToken(_) => request,
        }
    }

    /// Bot token, if this is Telegram auth
    pub fn token(&self) -> Option<&str> {
        match self {
            Auth::BotToken(token) => Some(token),
            _ => None,
        }
    }

    /// Scheme name for logs
    pub fn scheme(&self) -> &'static str {
        match self {
            Auth::None => "none",
            Auth::Basic { .. } => "basic",
            Auth::XAuth(_) => "x-auth",
            Auth::BotToken(_) => "bot-token",
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::None => f.write_str("None"),
            Auth::Basic { login, .. } => f
                .debug_struct("Basic")
                .field("login", login)
                .field("password", &"***")
                .finish(),
            Auth::XAuth(_) => f.debug_tuple("XAuth").field(&"***").finish(),
            Auth::BotToken(_) => f.debug_tuple("BotToken").field(&"***").finish(),
        }
    }
}
