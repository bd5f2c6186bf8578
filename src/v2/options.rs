/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::TumblrError;
use std::time::Duration;

/// Root Tumblr API. Paths are appended directly so no trailing slash.
pub const API_ORIGIN: &str = "https://api.tumblr.com";

/// Default time allowed for a single request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("tumblr-rs/", env!("CARGO_PKG_VERSION"));

/// OAuth1 consumer and access token pairs.
///
/// Obtaining the access token/secret is left up to the consumer of this library.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: &str,
        consumer_secret: &str,
        token: &str,
        token_secret: &str,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Fails on the first field that is empty
    pub fn validate(&self) -> Result<(), TumblrError> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("token", &self.token),
            ("token_secret", &self.token_secret),
        ];
        match fields.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((name, _)) => Err(TumblrError::Config(format!(
                "credential field `{name}` is empty"
            ))),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"xxx")
            .field("consumer_secret", &"xxx")
            .field("token", &"xxx")
            .field("token_secret", &"xxx")
            .finish()
    }
}

/// Settings fixed for the lifetime of a [`crate::v2::Client`].
///
/// Redirects are never followed; a 3xx is handed back like any other response.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// When present every request is signed with OAuth1 HMAC-SHA1
    pub credentials: Option<Credentials>,

    /// Sent as `api_key` on endpoints that accept one. Falls back to the consumer key.
    pub api_key: Option<String>,

    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            credentials: None,
            api_key: None,
            base_url: API_ORIGIN.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.into(),
        }
    }
}

impl ClientOptions {
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Key used for the `api_key` parameter, if any
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .or(self.credentials.as_ref().map(|c| c.consumer_key.as_str()))
            .filter(|k| !k.is_empty())
    }

    /// Checks everything that can be checked before a request is made
    pub fn validate(&self) -> Result<url::Url, TumblrError> {
        if let Some(creds) = &self.credentials {
            creds.validate()?;
        }
        if self.timeout.is_zero() {
            return Err(TumblrError::Config("timeout must be non-zero".into()));
        }
        let base_url = url::Url::parse(&self.base_url)?;
        match base_url.scheme() {
            "http" | "https" => Ok(base_url),
            other => Err(TumblrError::Config(format!(
                "unsupported base url scheme `{other}`"
            ))),
        }
    }
}

/// Overrides applied to a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("ck", "cs", "tk", "ts")
    }

    #[test]
    fn defaults() {
        let opts = ClientOptions::default();
        assert_eq!(opts.base_url, "https://api.tumblr.com");
        assert_eq!(opts.timeout, Duration::from_millis(1000));
        assert!(opts.user_agent.starts_with("tumblr-rs/"));
        assert!(opts.credentials.is_none());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn empty_credential_field_is_rejected() {
        let mut c = creds();
        c.token_secret = String::new();
        let err = ClientOptions::default()
            .with_credentials(c)
            .validate()
            .unwrap_err();
        assert!(matches!(err, TumblrError::Config(ref m) if m.contains("token_secret")));
    }

    #[test]
    fn bad_base_urls_are_rejected() {
        assert!(matches!(
            ClientOptions::default().with_base_url("not a url").validate(),
            Err(TumblrError::UrlParsing(_))
        ));
        assert!(matches!(
            ClientOptions::default().with_base_url("ftp://api.tumblr.com").validate(),
            Err(TumblrError::Config(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(ClientOptions::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn api_key_falls_back_to_consumer_key() {
        assert_eq!(ClientOptions::default().effective_api_key(), None);
        let opts = ClientOptions::default().with_credentials(creds());
        assert_eq!(opts.effective_api_key(), Some("ck"));
        let opts = opts.with_api_key("other");
        assert_eq!(opts.effective_api_key(), Some("other"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let out = format!("{:?}", Credentials::new("key-1", "secret-2", "token-3", "secret-4"));
        for value in ["key-1", "secret-2", "token-3", "secret-4"] {
            assert!(!out.contains(value));
        }
    }
}
